//! Core-Domänentypen: Punkte, Segmente, Segment-Store und Zeichen-Session.

pub mod point;
/// Core-Datenmodelle für verkettete Bézier-Segmente
///
/// - Point: ziehbarer Kontrollpunkt mit Drag-Zustand
/// - Segment: 2–4 Punkt-Referenzen (Linie, quadratisch, kubisch)
/// - Sketch: Punkt-Arena + Segment-Store einer Session
pub mod segment;
pub mod sketch;

pub use point::{DragState, Point, PointId};
pub use segment::{Segment, SegmentBuilder, SegmentKind, SegmentStore, SEGMENT_POINT_COUNT};
pub use sketch::Sketch;
