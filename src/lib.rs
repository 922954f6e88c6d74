//! Bézier-Skizzenblock Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{Point, PointId, Segment, SegmentKind, SegmentStore, Sketch};
pub use render::{RecordingSurface, Renderer, Surface};
pub use shared::{RenderScene, SketchOptions};
