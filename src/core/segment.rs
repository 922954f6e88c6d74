//! Segmente (Linie, quadratische und kubische Bézier) und ihre Verkettung.

use super::PointId;

/// Anzahl Punkte eines vollständigen (committeten) Segments.
pub const SEGMENT_POINT_COUNT: usize = 4;

/// Zeichenform eines Segments, abhängig von der Punktanzahl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// 2 Punkte: gerade Linie
    Line,
    /// 3 Punkte: Start, Steuerpunkt, Ende
    Quadratic,
    /// 4 Punkte: Start, zwei Steuerpunkte, Ende
    Cubic,
}

impl SegmentKind {
    /// Ermittelt die Form aus der Punktanzahl. Unter 2 Punkten gibt es nichts zu zeichnen.
    pub fn from_point_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(Self::Line),
            3 => Some(Self::Quadratic),
            4 => Some(Self::Cubic),
            _ => None,
        }
    }
}

/// Geordnete Folge von Punkt-Referenzen (Reihenfolge bestimmt Form und Richtung)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    points: Vec<PointId>,
}

impl Segment {
    /// Erstellt ein leeres Segment.
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(SEGMENT_POINT_COUNT),
        }
    }

    /// Erstellt ein Segment, das am Endpunkt des Vorgängers beginnt.
    pub fn starting_at(first: PointId) -> Self {
        let mut segment = Self::new();
        segment.points.push(first);
        segment
    }

    /// Punkt-IDs in Reihenfolge.
    pub fn point_ids(&self) -> &[PointId] {
        &self.points
    }

    /// Anzahl referenzierter Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn das Segment keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gibt `true` zurück, sobald alle 4 Punkte vorhanden sind.
    pub fn is_complete(&self) -> bool {
        self.points.len() >= SEGMENT_POINT_COUNT
    }

    pub fn first(&self) -> Option<PointId> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<PointId> {
        self.points.last().copied()
    }

    /// Gibt zurück, ob der Punkt Teil dieses Segments ist.
    pub fn contains(&self, id: PointId) -> bool {
        self.points.contains(&id)
    }

    /// Zeichenform (None bei weniger als 2 Punkten).
    pub fn kind(&self) -> Option<SegmentKind> {
        SegmentKind::from_point_count(self.points.len())
    }
}

/// Sammelt geklickte Punkte zum laufenden Segment.
///
/// Mit dem 4. Punkt wird das Segment abgegeben und das nächste beginnt
/// an dessen letztem Punkt.
#[derive(Debug, Clone, Default)]
pub struct SegmentBuilder {
    current: Segment,
}

impl SegmentBuilder {
    /// Erstellt einen Builder mit leerem Start-Segment.
    pub fn new() -> Self {
        Self {
            current: Segment::new(),
        }
    }

    /// Das laufende Segment (0–3 Punkte).
    pub fn current(&self) -> &Segment {
        &self.current
    }

    /// Hängt einen Punkt an. Liefert das fertige Segment, wenn es jetzt 4 Punkte hat.
    pub fn add_point(&mut self, id: PointId) -> Option<Segment> {
        self.current.points.push(id);
        if !self.current.is_complete() {
            return None;
        }

        let next = Segment::starting_at(id);
        Some(std::mem::replace(&mut self.current, next))
    }
}

/// Geordnete Sammlung committeter Segmente plus laufendes Segment
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
    committed: Vec<Segment>,
    builder: SegmentBuilder,
}

impl SegmentStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            builder: SegmentBuilder::new(),
        }
    }

    /// Hängt ein vollständiges Segment an. Bestehende Einträge bleiben unverändert.
    pub fn commit(&mut self, segment: Segment) {
        debug_assert!(segment.is_complete());
        self.committed.push(segment);
    }

    /// Alle committeten Segmente in Commit-Reihenfolge (= Zeichenreihenfolge).
    pub fn all(&self) -> &[Segment] {
        &self.committed
    }

    /// Das laufende Segment.
    pub fn current(&self) -> &Segment {
        self.builder.current()
    }

    /// Leitet einen neuen Punkt an den Builder weiter und committet bei Bedarf.
    ///
    /// Gibt den Index des neu committeten Segments zurück.
    pub fn add_point(&mut self, id: PointId) -> Option<usize> {
        let completed = self.builder.add_point(id)?;
        self.commit(completed);
        Some(self.committed.len() - 1)
    }
}
