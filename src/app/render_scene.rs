//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{HandleShape, RenderScene, SegmentShape};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let sketch = &state.sketch;
    let store = sketch.segments();

    let mut segments: Vec<SegmentShape> = store
        .all()
        .iter()
        .map(|segment| SegmentShape {
            points: sketch.positions(segment),
        })
        .collect();

    // Laufendes Segment erst ab 2 Punkten
    if store.current().len() >= 2 {
        segments.push(SegmentShape {
            points: sketch.positions(store.current()),
        });
    }

    let handles = sketch
        .points()
        .map(|(_, point)| HandleShape {
            position: point.position(),
            label: point.label(),
            dragging: point.is_dragging(),
        })
        .collect();

    RenderScene {
        segments,
        handles,
        options: state.options.clone(),
    }
}
