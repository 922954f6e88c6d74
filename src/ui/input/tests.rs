use super::*;

/// Hält Context, Input-Zustand und Sketch über mehrere Frames hinweg.
struct CanvasHarness {
    ctx: egui::Context,
    input: InputState,
    sketch: Sketch,
    options: SketchOptions,
}

impl CanvasHarness {
    fn new() -> Self {
        let mut harness = Self {
            ctx: egui::Context::default(),
            input: InputState::new(),
            sketch: Sketch::new(),
            options: SketchOptions::default(),
        };
        // Warm-up: Layout steht, Pointer-Position ist bekannt
        harness.frame(vec![egui::Event::PointerMoved(egui::pos2(400.0, 300.0))]);
        harness
    }

    fn frame(&mut self, events: Vec<egui::Event>) -> Vec<AppIntent> {
        let mut raw_input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            ..Default::default()
        };
        raw_input.events = events;

        let mut intents = Vec::new();
        let input = &mut self.input;
        let sketch = &self.sketch;
        let options = &self.options;
        let _ = self.ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    let (_rect, response) = ui.allocate_exact_size(
                        ui.available_size(),
                        egui::Sense::click_and_drag(),
                    );
                    intents = input.collect_viewport_events(ui, &response, sketch, options);
                });
        });
        intents
    }
}

fn move_to(x: f32, y: f32) -> egui::Event {
    egui::Event::PointerMoved(egui::pos2(x, y))
}

fn primary(x: f32, y: f32, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos: egui::pos2(x, y),
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: Default::default(),
    }
}

fn has_canvas_click(intents: &[AppIntent]) -> bool {
    intents
        .iter()
        .any(|intent| matches!(intent, AppIntent::CanvasClicked { .. }))
}

#[test]
fn test_canvas_click_emits_canvas_clicked_on_release() {
    let mut harness = CanvasHarness::new();

    let pressed = harness.frame(vec![move_to(50.0, 40.0), primary(50.0, 40.0, true)]);
    assert!(!has_canvas_click(&pressed));

    let released = harness.frame(vec![primary(50.0, 40.0, false)]);
    assert!(released.contains(&AppIntent::CanvasClicked {
        pos: Vec2::new(50.0, 40.0)
    }));
    assert_eq!(released.last(), Some(&AppIntent::PointerReleased));
}

#[test]
fn test_press_on_handle_never_creates_point() {
    let mut harness = CanvasHarness::new();
    harness.sketch.add_point(Vec2::new(100.0, 100.0));

    let pressed = harness.frame(vec![move_to(102.0, 101.0), primary(102.0, 101.0, true)]);
    assert!(pressed.contains(&AppIntent::PointPressed {
        pos: Vec2::new(102.0, 101.0)
    }));

    let released = harness.frame(vec![primary(102.0, 101.0, false)]);
    assert!(!has_canvas_click(&released));
    assert!(released.contains(&AppIntent::PointerReleased));
}

#[test]
fn test_long_moving_canvas_press_still_adds_point() {
    let mut harness = CanvasHarness::new();

    harness.frame(vec![move_to(50.0, 50.0), primary(50.0, 50.0, true)]);
    for step in 1..=10 {
        let x = 50.0 + step as f32 * 4.0;
        harness.frame(vec![move_to(x, 60.0)]);
    }

    let released = harness.frame(vec![primary(90.0, 60.0, false)]);
    assert!(released.contains(&AppIntent::CanvasClicked {
        pos: Vec2::new(90.0, 60.0)
    }));
}

#[test]
fn test_release_outside_canvas_emits_no_click() {
    let mut harness = CanvasHarness::new();

    harness.frame(vec![move_to(50.0, 50.0), primary(50.0, 50.0, true)]);
    harness.frame(vec![move_to(900.0, 700.0)]);
    let released = harness.frame(vec![primary(900.0, 700.0, false)]);

    assert!(!has_canvas_click(&released));
    assert!(released.contains(&AppIntent::PointerReleased));
}

#[test]
fn test_pointer_move_during_drag_emits_pointer_moved() {
    let mut harness = CanvasHarness::new();
    harness.sketch.add_point(Vec2::new(100.0, 100.0));

    harness.frame(vec![move_to(100.0, 100.0), primary(100.0, 100.0, true)]);
    let moved = harness.frame(vec![move_to(130.0, 120.0)]);

    assert!(moved.contains(&AppIntent::PointerMoved {
        pos: Vec2::new(130.0, 120.0)
    }));
}

#[test]
fn test_window_focus_lost_emits_focus_lost() {
    let mut harness = CanvasHarness::new();

    let intents = harness.frame(vec![egui::Event::WindowFocused(false)]);
    assert!(intents.contains(&AppIntent::FocusLost));
}
