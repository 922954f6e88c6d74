use bezier_sketch::render::DrawOp;
use bezier_sketch::{
    AppCommand, AppController, AppIntent, AppState, PointId, RecordingSurface, Renderer,
};
use glam::Vec2;

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::CanvasClicked {
                pos: Vec2::new(x, y),
            },
        )
        .expect("CanvasClicked sollte ohne Fehler durchlaufen");
}

fn drag(controller: &mut AppController, state: &mut AppState, from: Vec2, to: Vec2) {
    for intent in [
        AppIntent::PointPressed { pos: from },
        AppIntent::PointerMoved { pos: to },
        AppIntent::PointerReleased,
    ] {
        controller
            .handle_intent(state, intent)
            .expect("Drag-Intent sollte ohne Fehler durchlaufen");
    }
}

fn render(controller: &AppController, state: &AppState) -> RecordingSurface {
    let scene = controller.build_render_scene(state);
    let mut surface = RecordingSurface::new();
    Renderer::new().draw_all(&scene, &mut surface);
    surface
}

#[test]
fn test_four_clicks_commit_cubic_segment_and_seed_next() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for (x, y) in [(10.0, 10.0), (50.0, 80.0), (90.0, 10.0), (130.0, 80.0)] {
        click(&mut controller, &mut state, x, y);
    }

    let store = state.sketch.segments();
    assert_eq!(store.all().len(), 1);
    assert_eq!(store.all()[0].len(), 4);
    assert_eq!(store.current().len(), 1);
    assert_eq!(store.current().first(), store.all()[0].last());
    assert_eq!(
        state.sketch.positions(store.current()),
        vec![Vec2::new(130.0, 80.0)]
    );
    assert!(state.take_redraw_request());
    assert_eq!(state.command_log.len(), 4);
}

#[test]
fn test_scenario_click_chain_then_drag_first_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for (x, y) in [
        (10.0, 10.0),
        (50.0, 80.0),
        (90.0, 10.0),
        (130.0, 80.0),
        (170.0, 10.0),
    ] {
        click(&mut controller, &mut state, x, y);
    }

    let surface = render(&controller, &state);
    let curves = surface.curve_ops();
    assert_eq!(curves.len(), 2);
    assert!(matches!(curves[0], DrawOp::Cubic { .. }));
    match curves[1] {
        DrawOp::Line { from, to, .. } => {
            assert_eq!(*from, Vec2::new(130.0, 80.0));
            assert_eq!(*to, Vec2::new(170.0, 10.0));
        }
        other => panic!("Unerwartete Operation: {other:?}"),
    }

    drag(
        &mut controller,
        &mut state,
        Vec2::new(10.0, 10.0),
        Vec2::new(20.0, 20.0),
    );

    let surface = render(&controller, &state);
    let curves = surface.curve_ops();
    match curves[0] {
        DrawOp::Cubic { start, end, .. } => {
            assert_eq!(*start, Vec2::new(20.0, 20.0));
            assert_eq!(*end, Vec2::new(130.0, 80.0));
        }
        other => panic!("Unerwartete Operation: {other:?}"),
    }
    match curves[1] {
        DrawOp::Line { from, to, .. } => {
            assert_eq!(*from, Vec2::new(130.0, 80.0));
            assert_eq!(*to, Vec2::new(170.0, 10.0));
        }
        other => panic!("Unerwartete Operation: {other:?}"),
    }
    assert!(state.sketch.dragging_point().is_none());
    // Der gezogene Punkt gehört nur zum ersten Segment
    let store = state.sketch.segments();
    assert!(store.all()[0].contains(PointId(0)));
    assert!(!store.current().contains(PointId(0)));
}

#[test]
fn test_drag_keeps_grab_offset_instead_of_jumping() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 100.0, 100.0);

    // 3px neben dem Mittelpunkt greifen
    drag(
        &mut controller,
        &mut state,
        Vec2::new(103.0, 100.0),
        Vec2::new(203.0, 150.0),
    );

    let (_, point) = state.sketch.points().next().expect("Punkt vorhanden");
    assert_eq!(point.position(), Vec2::new(200.0, 150.0));
    assert_eq!(point.label(), "(200, 150)");
}

#[test]
fn test_shared_point_drag_updates_both_segments_in_one_redraw() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for i in 0..7 {
        click(&mut controller, &mut state, 40.0 * i as f32, 50.0);
    }

    // Punkt 4 (120, 50) ist Ende von Segment 0 und Anfang von Segment 1
    drag(
        &mut controller,
        &mut state,
        Vec2::new(120.0, 50.0),
        Vec2::new(125.0, 90.0),
    );

    let surface = render(&controller, &state);
    let curves = surface.curve_ops();
    assert_eq!(curves.len(), 2);
    match (curves[0], curves[1]) {
        (DrawOp::Cubic { end, .. }, DrawOp::Cubic { start, .. }) => {
            assert_eq!(*end, Vec2::new(125.0, 90.0));
            assert_eq!(*start, Vec2::new(125.0, 90.0));
        }
        other => panic!("Unerwartete Operationen: {other:?}"),
    }
}

#[test]
fn test_pointer_move_without_drag_logs_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 10.0, 10.0);
    state.take_redraw_request();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(300.0, 300.0),
            },
        )
        .expect("PointerMoved sollte robust sein");
    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte robust sein");

    assert_eq!(state.command_log.len(), 1);
    assert!(!state.take_redraw_request());
}

#[test]
fn test_focus_lost_ends_drag_and_stops_following_pointer() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 10.0, 10.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointPressed {
                pos: Vec2::new(10.0, 10.0),
            },
        )
        .expect("PointPressed sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::FocusLost)
        .expect("FocusLost sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(80.0, 80.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");

    assert!(state.sketch.dragging_point().is_none());
    assert_eq!(
        state.sketch.points().next().map(|(_, p)| p.position()),
        Some(Vec2::new(10.0, 10.0))
    );

    match state.command_log.last() {
        Some(AppCommand::EndPointDrag) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_chain_invariant_holds_for_many_clicks() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for i in 0..25 {
        click(&mut controller, &mut state, i as f32 * 7.0, (i % 5) as f32 * 11.0);
    }

    let committed = state.sketch.segments().all();
    assert_eq!(committed.len(), 8);
    for pair in committed.windows(2) {
        assert_eq!(pair[0].last(), pair[1].first());
    }
    assert_eq!(state.sketch.segments().current().len(), 1);
}

#[test]
fn test_redraw_is_idempotent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for (x, y) in [
        (5.0, 5.0),
        (15.0, 30.0),
        (25.0, 5.0),
        (35.0, 30.0),
        (45.0, 5.0),
        (55.0, 30.0),
    ] {
        click(&mut controller, &mut state, x, y);
    }

    let scene = controller.build_render_scene(&state);
    let renderer = Renderer::new();
    let mut surface = RecordingSurface::new();
    renderer.draw_all(&scene, &mut surface);
    let first = surface.ops().to_vec();
    renderer.draw_all(&scene, &mut surface);

    assert_eq!(surface.ops(), first.as_slice());
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
}
