use fraktal_viewer::core::FractalKind;
use fraktal_viewer::{AppCommand, AppController, AppIntent, AppState};
use glam::DVec2;

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_depth_change_is_clamped_at_the_intent_boundary() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::DepthChanged { depth: 42 })
        .expect("DepthChanged sollte ohne Fehler durchlaufen");

    assert_eq!(state.depth, 8);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::SetDepth { depth } => assert_eq!(*depth, 8),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_drag_flow_moves_the_center() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.active_view().center;

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: DVec2::new(100.0, 100.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pos: DVec2::new(130.0, 80.0),
            },
        )
        .unwrap();

    assert_eq!(state.active_view().center, before + DVec2::new(30.0, -20.0));

    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .unwrap();

    // Nach dem Loslassen wirken Bewegungen nicht mehr
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pos: DVec2::new(500.0, 500.0),
            },
        )
        .unwrap();
    assert_eq!(state.active_view().center, before + DVec2::new(30.0, -20.0));
}

#[test]
fn test_scroll_zoom_updates_radius_and_rejects_negative_results() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.active_view().radius;

    controller
        .handle_intent(&mut state, AppIntent::Scrolled { delta: 120.0 })
        .unwrap();
    assert!((state.active_view().radius - (before + 1.2)).abs() < 1e-9);

    // Delta würde den Radius negativ machen → Radius bleibt unverändert
    controller
        .handle_intent(&mut state, AppIntent::Scrolled { delta: -1.0e9 })
        .unwrap();
    assert!((state.active_view().radius - (before + 1.2)).abs() < 1e-9);
}

#[test]
fn test_menu_zoom_steps_apply_one_wheel_notch() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.active_view().radius;

    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .unwrap();
    assert!((state.active_view().radius - (before + 1.2)).abs() < 1e-9);

    controller
        .handle_intent(&mut state, AppIntent::ZoomOutRequested)
        .unwrap();
    assert!((state.active_view().radius - before).abs() < 1e-9);
}

#[test]
fn test_viewport_resize_rescales_all_views_proportionally() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Startplatzierung bezieht sich auf 1500x700
    assert_eq!(state.active_view().center, DVec2::new(750.0, 350.0));
    let rect_before = state.view_for(FractalKind::IceRectangle).center;

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [3000.0, 350.0],
            },
        )
        .unwrap();

    assert_eq!(state.active_view().center, DVec2::new(1500.0, 175.0));
    assert_eq!(
        state.view_for(FractalKind::IceRectangle).center,
        DVec2::new(rect_before.x * 2.0, rect_before.y / 2.0)
    );

    // Dieselbe Größe erneut melden (passiert jeden Frame) ändert nichts
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [3000.0, 350.0],
            },
        )
        .unwrap();
    assert_eq!(state.active_view().center, DVec2::new(1500.0, 175.0));
}

#[test]
fn test_fractal_switch_preserves_per_view_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { pos: DVec2::ZERO })
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pos: DVec2::new(42.0, -17.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .unwrap();
    let koch_center = state.active_view().center;

    controller
        .handle_intent(
            &mut state,
            AppIntent::FractalSelected {
                kind: FractalKind::IceTriangle,
            },
        )
        .unwrap();
    assert_eq!(state.active_kind, FractalKind::IceTriangle);

    // Das Eis-Dreieck hat seine eigene, unangetastete Ansicht
    assert_eq!(state.active_view().center, DVec2::new(750.0, 350.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::FractalSelected {
                kind: FractalKind::KochSnowflake,
            },
        )
        .unwrap();
    assert_eq!(state.active_view().center, koch_center);
}

#[test]
fn test_command_log_records_the_executed_sequence() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::DepthChanged { depth: 5 })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::Scrolled { delta: 240.0 })
        .unwrap();

    let entries = state.command_log.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], AppCommand::SetDepth { depth: 5 });
    assert_eq!(entries[1], AppCommand::ApplyScroll { delta: 240.0 });
}

#[test]
fn test_render_scene_follows_controller_mutations() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::DepthChanged { depth: 1 })
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::FractalSelected {
                kind: FractalKind::IceTriangle,
            },
        )
        .unwrap();

    let scene = controller.build_render_scene(&state, [1280.0, 720.0]);
    assert_eq!(scene.kind, FractalKind::IceTriangle);
    assert_eq!(scene.depth, 1);
    // 6 gerichtete Kanten · 6¹ Segmente
    assert_eq!(scene.segments.len(), 36);
}
