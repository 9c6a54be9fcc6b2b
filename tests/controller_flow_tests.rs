use approx::assert_abs_diff_eq;
use glam::Vec2;
use pixel_shape_editor::{
    AppCommand, AppController, AppIntent, AppState, Color, InputMode, ShapeGeometry, ShapeKind,
};

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn set_mode(controller: &mut AppController, state: &mut AppState, mode: InputMode) {
    send(controller, state, AppIntent::ModeSelected { mode });
}

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::CanvasClicked {
            pos: Vec2::new(x, y),
        },
    );
}

fn submit(controller: &mut AppController, state: &mut AppState, text: &str) {
    send(
        controller,
        state,
        AppIntent::CommandSubmitted {
            text: text.to_string(),
        },
    );
}

/// Zeichnet eine Linie (0,0)-(10,0) per Klick und selektiert sie.
fn state_with_selected_line() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, InputMode::DrawLine);
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 10.0, 0.0);
    set_mode(&mut controller, &mut state, InputMode::Select);
    click(&mut controller, &mut state, 5.0, 0.0);
    assert!(state.registry.has_selection(), "Linie sollte selektiert sein");
    (controller, state)
}

#[test]
fn test_draw_line_by_clicks_registers_shape() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    set_mode(&mut controller, &mut state, InputMode::DrawLine);
    assert_eq!(state.messages.last(), Some("Switched to DrawLine mode"));

    click(&mut controller, &mut state, 0.2, -0.3);
    assert_eq!(state.shape_count(), 0);
    click(&mut controller, &mut state, 4.0, 3.0);

    assert_eq!(state.shape_count(), 1);
    let (_, shape) = state.registry.iter().next().expect("Shape vorhanden");
    assert_eq!(
        *shape.geometry(),
        ShapeGeometry::Line {
            start: Vec2::ZERO,
            end: Vec2::new(4.0, 3.0),
        }
    );
    assert_eq!(state.pool.active_count(), shape.pixels().len());
    assert_eq!(
        state.messages.last(),
        Some("Created line from (0, 0) to (4, 3)")
    );
}

#[test]
fn test_cursor_preview_is_released_after_creation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, InputMode::DrawCircle);

    click(&mut controller, &mut state, 0.0, 0.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::CursorMoved {
            pos: Vec2::new(3.0, 0.0),
        },
    );
    assert!(state.drawer.preview().is_some());
    assert!(state.pool.active_count() > 0);

    click(&mut controller, &mut state, 3.0, 0.0);

    assert!(state.drawer.preview().is_none());
    let drawn: usize = state.registry.iter().map(|(_, s)| s.pixels().len()).sum();
    assert_eq!(state.pool.active_count(), drawn);
}

#[test]
fn test_select_fills_command_input_with_values() {
    let (_controller, state) = state_with_selected_line();

    assert_eq!(state.editor.command_input, "0 0 10 0 Black");
    assert_eq!(state.messages.last(), Some("Select Line from (0, 0) to (10, 0)"));
    let shape = state.registry.selected_shape().expect("Selektion");
    assert!(shape.is_highlighted());
}

#[test]
fn test_click_on_empty_cell_deselects() {
    let (mut controller, mut state) = state_with_selected_line();

    click(&mut controller, &mut state, 20.0, 20.0);

    assert!(!state.registry.has_selection());
    assert!(state.editor.command_input.is_empty());
}

#[test]
fn test_rotate_session_cancel_restores_points() {
    let (mut controller, mut state) = state_with_selected_line();
    let before = state
        .registry
        .selected_shape()
        .expect("Selektion")
        .points()
        .to_vec();

    send(&mut controller, &mut state, AppIntent::RotateRequested);
    assert_eq!(state.editor.mode, InputMode::Rotate);

    send(
        &mut controller,
        &mut state,
        AppIntent::CursorMoved {
            pos: Vec2::new(5.0, 10.0),
        },
    );
    let rotated = state.registry.selected_shape().expect("Selektion");
    assert_abs_diff_eq!(rotated.rotation(), 90.0, epsilon = 1e-4);
    assert_ne!(rotated.points(), before.as_slice());

    send(&mut controller, &mut state, AppIntent::CancelRequested);

    let shape = state.registry.selected_shape().expect("Selektion");
    assert_eq!(shape.rotation(), 0.0);
    assert_eq!(shape.points(), before.as_slice());
    assert_eq!(state.editor.mode, InputMode::Select);
    assert_eq!(state.messages.last(), Some("Rotation canceled."));
}

#[test]
fn test_rotate_by_command_confirms_and_returns_to_select() {
    let (mut controller, mut state) = state_with_selected_line();
    send(&mut controller, &mut state, AppIntent::RotateRequested);

    submit(&mut controller, &mut state, "45");

    assert_eq!(state.editor.mode, InputMode::Select);
    assert!(!state.rotation.is_active());
    assert_eq!(
        state.registry.selected_shape().expect("Selektion").rotation(),
        45.0
    );
    assert_eq!(
        state.messages.last(),
        Some("Rotated selected shape by 45 degrees")
    );
}

#[test]
fn test_move_by_command_translates_geometry() {
    let (mut controller, mut state) = state_with_selected_line();
    send(&mut controller, &mut state, AppIntent::MoveRequested);
    assert_eq!(state.editor.mode, InputMode::Move);

    submit(&mut controller, &mut state, "5 -2");

    assert_eq!(state.editor.mode, InputMode::Select);
    assert!(!state.mover.is_active());
    let shape = state.registry.selected_shape().expect("Selektion");
    assert_eq!(
        *shape.geometry(),
        ShapeGeometry::Line {
            start: Vec2::new(5.0, -2.0),
            end: Vec2::new(15.0, -2.0),
        }
    );
    assert_eq!(state.editor.command_input, "5 -2 15 -2 Black");
    assert!(state.messages.contains("Moved shape by (5, -2)"));
}

#[test]
fn test_move_session_follows_cursor_and_confirms_on_click() {
    let (mut controller, mut state) = state_with_selected_line();
    // Greifpunkt im Zentrum der Linie
    send(
        &mut controller,
        &mut state,
        AppIntent::CursorMoved {
            pos: Vec2::new(5.0, 0.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::MoveRequested);

    send(
        &mut controller,
        &mut state,
        AppIntent::CursorMoved {
            pos: Vec2::new(8.0, 4.0),
        },
    );
    click(&mut controller, &mut state, 8.0, 4.0);

    assert_eq!(state.editor.mode, InputMode::Select);
    let shape = state.registry.selected_shape().expect("Selektion");
    assert_eq!(shape.center(), Vec2::new(8.0, 4.0));
    assert_eq!(state.messages.last(), Some("Move confirmed."));
}

#[test]
fn test_edit_selected_shape_via_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, InputMode::DrawCircle);
    submit(&mut controller, &mut state, "0 0 3 Blue");
    assert_eq!(
        state.messages.last(),
        Some("Created circle at (0, 0) with radius 3")
    );

    set_mode(&mut controller, &mut state, InputMode::Select);
    click(&mut controller, &mut state, 3.0, 0.0);
    submit(&mut controller, &mut state, "1 1 6 red");

    let shape = state.registry.selected_shape().expect("Selektion");
    assert_eq!(
        *shape.geometry(),
        ShapeGeometry::Circle {
            center: Vec2::new(1.0, 1.0),
            radius: 6,
        }
    );
    assert_eq!(shape.color(), Color::RED);
    assert_eq!(shape.kind(), ShapeKind::Circle);
    assert!(state
        .messages
        .contains("Updated Circle Center: (1, 1), Radius: 6"));
    assert_eq!(state.editor.command_input, "1 1 6 Red");
}

#[test]
fn test_rejected_command_leaves_state_untouched() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, InputMode::DrawCircle);

    submit(&mut controller, &mut state, "1 2");
    assert_eq!(
        state.messages.last(),
        Some("Circle requires 3 numbers: x y radius")
    );

    submit(&mut controller, &mut state, "1 2 0");
    assert_eq!(state.messages.last(), Some("Circle requires positive radius"));

    submit(&mut controller, &mut state, "eins zwei drei");
    assert_eq!(state.messages.last(), Some("Invalid input: eins zwei drei"));

    assert_eq!(state.shape_count(), 0);
    assert_eq!(state.pool.active_count(), 0);
}

#[test]
fn test_command_in_select_mode_without_selection_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(&mut controller, &mut state, "1 2 3");

    assert_eq!(state.messages.last(), Some("Invalid mode for command input"));
    assert_eq!(state.shape_count(), 0);
}

#[test]
fn test_switching_to_draw_mode_deselects() {
    let (mut controller, mut state) = state_with_selected_line();

    set_mode(&mut controller, &mut state, InputMode::DrawBezier);

    assert!(!state.registry.has_selection());
    let shape = state.registry.iter().next().expect("Shape").1;
    assert!(!shape.is_highlighted());
}

#[test]
fn test_escape_cancels_pending_clicks() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, InputMode::DrawHermite);
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 5.0, 5.0);

    send(&mut controller, &mut state, AppIntent::CancelRequested);

    assert!(!state.drawer.is_drawing());
    assert_eq!(state.messages.last(), Some("Drawing canceled."));
    assert_eq!(state.shape_count(), 0);
}

#[test]
fn test_delete_selected_releases_pixels() {
    let (mut controller, mut state) = state_with_selected_line();

    send(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);

    assert_eq!(state.shape_count(), 0);
    assert_eq!(state.pool.active_count(), 0);
    assert_eq!(state.messages.last(), Some("Delete Line from (0, 0) to (10, 0)"));
}

#[test]
fn test_shape_list_click_switches_to_select() {
    let (mut controller, mut state) = state_with_selected_line();
    let handle = state.registry.selected_handle().expect("Selektion");
    set_mode(&mut controller, &mut state, InputMode::DrawEllipse);

    send(
        &mut controller,
        &mut state,
        AppIntent::ShapeListItemClicked { handle },
    );

    assert_eq!(state.editor.mode, InputMode::Select);
    assert_eq!(state.registry.selected_handle(), Some(handle));
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);
    match state.command_log.last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_out_of_range_commands_are_rejected_without_drawing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    set_mode(&mut controller, &mut state, InputMode::DrawLine);
    submit(&mut controller, &mut state, "-3000000000 0 3000000000 0");
    assert_eq!(
        state.messages.last(),
        Some("Coordinates must lie between -10000 and 10000")
    );

    set_mode(&mut controller, &mut state, InputMode::DrawCircle);
    submit(&mut controller, &mut state, "0 0 3000000000");
    submit(&mut controller, &mut state, "0 0 100000000");

    assert_eq!(state.shape_count(), 0);
    assert_eq!(state.pool.active_count(), 0);
}

#[test]
fn test_move_beyond_bounds_keeps_shape_in_place() {
    let (mut controller, mut state) = state_with_selected_line();
    send(&mut controller, &mut state, AppIntent::MoveRequested);

    submit(&mut controller, &mut state, "9995 0");

    assert_eq!(state.editor.mode, InputMode::Select);
    let shape = state.registry.selected_shape().expect("Selektion");
    assert_eq!(
        *shape.geometry(),
        ShapeGeometry::Line {
            start: Vec2::ZERO,
            end: Vec2::new(10.0, 0.0),
        }
    );
    assert!(state
        .messages
        .contains("Coordinates must lie between -10000 and 10000"));
}
