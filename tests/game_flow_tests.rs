//! End-to-end session flow tests.
//!
//! These walk the full click/tick/render protocol on small staged
//! boards, including the scripted 2x2 reference game: two red cells,
//! one blue, one green, tolerance 0.2.

use color_grid::{ColorRgb, GameEngine, GameSession, GridConfig, QuadList, TickReport};

/// 2x2 board, 100x100 cells, tolerance 0.2, colors staged row-major:
/// red, red, blue, green.
fn scripted_session() -> GameSession {
    let mut engine = GameEngine::new(GridConfig::new(2, 2), 42);

    let colors = [
        ColorRgb::new(1.0, 0.0, 0.0),
        ColorRgb::new(1.0, 0.0, 0.0),
        ColorRgb::new(0.0, 0.0, 1.0),
        ColorRgb::new(0.0, 1.0, 0.0),
    ];
    for (i, color) in colors.into_iter().enumerate() {
        let (row, col) = (i / 2, i % 2);
        engine.grid_mut().cell_mut(row, col).unwrap().color = color;
    }

    GameSession::with_engine(engine)
}

#[test]
fn test_scripted_game_plays_to_completion() {
    let mut session = scripted_session();

    // Click (50,50): the red pair goes together.
    session.on_click(50.0, 50.0);
    let report = session.tick();
    assert_eq!(report.removed, 2);
    assert_eq!(session.engine().attempts(), 1);
    assert_eq!(session.engine().score(), 1); // 0 + 2 - 1

    // Click (50,150): blue goes alone.
    session.on_click(50.0, 150.0);
    let report = session.tick();
    assert_eq!(report.removed, 1);
    assert_eq!(session.engine().attempts(), 2);
    assert_eq!(session.engine().score(), 0); // 1 + 1 - 2

    // Click the last cell: game over.
    assert!(!session.engine().is_game_over());
    session.on_click(150.0, 150.0);
    let report = session.tick();
    assert_eq!(report.removed, 1);
    assert!(session.engine().is_game_over());
    assert_eq!(session.engine().score(), 0); // max(0, 0 + 1 - 3)

    let status = report.status.expect("resolution must update the status");
    assert!(status.contains("Game over"));
}

#[test]
fn test_render_shrinks_as_cells_go() {
    let mut session = scripted_session();

    let mut before = QuadList::default();
    session.engine().render_into(&mut before);
    assert_eq!(before.quads.len(), 4);

    session.on_click(50.0, 50.0);
    session.tick();

    let mut after = QuadList::default();
    session.engine().render_into(&mut after);
    assert_eq!(after.quads.len(), 2);

    // Survivors keep their original positions and colors.
    assert_eq!(after.quads[0].color, ColorRgb::new(0.0, 0.0, 1.0));
    assert_eq!(after.quads[1].color, ColorRgb::new(0.0, 1.0, 0.0));
}

#[test]
fn test_invalid_clicks_change_nothing() {
    let mut session = scripted_session();
    session.on_click(50.0, 50.0);
    session.tick();

    let snapshot = session.engine().snapshot();

    // Outside the board, on an eliminated cell, and idle ticks between.
    session.on_click(900.0, 50.0);
    assert_eq!(session.tick(), TickReport::default());
    session.on_click(50.0, 50.0);
    assert_eq!(session.tick(), TickReport::default());

    assert_eq!(session.engine().snapshot(), snapshot);
}

#[test]
fn test_clicks_after_game_over_change_nothing() {
    let mut session = scripted_session();
    for (x, y) in [(50.0, 50.0), (50.0, 150.0), (150.0, 150.0)] {
        session.on_click(x, y);
        session.tick();
    }
    assert!(session.engine().is_game_over());

    let snapshot = session.engine().snapshot();
    session.on_click(50.0, 150.0);
    assert_eq!(session.tick(), TickReport::default());
    assert_eq!(session.engine().snapshot(), snapshot);
}

#[test]
fn test_restart_mid_game() {
    let mut session = scripted_session();
    session.on_click(50.0, 50.0);
    session.tick();

    session.on_restart_requested();
    let report = session.tick();

    assert!(report.was_reset);
    assert_eq!(session.engine().score(), 0);
    assert_eq!(session.engine().attempts(), 0);
    assert!(!session.engine().is_game_over());
    assert_eq!(session.engine().grid().active_count(), 4);
}

#[test]
fn test_restart_after_game_over() {
    let mut session = scripted_session();
    for (x, y) in [(50.0, 50.0), (50.0, 150.0), (150.0, 150.0)] {
        session.on_click(x, y);
        session.tick();
    }
    assert!(session.engine().is_game_over());

    session.on_restart_requested();
    session.tick();

    // Play continues on the fresh board.
    assert!(!session.engine().is_game_over());
    session.on_click(50.0, 50.0);
    let report = session.tick();
    assert!(report.removed >= 1);
}

#[test]
fn test_session_resume_from_snapshot() {
    let mut session = scripted_session();
    session.on_click(50.0, 50.0);
    session.tick();

    let bytes = session.engine().snapshot().to_bytes().unwrap();

    let decoded = color_grid::GameSnapshot::from_bytes(&bytes).unwrap();
    let mut resumed = GameSession::with_engine(GameEngine::from_snapshot(decoded));

    assert_eq!(resumed.engine().score(), 1);
    assert_eq!(resumed.engine().grid().active_count(), 2);

    // Finish the game on the resumed session.
    resumed.on_click(50.0, 150.0);
    resumed.tick();
    resumed.on_click(150.0, 150.0);
    resumed.tick();
    assert!(resumed.engine().is_game_over());
}
