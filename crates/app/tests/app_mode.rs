use app::app_loop::{AppMode, AppState};
use app::ui_text::render_screen;
use hideout_core::content::names;
use hideout_core::{LayoutPack, StepOutcome};

fn app_on(layout: &str) -> AppState {
    AppState::new(12345, LayoutPack::default(), Some(layout)).expect("builtin layout starts")
}

fn press(app: &mut AppState, keys: &str) {
    for key in keys.chars() {
        app.handle_key(key).expect("key should be handled");
    }
}

#[test]
fn starts_in_the_menu() {
    let app = app_on(names::RUINS);
    assert_eq!(app.mode, AppMode::Menu);
    assert_eq!(app.layout_name(), names::RUINS);
    assert!(render_screen(&app).contains("w) Play / continue"));
}

#[test]
fn menu_keys_switch_screens_and_any_key_returns() {
    let mut app = app_on(names::RUINS);
    press(&mut app, "a");
    assert_eq!(app.mode, AppMode::ExampleMap);
    assert!(render_screen(&app).contains("Adjacency"));
    press(&mut app, "x");
    assert_eq!(app.mode, AppMode::Menu);

    press(&mut app, "S");
    assert_eq!(app.mode, AppMode::Controls);
    press(&mut app, " ");
    assert_eq!(app.mode, AppMode::Menu);
}

#[test]
fn play_keys_drive_the_session_and_q_returns_to_menu() {
    let mut app = app_on(names::RUINS);
    press(&mut app, "w");
    assert_eq!(app.mode, AppMode::Playing);

    press(&mut app, ".");
    assert_eq!(app.game.current_turn(), 1);
    assert_eq!(app.last_report.as_ref().map(|report| report.player), Some(None));

    press(&mut app, "D");
    let report = app.last_report.as_ref().expect("turn was played");
    assert!(matches!(report.player, Some(StepOutcome::Moved { .. })));
    assert_eq!(app.game.journal().inputs.len(), 2);

    press(&mut app, "q");
    assert_eq!(app.mode, AppMode::Menu);
    press(&mut app, "w");
    assert_eq!(app.mode, AppMode::Playing);
    assert_eq!(app.game.journal().inputs.len(), 2, "continuing keeps the session");
}

#[test]
fn reset_moves_to_a_different_layout() {
    let mut app = app_on(names::COURTYARD);
    press(&mut app, "w.q");
    press(&mut app, "d");
    assert_eq!(app.mode, AppMode::Menu);
    assert_ne!(app.layout_name(), names::COURTYARD);
    assert_eq!(app.game.current_turn(), 0);
    assert!(app.last_report.is_none());
}

#[test]
fn quit_is_terminal() {
    let mut app = app_on(names::MEADOW);
    press(&mut app, "q");
    assert_eq!(app.mode, AppMode::Quit);
    press(&mut app, "w");
    assert_eq!(app.mode, AppMode::Quit);
    assert_eq!(render_screen(&app), "Goodbye.\n");
}

#[test]
fn unknown_start_layout_is_an_error() {
    assert!(AppState::new(1, LayoutPack::default(), Some("nowhere")).is_err());
}
