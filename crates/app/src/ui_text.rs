//! Text formatting for menus, the map view, status lines and event log entries.

use hideout_core::{EnemyAction, Game, Graph, LayoutPack, LogEvent, StepOutcome, TurnReport};

use crate::app_loop::{AppMode, AppState};
use crate::{format_seed, format_snapshot_hash};

const LOG_LINES: usize = 5;

pub fn render_screen(app: &AppState) -> String {
    let lines = match app.mode {
        AppMode::Menu => menu_lines(app),
        AppMode::Playing => play_lines(app),
        AppMode::ExampleMap => example_lines(&app.pack),
        AppMode::Controls => controls_lines(),
        AppMode::Quit => vec!["Goodbye.".to_string()],
    };
    let mut screen = lines.join("\n");
    screen.push('\n');
    screen
}

fn menu_lines(app: &AppState) -> Vec<String> {
    vec![
        "=== HIDEOUT ===".to_string(),
        format!("Layout: {}", app.layout_name()),
        String::new(),
        "w) Play / continue".to_string(),
        "a) Example map".to_string(),
        "s) Controls".to_string(),
        "d) Reset on a different layout".to_string(),
        "q) Quit".to_string(),
    ]
}

fn play_lines(app: &AppState) -> Vec<String> {
    let game = &app.game;
    let mut lines = Vec::new();
    if let Some(notice) = &app.notice {
        lines.push(format!("*** {notice} ***"));
    }
    lines.extend(game.grid().render_rows());
    lines.push(status_text(game, app.last_report.as_ref()));
    if let Some(report) = &app.last_report {
        for (index, (_, action)) in report.enemies.iter().enumerate() {
            lines.push(format!("enemy {}: {}", index + 1, enemy_action_text(action)));
        }
    }
    let start = game.log().len().saturating_sub(LOG_LINES);
    lines.extend(game.log()[start..].iter().map(event_log_line));
    lines.push("w/a/s/d move, space or . waits, q menu".to_string());
    lines
}

fn example_lines(pack: &LayoutPack) -> Vec<String> {
    let mut lines = vec![format!("Example map: {}", pack.example.name)];
    match pack.example.to_grid() {
        Ok(grid) => {
            lines.extend(grid.render_rows());
            lines.push(String::new());
            lines.push("Adjacency (cell: neighbor(cost)):".to_string());
            lines.extend(Graph::build(&grid).describe().lines().map(str::to_string));
        }
        Err(err) => lines.push(format!("example map failed to load: {err}")),
    }
    lines.push("Press any key to return.".to_string());
    lines
}

fn controls_lines() -> Vec<String> {
    [
        "Controls:",
        "  w/a/s/d  move up, left, down, right",
        "  space .  wait a turn",
        "  q        back to the menu",
        "",
        "O you   # enemy   H hideout   - slow ground   X wall",
        "Enemies wander until they see you, then chase you down.",
        "Slow ground takes an extra turn to cross. Enemies never see you in a hideout.",
        "Press any key to return.",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

pub fn status_text(game: &Game, report: Option<&TurnReport>) -> String {
    let stance = if game.player().is_hidden() {
        "hidden"
    } else if game.is_spotted() {
        "SPOTTED"
    } else {
        "unseen"
    };
    let step = match report.and_then(|report| report.player) {
        Some(StepOutcome::Blocked) => " (blocked)",
        Some(StepOutcome::Stuck) => " (stuck in slow ground)",
        _ => "",
    };
    format!(
        "Turn {} | {stance}{step} | seed {} | {}",
        game.current_turn(),
        format_seed(game.config().seed),
        format_snapshot_hash(game.snapshot_hash())
    )
}

pub fn event_log_line(event: &LogEvent) -> String {
    match event {
        LogEvent::PlayerMoved { from, to } => format!("moved {from} -> {to}"),
        LogEvent::PlayerStuck { cell } => format!("stuck in slow ground at {cell}"),
        LogEvent::PlayerBlocked { direction } => format!("{direction:?} is blocked"),
        LogEvent::PlayerHidden { refuge } => format!("hidden at {refuge}"),
        LogEvent::EnemySpotted { enemy } => format!("spotted by enemy {enemy:?}"),
        LogEvent::EnemyNoPath { enemy, from, target } => {
            format!("enemy {enemy:?} at {from} cannot reach {target}")
        }
        LogEvent::Captured { enemy, from, refuge } => {
            format!("caught by enemy {enemy:?} from {from}, sent to {refuge}")
        }
    }
}

pub fn enemy_action_text(action: &EnemyAction) -> String {
    match action {
        EnemyAction::Wandered { to, .. } => format!("wanders to {to}"),
        EnemyAction::Pursued { to, .. } => format!("chases to {to}"),
        EnemyAction::Stuck => "is stuck".to_string(),
        EnemyAction::Waited => "waits".to_string(),
        EnemyAction::Blocked { cell } => format!("is blocked at {cell}"),
        EnemyAction::NoPath => "has no path".to_string(),
        EnemyAction::Captured(capture) => format!("catches you at {}", capture.cell),
    }
}
