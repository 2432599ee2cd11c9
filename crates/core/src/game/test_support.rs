//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating layout and actor setup across many tests.
//! It does not own production gameplay logic.

use super::*;
use crate::content::Layout;

pub(super) fn game_from_rows(rows: &[&str]) -> Game {
    seeded_game_from_rows(rows, 7)
}

pub(super) fn seeded_game_from_rows(rows: &[&str], seed: u64) -> Game {
    Game::new(GameConfig::with_seed(seed), &Layout::new("fixture", rows)).expect("fixture layout")
}

/// Marks every enemy as already perceiving the player.
pub(super) fn alert_all(game: &mut Game) {
    for enemy in game.state.enemies.values_mut() {
        enemy.perceives_player = true;
    }
}

/// Enemy ids in move order.
pub(super) fn enemy_ids(game: &Game) -> Vec<EnemyId> {
    game.state.enemies.keys().collect()
}

pub(super) fn enemy_at(game: &Game, cell: CellIndex) -> EnemyId {
    game.state
        .enemies
        .iter()
        .find(|(_, enemy)| enemy.cell == cell)
        .map(|(id, _)| id)
        .expect("enemy at cell")
}
