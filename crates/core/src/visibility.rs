//! Cardinal line-of-sight checks from every enemy toward the player.
//! Walls stop a ray; refuges only hide the player standing on them.

use slotmap::SlotMap;

use crate::grid::Grid;
use crate::state::Actor;
use crate::types::{CellIndex, Direction, EnemyId, Terrain};

/// Sets `perceives_player` on every enemy that sees the player and returns the
/// enemies that did not perceive it before. The flag is never cleared here.
pub fn evaluate(
    grid: &Grid,
    player: &Actor,
    enemies: &mut SlotMap<EnemyId, Actor>,
    range: usize,
) -> Vec<EnemyId> {
    let mut spotted = Vec::new();
    if player.is_hidden() {
        return spotted;
    }
    for (id, enemy) in enemies.iter_mut() {
        if sees_player(grid, enemy.cell, range) && !enemy.perceives_player {
            enemy.perceives_player = true;
            spotted.push(id);
        }
    }
    spotted
}

pub fn sees_player(grid: &Grid, origin: CellIndex, range: usize) -> bool {
    Direction::ALL.into_iter().any(|direction| ray_hits_player(grid, origin, direction, range))
}

/// Advances one cell per step while the current endpoint is not a wall; a blocked
/// ray keeps re-checking its last endpoint for the remaining steps.
fn ray_hits_player(grid: &Grid, origin: CellIndex, direction: Direction, range: usize) -> bool {
    let mut endpoint = origin;
    for _ in 0..range {
        if grid.terrain(endpoint).is_some_and(|terrain| !terrain.is_wall())
            && let Some(next) = grid.neighbor(endpoint, direction)
        {
            endpoint = next;
        }
        if grid.terrain(endpoint) == Some(Terrain::Player) {
            return true;
        }
    }
    false
}
