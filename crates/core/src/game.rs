//! In-memory play session: one loaded layout, its actors and the turn protocol.
//! Submodules extend `Game` with setup, movement, enemy decisions and turn sequencing.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;
use slotmap::SlotMap;

use crate::graph::Graph;
use crate::grid::Grid;
use crate::journal::InputJournal;
use crate::router::Router;
use crate::state::{Actor, GameState};
use crate::types::*;

mod audit;
mod bootstrap;
mod enemies;
mod hash;
mod movement;
#[cfg(test)]
mod test_support;
mod turn;

pub struct Game {
    config: GameConfig,
    turn: u64,
    rng: ChaCha8Rng,
    state: GameState,
    router: Router,
    log: Vec<LogEvent>,
    journal: InputJournal,
}

impl Game {
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn current_turn(&self) -> u64 {
        self.turn
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn graph(&self) -> &Graph {
        &self.state.graph
    }

    pub fn player(&self) -> &Actor {
        &self.state.player
    }

    pub fn enemies(&self) -> &SlotMap<EnemyId, Actor> {
        &self.state.enemies
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Actor> {
        self.state.enemies.get(id)
    }

    pub fn refuges(&self) -> &[CellIndex] {
        &self.state.refuges
    }

    /// True when at least one enemy currently perceives the player.
    pub fn is_spotted(&self) -> bool {
        self.state.enemies.values().any(|enemy| enemy.perceives_player)
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }

    fn roll_index(&mut self, len: usize) -> usize {
        (self.rng.next_u64() % len as u64) as usize
    }
}
