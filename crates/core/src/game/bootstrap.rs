//! Session construction from a loaded layout.
//! This module exists to isolate load-time validation from per-turn simulation.
//! It does not own layout parsing or the built-in layout catalogue.

use rand_chacha::rand_core::SeedableRng;
use tracing::debug;

use super::*;
use crate::content::Layout;

impl Game {
    /// Loads `layout`, derives the graph once and places every actor at its start cell.
    pub fn new(config: GameConfig, layout: &Layout) -> Result<Self, LoadError> {
        let grid = layout.to_grid()?;
        let Some(start) = grid.player_start() else {
            return Err(LoadError::MissingPlayer);
        };
        if !grid.enemy_starts().is_empty() && grid.refuges().is_empty() {
            return Err(LoadError::MissingRefuge);
        }

        let graph = Graph::build(&grid);
        let player = Actor::new(ActorKind::Player, start);
        let mut enemies = SlotMap::with_key();
        for &cell in grid.enemy_starts() {
            enemies.insert(Actor::new(ActorKind::Enemy, cell));
        }
        let refuges = grid.refuges().to_vec();
        debug!(
            layout = %layout.name,
            width = grid.width(),
            height = grid.height(),
            edges = graph.edge_count(),
            enemies = enemies.len(),
            "session loaded"
        );

        Ok(Self {
            config,
            turn: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            state: GameState { grid, graph, player, enemies, refuges },
            router: Router::new(),
            log: Vec::new(),
            journal: InputJournal::new(config, &layout.name),
        })
    }
}
