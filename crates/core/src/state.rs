use slotmap::SlotMap;

use crate::graph::Graph;
use crate::grid::Grid;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub kind: ActorKind,
    pub cell: CellIndex,
    /// Terrain underneath the actor's marker, restored when it leaves.
    pub ground: Terrain,
    /// Turns already spent stuck on the current slow-ground tile.
    pub slow_turns: u8,
    pub perceives_player: bool,
}

impl Actor {
    pub fn new(kind: ActorKind, cell: CellIndex) -> Self {
        Self { kind, cell, ground: Terrain::Plain, slow_turns: 0, perceives_player: false }
    }

    pub fn marker(&self) -> Terrain {
        self.kind.marker()
    }

    pub fn is_hidden(&self) -> bool {
        self.ground == Terrain::Refuge
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub graph: Graph,
    pub player: Actor,
    /// Iteration order is load order and fixes the enemy move order.
    pub enemies: SlotMap<EnemyId, Actor>,
    pub refuges: Vec<CellIndex>,
}
