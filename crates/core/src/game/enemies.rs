//! Enemy decisions for one enemy phase: random wandering, routed pursuit and capture.
//! This module exists to keep per-enemy choices separate from turn sequencing.
//! It does not own line-of-sight evaluation or the player's own movement.

use tracing::{debug, info, warn};

use super::movement::{apply_move, held_by_slow_ground, step_target};
use super::*;

impl Game {
    /// Moves every enemy once, in load order. Returns each enemy's action and the
    /// capture, if one happened.
    pub(super) fn move_enemies(&mut self) -> (Vec<(EnemyId, EnemyAction)>, Option<Capture>) {
        let ids: Vec<EnemyId> = self.state.enemies.keys().collect();
        let mut actions = Vec::with_capacity(ids.len());
        let mut capture = None;
        for id in ids {
            let action = match self.state.enemies.get(id) {
                Some(enemy) if enemy.perceives_player => self.pursue(id),
                Some(_) => self.wander(id),
                None => continue,
            };
            if let EnemyAction::Captured(event) = action {
                capture = Some(event);
            }
            actions.push((id, action));
        }
        (actions, capture)
    }

    fn wander(&mut self, id: EnemyId) -> EnemyAction {
        let Some(from) = self.state.enemies.get(id).map(|enemy| enemy.cell) else {
            return EnemyAction::Waited;
        };
        let open: Vec<CellIndex> = Direction::ALL
            .into_iter()
            .filter_map(|direction| step_target(&self.state.grid, from, direction, false))
            .collect();
        let choice = match open.len() {
            0 => None,
            len => open.get(self.roll_index(len)).copied(),
        };

        let state = &mut self.state;
        let Some(enemy) = state.enemies.get_mut(id) else {
            return EnemyAction::Waited;
        };
        if held_by_slow_ground(enemy) {
            return EnemyAction::Stuck;
        }
        let Some(to) = choice else {
            return EnemyAction::Waited;
        };
        apply_move(&mut state.grid, enemy, to);
        EnemyAction::Wandered { from, to }
    }

    fn pursue(&mut self, id: EnemyId) -> EnemyAction {
        let target = self.state.player.cell;
        let state = &mut self.state;
        let Some(enemy) = state.enemies.get_mut(id) else {
            return EnemyAction::Waited;
        };
        if held_by_slow_ground(enemy) {
            return EnemyAction::Stuck;
        }
        let from = enemy.cell;
        if state.grid.are_adjacent(from, target) {
            return self.capture(id);
        }

        match self.router.next_hop(&state.graph, from, target) {
            Ok(to) if state.grid.terrain(to) == Some(Terrain::Enemy) => {
                debug!(?id, cell = to, "pursuit blocked by another enemy");
                EnemyAction::Blocked { cell: to }
            }
            Ok(to) => {
                apply_move(&mut state.grid, enemy, to);
                EnemyAction::Pursued { from, to }
            }
            Err(err) => {
                warn!(?id, %err, "enemy cannot reach the player");
                self.log.push(LogEvent::EnemyNoPath { enemy: id, from, target });
                EnemyAction::NoPath
            }
        }
    }

    /// Swaps the enemy onto the player's cell and sends the player to a free refuge.
    fn capture(&mut self, id: EnemyId) -> EnemyAction {
        let Some(refuge) = self.pick_refuge() else {
            warn!(?id, "no free refuge for capture");
            return EnemyAction::Waited;
        };
        let state = &mut self.state;
        let Some(enemy) = state.enemies.get_mut(id) else {
            return EnemyAction::Waited;
        };
        let from = enemy.cell;
        let cell = state.player.cell;

        state.grid.set_terrain(from, enemy.ground);
        enemy.cell = cell;
        enemy.ground = state.player.ground;
        enemy.slow_turns = 0;
        state.grid.set_terrain(cell, enemy.marker());

        state.player.cell = refuge;
        state.player.ground = Terrain::Refuge;
        state.player.slow_turns = 0;
        state.grid.set_terrain(refuge, state.player.marker());

        for other in state.enemies.values_mut() {
            other.perceives_player = false;
        }
        self.log.push(LogEvent::Captured { enemy: id, from, refuge });
        info!(?id, cell, refuge, "player captured");
        EnemyAction::Captured(Capture { enemy: id, cell, refuge })
    }

    /// Uniform choice among refuge cells that no actor is standing on.
    fn pick_refuge(&mut self) -> Option<CellIndex> {
        let free: Vec<CellIndex> = self
            .state
            .refuges
            .iter()
            .copied()
            .filter(|&cell| self.state.grid.terrain(cell) == Some(Terrain::Refuge))
            .collect();
        match free.len() {
            0 => None,
            len => free.get(self.roll_index(len)).copied(),
        }
    }
}
