//! Consistency checks between the displayed grid and the actors standing on it.
//! This module exists so tests and the fuzz driver share one definition of a sane session.
//! It does not repair state.

use super::*;

impl Game {
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let grid = &self.state.grid;
        let count_of =
            |terrain: Terrain| grid.cells().iter().filter(|cell| cell.terrain == terrain).count();

        let players = count_of(Terrain::Player);
        if players != 1 {
            return Err(InvariantViolation::PlayerMarkers { count: players });
        }
        let player = &self.state.player;
        if grid.terrain(player.cell) != Some(Terrain::Player) {
            return Err(InvariantViolation::PlayerMisplaced { cell: player.cell });
        }
        if player.ground.is_wall() {
            return Err(InvariantViolation::OnWall { cell: player.cell });
        }

        let markers = count_of(Terrain::Enemy);
        if markers != self.state.enemies.len() {
            return Err(InvariantViolation::EnemyMarkers {
                markers,
                enemies: self.state.enemies.len(),
            });
        }
        for enemy in self.state.enemies.values() {
            if grid.terrain(enemy.cell) != Some(Terrain::Enemy) {
                return Err(InvariantViolation::EnemyMisplaced { cell: enemy.cell });
            }
            if enemy.ground.is_wall() {
                return Err(InvariantViolation::OnWall { cell: enemy.cell });
            }
        }
        Ok(())
    }
}
