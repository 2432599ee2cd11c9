//! Step legality, the slow-ground delay and marker bookkeeping shared by every actor.
//! This module exists to keep the ground-restoring move protocol in one place.
//! It does not own enemy decisions or turn sequencing.

use tracing::debug;

use super::*;

/// Destination of a cardinal step when it may be entered. Plain and slow ground are
/// always enterable; refuges only when `hidden` is set.
pub(super) fn step_target(
    grid: &Grid,
    from: CellIndex,
    direction: Direction,
    hidden: bool,
) -> Option<CellIndex> {
    let to = grid.neighbor(from, direction)?;
    match grid.terrain(to)? {
        Terrain::Plain | Terrain::SlowGround => Some(to),
        Terrain::Refuge if hidden => Some(to),
        _ => None,
    }
}

/// Holds an actor standing on slow ground for one turn. Returns `true` when the
/// actor spends this turn stuck.
pub(super) fn held_by_slow_ground(actor: &mut Actor) -> bool {
    if actor.ground == Terrain::SlowGround && actor.slow_turns == 0 {
        actor.slow_turns = actor.slow_turns.saturating_add(1);
        return true;
    }
    false
}

/// Moves `actor` to `to`, restoring the vacated cell and remembering the new ground.
/// Returns the vacated cell.
pub(super) fn apply_move(grid: &mut Grid, actor: &mut Actor, to: CellIndex) -> CellIndex {
    let from = actor.cell;
    grid.set_terrain(from, actor.ground);
    actor.ground = grid.terrain(to).unwrap_or(Terrain::Plain);
    actor.cell = to;
    grid.set_terrain(to, actor.marker());
    actor.slow_turns = 0;
    from
}

impl Game {
    /// Whether the player could step onto plain or slow ground in `direction`.
    pub fn can_step(&self, direction: Direction) -> bool {
        step_target(&self.state.grid, self.state.player.cell, direction, false).is_some()
    }

    /// `can_step`, additionally allowing a refuge destination.
    pub fn can_step_hidden(&self, direction: Direction) -> bool {
        step_target(&self.state.grid, self.state.player.cell, direction, true).is_some()
    }

    pub(super) fn move_player(&mut self, direction: Direction) -> StepOutcome {
        let state = &mut self.state;
        let Some(to) = step_target(&state.grid, state.player.cell, direction, true) else {
            self.log.push(LogEvent::PlayerBlocked { direction });
            return StepOutcome::Blocked;
        };
        if held_by_slow_ground(&mut state.player) {
            self.log.push(LogEvent::PlayerStuck { cell: state.player.cell });
            return StepOutcome::Stuck;
        }

        let from = apply_move(&mut state.grid, &mut state.player, to);
        self.log.push(LogEvent::PlayerMoved { from, to });
        if state.player.is_hidden() {
            for enemy in state.enemies.values_mut() {
                enemy.perceives_player = false;
            }
            self.log.push(LogEvent::PlayerHidden { refuge: to });
            debug!(refuge = to, "player hidden");
        }
        StepOutcome::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn refuge_is_enterable_only_through_the_hidden_check() {
        let game = game_from_rows(&["XXX", "XOX", "XHX"]);
        assert!(!game.can_step(Direction::Down));
        assert!(game.can_step_hidden(Direction::Down));
        for direction in [Direction::Up, Direction::Left, Direction::Right] {
            assert!(!game.can_step(direction));
            assert!(!game.can_step_hidden(direction));
        }
    }

    #[test]
    fn leaving_a_refuge_restores_it() {
        let mut game = game_from_rows(&["XXX", "XOX", "XHX"]);
        assert_eq!(game.move_player(Direction::Down), StepOutcome::Moved { from: 4, to: 7 });
        assert!(game.player().is_hidden());
        assert_eq!(game.grid().terrain(4), Some(Terrain::Plain));
        assert_eq!(game.grid().terrain(7), Some(Terrain::Player));

        assert_eq!(game.move_player(Direction::Up), StepOutcome::Moved { from: 7, to: 4 });
        assert_eq!(game.grid().terrain(7), Some(Terrain::Refuge));
        assert_eq!(game.grid().terrain(4), Some(Terrain::Player));
        assert!(!game.player().is_hidden());
    }

    #[test]
    fn slow_ground_costs_one_standing_turn() {
        let mut game = game_from_rows(&["XXXXX", "XO-_X", "XXXXX"]);
        assert_eq!(game.move_player(Direction::Right), StepOutcome::Moved { from: 6, to: 7 });
        assert_eq!(game.player().ground, Terrain::SlowGround);

        assert_eq!(game.move_player(Direction::Right), StepOutcome::Stuck);
        assert_eq!(game.player().cell, 7);
        assert_eq!(game.grid().terrain(7), Some(Terrain::Player));
        assert_eq!(game.player().slow_turns, 1);

        assert_eq!(game.move_player(Direction::Right), StepOutcome::Moved { from: 7, to: 8 });
        assert_eq!(game.player().slow_turns, 0);
        assert_eq!(game.grid().terrain(7), Some(Terrain::SlowGround));
        assert!(game.log().contains(&LogEvent::PlayerStuck { cell: 7 }));
    }

    #[test]
    fn blocked_step_leaves_everything_in_place() {
        let mut game = game_from_rows(&["XXX", "XOX", "XHX"]);
        let before = game.grid().symbols();
        assert_eq!(game.move_player(Direction::Left), StepOutcome::Blocked);
        assert_eq!(game.grid().symbols(), before);
        assert_eq!(game.log(), &[LogEvent::PlayerBlocked { direction: Direction::Left }]);
    }

    #[test]
    fn player_cannot_walk_onto_an_enemy() {
        let game = game_from_rows(&["XXXX", "XO#X", "XHXX"]);
        assert!(!game.can_step_hidden(Direction::Right));
    }

    #[test]
    fn entering_a_refuge_clears_every_perception() {
        let mut game = game_from_rows(&["XXXXX", "XO__#", "XHXXX"]);
        alert_all(&mut game);
        assert_eq!(game.move_player(Direction::Down), StepOutcome::Moved { from: 6, to: 11 });
        assert!(game.enemies().values().all(|enemy| !enemy.perceives_player));
        assert!(game.log().contains(&LogEvent::PlayerHidden { refuge: 11 }));
    }
}
