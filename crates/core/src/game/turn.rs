//! One full turn: player step, sight check, enemy phase, sight check.

use tracing::debug;

use super::*;
use crate::visibility;

impl Game {
    pub fn play_turn(&mut self, input: TurnInput) -> TurnReport {
        self.journal.append(input);
        let turn = self.turn;

        let player = match input {
            TurnInput::Move(direction) => {
                let outcome = self.move_player(direction);
                let spotted = self.refresh_visibility();
                if outcome == StepOutcome::Blocked {
                    return TurnReport {
                        turn,
                        player: Some(outcome),
                        enemies: Vec::new(),
                        capture: None,
                        spotted,
                    };
                }
                Some(outcome)
            }
            TurnInput::Wait => None,
        };

        let (enemies, capture) = self.move_enemies();
        let spotted = self.refresh_visibility();
        self.turn += 1;
        debug!(turn, ?player, ?capture, spotted, "turn resolved");
        TurnReport { turn, player, enemies, capture, spotted }
    }

    /// Runs the line-of-sight pass and logs newly alerted enemies. Returns whether
    /// any enemy perceives the player afterwards.
    pub(super) fn refresh_visibility(&mut self) -> bool {
        let spotted = visibility::evaluate(
            &self.state.grid,
            &self.state.player,
            &mut self.state.enemies,
            SIGHT_RANGE,
        );
        for enemy in spotted {
            debug!(?enemy, "player spotted");
            self.log.push(LogEvent::EnemySpotted { enemy });
        }
        self.is_spotted()
    }
}
