//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from turn sequencing.
//! It does not own replay execution or journal encoding.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

fn write_actor(hasher: &mut Xxh3, actor: &Actor) {
    hasher.write_u64(actor.cell as u64);
    hasher.write_u8(actor.ground as u8);
    hasher.write_u8(actor.slow_turns);
    hasher.write_u8(u8::from(actor.perceives_player));
}

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.config.seed);
        hasher.write_u64(self.turn);
        hasher.write_u64(self.journal.inputs.len() as u64);
        for cell in self.state.grid.cells() {
            hasher.write_u8(cell.terrain as u8);
        }
        write_actor(&mut hasher, &self.state.player);
        for enemy in self.state.enemies.values() {
            write_actor(&mut hasher, enemy);
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    const ROWS: [&str; 5] = ["XXXXXX", "XO___X", "X_XX_X", "X__#HX", "XXXXXX"];

    #[test]
    fn identical_seed_and_inputs_hash_identically() {
        let mut first = seeded_game_from_rows(&ROWS, 11);
        let mut second = seeded_game_from_rows(&ROWS, 11);
        assert_eq!(first.snapshot_hash(), second.snapshot_hash());
        for input in [TurnInput::Wait, TurnInput::Move(Direction::Right), TurnInput::Wait] {
            first.play_turn(input);
            second.play_turn(input);
            assert_eq!(first.snapshot_hash(), second.snapshot_hash());
        }
    }

    #[test]
    fn player_position_changes_the_hash() {
        let mut moved = seeded_game_from_rows(&ROWS, 11);
        let mut waited = seeded_game_from_rows(&ROWS, 11);
        moved.play_turn(TurnInput::Move(Direction::Down));
        waited.play_turn(TurnInput::Wait);
        assert_ne!(moved.snapshot_hash(), waited.snapshot_hash());
    }
}
