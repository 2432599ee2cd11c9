use thiserror::Error;

use crate::content::LayoutPack;
use crate::game::Game;
use crate::journal::InputJournal;
use crate::types::LoadError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("journal layout failed to load: {0}")]
    Load(#[from] LoadError),
    #[error("journal names unknown layout `{0}`")]
    UnknownLayout(String),
    #[error("journal input {found} is out of sequence, expected {expected}")]
    SequenceGap { expected: u64, found: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_turn: u64,
    pub final_snapshot_hash: u64,
    pub captures: usize,
}

/// Rebuilds the journaled session and feeds it every recorded input.
pub fn replay_to_end(
    pack: &LayoutPack,
    journal: &InputJournal,
) -> Result<ReplayResult, ReplayError> {
    let layout = pack
        .get(&journal.layout_name)
        .ok_or_else(|| ReplayError::UnknownLayout(journal.layout_name.clone()))?;
    let mut game = Game::new(journal.config, layout)?;

    let mut captures = 0;
    for (expected, record) in (0u64..).zip(&journal.inputs) {
        if record.seq != expected {
            return Err(ReplayError::SequenceGap { expected, found: record.seq });
        }
        if game.play_turn(record.input).capture.is_some() {
            captures += 1;
        }
    }

    Ok(ReplayResult {
        final_turn: game.current_turn(),
        final_snapshot_hash: game.snapshot_hash(),
        captures,
    })
}
