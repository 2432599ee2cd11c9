use serde::{Deserialize, Serialize};

use crate::types::{GameConfig, TurnInput};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub config: GameConfig,
    pub layout_name: String,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub input: TurnInput,
}

impl InputJournal {
    pub const FORMAT_VERSION: u16 = 1;

    pub fn new(config: GameConfig, layout_name: &str) -> Self {
        Self {
            format_version: Self::FORMAT_VERSION,
            config,
            layout_name: layout_name.to_string(),
            inputs: Vec::new(),
        }
    }

    pub fn append(&mut self, input: TurnInput) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, input });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
