use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyKey {
    #[default]
    Easy,
    Intermediate,
    Hard,
}

impl DifficultyKey {
    pub const ALL: [DifficultyKey; 3] = [
        DifficultyKey::Easy,
        DifficultyKey::Intermediate,
        DifficultyKey::Hard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyKey::Easy => "easy",
            DifficultyKey::Intermediate => "intermediate",
            DifficultyKey::Hard => "hard",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == key)
    }
}

impl fmt::Display for DifficultyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
