use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::quiz::difficulty::DifficultyKey;
use crate::quiz::question::QuestionRecord;

pub const SCHEMA_VERSION: u32 = 1;

/// Everything persisted between runs: only the last chosen difficulty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub selected_difficulty: Option<DifficultyKey>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for SessionData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            selected_difficulty: None,
        }
    }
}

/// On-disk question file: `{"difficulty": {"easy": {"questions": [...]}}}`.
///
/// Keys stay strings here so an unknown tier can be skipped instead of
/// failing the whole file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QuestionFile {
    pub difficulty: BTreeMap<String, DifficultySet>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DifficultySet {
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}
