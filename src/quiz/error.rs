use std::path::PathBuf;

use thiserror::Error;

use crate::quiz::difficulty::DifficultyKey;
use crate::quiz::session::Phase;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("no questions available for difficulty '{0}'")]
    Configuration(DifficultyKey),

    #[error("{operation} is not allowed while {phase}")]
    InvalidState {
        operation: &'static str,
        phase: Phase,
    },

    /// The chosen option does not exist on the current question. Never clamped.
    #[error("option {chosen} is out of range for a question with {len} options")]
    OptionOutOfRange { chosen: usize, len: usize },

    #[error("failed to load questions: {0}")]
    ResourceLoad(#[from] LoadError),
}

impl QuizError {
    pub(crate) fn invalid_state(operation: &'static str, phase: Phase) -> Self {
        QuizError::InvalidState { operation, phase }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("question file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{difficulty} question {number}: {reason}")]
    InvalidQuestion {
        difficulty: DifficultyKey,
        number: usize,
        reason: String,
    },

    #[error("bundled question asset '{0}' is missing")]
    MissingAsset(&'static str),

    #[cfg(feature = "network")]
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[cfg(not(feature = "network"))]
    #[error("remote question sources need the `network` feature")]
    NetworkDisabled,
}
