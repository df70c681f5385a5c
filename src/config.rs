use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const LANGUAGES: &[&str] = &["en", "pt-BR"];
const MAX_DELAY_MS: u64 = 10_000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions_url: Option<String>,
    #[serde(default = "default_reveal_correct_ms")]
    pub reveal_correct_ms: u64,
    #[serde(default = "default_reveal_next_ms")]
    pub reveal_next_ms: u64,
    #[serde(default = "default_summary_delay_ms")]
    pub summary_delay_ms: u64,
    #[serde(default = "default_error_display_ms")]
    pub error_display_ms: u64,
    #[serde(default = "default_celebration_threshold")]
    pub celebration_threshold: u8,
}

fn default_theme() -> String {
    crate::ui::theme::DEFAULT_THEME.to_string()
}
fn default_language() -> String {
    "en".to_string()
}
fn default_reveal_correct_ms() -> u64 {
    600
}
fn default_reveal_next_ms() -> u64 {
    1500
}
fn default_summary_delay_ms() -> u64 {
    1000
}
fn default_error_display_ms() -> u64 {
    3000
}
fn default_celebration_threshold() -> u8 {
    70
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            language: default_language(),
            questions_path: None,
            questions_url: None,
            reveal_correct_ms: default_reveal_correct_ms(),
            reveal_next_ms: default_reveal_next_ms(),
            summary_delay_ms: default_summary_delay_ms(),
            error_display_ms: default_error_display_ms(),
            celebration_threshold: default_celebration_threshold(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quizr")
            .join("config.toml")
    }

    /// Clamp out-of-range values and reset unknown languages.
    pub fn validate(&mut self) {
        self.reveal_correct_ms = self.reveal_correct_ms.min(MAX_DELAY_MS);
        self.reveal_next_ms = self.reveal_next_ms.min(MAX_DELAY_MS);
        self.summary_delay_ms = self.summary_delay_ms.min(MAX_DELAY_MS);
        self.error_display_ms = self.error_display_ms.min(MAX_DELAY_MS);
        self.celebration_threshold = self.celebration_threshold.min(100);
        if !LANGUAGES.contains(&self.language.as_str()) {
            self.language = default_language();
        }
    }

    pub fn timings(&self) -> Timings {
        Timings {
            reveal_correct: Duration::from_millis(self.reveal_correct_ms),
            reveal_next: Duration::from_millis(self.reveal_next_ms),
            summary_delay: Duration::from_millis(self.summary_delay_ms),
            celebration_threshold: self.celebration_threshold,
        }
    }

    pub fn error_display(&self) -> Duration {
        Duration::from_millis(self.error_display_ms)
    }
}

/// Delays the quiz view applies to its reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    pub reveal_correct: Duration,
    pub reveal_next: Duration,
    pub summary_delay: Duration,
    pub celebration_threshold: u8,
}

impl Default for Timings {
    fn default() -> Self {
        Config::default().timings()
    }
}
