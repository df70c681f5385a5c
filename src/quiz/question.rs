use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::quiz::difficulty::DifficultyKey;

pub const OPTION_COUNT: usize = 4;

/// One multiple-choice question. Field names follow the question file format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correct")]
    pub correct_index: usize,
}

impl QuestionRecord {
    pub fn new(prompt: &str, options: [&str; OPTION_COUNT], correct_index: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
        }
    }

    /// Check the record's shape. Returns a human-readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt is empty".to_string());
        }
        if self.options.len() != OPTION_COUNT {
            return Err(format!(
                "expected {OPTION_COUNT} options, found {}",
                self.options.len()
            ));
        }
        if self.correct_index >= self.options.len() {
            return Err(format!(
                "correct option {} is out of range",
                self.correct_index
            ));
        }
        Ok(())
    }
}

/// Loaded questions keyed by difficulty. Each list is shared, never copied,
/// by the sessions started from it.
#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    sets: HashMap<DifficultyKey, Arc<[QuestionRecord]>>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, difficulty: DifficultyKey, questions: Vec<QuestionRecord>) {
        self.sets.insert(difficulty, questions.into());
    }

    pub fn with_set(mut self, difficulty: DifficultyKey, questions: Vec<QuestionRecord>) -> Self {
        self.insert(difficulty, questions);
        self
    }

    pub fn questions(&self, difficulty: DifficultyKey) -> Option<&Arc<[QuestionRecord]>> {
        self.sets.get(&difficulty)
    }

    pub fn count(&self, difficulty: DifficultyKey) -> usize {
        self.sets.get(&difficulty).map_or(0, |q| q.len())
    }

    pub fn is_empty(&self) -> bool {
        self.sets.values().all(|q| q.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_file_field_names() {
        let json = r#"{"question": "2 + 2?", "options": ["1", "2", "3", "4"], "correct": 3}"#;
        let q: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(q.prompt, "2 + 2?");
        assert_eq!(q.correct_index, 3);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_option_count() {
        let mut q = QuestionRecord::new("q", ["a", "b", "c", "d"], 0);
        q.options.pop();
        let reason = q.validate().unwrap_err();
        assert!(reason.contains("expected 4 options"));
    }

    #[test]
    fn test_validate_rejects_correct_index_past_options() {
        let q = QuestionRecord::new("q", ["a", "b", "c", "d"], 4);
        assert!(q.validate().unwrap_err().contains("out of range"));
    }

    #[test]
    fn test_validate_rejects_blank_prompt() {
        let q = QuestionRecord::new("   ", ["a", "b", "c", "d"], 0);
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_bank_counts() {
        let bank = QuestionBank::new().with_set(
            DifficultyKey::Hard,
            vec![QuestionRecord::new("q", ["a", "b", "c", "d"], 0)],
        );
        assert_eq!(bank.count(DifficultyKey::Hard), 1);
        assert_eq!(bank.count(DifficultyKey::Easy), 0);
        assert!(bank.questions(DifficultyKey::Easy).is_none());
        assert!(!bank.is_empty());
        assert!(QuestionBank::new().is_empty());
    }
}
