use std::fmt;
use std::fs;
use std::path::PathBuf;

use rust_embed::Embed;
use tracing::{info, warn};

use crate::quiz::difficulty::DifficultyKey;
use crate::quiz::error::LoadError;
use crate::quiz::question::QuestionBank;
use crate::store::schema::QuestionFile;

#[derive(Embed)]
#[folder = "assets/questions/"]
struct QuestionAssets;

pub const BUNDLED_FILE: &str = "questions.json";

/// Where the question file is read from. Read once per run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionSource {
    Bundled,
    File(PathBuf),
    Url(String),
}

impl QuestionSource {
    /// A URL wins over a path; with neither, the bundled file is used.
    pub fn resolve(url: Option<&str>, path: Option<&str>) -> Self {
        let non_empty = |s: &&str| !s.trim().is_empty();
        if let Some(url) = url.filter(non_empty) {
            QuestionSource::Url(url.to_string())
        } else if let Some(path) = path.filter(non_empty) {
            QuestionSource::File(PathBuf::from(path))
        } else {
            QuestionSource::Bundled
        }
    }

    pub fn load(&self) -> Result<QuestionBank, LoadError> {
        let bytes = match self {
            QuestionSource::Bundled => QuestionAssets::get(BUNDLED_FILE)
                .map(|file| file.data.into_owned())
                .ok_or(LoadError::MissingAsset(BUNDLED_FILE))?,
            QuestionSource::File(path) => fs::read(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?,
            QuestionSource::Url(url) => fetch(url)?,
        };
        let bank = parse_bank(&bytes)?;
        info!(
            source = %self,
            easy = bank.count(DifficultyKey::Easy),
            intermediate = bank.count(DifficultyKey::Intermediate),
            hard = bank.count(DifficultyKey::Hard),
            "questions loaded"
        );
        Ok(bank)
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::Bundled => write!(f, "bundled {BUNDLED_FILE}"),
            QuestionSource::File(path) => write!(f, "{}", path.display()),
            QuestionSource::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(feature = "network")]
fn fetch(url: &str) -> Result<Vec<u8>, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

#[cfg(not(feature = "network"))]
fn fetch(_url: &str) -> Result<Vec<u8>, LoadError> {
    Err(LoadError::NetworkDisabled)
}

/// Parse and validate a question file. Unknown difficulty keys are skipped;
/// any malformed question rejects the whole file.
pub fn parse_bank(bytes: &[u8]) -> Result<QuestionBank, LoadError> {
    let file: QuestionFile = serde_json::from_slice(bytes)?;
    let mut bank = QuestionBank::new();

    for (key, set) in file.difficulty {
        let Some(difficulty) = DifficultyKey::from_key(&key) else {
            warn!(key = %key, "ignoring unknown difficulty in question file");
            continue;
        };
        for (i, question) in set.questions.iter().enumerate() {
            question
                .validate()
                .map_err(|reason| LoadError::InvalidQuestion {
                    difficulty,
                    number: i + 1,
                    reason,
                })?;
        }
        bank.insert(difficulty, set.questions);
    }

    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SMALL: &str = r#"{
        "difficulty": {
            "easy": { "questions": [
                { "question": "1 + 1?", "options": ["1", "2", "3", "4"], "correct": 1 }
            ] },
            "hard": { "questions": [] }
        }
    }"#;

    #[test]
    fn test_bundled_file_has_every_difficulty() {
        let bank = QuestionSource::Bundled.load().unwrap();
        for d in DifficultyKey::ALL {
            assert!(bank.count(d) > 0, "{d} has no bundled questions");
        }
    }

    #[test]
    fn test_parse_small_file() {
        let bank = parse_bank(SMALL.as_bytes()).unwrap();
        assert_eq!(bank.count(DifficultyKey::Easy), 1);
        assert_eq!(bank.count(DifficultyKey::Hard), 0);
        assert!(bank.questions(DifficultyKey::Hard).is_some());
        assert!(bank.questions(DifficultyKey::Intermediate).is_none());
        let q = &bank.questions(DifficultyKey::Easy).unwrap()[0];
        assert_eq!(q.options[q.correct_index], "2");
    }

    #[test]
    fn test_unknown_difficulty_is_skipped() {
        let json = r#"{"difficulty": {"legendary": {"questions": []},
            "easy": {"questions": [{"question": "q", "options": ["a","b","c","d"], "correct": 0}]}}}"#;
        let bank = parse_bank(json.as_bytes()).unwrap();
        assert_eq!(bank.count(DifficultyKey::Easy), 1);
    }

    #[test]
    fn test_invalid_question_names_its_position() {
        let json = r#"{"difficulty": {"intermediate": {"questions": [
            {"question": "ok", "options": ["a","b","c","d"], "correct": 0},
            {"question": "bad", "options": ["a","b","c"], "correct": 0}
        ]}}}"#;
        let err = parse_bank(json.as_bytes()).unwrap_err();
        match err {
            LoadError::InvalidQuestion {
                difficulty, number, ..
            } => {
                assert_eq!(difficulty, DifficultyKey::Intermediate);
                assert_eq!(number, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_bank(b"{\"difficulty\": [").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_file_source_reads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(&path, SMALL).unwrap();
        let bank = QuestionSource::File(path).load().unwrap();
        assert_eq!(bank.count(DifficultyKey::Easy), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");
        let err = QuestionSource::File(path.clone()).load().unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_resolve_order() {
        assert_eq!(
            QuestionSource::resolve(Some("http://x/q.json"), Some("/tmp/q.json")),
            QuestionSource::Url("http://x/q.json".to_string())
        );
        assert_eq!(
            QuestionSource::resolve(None, Some("/tmp/q.json")),
            QuestionSource::File(PathBuf::from("/tmp/q.json"))
        );
        assert_eq!(
            QuestionSource::resolve(Some("  "), None),
            QuestionSource::Bundled
        );
    }
}
