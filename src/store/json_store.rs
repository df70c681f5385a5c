use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::quiz::difficulty::DifficultyKey;
use crate::store::schema::SessionData;

const SESSION_FILE: &str = "session.json";

/// Small JSON key-value store under the user's data directory.
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(Self::default_dir())
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quizr")
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    fn load<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let path = self.file_path(name);
        if !path.exists() {
            return T::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "discarding unreadable store file");
                T::default()
            }),
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read store file");
                T::default()
            }
        }
    }

    fn save<T: Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let path = self.file_path(name);
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(data)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    pub fn load_session(&self) -> SessionData {
        self.load(SESSION_FILE)
    }

    pub fn save_session(&self, data: &SessionData) -> Result<()> {
        self.save(SESSION_FILE, data)
    }

    /// Last chosen difficulty, `easy` when nothing has been stored yet.
    pub fn selected_difficulty(&self) -> DifficultyKey {
        self.load_session().selected_difficulty.unwrap_or_default()
    }

    pub fn set_selected_difficulty(&self, difficulty: DifficultyKey) -> Result<()> {
        let mut data = self.load_session();
        data.selected_difficulty = Some(difficulty);
        self.save_session(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::schema::SCHEMA_VERSION;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_absent_key_defaults_to_easy() {
        let (_dir, store) = make_test_store();
        assert!(!store.file_path(SESSION_FILE).exists());
        assert_eq!(store.selected_difficulty(), DifficultyKey::Easy);
    }

    #[test]
    fn test_selected_difficulty_round_trip() {
        let (_dir, store) = make_test_store();
        store
            .set_selected_difficulty(DifficultyKey::Intermediate)
            .unwrap();
        assert_eq!(store.selected_difficulty(), DifficultyKey::Intermediate);

        store.set_selected_difficulty(DifficultyKey::Hard).unwrap();
        let data = store.load_session();
        assert_eq!(data.selected_difficulty, Some(DifficultyKey::Hard));
        assert_eq!(data.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn test_value_survives_a_new_store_instance() {
        let (dir, store) = make_test_store();
        store.set_selected_difficulty(DifficultyKey::Hard).unwrap();
        drop(store);

        let reopened = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.selected_difficulty(), DifficultyKey::Hard);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_easy() {
        let (_dir, store) = make_test_store();
        fs::write(store.file_path(SESSION_FILE), "{not json").unwrap();
        assert_eq!(store.selected_difficulty(), DifficultyKey::Easy);
    }

    #[test]
    fn test_unknown_difficulty_value_falls_back_to_easy() {
        let (_dir, store) = make_test_store();
        fs::write(
            store.file_path(SESSION_FILE),
            r#"{"schema_version": 1, "selected_difficulty": "medium"}"#,
        )
        .unwrap();
        assert_eq!(store.selected_difficulty(), DifficultyKey::Easy);
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let (dir, store) = make_test_store();
        store.set_selected_difficulty(DifficultyKey::Easy).unwrap();
        let tmp_files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(tmp_files.is_empty(), "no residual .tmp files");
    }
}
