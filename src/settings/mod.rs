// src/settings/mod.rs
use std::collections::BTreeMap;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use crate::errors::RunnerError;

pub const PLAYER_NAME_KEY: &str = "PlayerName";

const SETTINGS_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct SettingsFileData {
    version: u32,
    data: BTreeMap<String, String>,
    checksum: String,
    timestamp: u64,
}

/// String-keyed persisted settings. The file is a versioned bincode record
/// with a checksum so a truncated or hand-edited file is rejected instead of
/// silently read back wrong.
pub struct SettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    /// Opens the store at `path`, loading existing values if the file exists.
    pub fn open(path: PathBuf) -> Result<Self, RunnerError> {
        let mut store = Self::fresh(path);
        store.load_from_disk()?;
        Ok(store)
    }

    /// An empty store that will write to `path`, ignoring anything on disk.
    pub fn fresh(path: PathBuf) -> Self {
        Self {
            path,
            values: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    pub fn save_to_disk(&self) -> Result<(), RunnerError> {
        let file_data = SettingsFileData {
            version: SETTINGS_VERSION,
            data: self.values.clone(),
            checksum: calculate_checksum(&self.values)?,
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        };

        let serialized = bincode::serialize(&file_data)
            .map_err(|e| RunnerError::SettingsError(format!("Failed to serialize settings: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serialized)?;

        log::info!("Settings written to: {}", self.path.display());
        Ok(())
    }

    fn load_from_disk(&mut self) -> Result<(), RunnerError> {
        if !self.path.exists() {
            log::info!("No existing settings file at: {}", self.path.display());
            return Ok(());
        }

        let raw = std::fs::read(&self.path)?;
        let file_data: SettingsFileData = bincode::deserialize(&raw)
            .map_err(|e| RunnerError::SettingsError(format!("Failed to deserialize settings: {}", e)))?;

        if file_data.version != SETTINGS_VERSION {
            return Err(RunnerError::SettingsError(format!(
                "Unsupported settings version: {}",
                file_data.version
            )));
        }

        let expected = calculate_checksum(&file_data.data)?;
        if file_data.checksum != expected {
            return Err(RunnerError::SettingsError(
                "Settings checksum mismatch - file may be corrupted".to_string(),
            ));
        }

        self.values = file_data.data;
        log::info!("Settings loaded from: {}", self.path.display());
        Ok(())
    }
}

fn calculate_checksum(data: &BTreeMap<String, String>) -> Result<String, RunnerError> {
    let serialized = bincode::serialize(data)
        .map_err(|e| RunnerError::SettingsError(format!("Failed to serialize for checksum: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(&serialized);
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lanedash_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn values_round_trip_through_disk() {
        let path = temp_path("roundtrip.dat");
        let _ = std::fs::remove_file(&path);

        let mut store = SettingsStore::open(path.clone()).unwrap();
        assert_eq!(store.get(PLAYER_NAME_KEY), None);

        store.set(PLAYER_NAME_KEY, "Runner".to_string());
        store.save_to_disk().unwrap();

        let reopened = SettingsStore::open(path.clone()).unwrap();
        assert_eq!(reopened.get(PLAYER_NAME_KEY), Some("Runner"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn corrupted_file_is_rejected() {
        let path = temp_path("corrupt.dat");
        std::fs::write(&path, b"not a settings file").unwrap();

        assert!(SettingsStore::open(path.clone()).is_err());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let path = temp_path("overwrite.dat");
        let _ = std::fs::remove_file(&path);

        let mut store = SettingsStore::open(path).unwrap();
        store.set(PLAYER_NAME_KEY, "First".to_string());
        store.set(PLAYER_NAME_KEY, "Second".to_string());
        assert_eq!(store.get(PLAYER_NAME_KEY), Some("Second"));
    }
}
