use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::traits::settings_store::SettingsStore;

#[derive(Serialize, Deserialize)]
struct StoredSettings {
    /// Volume on the internal 0-100 scale.
    volume: u8,
}

/// `SettingsStore` persisting the volume as a small JSON file.
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn write_volume(&self, level: u8) -> Result<(), String> {
        let json = serde_json::to_string_pretty(&StoredSettings { volume: level })
            .map_err(|e| format!("failed to serialize settings: {}", e))?;
        fs::write(&self.path, json).map_err(|e| format!("failed to write settings: {}", e))
    }

    fn read_volume(&self) -> Result<u8, String> {
        let json = fs::read_to_string(&self.path)
            .map_err(|e| format!("failed to read settings: {}", e))?;
        let settings: StoredSettings =
            serde_json::from_str(&json).map_err(|e| format!("failed to parse settings: {}", e))?;
        Ok(settings.volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_round_trip() {
        let path = std::env::temp_dir().join("audio_transport_test_settings.json");
        let store = JsonSettingsStore::new(&path);

        store.write_volume(70).unwrap();
        assert_eq!(store.read_volume().unwrap(), 70);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let store = JsonSettingsStore::new("/nonexistent/settings.json");
        assert!(store.read_volume().is_err());
    }
}
