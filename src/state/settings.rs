/// Persisted UI settings
///
/// The settings document stores the user's save-directory choice and the
/// last-used filename prefix. It is serialized to JSON in the user's data
/// directory and loaded once at startup; a missing or unreadable file
/// falls back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Settings {
    /// Save directory override; `None` means the built-in default
    pub save_directory: Option<PathBuf>,

    /// Last-used filename prefix, restored into the prefix field
    pub prefix: String,
}

impl Settings {
    /// Load settings from the user data directory, or defaults
    pub fn load() -> Self {
        Self::load_from(&Self::settings_path())
    }

    /// Persist settings to the user data directory
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::settings_path())
    }

    /// Where the settings file lives:
    /// - Linux: ~/.local/share/cam-capture/settings.json
    /// - macOS: ~/Library/Application Support/cam-capture/settings.json
    /// - Windows: %APPDATA%\cam-capture\settings.json
    fn settings_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user data directory");

        path.push("cam-capture");
        path.push("settings.json");
        path
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("⚠️  Ignoring unreadable settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            // First run: no settings file yet
            Err(_) => Self::default(),
        }
    }

    fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create settings directory: {}", e))?;
        }

        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| format!("Failed to write settings: {}", e))
    }

    /// Convert to JSON string for storage
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize settings: {}", e))
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            save_directory: Some(PathBuf::from("/tmp/captures")),
            prefix: "bench_".to_string(),
        };

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();

        assert_eq!(settings, restored);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json"));

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            save_directory: None,
            prefix: "garden".to_string(),
        };

        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, b"{ not json").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
