//! User settings persisted as TOML in the platform config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fss_submit::{ClientSettings, ENDPOINT_ENV_VAR};

/// Settings file contents.
///
/// A missing or unparsable file yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation service connection.
    pub simulation: ClientSettings,

    /// Export destinations.
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory `--export` falls back to when given no value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Program receiving the file on `--share`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_command: Option<String>,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring unparsable settings file");
                Self::default()
            }
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {e}"))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "FactorySimulationStudio", "FSS")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Apply the endpoint overrides: flag, then environment, then file.
    #[must_use]
    pub fn with_endpoint_override(mut self, flag: Option<&str>, env: Option<String>) -> Self {
        if let Some(endpoint) = flag.map(str::to_string).or(env) {
            self.simulation.endpoint = endpoint;
        }
        self
    }

    /// [`Settings::with_endpoint_override`] reading the process environment.
    #[must_use]
    pub fn resolve(self, flag: Option<&str>) -> Self {
        let env = std::env::var(ENDPOINT_ENV_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty());
        self.with_endpoint_override(flag, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.simulation.endpoint, "http://localhost:8000");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[simulation]\nendpoint = \"https://sim.example.com\"\n\n[export]\nshare_command = \"xdg-open\"\n",
        )
        .unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.simulation.endpoint, "https://sim.example.com");
        assert_eq!(settings.simulation.timeout_secs, 60);
        assert_eq!(settings.export.share_command.as_deref(), Some("xdg-open"));
        assert_eq!(settings.export.output_dir, None);
    }

    #[test]
    fn test_unparsable_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "simulation = [").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let mut settings = Settings::default();
        settings.export.output_dir = Some(PathBuf::from("/tmp/exports"));
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_endpoint_precedence() {
        let flag = Settings::default()
            .with_endpoint_override(Some("http://flag"), Some("http://env".to_string()));
        assert_eq!(flag.simulation.endpoint, "http://flag");

        let env = Settings::default().with_endpoint_override(None, Some("http://env".to_string()));
        assert_eq!(env.simulation.endpoint, "http://env");

        let file = Settings::default().with_endpoint_override(None, None);
        assert_eq!(file.simulation.endpoint, "http://localhost:8000");
    }
}
