//! Settings file (YAML)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Contents of the settings file; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// `keychain` (default) or `memory`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_store: Option<String>,
    /// `ssh-keygen` (default) or `memory`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_pair_provider: Option<String>,
    /// Encryption key id for stacks that do not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_id: Option<String>,
    /// Keychain namespace, "stax" by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keychain_service: Option<String>,
    /// Where `ssh-keygen` keeps public keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_pair_dir: Option<PathBuf>,
    /// `ssh-keygen -t` value, "ed25519" by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
}

impl Settings {
    pub fn from_yaml(path: &Path, content: &str) -> ConfigResult<Self> {
        // an empty file parses as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Location of a settings file
///
/// ```no_run
/// use stax_core::config::SettingsFile;
///
/// let settings = SettingsFile::user().load().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// User-level settings (`<config dir>/stax/config.yaml`)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("stax").join("config.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the file; a missing file yields default settings
    pub fn load(&self) -> ConfigResult<Settings> {
        if !self.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        Settings::from_yaml(&self.path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let file = SettingsFile::new(dir.path().join("config.yaml"));
        assert!(!file.exists());
        assert_eq!(file.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_load_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "parameter_store: memory\nkey_pair_provider: memory\nkms_id: alias/stax\n",
        )
        .unwrap();

        let settings = SettingsFile::new(&path).load().unwrap();
        assert_eq!(settings.parameter_store.as_deref(), Some("memory"));
        assert_eq!(settings.key_pair_provider.as_deref(), Some("memory"));
        assert_eq!(settings.kms_id.as_deref(), Some("alias/stax"));
        assert!(settings.key_pair_dir.is_none());
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(SettingsFile::new(&path).load().unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "kms_id: [unterminated\n").unwrap();
        assert!(matches!(SettingsFile::new(&path).load(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_user_path() {
        let file = SettingsFile::user();
        assert!(file.path().ends_with("stax/config.yaml"));
    }
}
