use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub words: WordsConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    /// Newline-delimited word list.
    pub path: PathBuf,
}

impl Default for WordsConfig {
    fn default() -> Self {
        WordsConfig {
            path: PathBuf::from("words.txt"),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Letter keys per keyboard row.
    pub letters_per_row: usize,
    /// Input poll timeout in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            letters_per_row: 4,
            tick_rate_ms: 100,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("Config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.words.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "words.path must not be empty".into(),
            ));
        }
        if self.ui.letters_per_row == 0 || self.ui.letters_per_row > 26 {
            return Err(ConfigError::Validation(
                "ui.letters_per_row must be in [1, 26]".into(),
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[ui]
letters_per_row = 6
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.letters_per_row, 6);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.words.path, PathBuf::from("words.txt"));
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.letters_per_row, 4);
        assert_eq!(config.words.path, PathBuf::from("words.txt"));
    }

    #[test]
    fn test_validation_rejects_zero_letters_per_row() {
        let mut config = AppConfig::default();
        config.ui.letters_per_row = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_too_many_letters_per_row() {
        let mut config = AppConfig::default();
        config.ui.letters_per_row = 27;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_tick_rate() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_word_path() {
        let mut config = AppConfig::default();
        config.words.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_hangman.toml")).unwrap();
        assert_eq!(config.ui.letters_per_row, 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hangman.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[words]
path = "animals.txt"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.words.path, PathBuf::from("animals.txt"));
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hangman.toml");
        std::fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hangman.toml");
        std::fs::write(&path, "[ui\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
