//! Optional TOML settings for the binary

use tracing_subscriber::EnvFilter;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Config file read when `CONNECT4_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "connect4.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_VAR: &str = "CONNECT4_CONFIG";

/// Filter used when neither `RUST_LOG` nor the config file gives a usable one
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for the first-mover coin flip; OS entropy when absent
    pub seed: Option<u64>,
    /// Highlight discs and turn labels with ANSI colours
    pub colour: bool,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            colour: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// The config path: `$CONNECT4_CONFIG`, else [`DEFAULT_CONFIG_PATH`]
    pub fn path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// A missing file is not an error
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Never fails: an unreadable or invalid file yields the defaults along
    /// with the error, so the caller can log it once logging is up
    pub fn load_or_fallback(path: &Path) -> (Self, Option<ConfigError>) {
        match Self::load_or_default(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log_filter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// `RUST_LOG` first, then `log_filter`, then [`DEFAULT_LOG_FILTER`]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("seed = 12\ncolour = false\n").unwrap();
        assert_eq!(config.seed, Some(12));
        assert!(!config.colour);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn empty_log_filter_is_rejected() {
        let err = Config::parse("log_filter = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = Config::parse("seed = \"twelve\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn broken_file_falls_back_to_defaults_with_error() {
        let path = std::env::temp_dir().join(format!(
            "connect4-broken-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "colour = \"sometimes\"\n").unwrap();

        let (config, err) = Config::load_or_fallback(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(matches!(err, Some(ConfigError::TomlParse(_))));
    }

    #[test]
    fn good_file_loads_without_error() {
        let path = std::env::temp_dir().join(format!(
            "connect4-good-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "seed = 3\n").unwrap();

        let (config, err) = Config::load_or_fallback(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.seed, Some(3));
        assert!(err.is_none());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = Path::new("definitely/not/a/real/connect4.toml");
        assert_eq!(Config::load_or_default(path).unwrap(), Config::default());
        assert!(matches!(
            Config::load(path),
            Err(ConfigError::FileRead { .. })
        ));
    }
}
