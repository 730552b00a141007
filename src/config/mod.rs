mod init;
mod schema;

pub use init::{default_config_template, write_default_config};
pub use schema::{Config, ThemeMode, DEFAULT_TICK_RATE_MS};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/colombia-geogame/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("colombia-geogame"))
}

/// Get the default config file path (~/.config/colombia-geogame/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional explicit path. If None, the default path is used and a
///   missing file there simply means defaults.
///
/// # Errors
///
/// Returns an error if:
/// - An explicit config path does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    // An all-comment file parses as null
    if config_content.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
        return Ok(Config::default());
    }

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref delay) = config.feedback_delay {
        if let Err(e) = humantime::parse_duration(delay.trim()) {
            errors.push(format!("feedback_delay: invalid duration '{}' - {}", delay, e));
        }
    }

    if config.tick_rate_ms == Some(0) {
        errors.push("tick_rate_ms: must be greater than zero".to_string());
    }

    if let Some(ref path) = config.data_path {
        if path.as_os_str().is_empty() {
            errors.push("data_path: must not be empty".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Difficulty, Mode};
    use std::time::Duration;

    fn parse(yaml: &str) -> Config {
        serde_saphyr::from_str(yaml).unwrap()
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            "data_path: /tmp/table.csv\nmode: iata-codes\ndifficulty: hard\nfeedback_delay: 2s\ntick_rate_ms: 100\ntheme: light\n",
        );
        assert_eq!(config.mode(), Mode::IataCodes);
        assert_eq!(config.difficulty(), Difficulty::Hard);
        assert_eq!(config.feedback_delay().unwrap(), Duration::from_secs(2));
        assert_eq!(config.tick_rate_ms(), 100);
        assert_eq!(config.theme(), ThemeMode::Light);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mode(), Mode::Departments);
        assert_eq!(config.difficulty(), Difficulty::Easy);
        assert_eq!(config.feedback_delay().unwrap(), Duration::from_secs(5));
        assert_eq!(config.tick_rate_ms(), DEFAULT_TICK_RATE_MS);
        assert_eq!(config.theme(), ThemeMode::Auto);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(serde_saphyr::from_str::<Config>("mode: volcanoes\n").is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = Config {
            feedback_delay: Some("soon".to_string()),
            tick_rate_ms: Some(0),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("feedback_delay"));
        assert!(errors[1].contains("tick_rate_ms"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_config.yaml");
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "mode: distance\nfeedback_delay: 750ms\n").unwrap();
        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.mode(), Mode::Distance);
        assert_eq!(config.feedback_delay().unwrap(), Duration::from_millis(750));
    }
}
