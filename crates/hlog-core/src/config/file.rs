//! File and environment backed logger configuration

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::traits::ConfigResult;

/// Environment variable overriding `log_dir`
pub const ENV_LOG_DIR: &str = "HLOG_LOG_DIR";
/// Environment variable overriding `file_sink`
pub const ENV_FILE_SINK: &str = "HLOG_FILE_SINK";
/// Environment variable overriding `color`
pub const ENV_COLOR: &str = "HLOG_COLOR";
/// Any value disables color (<https://no-color.org>)
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Logger settings
///
/// # Example
///
/// ```no_run
/// use hlog_core::config::LoggerConfig;
///
/// let config = LoggerConfig::load().unwrap_or_default();
/// println!("log files go to {}", config.log_dir().display());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Directory the log file is created in (process working directory if unset)
    pub log_dir: Option<PathBuf>,

    /// Whether `initialize` opens a log file at all
    pub file_sink: bool,

    /// Whether console lines carry ANSI color codes
    pub color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            file_sink: true,
            color: true,
        }
    }
}

impl LoggerConfig {
    /// User-level config path (~/.config/hlog/config.yaml)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("hlog").join("config.yaml")
    }

    /// User-level file, then the process environment
    pub fn load() -> ConfigResult<Self> {
        Ok(Self::from_file(Self::user_path())?.with_env())
    }

    /// Read config from a file; a missing file yields the defaults
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            serde_json::from_str(&content)?
        } else if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(ENV_LOG_DIR).filter(|v| !v.is_empty()) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(enabled) = lookup(ENV_FILE_SINK).as_deref().and_then(parse_flag) {
            self.file_sink = enabled;
        }
        if let Some(enabled) = lookup(ENV_COLOR).as_deref().and_then(parse_flag) {
            self.color = enabled;
        }
        if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
        self
    }

    /// Directory the log file is created in
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Builder-style setter for `log_dir`
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Builder-style setter for `color`
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder-style setter for `file_sink`
    pub fn with_file_sink(mut self, file_sink: bool) -> Self {
        self.file_sink = file_sink;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert!(config.file_sink);
        assert!(config.color);
        assert_eq!(config.log_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig::from_file(dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_yaml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "log_dir: /var/log/app\ncolor: false\n").unwrap();

        let config = LoggerConfig::from_file(&path).unwrap();
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/app")));
        assert!(!config.color);
        // Unset fields keep their defaults
        assert!(config.file_sink);
    }

    #[test]
    fn test_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"file_sink": false}"#).unwrap();

        let config = LoggerConfig::from_file(&path).unwrap();
        assert!(!config.file_sink);
        assert!(config.color);
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "color: [not, a, bool]\n").unwrap();

        assert!(matches!(
            LoggerConfig::from_file(&path),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let config = LoggerConfig::default().with_overrides(lookup(&[
            (ENV_LOG_DIR, "/tmp/logs"),
            (ENV_FILE_SINK, "0"),
            (ENV_COLOR, "garbage"),
        ]));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/logs"));
        assert!(!config.file_sink);
        // Unparseable flags are ignored
        assert!(config.color);
    }

    #[test]
    fn test_no_color_wins() {
        let config = LoggerConfig::default()
            .with_overrides(lookup(&[(ENV_COLOR, "true"), (ENV_NO_COLOR, "1")]));
        assert!(!config.color);

        let config = LoggerConfig::default().with_overrides(lookup(&[(ENV_NO_COLOR, "")]));
        assert!(config.color);
    }
}
