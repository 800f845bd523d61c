//! Client configuration and the optional `~/.adsbdb/config.yaml` file.
//!
//! The file holds a single `api:` section with `base_url`, `timeout_secs`
//! and `user_agent`. Missing keys keep their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::types::AdsbdbError;

/// Production endpoint of the adsbdb API.
pub const DEFAULT_BASE_URL: &str = "https://api.adsbdb.com/v0";

/// Settings fixed at client construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Per-request timeout. `None` leaves the transport's default in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: None,
            user_agent: concat!("adsbdb-rs/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Get the config directory path (`~/.adsbdb/`).
pub fn config_dir() -> PathBuf {
    dirs_home().join(".adsbdb")
}

/// Get the config file path.
pub fn config_file() -> PathBuf {
    config_dir().join("config.yaml")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Load config from `~/.adsbdb/config.yaml`.
///
/// Returns default config if the file doesn't exist or can't be read.
pub fn load_config() -> ClientConfig {
    let path = config_file();
    if !path.exists() {
        return ClientConfig::default();
    }
    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring {}: {}", path.display(), e);
            ClientConfig::default()
        }
    }
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<ClientConfig, AdsbdbError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AdsbdbError::Config(format!("{}: {e}", path.display())))?;
    Ok(parse_config(&text))
}

/// Save config to `~/.adsbdb/config.yaml`.
pub fn save_config(config: &ClientConfig) -> Result<PathBuf, AdsbdbError> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir).map_err(|e| AdsbdbError::Config(e.to_string()))?;

    let path = config_file();
    save_config_to(config, &path)?;
    Ok(path)
}

/// Save config to an explicit path.
pub fn save_config_to(config: &ClientConfig, path: &Path) -> Result<(), AdsbdbError> {
    std::fs::write(path, serialize_config(config)).map_err(|e| AdsbdbError::Config(e.to_string()))
}

/// Parse the YAML-like config text. Unknown keys and sections are skipped.
fn parse_config(text: &str) -> ClientConfig {
    let mut config = ClientConfig::default();
    let mut current_section: Option<String> = None;

    for line in text.lines() {
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        let is_indented = line.starts_with("  ") || line.starts_with('\t');

        let Some((key, val)) = stripped.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let val = val.trim();

        if !is_indented {
            current_section = val.is_empty().then(|| key.to_string());
            continue;
        }

        if current_section.as_deref() != Some("api") {
            continue;
        }
        match key {
            "base_url" => {
                if let Some(v) = parse_string_value(val) {
                    config = config.with_base_url(v);
                }
            }
            "timeout_secs" => {
                if let Some(timeout) = parse_float_value(val).and_then(parse_timeout) {
                    config.timeout = Some(timeout);
                }
            }
            "user_agent" => {
                if let Some(v) = parse_string_value(val) {
                    config.user_agent = v;
                }
            }
            _ => {}
        }
    }

    config
}

fn parse_string_value(val: &str) -> Option<String> {
    if val == "null" || val == "~" || val.is_empty() {
        return None;
    }
    // Strip quotes
    if val.len() >= 2
        && ((val.starts_with('"') && val.ends_with('"'))
            || (val.starts_with('\'') && val.ends_with('\'')))
    {
        return Some(val[1..val.len() - 1].to_string());
    }
    Some(val.to_string())
}

fn parse_float_value(val: &str) -> Option<f64> {
    if val == "null" || val == "~" || val.is_empty() {
        return None;
    }
    val.parse().ok()
}

/// Positive, finite, representable number of seconds as a timeout.
pub fn parse_timeout(secs: f64) -> Option<Duration> {
    if secs <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(secs).ok()
}

/// Serialize config to YAML-like text.
fn serialize_config(config: &ClientConfig) -> String {
    let mut lines = vec!["# adsbdb configuration".to_string(), String::new()];

    lines.push("api:".into());
    lines.push(format!("  base_url: \"{}\"", config.base_url));
    match config.timeout {
        Some(t) => lines.push(format!("  timeout_secs: {}", t.as_secs_f64())),
        None => lines.push("  timeout_secs: null".into()),
    }
    lines.push(format!("  user_agent: \"{}\"", config.user_agent));

    lines.join("\n") + "\n"
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
