//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lexi/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::answer::responder::DEFAULT_RESPONSE_DELAY_MS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LexiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Simulated processing latency in milliseconds.
    pub response_delay_ms: Option<u64>,
    /// Log file path (relative paths resolve against the working directory).
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "lexi.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub response_delay_ms: u64,
    pub log_file: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lexi/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lexi").join("config.toml"))
}

/// Load config from `~/.lexi/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LexiConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LexiConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LexiConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LexiConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LexiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Lexi Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# response_delay_ms = 1500    # Simulated processing latency
# log_file = "lexi.log"       # Or set LEXI_LOG_FILE env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI.
///
/// `cli_delay_ms` is the `--delay-ms` flag (None = not specified).
pub fn resolve(config: &LexiConfig, cli_delay_ms: Option<u64>) -> ResolvedConfig {
    // Delay: CLI → env → config → default
    let response_delay_ms = cli_delay_ms
        .or_else(|| parse_env_delay("LEXI_RESPONSE_DELAY_MS"))
        .or(config.general.response_delay_ms)
        .unwrap_or(DEFAULT_RESPONSE_DELAY_MS);

    // Log file: env → config → default
    let log_file = std::env::var("LEXI_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        response_delay_ms,
        log_file,
    }
}

/// Reads a millisecond value from the environment, warning on garbage
/// rather than failing startup.
fn parse_env_delay(var: &str) -> Option<u64> {
    let raw = std::env::var(var).ok()?;
    match raw.parse() {
        Ok(ms) => Some(ms),
        Err(_) => {
            warn!("Ignoring non-numeric {}={:?}", var, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = LexiConfig::default();
        assert!(config.general.response_delay_ms.is_none());
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = LexiConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.response_delay_ms, DEFAULT_RESPONSE_DELAY_MS);
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = LexiConfig {
            general: GeneralConfig {
                response_delay_ms: Some(250),
                log_file: Some("custom.log".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.response_delay_ms, 250);
        assert_eq!(resolved.log_file, "custom.log");
    }

    #[test]
    fn test_resolve_cli_delay_wins() {
        let config = LexiConfig {
            general: GeneralConfig {
                response_delay_ms: Some(250),
                log_file: None,
            },
        };
        let resolved = resolve(&config, Some(10));
        assert_eq!(resolved.response_delay_ms, 10);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
response_delay_ms = 500
"#;
        let config: LexiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.response_delay_ms, Some(500));
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: LexiConfig = toml::from_str("").unwrap();
        assert!(config.general.response_delay_ms.is_none());
    }
}
