//! Configuration loading and source resolution

use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

/// Environment variable naming the CSV source (path or URL)
pub const SOURCE_ENV_VAR: &str = "CELLAR_SOURCE";
/// Environment variable naming the listen port
pub const PORT_ENV_VAR: &str = "CELLAR_PORT";

/// Compiled default CSV source, relative to the working directory
pub const DEFAULT_SOURCE: &str = "data/wines.csv";
/// Compiled default listen port
pub const DEFAULT_PORT: u16 = 5741;

/// Optional settings read from the TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// CSV source: filesystem path or http(s) URL
    pub source: Option<String>,
    /// Listen port
    pub port: Option<u16>,
}

/// Resolve the CSV source following priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. Compiled default (fallback)
pub fn resolve_source(cli_arg: Option<&str>) -> String {
    if let Some(source) = cli_arg {
        return source.to_string();
    }

    if let Ok(source) = std::env::var(SOURCE_ENV_VAR) {
        return source;
    }

    if let Some(source) = load_config_file().source {
        return source;
    }

    DEFAULT_SOURCE.to_string()
}

/// Resolve the listen port with the same priority order as [`resolve_source`]
pub fn resolve_port(cli_arg: Option<u16>) -> u16 {
    if let Some(port) = cli_arg {
        return port;
    }

    if let Ok(raw) = std::env::var(PORT_ENV_VAR) {
        match raw.parse::<u16>() {
            Ok(port) => return port,
            Err(_) => warn!("Ignoring non-numeric {}={}", PORT_ENV_VAR, raw),
        }
    }

    if let Some(port) = load_config_file().port {
        return port;
    }

    DEFAULT_PORT
}

/// Load the TOML config file if one exists.
///
/// A missing or unreadable config file is not an error: the service starts
/// on defaults with a warning, never terminates over configuration.
fn load_config_file() -> TomlConfig {
    let Some(path) = config_file_path() else {
        return TomlConfig::default();
    };

    let Ok(content) = std::fs::read_to_string(&path) else {
        return TomlConfig::default();
    };

    match toml::from_str::<TomlConfig>(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring malformed config file {}: {}", path.display(), e);
            TomlConfig::default()
        }
    }
}

/// Platform config file location: `<config dir>/cellar/config.toml`, with
/// `/etc/cellar/config.toml` as a system-wide fallback on Linux
fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = dirs::config_dir().map(|d| d.join("cellar").join("config.toml")) {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/cellar/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}
