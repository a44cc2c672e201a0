use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::core::CovgapConfig;
use super::ConfigError;

pub const CONFIG_FILE_NAME: &str = ".covgap.toml";

/// Directories searched upward from the working directory
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<CovgapConfig, ConfigError> {
    let config = toml::from_str::<CovgapConfig>(contents)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Try loading config from a discovered path; problems are logged, not fatal
fn try_load_config_from_path(config_path: &Path) -> Option<CovgapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Search `start` and its ancestors for `.covgap.toml`
pub fn discover_config(start: PathBuf) -> CovgapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CovgapConfig::default()
        })
}

/// Load configuration for a run.
///
/// An explicit path must exist and parse. Without one, the working
/// directory's ancestors are searched and failures fall back to defaults.
/// Environment overrides are applied last.
pub fn load_config(explicit: Option<&Path>) -> Result<CovgapConfig> {
    let mut config = match explicit {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            parse_and_validate_config(&contents)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        None => match std::env::current_dir() {
            Ok(dir) => discover_config(dir),
            Err(e) => {
                warn!("Failed to get current directory: {}. Using default config.", e);
                CovgapConfig::default()
            }
        },
    };

    config.apply_env_overrides(|key| std::env::var(key).ok());
    Ok(config)
}
