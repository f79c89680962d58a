//! Configuration file discovery and loading.
//!
//! The first existing file wins:
//! 1. An explicit path (`--config`)
//! 2. Project config (`./.tcprobe.yml`)
//! 3. User global config (`~/.tcprobe/config.yml`)
//!
//! With none of them present the built-in defaults apply.

use crate::config::schema::ProbeConfig;
use crate::config::validator::validate;
use crate::error::{ProbeError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project config file name.
pub const PROJECT_CONFIG: &str = ".tcprobe.yml";

/// Candidate config files in priority order.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Path given on the command line; must exist if set
    pub explicit: Option<PathBuf>,

    /// Project config: ./.tcprobe.yml
    pub project: Option<PathBuf>,

    /// User's global config: ~/.tcprobe/config.yml
    pub user_global: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files relative to `working_dir`.
    pub fn discover(working_dir: &Path, explicit: Option<&Path>) -> Self {
        Self {
            explicit: explicit.map(Path::to_path_buf),
            project: Self::find_project_config(working_dir),
            user_global: Self::find_user_global(),
        }
    }

    /// Find project config at ./.tcprobe.yml
    fn find_project_config(working_dir: &Path) -> Option<PathBuf> {
        let path = working_dir.join(PROJECT_CONFIG);
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Find user's global config at ~/.tcprobe/config.yml
    fn find_user_global() -> Option<PathBuf> {
        let path = dirs::home_dir()?.join(".tcprobe").join("config.yml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// The file that should be loaded, if any.
    pub fn selected(&self) -> Option<&PathBuf> {
        self.explicit
            .as_ref()
            .or(self.project.as_ref())
            .or(self.user_global.as_ref())
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ProbeConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProbeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProbeError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ProbeConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProbeConfig> {
    if content.trim().is_empty() {
        return Ok(ProbeConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ProbeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Discover, load and validate the effective configuration.
pub fn load_config(working_dir: &Path, explicit: Option<&Path>) -> Result<ProbeConfig> {
    let paths = ConfigPaths::discover(working_dir, explicit);

    let config = match paths.selected() {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => {
            debug!("No config file found, using defaults");
            ProbeConfig::default()
        }
    };

    validate(&config)?;
    Ok(config)
}
