//! Product runtime directory lookup.
//!
//! tc Server 4.0 and later unpack the product runtime (`tcserver`, `lib`,
//! `templates`, ...) into an edition-specific subdirectory of the install,
//! e.g. `developer-4.0.2.RELEASE`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Default edition prefixes of runtime directories.
pub const DEFAULT_RUNTIME_PREFIXES: [&str; 2] = ["developer-", "standard-"];

/// Resolves the product runtime directory under an install root.
pub trait RuntimeLocator: Send + Sync {
    fn runtime_path(&self, install_root: &Path) -> PathBuf;
}

/// Picks the lexically greatest subdirectory whose name starts with one of
/// the configured prefixes, or the install root itself when none does.
#[derive(Debug, Clone)]
pub struct PrefixRuntimeLocator {
    prefixes: Vec<String>,
}

impl Default for PrefixRuntimeLocator {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME_PREFIXES)
    }
}

impl PrefixRuntimeLocator {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    fn matches(&self, name: &str) -> bool {
        self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }
}

impl RuntimeLocator for PrefixRuntimeLocator {
    fn runtime_path(&self, install_root: &Path) -> PathBuf {
        let entries = match fs::read_dir(install_root) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot list {}: {}", install_root.display(), e);
                return install_root.to_path_buf();
            }
        };

        let newest = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| self.matches(name))
            .max();

        match newest {
            Some(name) => {
                debug!("Runtime directory of {}: {}", install_root.display(), name);
                install_root.join(name)
            }
            None => {
                warn!(
                    "No runtime directory under {}, using the install root",
                    install_root.display()
                );
                install_root.to_path_buf()
            }
        }
    }
}
