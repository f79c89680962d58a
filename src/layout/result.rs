//! Validation outcome types.
//!
//! Every check in this crate reports through [`ValidationResult`]: either
//! `Ok(())` or a single [`ValidationError`] carrying a human-readable reason
//! and, where there is one, the offending path. Failures are never
//! aggregated.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Outcome of an installation, module or loader check.
pub type ValidationResult<T = ()> = std::result::Result<T, ValidationError>;

/// Why a check failed.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The installation root itself does not exist.
    #[error("The installation directory does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// A required resource is missing under an existing root.
    #[error("Missing required resource '{entry}' in {}", root.display())]
    MissingResource { root: PathBuf, entry: String },

    /// The directory name names a different Tomcat major than expected.
    #[error(
        "{} appears to contain Tomcat {found}, expected Tomcat {expected}",
        path.display()
    )]
    WrongBaseVersion {
        path: PathBuf,
        expected: String,
        found: String,
    },

    /// The server does not accept web modules of this version.
    #[error("{server} does not support web module version {version}")]
    UnsupportedModule { version: String, server: String },

    /// The server only accepts web modules.
    #[error("Module type '{module_type}' is not a web module")]
    NotWebModule { module_type: String },

    /// Installing or removing the class loader jar failed.
    #[error("Failed to {action} {}: {source}", path.display())]
    SideEffectFailure {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ValidationError {
    /// The path this failure is about, if any.
    ///
    /// For a missing resource this is the resolved location that was
    /// checked (the first alternate when an entry lists several).
    pub fn path(&self) -> Option<PathBuf> {
        match self {
            Self::RootNotFound { path }
            | Self::WrongBaseVersion { path, .. }
            | Self::SideEffectFailure { path, .. } => Some(path.clone()),
            Self::MissingResource { root, entry } => {
                let first = entry.split('|').next().unwrap_or(entry);
                Some(root.join(first))
            }
            Self::UnsupportedModule { .. } | Self::NotWebModule { .. } => None,
        }
    }

    /// Whether the failure came from the filesystem rather than a layout or
    /// compatibility rule.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::SideEffectFailure { .. })
    }

    pub(crate) fn side_effect(
        action: &'static str,
        path: &Path,
        source: std::io::Error,
    ) -> Self {
        Self::SideEffectFailure {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}
