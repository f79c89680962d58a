//! Existence checks of a [`RequiredPathSpec`] against a root directory.

use std::path::Path;

use tracing::{debug, trace};

use super::result::{ValidationError, ValidationResult};
use super::spec::{alternates, RequiredPathSpec};

/// Check that every entry of `spec` exists under `root`.
///
/// Fails with [`ValidationError::RootNotFound`] when `root` is missing, and
/// otherwise with [`ValidationError::MissingResource`] naming the first
/// entry (in spec order) that has no existing alternate.
pub fn verify(spec: &RequiredPathSpec, root: &Path) -> ValidationResult {
    if !root.exists() {
        debug!("Install root {} does not exist", root.display());
        return Err(ValidationError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    for entry in spec.entries() {
        let present = alternates(entry).any(|alt| root.join(alt).exists());
        trace!(entry = %entry, present, "checked {}", root.display());
        if !present {
            debug!("Missing '{}' under {}", entry, root.display());
            return Err(ValidationError::MissingResource {
                root: root.to_path_buf(),
                entry: entry.clone(),
            });
        }
    }

    Ok(())
}
