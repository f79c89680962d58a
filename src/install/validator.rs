//! Installation validation.
//!
//! Picks the required layout for the runtime's [`VersionTag`] and checks it
//! against a candidate install root:
//!
//! 1. tc Server 2.5 / 3.0: the legacy layout, directly under the root.
//! 2. tc Server 4.0 / 5.0: the modern layout, under the product runtime
//!    directory resolved by a [`RuntimeLocator`].
//! 3. Anything else: the generic Tomcat 6.0 checks of a [`BaseVerifier`];
//!    an install that fails the layout check is still accepted when it
//!    carries the `tijars` marker. If it does not, the generic failure is
//!    reported, not the marker's.

use std::path::Path;

use tracing::{debug, warn};

use super::base::BaseVerifier;
use super::runtime_path::RuntimeLocator;
use crate::layout::{verify, RequiredPathSpec, ValidationResult};
use crate::version::{classify_install_path, RuntimeType, TomcatVersion, VersionTag};

/// Base Tomcat line of legacy tc Server runtimes.
pub const LEGACY_BASE_VERSION: TomcatVersion = TomcatVersion::Tomcat60;

/// Validates candidate install roots for one tc Server line.
pub struct InstallValidator<'a> {
    tag: VersionTag,
    base: &'a dyn BaseVerifier,
    locator: &'a dyn RuntimeLocator,
}

impl<'a> InstallValidator<'a> {
    /// Validator for a host runtime-type id.
    pub fn new(
        runtime_id: impl Into<String>,
        base: &'a dyn BaseVerifier,
        locator: &'a dyn RuntimeLocator,
    ) -> Self {
        Self::for_tag(RuntimeType::new(runtime_id).tag(), base, locator)
    }

    pub fn for_tag(
        tag: VersionTag,
        base: &'a dyn BaseVerifier,
        locator: &'a dyn RuntimeLocator,
    ) -> Self {
        Self { tag, base, locator }
    }

    /// Validator for the tc Server line implied by an install directory name.
    pub fn for_install_path(
        path: &Path,
        base: &'a dyn BaseVerifier,
        locator: &'a dyn RuntimeLocator,
    ) -> Self {
        Self::for_tag(classify_install_path(path), base, locator)
    }

    pub fn tag(&self) -> VersionTag {
        self.tag
    }

    /// Check that `root` is a valid install for this runtime type.
    pub fn validate_install(&self, root: &Path) -> ValidationResult {
        let tag = self.tag;
        debug!("Validating {} as {}", root.display(), tag);

        match tag {
            VersionTag::V2_5 | VersionTag::V3_0 => verify(&RequiredPathSpec::legacy(), root),
            VersionTag::V4_0 | VersionTag::V5_0 => {
                let runtime_root = self.locator.runtime_path(root);
                verify(&RequiredPathSpec::modern(), &runtime_root)
            }
            VersionTag::Legacy => self.validate_legacy(root),
        }
    }

    fn validate_legacy(&self, root: &Path) -> ValidationResult {
        self.base.verify_version_from_path(root, LEGACY_BASE_VERSION)?;

        let Err(base_err) = self.base.verify_install_path(root, LEGACY_BASE_VERSION) else {
            return Ok(());
        };

        match verify(&RequiredPathSpec::marker(), root) {
            Ok(()) => {
                warn!(
                    "{} is not a {} layout ({}), accepting marker layout",
                    root.display(),
                    LEGACY_BASE_VERSION,
                    base_err
                );
                Ok(())
            }
            Err(marker_err) => {
                debug!("Marker layout also missing: {}", marker_err);
                Err(base_err)
            }
        }
    }
}
