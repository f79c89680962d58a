//! Generic Tomcat install verification.
//!
//! This is the check a plain Tomcat install has to pass. The installation
//! validator falls back to it for tc Server runtimes it has no layout for.

use std::path::Path;

use tracing::debug;

use crate::layout::{verify, RequiredPathSpec, ValidationError, ValidationResult};
use crate::version::TomcatVersion;

/// Files every supported Tomcat line ships with.
const TOMCAT_INSTALL_LAYOUT: &str = "conf,lib,bin/bootstrap.jar,bin/tomcat-juli.jar";

/// Verifier for a base Tomcat version.
pub trait BaseVerifier: Send + Sync {
    /// Check that the directory name does not contradict `expected`.
    fn verify_version_from_path(&self, root: &Path, expected: TomcatVersion) -> ValidationResult;

    /// Check the install layout of `version` under `root`.
    fn verify_install_path(&self, root: &Path, version: TomcatVersion) -> ValidationResult;
}

/// Default [`BaseVerifier`] working from the directory name and layout.
#[derive(Debug, Clone, Default)]
pub struct TomcatBaseVerifier;

impl TomcatBaseVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Required layout for a Tomcat line.
    pub fn install_spec(_version: TomcatVersion) -> RequiredPathSpec {
        RequiredPathSpec::parse(TOMCAT_INSTALL_LAYOUT)
    }
}

impl BaseVerifier for TomcatBaseVerifier {
    fn verify_version_from_path(&self, root: &Path, expected: TomcatVersion) -> ValidationResult {
        if !root.exists() {
            return Err(ValidationError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let Some(segment) = root.file_name().map(|s| s.to_string_lossy()) else {
            return Ok(());
        };

        match major_from_segment(&segment) {
            Some(found) if found != expected.major() => {
                debug!(
                    "Directory {} names Tomcat {}, expected {}",
                    root.display(),
                    found,
                    expected.major()
                );
                Err(ValidationError::WrongBaseVersion {
                    path: root.to_path_buf(),
                    expected: expected.label().to_string(),
                    found: found.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    fn verify_install_path(&self, root: &Path, version: TomcatVersion) -> ValidationResult {
        verify(&Self::install_spec(version), root)
    }
}

/// Major version from a `tomcat-<major>` token anywhere in a directory name.
///
/// Case-insensitive; `None` when the name carries no such token.
fn major_from_segment(segment: &str) -> Option<u32> {
    let lower = segment.to_ascii_lowercase();
    let (_, rest) = lower.split_once("tomcat-")?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
