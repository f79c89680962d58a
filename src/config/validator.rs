//! Configuration validation rules.
//!
//! - Classpath archive names must be plain, non-empty file names
//! - At least one runtime directory prefix must be configured

use crate::config::schema::ProbeConfig;
use crate::error::{ProbeError, Result};

/// A problem found in a configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all issues.
pub fn validate_config(config: &ProbeConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    for (field, value) in [
        ("classpath.bootstrap_jar", &config.classpath.bootstrap_jar),
        ("classpath.logging_jar", &config.classpath.logging_jar),
    ] {
        if value.trim().is_empty() {
            issues.push(ConfigIssue {
                rule: "empty-jar-name".to_string(),
                message: format!("'{}' must not be empty", field),
            });
        } else if value.contains('/') || value.contains('\\') {
            issues.push(ConfigIssue {
                rule: "jar-name-is-path".to_string(),
                message: format!("'{}' must be a file name, got '{}'", field, value),
            });
        }
    }

    if config.runtime_dirs.iter().all(|p| p.trim().is_empty()) {
        issues.push(ConfigIssue {
            rule: "no-runtime-dirs".to_string(),
            message: "'runtime_dirs' must list at least one prefix".to_string(),
        });
    }

    issues
}

/// Validate a configuration, failing on the first set of issues.
pub fn validate(config: &ProbeConfig) -> Result<()> {
    let issues = validate_config(config);

    if issues.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = issues.iter().map(|e| e.message.clone()).collect();
        Err(ProbeError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
