//! Configuration loading, parsing, and validation for tcprobe.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use tcprobe::config::{parse_config, validate};
//! use std::path::Path;
//!
//! let config = parse_config("runtime_dirs: [developer-]", Path::new("inline.yml")).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.classpath.logging_jar, "tomcat-juli.jar");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config, ConfigPaths, PROJECT_CONFIG};
pub use schema::{ClasspathConfig, OutputMode, ProbeConfig, Settings};
pub use validator::{validate, validate_config, ConfigIssue};

use crate::capability::ClassLoaderSync;
use crate::classpath::ClasspathComposer;
use crate::install::PrefixRuntimeLocator;

impl ProbeConfig {
    /// Classpath composer with the configured archive names.
    pub fn classpath_composer(&self) -> ClasspathComposer {
        ClasspathComposer::new(
            self.classpath.bootstrap_jar.clone(),
            self.classpath.logging_jar.clone(),
        )
    }

    /// Runtime locator with the configured prefixes.
    pub fn runtime_locator(&self) -> PrefixRuntimeLocator {
        PrefixRuntimeLocator::new(self.runtime_dirs.iter().cloned())
    }

    /// Loader jar sync, if a loader jar directory is configured.
    pub fn class_loader_sync(&self) -> Option<ClassLoaderSync> {
        self.loader_jar_dir.as_ref().map(ClassLoaderSync::new)
    }
}
