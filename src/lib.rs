//! tcprobe - tc Server installation fingerprinting and compatibility checks.
//!
//! Classifies Tomcat-based tc Server installs into host server/runtime ids
//! and version tags, checks an install's directory layout, answers which web
//! module versions a runtime accepts, manages the class loader jar of older
//! instances and composes the runtime classpath.
//!
//! # Modules
//!
//! - [`version`] - Path and identifier classification
//! - [`layout`] - Required-path checks and validation errors
//! - [`install`] - Installation validation per version tag
//! - [`capability`] - Version-gated capabilities and the loader jar
//! - [`classpath`] - Runtime classpath composition
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use tcprobe::version::{classify, VersionTag};
//!
//! let c = classify(Path::new("/opt/vmware/tomcat-7.0.42.A.RELEASE"));
//! assert_eq!(c.runtime_id, "org.eclipse.jst.server.tomcat.runtime.70");
//! assert_eq!(c.tag, VersionTag::V3_0);
//! ```

pub mod capability;
pub mod classpath;
pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod layout;
pub mod ui;
pub mod version;

pub use error::{ProbeError, Result};
