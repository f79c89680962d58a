//! Installation validation.
//!
//! [`InstallValidator`] composes the version classifier with the layout
//! verifier. Version lines it has no layout for are delegated to a
//! [`BaseVerifier`] held by reference; the product runtime directory of
//! newer installs comes from a [`RuntimeLocator`].

pub mod base;
pub mod runtime_path;
pub mod validator;

pub use base::{BaseVerifier, TomcatBaseVerifier};
pub use runtime_path::{PrefixRuntimeLocator, RuntimeLocator, DEFAULT_RUNTIME_PREFIXES};
pub use validator::{InstallValidator, LEGACY_BASE_VERSION};
