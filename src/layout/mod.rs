//! Installation layout checks.
//!
//! A [`RequiredPathSpec`] lists the relative paths an installation must
//! contain; [`verify`] checks them against a root directory and reports the
//! first one that is missing.
//!
//! # Modules
//!
//! - [`result`] - [`ValidationError`] and the [`ValidationResult`] alias
//! - [`spec`] - Required path specs and the built-in layouts
//! - [`verifier`] - Existence checks against a root directory

pub mod result;
pub mod spec;
pub mod verifier;

pub use result::{ValidationError, ValidationResult};
pub use spec::RequiredPathSpec;
pub use verifier::verify;
