//! Version classification.
//!
//! Two independent axes onto the same [`VersionTag`] ladder:
//! - the install directory name ([`classifier`]), which also names the
//!   bundled [`TomcatVersion`]
//! - the host runtime-type id ([`tag`])

pub mod classifier;
pub mod tag;
pub mod tomcat;

pub use classifier::{
    classify, classify_install_path, runtime_id_for_path, server_id_for_path, Classification,
};
pub use tag::{RuntimeType, VersionTag};
pub use tomcat::TomcatVersion;
