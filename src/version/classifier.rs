//! Path-based classification.
//!
//! The last segment of an install directory is read two ways:
//! - onto the tc Server [`VersionTag`] ladder, through its own marker table
//! - into a bundled [`TomcatVersion`], whose host ids drive the class
//!   loader jar decision
//!
//! The two tables are independent; a `tomcat-8` directory is a tc Server
//! 4.0 install even though the Tomcat runtime id it maps to ends in `80`.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::tag::VersionTag;
use super::tomcat::TomcatVersion;

/// Directory-name markers of the tag ladder, tested in this order.
const PATH_TAGS: [(&str, VersionTag); 4] = [
    ("tomcat-6", VersionTag::V2_5),
    ("tomcat-7", VersionTag::V3_0),
    ("tomcat-8", VersionTag::V4_0),
    ("tomcat-9", VersionTag::V5_0),
];

/// Everything the path axis says about an install directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub tomcat: TomcatVersion,
    pub server_id: String,
    pub runtime_id: String,
    pub tag: VersionTag,
    pub legacy_class_loader: bool,
}

/// Classify an install directory.
pub fn classify(path: &Path) -> Classification {
    let tomcat = TomcatVersion::from_install_path(path);
    let tag = classify_install_path(path);
    debug!("Classified {} as {} ({})", path.display(), tag, tomcat);

    Classification {
        tomcat,
        server_id: tomcat.server_id(),
        runtime_id: tomcat.runtime_id(),
        legacy_class_loader: tomcat.has_legacy_class_loader(),
        tag,
    }
}

/// Tag of an install directory.
///
/// Case-sensitive prefix match of the last segment against `tomcat-6` ..
/// `tomcat-9`; anything else, including a path with no last segment, is
/// [`VersionTag::NEWEST`].
pub fn classify_install_path(path: &Path) -> VersionTag {
    let Some(segment) = path.file_name().map(|s| s.to_string_lossy()) else {
        return VersionTag::NEWEST;
    };

    PATH_TAGS
        .iter()
        .find(|(marker, _)| segment.starts_with(marker))
        .map(|(_, tag)| *tag)
        .unwrap_or(VersionTag::NEWEST)
}

/// Host server-type id of the Tomcat line at `path`.
pub fn server_id_for_path(path: &Path) -> String {
    TomcatVersion::from_install_path(path).server_id()
}

/// Host runtime-type id of the Tomcat line at `path`.
pub fn runtime_id_for_path(path: &Path) -> String {
    TomcatVersion::from_install_path(path).runtime_id()
}
