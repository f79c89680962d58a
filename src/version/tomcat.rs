//! Tomcat versions as seen from an install directory.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Host server-type id prefix, e.g. `org.eclipse.jst.server.tomcat.80`.
pub const SERVER_ID_PREFIX: &str = "org.eclipse.jst.server.tomcat.";

/// Host runtime-type id prefix, e.g. `org.eclipse.jst.server.tomcat.runtime.80`.
pub const RUNTIME_ID_PREFIX: &str = "org.eclipse.jst.server.tomcat.runtime.";

/// Directory-name markers, tested in this order.
const PATH_MARKERS: [(&str, TomcatVersion); 4] = [
    ("tomcat-6", TomcatVersion::Tomcat60),
    ("tomcat-7", TomcatVersion::Tomcat70),
    ("tomcat-8", TomcatVersion::Tomcat80),
    ("tomcat-9", TomcatVersion::Tomcat90),
];

/// A Tomcat release line bundled with a tc Server install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TomcatVersion {
    Tomcat60,
    Tomcat70,
    Tomcat80,
    Tomcat90,
    Tomcat101,
}

impl TomcatVersion {
    /// The newest known release line; unmatched directories resolve to it.
    pub const NEWEST: TomcatVersion = TomcatVersion::Tomcat101;

    /// All versions, oldest first.
    pub const ALL: [TomcatVersion; 5] = [
        TomcatVersion::Tomcat60,
        TomcatVersion::Tomcat70,
        TomcatVersion::Tomcat80,
        TomcatVersion::Tomcat90,
        TomcatVersion::Tomcat101,
    ];

    /// Classify from the last segment of an install path.
    ///
    /// Case-sensitive prefix match against `tomcat-6` .. `tomcat-9`; anything
    /// else, including a path with no last segment, is [`Self::NEWEST`].
    pub fn from_install_path(path: &Path) -> Self {
        let Some(segment) = path.file_name().map(|s| s.to_string_lossy()) else {
            return Self::NEWEST;
        };

        PATH_MARKERS
            .iter()
            .find(|(marker, _)| segment.starts_with(marker))
            .map(|(_, version)| *version)
            .unwrap_or(Self::NEWEST)
    }

    /// Trailing token of the host ids, e.g. `"80"`.
    pub fn id_suffix(&self) -> &'static str {
        match self {
            Self::Tomcat60 => "60",
            Self::Tomcat70 => "70",
            Self::Tomcat80 => "80",
            Self::Tomcat90 => "90",
            Self::Tomcat101 => "101",
        }
    }

    /// Release line as users write it, e.g. `"8.0"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tomcat60 => "6.0",
            Self::Tomcat70 => "7.0",
            Self::Tomcat80 => "8.0",
            Self::Tomcat90 => "9.0",
            Self::Tomcat101 => "10.1",
        }
    }

    /// Major version number.
    pub fn major(&self) -> u32 {
        match self {
            Self::Tomcat60 => 6,
            Self::Tomcat70 => 7,
            Self::Tomcat80 => 8,
            Self::Tomcat90 => 9,
            Self::Tomcat101 => 10,
        }
    }

    /// Host server-type id.
    pub fn server_id(&self) -> String {
        format!("{}{}", SERVER_ID_PREFIX, self.id_suffix())
    }

    /// Host runtime-type id.
    pub fn runtime_id(&self) -> String {
        format!("{}{}", RUNTIME_ID_PREFIX, self.id_suffix())
    }

    /// Whether this line needs the class loader compatibility jar to serve
    /// modules without publishing.
    pub fn has_legacy_class_loader(&self) -> bool {
        crate::capability::has_legacy_class_loader(&self.runtime_id())
    }
}

impl fmt::Display for TomcatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tomcat {}", self.label())
    }
}
