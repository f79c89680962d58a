//! tc Server version tags derived from runtime-type identifiers.

use std::fmt;

use serde::Serialize;

/// Identifier suffixes, tested in this order.
const ID_SUFFIXES: [(&str, VersionTag); 4] = [
    ("70", VersionTag::V2_5),
    ("80", VersionTag::V3_0),
    ("90", VersionTag::V4_0),
    ("101", VersionTag::V5_0),
];

/// tc Server release line.
///
/// Ordered oldest first. `Legacy` covers every runtime that does not carry
/// one of the known suffixes (tc Server 2.0/2.1 on Tomcat 6, and anything
/// unrecognised).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum VersionTag {
    Legacy,
    V2_5,
    V3_0,
    V4_0,
    V5_0,
}

impl VersionTag {
    /// The newest known tag.
    pub const NEWEST: VersionTag = VersionTag::V5_0;

    /// All tags, oldest first.
    pub const ALL: [VersionTag; 5] = [
        VersionTag::Legacy,
        VersionTag::V2_5,
        VersionTag::V3_0,
        VersionTag::V4_0,
        VersionTag::V5_0,
    ];

    /// Classify a runtime-type id by its exact trailing suffix.
    pub fn from_runtime_id(runtime_id: &str) -> Self {
        ID_SUFFIXES
            .iter()
            .find(|(suffix, _)| runtime_id.ends_with(suffix))
            .map(|(_, tag)| *tag)
            .unwrap_or(Self::Legacy)
    }

    /// Whether the release line supports Servlet 3.0.
    pub fn supports_servlet3(&self) -> bool {
        !matches!(self, Self::Legacy)
    }

    /// Whether the runtime is verified against the modern product layout
    /// under a derived runtime directory.
    pub fn uses_modern_layout(&self) -> bool {
        matches!(self, Self::V4_0 | Self::V5_0)
    }

    /// Release line as users write it.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::V2_5 => "2.5",
            Self::V3_0 => "3.0",
            Self::V4_0 => "4.0",
            Self::V5_0 => "5.0",
        }
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "tc Server (legacy)"),
            other => write!(f, "tc Server {}", other.label()),
        }
    }
}

/// A host runtime-type identifier.
///
/// The `is_version_*` predicates are independent exact-suffix checks; an
/// identifier that matches none of them is simply "not that version".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeType {
    id: String,
}

impl RuntimeType {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tag(&self) -> VersionTag {
        VersionTag::from_runtime_id(&self.id)
    }

    pub fn is_version_2_5(&self) -> bool {
        self.id.ends_with("70")
    }

    pub fn is_version_3_0(&self) -> bool {
        self.id.ends_with("80")
    }

    pub fn is_version_4_0(&self) -> bool {
        self.id.ends_with("90")
    }

    pub fn is_version_5_0(&self) -> bool {
        self.id.ends_with("101")
    }

    pub fn supports_servlet3(&self) -> bool {
        self.is_version_2_5()
            || self.is_version_3_0()
            || self.is_version_4_0()
            || self.is_version_5_0()
    }
}
