//! Required path specs.

use serde::Serialize;

/// Layout of tc Server 2.5 and 3.0 runtimes.
pub const LEGACY_LAYOUT: &str = "tcruntime-ctl.sh,lib,templates";

/// Layout of the product runtime directory in tc Server 4.0 and later.
pub const MODERN_LAYOUT: &str = "lib,templates,tcserver,tcserver.bat";

/// Marker directory of tc Server 2.0 style installs.
pub const MARKER_LAYOUT: &str = "tijars";

/// Ordered set of relative paths an installation must contain.
///
/// An entry may name alternates separated by `|`; it is satisfied when any
/// of them exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredPathSpec {
    entries: Vec<String>,
}

impl RequiredPathSpec {
    /// Create a spec from entries, in the order they should be checked.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the comma-separated form, e.g. `"lib,templates"`.
    ///
    /// Whitespace around entries is ignored, as are empty entries.
    pub fn parse(spec: &str) -> Self {
        Self::new(
            spec.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty()),
        )
    }

    /// `tcruntime-ctl.sh`, `lib`, `templates`.
    pub fn legacy() -> Self {
        Self::parse(LEGACY_LAYOUT)
    }

    /// `lib`, `templates`, `tcserver`, `tcserver.bat`.
    pub fn modern() -> Self {
        Self::parse(MODERN_LAYOUT)
    }

    /// `tijars`.
    pub fn marker() -> Self {
        Self::parse(MARKER_LAYOUT)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split an entry into its alternates.
pub(crate) fn alternates(entry: &str) -> impl Iterator<Item = &str> {
    entry.split('|').map(str::trim).filter(|alt| !alt.is_empty())
}
