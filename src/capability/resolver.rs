//! Version-gated capability queries.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::{ValidationError, ValidationResult};
use crate::version::{runtime_id_for_path, RuntimeType, TomcatVersion, VersionTag};

/// Module type id of web modules.
pub const WEB_MODULE_TYPE: &str = "jst.web";

const V2_5_MODULES: &[&str] = &["2.2", "2.3", "2.4", "2.5", "3.0"];
const V3_0_MODULES: &[&str] = &["2.2", "2.3", "2.4", "2.5", "3.0", "3.1"];
const V4_0_MODULES: &[&str] = &["2.2", "2.3", "2.4", "2.5", "3.0", "3.1", "4.0"];
const V5_0_MODULES: &[&str] = &[
    "2.2", "2.3", "2.4", "2.5", "3.0", "3.1", "4.0", "5.0", "6.0",
];

/// Trailing id tokens of Tomcat lines that need the loader jar.
const LEGACY_LOADER_MARKERS: [&str; 4] = ["50", "55", "60", "70"];

/// Web module versions a tc Server line accepts.
///
/// `None` for [`VersionTag::Legacy`]; the host's generic rule decides there.
pub fn accepted_module_versions(tag: VersionTag) -> Option<&'static [&'static str]> {
    match tag {
        VersionTag::Legacy => None,
        VersionTag::V2_5 => Some(V2_5_MODULES),
        VersionTag::V3_0 => Some(V3_0_MODULES),
        VersionTag::V4_0 => Some(V4_0_MODULES),
        VersionTag::V5_0 => Some(V5_0_MODULES),
    }
}

/// Whether `tag` accepts web modules of `version`.
pub fn can_accept(tag: VersionTag, version: &str) -> bool {
    accepted_module_versions(tag).is_some_and(|versions| versions.contains(&version))
}

/// Whether a Tomcat runtime needs the class loader compatibility jar.
///
/// Looks at the token after the last `.` of the Tomcat runtime id, as
/// derived by [`runtime_id_for_path`]. A tc Server runtime-type id says
/// nothing about the Tomcat line it runs on.
pub fn has_legacy_class_loader(runtime_id: &str) -> bool {
    match runtime_id.rsplit_once('.') {
        Some((_, token)) if !token.is_empty() => LEGACY_LOADER_MARKERS
            .iter()
            .any(|marker| token.starts_with(marker)),
        _ => false,
    }
}

/// A deployable module, as far as compatibility checks care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub module_type: String,
    pub version: String,
}

impl ModuleDescriptor {
    pub fn new(module_type: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            module_type: module_type.into(),
            version: version.into(),
        }
    }

    /// A `jst.web` module of the given spec version.
    pub fn web(version: impl Into<String>) -> Self {
        Self::new(WEB_MODULE_TYPE, version)
    }

    pub fn is_web(&self) -> bool {
        self.module_type == WEB_MODULE_TYPE
    }
}

/// The host's rule for runtimes without a tc Server ladder.
pub trait ModuleRule: Send + Sync {
    fn can_add_module(&self, module: &ModuleDescriptor) -> ValidationResult;
}

/// Plain Tomcat rule: web modules up to the servlet spec of the line.
#[derive(Debug, Clone)]
pub struct TomcatModuleRule {
    version: TomcatVersion,
}

impl Default for TomcatModuleRule {
    fn default() -> Self {
        Self::new(TomcatVersion::Tomcat60)
    }
}

impl TomcatModuleRule {
    pub fn new(version: TomcatVersion) -> Self {
        Self { version }
    }

    /// Web module versions this Tomcat line accepts.
    pub fn accepted(&self) -> &'static [&'static str] {
        match self.version {
            TomcatVersion::Tomcat60 => &["2.2", "2.3", "2.4", "2.5"],
            TomcatVersion::Tomcat70 => V2_5_MODULES,
            TomcatVersion::Tomcat80 => V3_0_MODULES,
            TomcatVersion::Tomcat90 => V4_0_MODULES,
            TomcatVersion::Tomcat101 => V5_0_MODULES,
        }
    }
}

impl ModuleRule for TomcatModuleRule {
    fn can_add_module(&self, module: &ModuleDescriptor) -> ValidationResult {
        if !module.is_web() {
            return Err(ValidationError::NotWebModule {
                module_type: module.module_type.clone(),
            });
        }
        if self.accepted().contains(&module.version.as_str()) {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedModule {
                version: module.version.clone(),
                server: self.version.to_string(),
            })
        }
    }
}

/// Capability answers for one runtime type.
pub struct CapabilityResolver<'a> {
    runtime: RuntimeType,
    tomcat_runtime_id: Option<String>,
    fallback: &'a dyn ModuleRule,
}

impl<'a> CapabilityResolver<'a> {
    pub fn new(runtime_id: impl Into<String>, fallback: &'a dyn ModuleRule) -> Self {
        Self {
            runtime: RuntimeType::new(runtime_id),
            tomcat_runtime_id: None,
            fallback,
        }
    }

    /// Take the loader jar answer from the Tomcat install at `location`.
    pub fn with_tomcat_location(mut self, location: &Path) -> Self {
        self.tomcat_runtime_id = Some(runtime_id_for_path(location));
        self
    }

    /// Tomcat runtime id the loader jar decision is made for.
    ///
    /// Without a Tomcat location the runtime id itself is used, which is
    /// right for plain Tomcat runtimes.
    pub fn tomcat_runtime_id(&self) -> &str {
        self.tomcat_runtime_id
            .as_deref()
            .unwrap_or_else(|| self.runtime.id())
    }

    pub fn tag(&self) -> VersionTag {
        self.runtime.tag()
    }

    pub fn supports_servlet3(&self) -> bool {
        self.runtime.supports_servlet3()
    }

    pub fn has_legacy_class_loader(&self) -> bool {
        has_legacy_class_loader(self.tomcat_runtime_id())
    }

    pub fn accepted_module_versions(&self) -> Option<&'static [&'static str]> {
        accepted_module_versions(self.tag())
    }

    /// Whether a web module of `version` can be added.
    pub fn can_accept(&self, version: &str) -> bool {
        match self.accepted_module_versions() {
            Some(versions) => versions.contains(&version),
            None => self
                .fallback
                .can_add_module(&ModuleDescriptor::web(version))
                .is_ok(),
        }
    }

    /// Decide whether `module` can be added to this runtime.
    ///
    /// tc Server lines check the version ladder only; anything the ladder
    /// does not accept, and every legacy runtime, goes to the host rule.
    pub fn can_add_module(&self, module: &ModuleDescriptor) -> ValidationResult {
        let tag = self.tag();
        if can_accept(tag, &module.version) {
            return Ok(());
        }
        debug!(
            "{} module {} not on the {} ladder, asking host rule",
            module.module_type, module.version, tag
        );
        self.fallback.can_add_module(module).map_err(|err| match err {
            ValidationError::UnsupportedModule { version, .. } if tag != VersionTag::Legacy => {
                ValidationError::UnsupportedModule {
                    version,
                    server: tag.to_string(),
                }
            }
            other => other,
        })
    }
}
