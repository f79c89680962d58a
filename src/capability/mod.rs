//! Version-gated capabilities.
//!
//! - [`resolver`] - Pure queries: servlet 3.0 support, loader jar need, the
//!   accepted web module ladder
//! - [`loader`] - The loader jar install/remove command

pub mod loader;
pub mod resolver;

pub use loader::{
    ClassLoaderSync, LoaderSync, SyncRequest, CATALINA_PROPERTIES, COMMON_LOADER_KEY, LIB_DIR,
};
pub use resolver::{
    accepted_module_versions, can_accept, has_legacy_class_loader, CapabilityResolver,
    ModuleDescriptor, ModuleRule, TomcatModuleRule, WEB_MODULE_TYPE,
};
