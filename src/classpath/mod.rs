//! Runtime classpath composition.

pub mod composer;

pub use composer::{
    ClasspathComposer, ClasspathEntry, EntryKind, DEFAULT_BOOTSTRAP_JAR, DEFAULT_LOGGING_JAR,
};
