//! Configuration schema definitions for tcprobe.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::classpath::{DEFAULT_BOOTSTRAP_JAR, DEFAULT_LOGGING_JAR};
use crate::install::DEFAULT_RUNTIME_PREFIXES;

/// Root configuration structure for `.tcprobe.yml`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Archive names used when composing the runtime classpath
    pub classpath: ClasspathConfig,

    /// Prefixes of product runtime directories (tc Server 4.0 and later)
    pub runtime_dirs: Vec<String>,

    /// Directory holding the bundled `<runtime id>.loader.jar` files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader_jar_dir: Option<PathBuf>,

    /// Output settings
    pub settings: Settings,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            classpath: ClasspathConfig::default(),
            runtime_dirs: default_runtime_dirs(),
            loader_jar_dir: None,
            settings: Settings::default(),
        }
    }
}

/// Classpath archive names, relative to `bin/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClasspathConfig {
    pub bootstrap_jar: String,
    pub logging_jar: String,
}

impl Default for ClasspathConfig {
    fn default() -> Self {
        Self {
            bootstrap_jar: DEFAULT_BOOTSTRAP_JAR.to_string(),
            logging_jar: DEFAULT_LOGGING_JAR.to_string(),
        }
    }
}

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,
}

/// Output verbosity as written in config files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

fn default_runtime_dirs() -> Vec<String> {
    DEFAULT_RUNTIME_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect()
}
