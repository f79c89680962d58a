//! Bootstrap classpath of a server install.
//!
//! The bootstrap jar always comes first. The logging jar follows when the
//! install ships one; tc Server 2.1 keeps it in the instance directory
//! instead, and releases before 6.0.20.C do not need it at all.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

pub const DEFAULT_BOOTSTRAP_JAR: &str = "bootstrap.jar";
pub const DEFAULT_LOGGING_JAR: &str = "tomcat-juli.jar";

const BIN_DIR: &str = "bin";

/// Role of a classpath archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Bootstrap,
    Logging,
}

/// One archive on the runtime classpath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClasspathEntry {
    pub kind: EntryKind,
    pub path: PathBuf,
}

impl ClasspathEntry {
    fn new(kind: EntryKind, path: PathBuf) -> Self {
        Self { kind, path }
    }
}

/// Builds the ordered runtime classpath.
#[derive(Debug, Clone)]
pub struct ClasspathComposer {
    bootstrap_jar: String,
    logging_jar: String,
}

impl Default for ClasspathComposer {
    fn default() -> Self {
        Self::new(DEFAULT_BOOTSTRAP_JAR, DEFAULT_LOGGING_JAR)
    }
}

impl ClasspathComposer {
    pub fn new(bootstrap_jar: impl Into<String>, logging_jar: impl Into<String>) -> Self {
        Self {
            bootstrap_jar: bootstrap_jar.into(),
            logging_jar: logging_jar.into(),
        }
    }

    /// Classpath for `install_root`, looking for the logging jar in
    /// `config_root` when the install does not have it.
    ///
    /// Empty when the install has no `bin` directory.
    pub fn compose(&self, install_root: &Path, config_root: Option<&Path>) -> Vec<ClasspathEntry> {
        let bin = install_root.join(BIN_DIR);
        if !bin.exists() {
            debug!("No {} under {}", BIN_DIR, install_root.display());
            return Vec::new();
        }

        let mut entries = vec![ClasspathEntry::new(
            EntryKind::Bootstrap,
            bin.join(&self.bootstrap_jar),
        )];

        let logging = std::iter::once(install_root)
            .chain(config_root)
            .map(|root| root.join(BIN_DIR).join(&self.logging_jar))
            .find(|path| path.exists());

        match logging {
            Some(path) => entries.push(ClasspathEntry::new(EntryKind::Logging, path)),
            None => debug!("No {} found, leaving it off the classpath", self.logging_jar),
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn with_bin(root: &Path, files: &[&str]) {
        fs::create_dir_all(root.join("bin")).unwrap();
        for file in files {
            fs::write(root.join("bin").join(file), "").unwrap();
        }
    }

    #[test]
    fn no_bin_is_empty() {
        let temp = TempDir::new().unwrap();
        let composer = ClasspathComposer::default();
        assert!(composer.compose(temp.path(), None).is_empty());
        assert!(composer
            .compose(&temp.path().join("missing"), Some(temp.path()))
            .is_empty());
    }

    #[test]
    fn bootstrap_only() {
        let temp = TempDir::new().unwrap();
        with_bin(temp.path(), &["bootstrap.jar"]);

        let cp = ClasspathComposer::default().compose(temp.path(), None);
        assert_eq!(
            cp,
            vec![ClasspathEntry::new(
                EntryKind::Bootstrap,
                temp.path().join("bin/bootstrap.jar")
            )]
        );
    }

    #[test]
    fn bootstrap_listed_even_when_absent() {
        let temp = TempDir::new().unwrap();
        with_bin(temp.path(), &[]);
        let cp = ClasspathComposer::default().compose(temp.path(), None);
        assert_eq!(cp.len(), 1);
        assert_eq!(cp[0].kind, EntryKind::Bootstrap);
    }

    #[test]
    fn logging_jar_from_install() {
        let temp = TempDir::new().unwrap();
        with_bin(temp.path(), &["bootstrap.jar", "tomcat-juli.jar"]);

        let cp = ClasspathComposer::default().compose(temp.path(), None);
        let kinds: Vec<_> = cp.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EntryKind::Bootstrap, EntryKind::Logging]);
        assert_eq!(cp[1].path, temp.path().join("bin/tomcat-juli.jar"));
    }

    #[test]
    fn install_logging_jar_wins_over_config() {
        let install = TempDir::new().unwrap();
        let config = TempDir::new().unwrap();
        with_bin(install.path(), &["bootstrap.jar", "tomcat-juli.jar"]);
        with_bin(config.path(), &["tomcat-juli.jar"]);

        let cp = ClasspathComposer::default().compose(install.path(), Some(config.path()));
        assert_eq!(cp.len(), 2);
        assert_eq!(cp[1].path, install.path().join("bin/tomcat-juli.jar"));
    }

    #[test]
    fn logging_jar_from_config_root() {
        let install = TempDir::new().unwrap();
        let config = TempDir::new().unwrap();
        with_bin(install.path(), &["bootstrap.jar"]);
        with_bin(config.path(), &["tomcat-juli.jar"]);

        let cp = ClasspathComposer::default().compose(install.path(), Some(config.path()));
        assert_eq!(cp.len(), 2);
        assert_eq!(cp[1].path, config.path().join("bin/tomcat-juli.jar"));
    }

    #[test]
    fn logging_jar_omitted_when_nowhere() {
        let install = TempDir::new().unwrap();
        let config = TempDir::new().unwrap();
        with_bin(install.path(), &["bootstrap.jar"]);

        let cp = ClasspathComposer::default().compose(install.path(), Some(config.path()));
        assert_eq!(cp.len(), 1);
    }

    #[test]
    fn custom_jar_names() {
        let temp = TempDir::new().unwrap();
        with_bin(temp.path(), &["boot.jar", "juli.jar"]);

        let cp = ClasspathComposer::new("boot.jar", "juli.jar").compose(temp.path(), None);
        assert_eq!(cp[0].path, temp.path().join("bin/boot.jar"));
        assert_eq!(cp[1].path, temp.path().join("bin/juli.jar"));
    }
}
