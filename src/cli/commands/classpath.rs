//! Classpath command implementation.

use serde::Serialize;

use crate::classpath::{ClasspathComposer, ClasspathEntry, EntryKind};
use crate::cli::args::ClasspathArgs;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::print_json;

#[derive(Debug, Serialize)]
struct ClasspathReport<'a> {
    entries: &'a [ClasspathEntry],
}

/// The classpath command implementation.
pub struct ClasspathCommand {
    composer: ClasspathComposer,
    args: ClasspathArgs,
}

impl ClasspathCommand {
    pub fn new(config: &ProbeConfig, args: ClasspathArgs) -> Self {
        Self {
            composer: config.classpath_composer(),
            args,
        }
    }

    pub fn args(&self) -> &ClasspathArgs {
        &self.args
    }
}

impl Command for ClasspathCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let entries = self
            .composer
            .compose(&self.args.install, self.args.config_root.as_deref());

        if self.args.json {
            print_json(ui, &ClasspathReport { entries: &entries })?;
        } else if !entries.is_empty() {
            for entry in &entries {
                let label = match entry.kind {
                    EntryKind::Bootstrap => "bootstrap",
                    EntryKind::Logging => "logging",
                };
                ui.key_value(label, &entry.path.display().to_string());
            }
        }

        if entries.is_empty() {
            ui.error(&format!(
                "No bin directory under {}",
                self.args.install.display()
            ));
            return Ok(CommandResult::failure(1));
        }

        let has_logging = entries.iter().any(|e| e.kind == EntryKind::Logging);
        if !has_logging && ui.output_mode().shows_details() {
            ui.warning("No logging jar found; classpath has the bootstrap jar only");
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn args(install: &Path, config_root: Option<&Path>, json: bool) -> ClasspathArgs {
        ClasspathArgs {
            install: install.to_path_buf(),
            config_root: config_root.map(PathBuf::from),
            json,
        }
    }

    fn with_bin(root: &Path, files: &[&str]) {
        fs::create_dir_all(root.join("bin")).unwrap();
        for file in files {
            fs::write(root.join("bin").join(file), "").unwrap();
        }
    }

    #[test]
    fn lists_entries_in_order() {
        let install = TempDir::new().unwrap();
        let instance = TempDir::new().unwrap();
        with_bin(install.path(), &["bootstrap.jar"]);
        with_bin(instance.path(), &["tomcat-juli.jar"]);

        let cmd = ClasspathCommand::new(
            &ProbeConfig::default(),
            args(install.path(), Some(instance.path()), false),
        );
        let mut ui = MockUI::new();
        assert!(cmd.execute(&mut ui).unwrap().success);

        let labels: Vec<_> = ui.key_values().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(labels, vec!["bootstrap", "logging"]);
        assert_eq!(
            ui.value_of("logging"),
            Some(
                instance
                    .path()
                    .join("bin/tomcat-juli.jar")
                    .display()
                    .to_string()
                    .as_str()
            )
        );
    }

    #[test]
    fn missing_bin_fails() {
        let install = TempDir::new().unwrap();
        let cmd = ClasspathCommand::new(&ProbeConfig::default(), args(install.path(), None, false));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(ui.key_values().is_empty());
        assert_eq!(ui.errors().len(), 1);
    }

    #[test]
    fn json_lists_kinds() {
        let install = TempDir::new().unwrap();
        with_bin(install.path(), &["bootstrap.jar", "tomcat-juli.jar"]);

        let cmd = ClasspathCommand::new(&ProbeConfig::default(), args(install.path(), None, true));
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.payloads()[0]).unwrap();
        assert_eq!(value["entries"][0]["kind"], "bootstrap");
        assert_eq!(value["entries"][1]["kind"], "logging");
    }

    #[test]
    fn verbose_warns_without_logging_jar() {
        let install = TempDir::new().unwrap();
        with_bin(install.path(), &["bootstrap.jar"]);

        let cmd = ClasspathCommand::new(&ProbeConfig::default(), args(install.path(), None, false));
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        assert!(cmd.execute(&mut ui).unwrap().success);
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn configured_jar_names() {
        let install = TempDir::new().unwrap();
        with_bin(install.path(), &["juli.jar"]);

        let mut config = ProbeConfig::default();
        config.classpath.logging_jar = "juli.jar".to_string();
        let cmd = ClasspathCommand::new(&config, args(install.path(), None, false));
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        assert!(ui.value_of("logging").unwrap().ends_with("juli.jar"));
    }
}
