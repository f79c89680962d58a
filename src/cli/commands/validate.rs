//! Validate command implementation.
//!
//! `tcprobe validate <PATH>` runs the installation validator against a
//! candidate install root.

use crate::cli::args::ValidateArgs;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::install::{InstallValidator, PrefixRuntimeLocator, RuntimeLocator, TomcatBaseVerifier};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    locator: PrefixRuntimeLocator,
    args: ValidateArgs,
}

impl ValidateCommand {
    pub fn new(config: &ProbeConfig, args: ValidateArgs) -> Self {
        Self {
            locator: config.runtime_locator(),
            args,
        }
    }

    pub fn args(&self) -> &ValidateArgs {
        &self.args
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = &self.args.path;
        let base = TomcatBaseVerifier::new();
        let validator = match &self.args.runtime_id {
            Some(id) => InstallValidator::new(id.as_str(), &base, &self.locator),
            None => InstallValidator::for_install_path(path, &base, &self.locator),
        };
        let tag = validator.tag();

        ui.show_header(&format!("Validating {} as {}", path.display(), tag));
        if ui.output_mode().shows_details() {
            if let Some(id) = &self.args.runtime_id {
                ui.key_value("Runtime id", id);
            }
            if tag.uses_modern_layout() {
                ui.key_value(
                    "Runtime dir",
                    &self.locator.runtime_path(path).display().to_string(),
                );
            }
        }

        match validator.validate_install(path) {
            Ok(()) => {
                ui.success(&format!("Valid {} installation", tag));
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn run(
        config: &ProbeConfig,
        path: &Path,
        runtime_id: Option<&str>,
        ui: &mut MockUI,
    ) -> CommandResult {
        let cmd = ValidateCommand::new(
            config,
            ValidateArgs {
                path: path.to_path_buf(),
                runtime_id: runtime_id.map(String::from),
            },
        );
        cmd.execute(ui).unwrap()
    }

    fn legacy_layout(root: &Path) {
        fs::create_dir_all(root.join("lib")).unwrap();
        fs::create_dir_all(root.join("templates")).unwrap();
        fs::write(root.join("tcruntime-ctl.sh"), "").unwrap();
    }

    #[test]
    fn valid_legacy_layout_from_path() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("tomcat-7.0.42");
        legacy_layout(&root);

        let mut ui = MockUI::new();
        let result = run(&ProbeConfig::default(), &root, None, &mut ui);
        assert!(result.success);
        assert_eq!(ui.successes(), &["Valid tc Server 3.0 installation"]);
        assert!(ui.headers()[0].contains("tc Server 3.0"));
    }

    #[test]
    fn tomcat_8_directory_uses_modern_layout() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("tomcat-8-runtime");
        let runtime = root.join("developer-4.0.2.RELEASE");
        legacy_layout(&runtime);
        fs::write(runtime.join("tcserver"), "").unwrap();
        fs::write(runtime.join("tcserver.bat"), "").unwrap();

        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let result = run(&ProbeConfig::default(), &root, None, &mut ui);
        assert!(result.success);
        assert_eq!(ui.successes(), &["Valid tc Server 4.0 installation"]);
        assert_eq!(
            ui.value_of("Runtime dir"),
            Some(runtime.display().to_string().as_str())
        );
        assert_eq!(ui.value_of("Runtime id"), None);
    }

    #[test]
    fn invalid_layout_reports_missing_entry() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("tomcat-7.0.42");
        legacy_layout(&root);
        fs::remove_dir(root.join("templates")).unwrap();

        let mut ui = MockUI::new();
        let result = run(&ProbeConfig::default(), &root, None, &mut ui);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].contains("'templates'"));
    }

    #[test]
    fn missing_root() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let result = run(
            &ProbeConfig::default(),
            &temp.path().join("gone"),
            Some("com.springsource.tcserver.runtime.90"),
            &mut ui,
        );
        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].contains("does not exist"));
    }

    #[test]
    fn configured_runtime_prefixes_are_used() {
        let temp = TempDir::new().unwrap();
        let runtime: PathBuf = temp.path().join("runtime-5.0.1");
        legacy_layout(&runtime);
        fs::write(runtime.join("tcserver"), "").unwrap();
        fs::write(runtime.join("tcserver.bat"), "").unwrap();

        let config = ProbeConfig {
            runtime_dirs: vec!["runtime-".to_string()],
            ..Default::default()
        };
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let result = run(
            &config,
            temp.path(),
            Some("com.springsource.tcserver.runtime.101"),
            &mut ui,
        );
        assert!(result.success);
        assert_eq!(
            ui.value_of("Runtime dir"),
            Some(runtime.display().to_string().as_str())
        );

        let mut ui = MockUI::new();
        let result = run(
            &ProbeConfig::default(),
            temp.path(),
            Some("com.springsource.tcserver.runtime.101"),
            &mut ui,
        );
        assert!(!result.success);
    }
}
