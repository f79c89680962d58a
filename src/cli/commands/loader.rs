//! Loader command implementation.
//!
//! `tcprobe loader <BASE_DIR> --tomcat-location DIR --enable` installs the
//! class loader jar into the instance; `--disable` removes it again. The
//! Tomcat line comes from the location's directory name, or directly from
//! `--runtime-id`.

use std::path::PathBuf;

use crate::capability::{ClassLoaderSync, LoaderSync, SyncRequest, LIB_DIR};
use crate::cli::args::LoaderArgs;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The loader command implementation.
pub struct LoaderCommand {
    loader_dir: Option<PathBuf>,
    args: LoaderArgs,
}

impl LoaderCommand {
    pub fn new(config: &ProbeConfig, args: LoaderArgs) -> Self {
        let loader_dir = args
            .loader_dir
            .clone()
            .or_else(|| config.loader_jar_dir.clone());
        Self { loader_dir, args }
    }

    pub fn args(&self) -> &LoaderArgs {
        &self.args
    }
}

impl Command for LoaderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source_dir = match (&self.loader_dir, self.args.enable) {
            (Some(dir), _) => dir.clone(),
            // Removal never reads the bundled jars.
            (None, false) => PathBuf::new(),
            (None, true) => {
                ui.error("No loader jar directory; pass --loader-dir or set loader_jar_dir");
                return Ok(CommandResult::failure(2));
            }
        };

        let mut request = match (&self.args.tomcat_location, &self.args.runtime_id) {
            (Some(location), _) => {
                SyncRequest::for_tomcat_location(location, &self.args.base_dir, self.args.enable)
            }
            (None, Some(runtime_id)) => SyncRequest {
                tomcat_runtime_id: runtime_id.clone(),
                base_dir: self.args.base_dir.clone(),
                serve_without_publish: self.args.enable,
                test_environment: false,
            },
            (None, None) => {
                ui.error("No Tomcat line; pass --tomcat-location or --runtime-id");
                return Ok(CommandResult::failure(2));
            }
        };
        request.test_environment = self.args.test_env;
        let jar = ClassLoaderSync::jar_name(&request.tomcat_runtime_id);
        let lib_dir = request.base_dir.join(LIB_DIR);

        let outcome = match ClassLoaderSync::new(source_dir).sync_class_loader(&request) {
            Ok(outcome) => outcome,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        match outcome {
            LoaderSync::NotRequired => ui.message(&format!(
                "{} does not use a loader jar",
                request.tomcat_runtime_id
            )),
            LoaderSync::Installed => {
                ui.success(&format!("Installed {} into {}", jar, lib_dir.display()))
            }
            LoaderSync::AlreadyInstalled => ui.success(&format!("{} is up to date", jar)),
            LoaderSync::Removed => {
                ui.success(&format!("Removed {} from {}", jar, lib_dir.display()))
            }
            LoaderSync::AlreadyAbsent => ui.message(&format!("{} is not installed", jar)),
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const RT_70: &str = "org.eclipse.jst.server.tomcat.runtime.70";

    fn args(
        base: &Path,
        runtime_id: &str,
        enable: bool,
        loader_dir: Option<&Path>,
    ) -> LoaderArgs {
        LoaderArgs {
            base_dir: base.to_path_buf(),
            tomcat_location: None,
            runtime_id: Some(runtime_id.to_string()),
            enable,
            disable: !enable,
            test_env: false,
            loader_dir: loader_dir.map(Path::to_path_buf),
        }
    }

    fn bundled(dir: &Path) {
        fs::write(dir.join(ClassLoaderSync::jar_name(RT_70)), b"loader").unwrap();
    }

    #[test]
    fn enable_then_disable() {
        let loaders = TempDir::new().unwrap();
        let base = TempDir::new().unwrap();
        bundled(loaders.path());
        let config = ProbeConfig::default();
        let installed = base.path().join("lib").join(ClassLoaderSync::jar_name(RT_70));

        let mut ui = MockUI::new();
        let cmd = LoaderCommand::new(
            &config,
            args(base.path(), RT_70, true, Some(loaders.path())),
        );
        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(installed.exists());
        assert!(ui.successes()[0].starts_with("Installed"));

        cmd.execute(&mut ui).unwrap();
        assert!(ui.successes()[1].ends_with("is up to date"));

        let cmd = LoaderCommand::new(&config, args(base.path(), RT_70, false, None));
        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(!installed.exists());
        assert!(ui.successes()[2].starts_with("Removed"));

        cmd.execute(&mut ui).unwrap();
        assert!(ui.messages()[0].ends_with("is not installed"));
    }

    #[test]
    fn tomcat_location_picks_jar() {
        let loaders = TempDir::new().unwrap();
        let base = TempDir::new().unwrap();
        bundled(loaders.path());

        let mut loader_args = args(base.path(), RT_70, true, Some(loaders.path()));
        loader_args.runtime_id = None;
        loader_args.tomcat_location = Some(PathBuf::from("/opt/tc/tomcat-7.0.42.A.RELEASE"));

        let cmd = LoaderCommand::new(&ProbeConfig::default(), loader_args);
        let mut ui = MockUI::new();
        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(base
            .path()
            .join("lib")
            .join(ClassLoaderSync::jar_name(RT_70))
            .exists());
    }

    #[test]
    fn config_loader_dir_is_used() {
        let loaders = TempDir::new().unwrap();
        let base = TempDir::new().unwrap();
        bundled(loaders.path());
        let config = ProbeConfig {
            loader_jar_dir: Some(loaders.path().to_path_buf()),
            ..Default::default()
        };

        let cmd = LoaderCommand::new(&config, args(base.path(), RT_70, true, None));
        let mut ui = MockUI::new();
        assert!(cmd.execute(&mut ui).unwrap().success);
    }

    #[test]
    fn enable_without_loader_dir_fails() {
        let base = TempDir::new().unwrap();
        let cmd = LoaderCommand::new(
            &ProbeConfig::default(),
            args(base.path(), RT_70, true, None),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
        assert_eq!(ui.errors().len(), 1);
    }

    #[test]
    fn modern_runtime_not_required() {
        let base = TempDir::new().unwrap();
        let cmd = LoaderCommand::new(
            &ProbeConfig::default(),
            args(
                base.path(),
                "org.eclipse.jst.server.tomcat.runtime.90",
                true,
                Some(base.path()),
            ),
        );
        let mut ui = MockUI::new();
        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(ui.messages()[0].contains("does not use a loader jar"));
        assert!(!base.path().join("lib").exists());
    }

    #[test]
    fn missing_bundled_jar_fails() {
        let loaders = TempDir::new().unwrap();
        let base = TempDir::new().unwrap();
        let cmd = LoaderCommand::new(
            &ProbeConfig::default(),
            args(base.path(), RT_70, true, Some(loaders.path())),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].starts_with("Failed to read"));
    }
}
