//! Classify command implementation.
//!
//! `tcprobe classify <PATH>` shows what an install directory name implies,
//! and with `--runtime-id` how that compares to an explicit runtime type.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::ClassifyArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::version::{classify, Classification, RuntimeType, VersionTag};

use super::dispatcher::{Command, CommandResult};
use super::display::{print_json, yes_no};

#[derive(Debug, Serialize)]
struct RuntimeReport<'a> {
    id: &'a str,
    tag: VersionTag,
    supports_servlet3: bool,
}

#[derive(Debug, Serialize)]
struct ClassifyReport<'a> {
    path: &'a PathBuf,
    path_axis: &'a Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    runtime: Option<RuntimeReport<'a>>,
}

/// The classify command implementation.
pub struct ClassifyCommand {
    args: ClassifyArgs,
}

impl ClassifyCommand {
    pub fn new(args: ClassifyArgs) -> Self {
        Self { args }
    }

    pub fn args(&self) -> &ClassifyArgs {
        &self.args
    }
}

impl Command for ClassifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let classification = classify(&self.args.path);
        let runtime = self.args.runtime_id.as_deref().map(|id| {
            let runtime = RuntimeType::new(id);
            RuntimeReport {
                id,
                tag: runtime.tag(),
                supports_servlet3: runtime.supports_servlet3(),
            }
        });

        if self.args.json {
            let report = ClassifyReport {
                path: &self.args.path,
                path_axis: &classification,
                runtime,
            };
            print_json(ui, &report)?;
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("{}", self.args.path.display()));
        ui.key_value("Tomcat line", &classification.tomcat.to_string());
        ui.key_value("Server id", &classification.server_id);
        ui.key_value("Runtime id", &classification.runtime_id);
        ui.key_value("Tag", &classification.tag.to_string());
        ui.key_value(
            "Servlet 3.0",
            yes_no(classification.tag.supports_servlet3()),
        );
        ui.key_value("Loader jar", yes_no(classification.legacy_class_loader));

        if let Some(runtime) = runtime {
            ui.key_value("Given runtime", runtime.id);
            ui.key_value("Given tag", &runtime.tag.to_string());
            if runtime.tag != classification.tag {
                ui.warning(&format!(
                    "Path suggests {} but runtime id {} is {}",
                    classification.tag, runtime.id, runtime.tag
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
