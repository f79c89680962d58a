//! Modules command implementation.
//!
//! Without `--check`, lists the web module versions a runtime accepts.
//! With `--check VERSION`, reports a single compatibility decision and
//! fails when the module is rejected. The loader jar answer is taken from
//! `--tomcat-location` when given.

use serde::Serialize;

use crate::capability::{CapabilityResolver, ModuleDescriptor, TomcatModuleRule};
use crate::cli::args::ModulesArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::version::VersionTag;

use super::dispatcher::{Command, CommandResult};
use super::display::{print_json, yes_no};

#[derive(Debug, Serialize)]
struct ModulesReport<'a> {
    runtime_id: &'a str,
    tag: VersionTag,
    supports_servlet3: bool,
    tomcat_runtime_id: &'a str,
    legacy_class_loader: bool,
    accepted_module_versions: &'a [&'a str],
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    runtime_id: &'a str,
    tag: VersionTag,
    version: &'a str,
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// The modules command implementation.
pub struct ModulesCommand {
    rule: TomcatModuleRule,
    args: ModulesArgs,
}

impl ModulesCommand {
    pub fn new(args: ModulesArgs) -> Self {
        Self {
            rule: TomcatModuleRule::default(),
            args,
        }
    }

    pub fn args(&self) -> &ModulesArgs {
        &self.args
    }

    fn list(
        &self,
        resolver: &CapabilityResolver,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let accepted = resolver
            .accepted_module_versions()
            .unwrap_or_else(|| self.rule.accepted());

        if self.args.json {
            print_json(
                ui,
                &ModulesReport {
                    runtime_id: &self.args.runtime_id,
                    tag: resolver.tag(),
                    supports_servlet3: resolver.supports_servlet3(),
                    tomcat_runtime_id: resolver.tomcat_runtime_id(),
                    legacy_class_loader: resolver.has_legacy_class_loader(),
                    accepted_module_versions: accepted,
                },
            )?;
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("{} ({})", self.args.runtime_id, resolver.tag()));
        ui.key_value("Servlet 3.0", yes_no(resolver.supports_servlet3()));
        if ui.output_mode().shows_details() {
            ui.key_value("Tomcat runtime", resolver.tomcat_runtime_id());
        }
        ui.key_value("Loader jar", yes_no(resolver.has_legacy_class_loader()));
        ui.key_value("Web modules", &accepted.join(", "));
        Ok(CommandResult::success())
    }

    fn check(
        &self,
        resolver: &CapabilityResolver,
        version: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let decision = resolver.can_add_module(&ModuleDescriptor::web(version));

        if self.args.json {
            print_json(
                ui,
                &CheckReport {
                    runtime_id: &self.args.runtime_id,
                    tag: resolver.tag(),
                    version,
                    accepted: decision.is_ok(),
                    reason: decision.as_ref().err().map(ToString::to_string),
                },
            )?;
        } else {
            match &decision {
                Ok(()) => ui.success(&format!(
                    "{} accepts web module version {}",
                    resolver.tag(),
                    version
                )),
                Err(e) => ui.error(&e.to_string()),
            }
        }

        Ok(match decision {
            Ok(()) => CommandResult::success(),
            Err(_) => CommandResult::failure(1),
        })
    }
}

impl Command for ModulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut resolver = CapabilityResolver::new(self.args.runtime_id.clone(), &self.rule);
        if let Some(location) = &self.args.tomcat_location {
            resolver = resolver.with_tomcat_location(location);
        }
        match self.args.check.as_deref() {
            Some(version) => self.check(&resolver, version, ui),
            None => self.list(&resolver, ui),
        }
    }
}
