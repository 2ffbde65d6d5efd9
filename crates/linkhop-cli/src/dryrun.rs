use crate::editor::EditorLauncher;
use crate::registrar::HandlerRegistrar;
use console::style;
use linkhop_core::{LaunchCommand, Launcher, Result};
use std::path::Path;

// Capabilities that narrate instead of touching the system, wired in by
// `--dry-run`. Template creation is not stubbed: writing the config file is
// idempotent and never overwrites.

pub struct DryRunRegistrar;

impl HandlerRegistrar for DryRunRegistrar {
    fn register(&self, scheme: &str) -> Result<()> {
        println!(
            "{} as default handler for {}",
            style("would register").cyan(),
            scheme
        );
        Ok(())
    }
}

pub struct DryRunEditor;

impl EditorLauncher for DryRunEditor {
    fn open(&self, path: &Path) {
        println!(
            "{} {} in your editor",
            style("would open").cyan(),
            path.display()
        );
    }
}

pub struct DryRunLauncher;

impl Launcher for DryRunLauncher {
    fn launch(&self, command: &LaunchCommand) -> Result<()> {
        println!(
            "{} {} {}",
            style("would launch").cyan(),
            command.program.display(),
            command.args.join(" ")
        );
        Ok(())
    }
}
