use crate::editor::EditorLauncher;
use crate::registrar::HandlerRegistrar;
use console::style;
use linkhop_core::{
    BrowserLookup, Config, ConfigStore, Launcher, Result, RoutableRequest, build_launch_command,
};
use std::path::PathBuf;
use tracing::warn;

/// How a single process invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// First-run setup ran to completion.
    SetupComplete,
    /// A request was routed to the target browser.
    Routed,
    /// A duplicate event arrived after the latch was set; nothing was done.
    Ignored,
}

/// Drives one process invocation from classification to termination.
///
/// Owns the "already handled" latch. The latch is per-instance so tests can
/// run several controllers side by side; each real process builds exactly one.
pub struct Controller {
    handled: bool,
    config_override: Option<PathBuf>,
    registrar: Box<dyn HandlerRegistrar>,
    editor: Box<dyn EditorLauncher>,
    lookup: Box<dyn BrowserLookup>,
    launcher: Box<dyn Launcher>,
}

impl Controller {
    pub fn new(
        registrar: Box<dyn HandlerRegistrar>,
        editor: Box<dyn EditorLauncher>,
        lookup: Box<dyn BrowserLookup>,
        launcher: Box<dyn Launcher>,
        config_override: Option<PathBuf>,
    ) -> Self {
        Self {
            handled: false,
            config_override,
            registrar,
            editor,
            lookup,
            launcher,
        }
    }

    /// Handle one classified invocation. At most one request is ever routed:
    /// OS frameworks may deliver a second open-event after the first already
    /// triggered routing, and that duplicate must be dropped.
    pub fn run(&mut self, request: RoutableRequest) -> Result<Outcome> {
        if self.handled {
            warn!("duplicate open request ignored");
            return Ok(Outcome::Ignored);
        }

        match request {
            RoutableRequest::DirectLaunch => self.run_setup(),
            request => {
                self.handled = true;
                self.route(&request)
            }
        }
    }

    /// First-run path: claim the http scheme, make sure the config file
    /// exists, hand it to the user's editor. Every step is best-effort and
    /// the next one runs regardless.
    fn run_setup(&self) -> Result<Outcome> {
        println!(
            "{}",
            style("No URL to route; running first-time setup.").bold()
        );

        if let Err(e) = self.registrar.register("http") {
            warn!("could not register as http handler: {}", e);
        }

        let Some(config_path) = self.config_path() else {
            warn!("could not resolve a config location; skipping config setup");
            return Ok(Outcome::SetupComplete);
        };

        if let Err(e) = ConfigStore::ensure_exists(&config_path) {
            warn!("could not write config template: {}", e);
        }
        self.editor.open(&config_path);

        println!("Config file: {}", config_path.display());
        Ok(Outcome::SetupComplete)
    }

    /// Routing path: read config fresh, build the command, launch once.
    /// Failures terminate the invocation with no browser launched.
    fn route(&self, request: &RoutableRequest) -> Result<Outcome> {
        let config = match self.config_path() {
            Some(path) => ConfigStore::read(&path),
            // No resolvable config location means "no profile", not an error.
            None => Config::default(),
        };

        let command = build_launch_command(request, &config, self.lookup.as_ref())?;
        self.launcher.launch(&command)?;
        Ok(Outcome::Routed)
    }

    fn config_path(&self) -> Option<PathBuf> {
        match &self.config_override {
            Some(path) => Some(path.clone()),
            None => ConfigStore::resolve_path().ok(),
        }
    }
}
