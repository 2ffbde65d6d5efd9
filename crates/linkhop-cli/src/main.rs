use anyhow::Result;
use clap::Parser;
use linkhop_core::{BrowserFinder, BrowserLauncher, classify};
use std::path::PathBuf;
use tracing::debug;

mod controller;
mod dryrun;
mod editor;
mod registrar;

use controller::Controller;
use dryrun::{DryRunEditor, DryRunLauncher, DryRunRegistrar};
use editor::SystemEditor;
use registrar::SystemRegistrar;

#[derive(Parser)]
#[command(name = "linkhop")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Routes OS open-URL requests to a chosen browser profile",
    long_about = "Linkhop registers itself as the http handler and forwards every URL the \
                  OS hands it to the target browser, optionally selecting a profile \
                  directory from its config file. Run it once without arguments to set \
                  it up; after that the OS invokes it for you."
)]
struct Cli {
    /// URL or file path delivered by the OS open-request
    #[arg(value_name = "PAYLOAD")]
    payload: Vec<String>,

    /// Path to the target browser binary (overrides the platform defaults)
    #[arg(long, value_name = "FILE")]
    browser_path: Option<PathBuf>,

    /// Path to the config file (overrides the per-user default)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip handler registration, editor hand-off, and the browser launch;
    /// print what would happen instead
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let request = classify(&cli.payload);
    debug!("classified invocation as {:?}", request);

    let mut controller = if cli.dry_run {
        Controller::new(
            Box::new(DryRunRegistrar),
            Box::new(DryRunEditor),
            Box::new(BrowserFinder::new(cli.browser_path)),
            Box::new(DryRunLauncher),
            cli.config,
        )
    } else {
        Controller::new(
            Box::new(SystemRegistrar),
            Box::new(SystemEditor),
            Box::new(BrowserFinder::new(cli.browser_path)),
            Box::new(BrowserLauncher),
            cli.config,
        )
    };

    let outcome = controller.run(request)?;
    debug!("terminating after {:?}", outcome);
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("linkhop=debug,linkhop_core=debug")
    } else {
        EnvFilter::new("linkhop=info,linkhop_core=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
