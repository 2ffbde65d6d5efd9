pub mod browser;
pub mod config;
pub mod error;
pub mod launcher;
pub mod router;

pub use browser::{BrowserFinder, BrowserLookup};
pub use config::{Config, ConfigStore};
pub use error::{Error, Result};
pub use launcher::{BrowserLauncher, Launcher};
pub use router::{LaunchCommand, RoutableRequest, build_launch_command, classify};
