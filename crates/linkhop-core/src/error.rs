use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine the per-user configuration directory")]
    ConfigPathUnresolved,

    #[error("Failed to write config template: {0}")]
    ConfigWriteFailed(#[source] std::io::Error),

    #[error("Target browser not found: {0}")]
    TargetAppNotFound(String),

    #[error("Nothing to route: process was started without a URL or file")]
    UnroutableRequest,

    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Default-handler registration failed: {0}")]
    RegistrationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
