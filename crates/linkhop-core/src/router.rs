use crate::browser::BrowserLookup;
use crate::config::Config;
use crate::{Error, Result};
use std::path::PathBuf;
use url::Url;

/// Profile-selection flag understood by the target browser's CLI. The value
/// is opaque to us and passed through verbatim.
pub const PROFILE_FLAG: &str = "--profile-directory";

/// Why the process was started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutableRequest {
    /// Manual or first-run launch without a payload.
    DirectLaunch,
    /// The OS delivered a file to open.
    FileOpen(PathBuf),
    /// The OS delivered a web URL to open.
    UrlOpen(String),
}

/// Resolved browser invocation: profile flag first, payload last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Always set. Browsers are single-instance by default, and a running
    /// instance's profile would silently override the requested one.
    pub new_instance: bool,
}

/// Classify the OS-delivered payload.
///
/// Precedence: a well-formed http/https URL beats a file path, which beats
/// no payload at all. Only the first payload in its precedence class is
/// acted upon; the duplicate-event latch lives in the lifecycle controller.
pub fn classify(payload: &[String]) -> RoutableRequest {
    for arg in payload {
        if let Ok(url) = Url::parse(arg) {
            if matches!(url.scheme(), "http" | "https") {
                return RoutableRequest::UrlOpen(arg.clone());
            }
        }
    }

    match payload.first() {
        Some(path) => RoutableRequest::FileOpen(PathBuf::from(path)),
        None => RoutableRequest::DirectLaunch,
    }
}

/// Build the browser invocation for a routed request.
///
/// The profile flag, when configured, is prepended unmodified; the request's
/// URL or path string always goes last.
pub fn build_launch_command(
    request: &RoutableRequest,
    config: &Config,
    lookup: &dyn BrowserLookup,
) -> Result<LaunchCommand> {
    let payload = match request {
        RoutableRequest::DirectLaunch => return Err(Error::UnroutableRequest),
        RoutableRequest::UrlOpen(url) => url.clone(),
        RoutableRequest::FileOpen(path) => path.display().to_string(),
    };

    let program = lookup.locate()?;

    let mut args = Vec::with_capacity(2);
    if let Some(profile) = config.profile() {
        args.push(format!("{}={}", PROFILE_FLAG, profile));
    }
    args.push(payload);

    Ok(LaunchCommand {
        program,
        args,
        new_instance: true,
    })
}
