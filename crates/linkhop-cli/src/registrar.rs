use linkhop_core::Result;

/// Registers this executable as the OS-level handler for a URL scheme.
///
/// Best-effort by contract: the setup path logs failures and keeps going,
/// so implementations never need to retry.
pub trait HandlerRegistrar {
    fn register(&self, scheme: &str) -> Result<()>;
}

/// Desktop entry name the OS associates with the linkhop binary.
#[cfg(target_os = "linux")]
const DESKTOP_ENTRY: &str = "linkhop.desktop";

pub struct SystemRegistrar;

impl HandlerRegistrar for SystemRegistrar {
    fn register(&self, scheme: &str) -> Result<()> {
        #[cfg(target_os = "linux")]
        return register_with_xdg(scheme);

        #[cfg(target_os = "macos")]
        {
            // LaunchServices takes the claim from the app bundle's URL-scheme
            // declaration; there is no supported way to set it from a bare
            // binary.
            let _ = scheme;
            return Err(linkhop_core::Error::RegistrationFailed(
                "on macOS the app bundle's LaunchServices entry owns the http claim".to_string(),
            ));
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            let _ = scheme;
            return Err(linkhop_core::Error::RegistrationFailed(
                "no registration backend for this platform".to_string(),
            ));
        }
    }
}

#[cfg(target_os = "linux")]
fn register_with_xdg(scheme: &str) -> Result<()> {
    use linkhop_core::Error;
    use std::process::Command;
    use tracing::debug;

    let xdg_settings = which::which("xdg-settings")
        .map_err(|e| Error::RegistrationFailed(format!("xdg-settings not available: {}", e)))?;

    let status = Command::new(xdg_settings)
        .args(["set", "default-url-scheme-handler", scheme, DESKTOP_ENTRY])
        .status()
        .map_err(|e| Error::RegistrationFailed(e.to_string()))?;

    if !status.success() {
        return Err(Error::RegistrationFailed(format!(
            "xdg-settings exited with {}",
            status
        )));
    }

    debug!("registered {} as handler for {}", DESKTOP_ENTRY, scheme);
    Ok(())
}
