use crate::router::LaunchCommand;
use crate::{Error, Result};
use std::process::{Command, Stdio};
use tracing::debug;

/// Capability for handing a resolved command to the OS process-launch
/// facility. One attempt per request, no retry.
pub trait Launcher {
    fn launch(&self, command: &LaunchCommand) -> Result<()>;
}

/// Spawns the target browser directly
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    /// Launch the browser described by `command`. `Ok` means the OS accepted
    /// the spawn, which is the completion signal the controller waits on; the
    /// new process is not watched afterwards.
    fn launch(&self, command: &LaunchCommand) -> Result<()> {
        // new_instance holds by construction here: spawning the binary
        // directly always creates a fresh process image.
        let child = Command::new(&command.program)
            .args(&command.args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                Error::LaunchFailed(format!("{}: {}", command.program.display(), e))
            })?;

        debug!(
            "launched {} (pid {}) with args {:?}",
            command.program.display(),
            child.id(),
            command.args
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_launch_fails_for_missing_program() {
        let command = LaunchCommand {
            program: PathBuf::from("/nonexistent/browser"),
            args: vec!["https://example.com".to_string()],
            new_instance: true,
        };

        let result = BrowserLauncher.launch(&command);
        assert!(matches!(result, Err(Error::LaunchFailed(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_spawns_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let program = temp.path().join("fake-browser");
        std::fs::write(&program, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();

        let command = LaunchCommand {
            program,
            args: vec!["https://example.com".to_string()],
            new_instance: true,
        };

        assert!(BrowserLauncher.launch(&command).is_ok());
    }
}
