use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Opens the config file with the OS's default application for it.
///
/// Fire-and-forget: no result is observed and nothing waits on the editor.
pub trait EditorLauncher {
    fn open(&self, path: &Path);
}

pub struct SystemEditor;

impl EditorLauncher for SystemEditor {
    fn open(&self, path: &Path) {
        let mut cmd = opener();
        cmd.arg(path).stdout(Stdio::null()).stderr(Stdio::null());

        match cmd.spawn() {
            Ok(_) => debug!("opened {} for editing", path.display()),
            Err(e) => debug!("could not open an editor for {}: {}", path.display(), e),
        }
    }
}

/// Platform command that hands a file to its default application
fn opener() -> Command {
    #[cfg(target_os = "macos")]
    return Command::new("open");

    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        return cmd;
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    return Command::new("xdg-open");
}
