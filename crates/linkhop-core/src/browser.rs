use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Capability for resolving the installed target browser.
///
/// Kept behind a trait so routing logic can be exercised in tests without a
/// real browser install.
pub trait BrowserLookup {
    fn locate(&self) -> Result<PathBuf>;
}

/// Locates the target browser binary on the system
pub struct BrowserFinder {
    custom_path: Option<PathBuf>,
}

impl BrowserFinder {
    /// Create a new BrowserFinder with optional custom path
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self { custom_path }
    }

    /// Get platform-specific default browser install paths
    fn default_paths() -> Vec<PathBuf> {
        #[cfg(target_os = "macos")]
        return vec![
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
            PathBuf::from("/Applications/Chromium.app/Contents/MacOS/Chromium"),
        ];

        #[cfg(target_os = "linux")]
        return vec![
            PathBuf::from("/usr/bin/google-chrome"),
            PathBuf::from("/usr/bin/chromium"),
            PathBuf::from("/usr/bin/chromium-browser"),
        ];

        #[cfg(target_os = "windows")]
        return vec![
            PathBuf::from(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
            PathBuf::from(r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe"),
        ];

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        return vec![];
    }

    /// Validate that a path exists and is executable
    fn validate_browser_path(&self, path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            return Err(Error::TargetAppNotFound(format!(
                "no browser at: {}",
                path.display()
            )));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path).map_err(Error::Io)?;
            let permissions = metadata.permissions();
            if permissions.mode() & 0o111 == 0 {
                return Err(Error::TargetAppNotFound(format!(
                    "browser binary not executable: {}",
                    path.display()
                )));
            }
        }

        Ok(path.to_path_buf())
    }
}

impl BrowserLookup for BrowserFinder {
    /// Find the browser binary, checking the custom path first, then
    /// platform defaults
    fn locate(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.custom_path {
            return self.validate_browser_path(path);
        }

        let default_paths = Self::default_paths();
        for path in &default_paths {
            if let Ok(valid_path) = self.validate_browser_path(path) {
                return Ok(valid_path);
            }
        }

        Err(Error::TargetAppNotFound(format!(
            "checked: {}. Use --browser-path to specify a location.",
            default_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}
