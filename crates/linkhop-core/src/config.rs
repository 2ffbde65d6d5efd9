use crate::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Parsed contents of config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Profile directory name handed to the target browser verbatim.
    pub profile: Option<String>,
}

impl Config {
    /// Profile value with the empty string treated as unset.
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref().filter(|p| !p.is_empty())
    }
}

/// Written on first run; comment-only, so a fresh file parses to defaults.
const TEMPLATE: &str = r#"# Name of the browser profile directory to open links with, in double quotes.
# Example: profile = "Profile 1"
#
# When commented out or left empty, the browser picks its own profile
# (usually the one last used).

# profile = "Profile 2"
"#;

/// Reads and bootstraps the per-user configuration file
pub struct ConfigStore;

impl ConfigStore {
    /// Per-user config path. Does no I/O; fails only when the base
    /// configuration directory cannot be determined.
    pub fn resolve_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(Error::ConfigPathUnresolved)?;
        Ok(base.join("linkhop").join("config.toml"))
    }

    /// Create parent directories and write the commented template if the file
    /// is absent. An existing file is never overwritten, even if malformed.
    pub fn ensure_exists(path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(Error::ConfigWriteFailed)?;
        }
        if !path.exists() {
            fs::write(path, TEMPLATE).map_err(Error::ConfigWriteFailed)?;
        }
        Ok(())
    }

    /// Read the config, falling back to defaults on any read or parse error.
    /// A broken config file must never stop a request from being routed.
    pub fn read(path: &Path) -> Config {
        match fs::read_to_string(path) {
            Ok(raw) => toml::from_str(&raw).unwrap_or_else(|e| {
                warn!("ignoring malformed config at {}: {}", path.display(), e);
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_exists_creates_directories_and_template() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        ConfigStore::ensure_exists(&path).unwrap();

        assert!(path.exists());
        let contents = fs::read_to_string(&path).unwrap();
        // Template is comment-only
        for line in contents.lines().filter(|l| !l.trim().is_empty()) {
            assert!(line.starts_with('#'), "unexpected non-comment line: {line}");
        }
        assert!(ConfigStore::read(&path).profile().is_none());
    }

    #[test]
    fn test_ensure_exists_never_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "profile = \"Work\"\n").unwrap();

        ConfigStore::ensure_exists(&path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "profile = \"Work\"\n"
        );
    }

    #[test]
    fn test_read_returns_profile() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "profile = \"Profile 2\"\n").unwrap();

        assert_eq!(ConfigStore::read(&path).profile(), Some("Profile 2"));
    }

    #[test]
    fn test_read_absorbs_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("does-not-exist.toml");

        assert!(ConfigStore::read(&path).profile().is_none());
    }

    #[test]
    fn test_read_absorbs_malformed_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "profile = not quoted\n").unwrap();

        assert!(ConfigStore::read(&path).profile().is_none());
    }

    #[test]
    fn test_empty_profile_is_unset() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "profile = \"\"\n").unwrap();

        assert!(ConfigStore::read(&path).profile().is_none());
    }
}
