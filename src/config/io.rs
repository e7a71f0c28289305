//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::PanelConfig;

impl PanelConfig {
    /// Get the global config directory path (~/.panel-settings/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".panel-settings")
    }

    /// Get the global config file path (~/.panel-settings/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PanelConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from `path`, or the global config when `None`.
    /// A missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::global_config_path);

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }
}

/// Path beside `path` with `suffix` appended to its file name
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Replace `path` with the output of `render`, atomically and under an
/// exclusive lock.
///
/// `render` runs while the lock is held, so it can read the current file and
/// merge into it. The lock lives in a separate `<name>.lock` file so the
/// rename never touches it; content goes to `<name>.tmp` first and is renamed
/// over `path` after a sync. A failing `render` leaves `path` untouched.
pub fn write_locked<F, E>(path: &Path, render: F) -> std::result::Result<(), E>
where
    F: FnOnce() -> std::result::Result<String, E>,
    E: From<std::io::Error>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(sibling_path(path, ".lock"))?;
    lock_file.lock_exclusive()?;

    let content = render()?;

    let temp_path = sibling_path(path, ".tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.sync_all()?;

    std::fs::rename(&temp_path, path)?;

    // Lock is released when lock_file is dropped
    Ok(())
}
