//! Centralized configuration paths for commander
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/commander/`
//! - Windows: `%APPDATA%\commander\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "commander";

/// Base name of the rolling log file
pub const LOG_FILE_NAME: &str = "commander.log";

/// Base config directory for commander
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/commander`
///   - Else: `~/.config/commander`
///
/// Windows:
///   - `%APPDATA%\commander`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/commander/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/commander/keymap.yaml`
pub fn keymap_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("keymap.yaml"))
}

/// `~/.config/commander/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Newest log file in the logs directory
///
/// Daily rotation produces `commander.log.YYYY-MM-DD`, which sorts by date.
/// Falls back to the base name when nothing has been written yet.
pub fn log_file() -> Option<PathBuf> {
    let logs_dir = logs_dir()?;
    Some(newest_log_in(&logs_dir).unwrap_or_else(|| logs_dir.join(LOG_FILE_NAME)))
}

fn newest_log_in(dir: &Path) -> Option<PathBuf> {
    fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(LOG_FILE_NAME))
                .unwrap_or(false)
        })
        .max()
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    let logs = config.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
