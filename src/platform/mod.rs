// NexusLinks platform abstraction
// Provides platform-specific config and data paths for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` to select the implementation at compile time.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Directory name used under XDG-style roots.
pub const APP_DIR_NAME: &str = "nexuslinks";

/// Environment variable that overrides the data directory on every platform.
pub const DATA_DIR_ENV: &str = "NEXUSLINKS_DATA_DIR";

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/nexuslinks` (or `$XDG_CONFIG_HOME/nexuslinks`)
/// - **macOS**: `~/Library/Application Support/NexusLinks`
/// - **Windows**: `%APPDATA%/NexusLinks`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the directory holding the bookmark collection.
///
/// `$NEXUSLINKS_DATA_DIR` wins when set; otherwise
/// - **Linux**: `~/.local/share/nexuslinks` (or `$XDG_DATA_HOME/nexuslinks`)
/// - **macOS**: `~/Library/Application Support/NexusLinks`
/// - **Windows**: `%APPDATA%/NexusLinks`
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
