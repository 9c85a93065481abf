// NexusLinks platform paths for Linux
// Config: ~/.config/nexuslinks
// Data:   ~/.local/share/nexuslinks

use std::env;
use std::path::PathBuf;

use super::APP_DIR_NAME;

/// `$XDG_CONFIG_HOME/nexuslinks`, otherwise `~/.config/nexuslinks`.
pub fn get_config_dir() -> PathBuf {
    config_dir_from(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok())
}

/// `$XDG_DATA_HOME/nexuslinks`, otherwise `~/.local/share/nexuslinks`.
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok())
}

fn config_dir_from(xdg: Option<String>, home: Option<String>) -> PathBuf {
    match xdg.filter(|v| !v.is_empty()) {
        Some(xdg) => PathBuf::from(xdg).join(APP_DIR_NAME),
        None => home_or_tmp(home).join(".config").join(APP_DIR_NAME),
    }
}

fn data_dir_from(xdg: Option<String>, home: Option<String>) -> PathBuf {
    match xdg.filter(|v| !v.is_empty()) {
        Some(xdg) => PathBuf::from(xdg).join(APP_DIR_NAME),
        None => home_or_tmp(home)
            .join(".local")
            .join("share")
            .join(APP_DIR_NAME),
    }
}

fn home_or_tmp(home: Option<String>) -> PathBuf {
    PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")))
}
