// src/utils/io.rs
use std::path::PathBuf;
use dirs;

/// Get the application config directory
pub fn get_app_config_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "passforge", "passforge") {
        let config_dir = proj_dirs.config_dir();

        // Create the directory if it doesn't exist
        if !config_dir.exists() {
            if let Err(e) = std::fs::create_dir_all(config_dir) {
                log::error!("Failed to create config directory: {}", e);
                return None;
            }
        }

        Some(config_dir.to_path_buf())
    } else {
        log::error!("Could not determine config directory");
        None
    }
}

/// Default location of the history file, inside the config directory.
///
/// Falls back to `.passforge/history.json` under the home directory when
/// the platform config directory cannot be determined.
pub fn default_history_file() -> PathBuf {
    if let Some(config_dir) = get_app_config_dir() {
        return config_dir.join("history.json");
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".passforge")
        .join("history.json")
}
