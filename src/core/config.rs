// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::GenerationOptions;

// Configuration for the generator and its history file
#[derive(Debug, Clone)]
pub struct Config {
    // History
    pub history_file: PathBuf,

    // Password Generation
    pub default_length: usize,
    pub default_exclude_ambiguous: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // History
            history_file: PathBuf::from("./history.json"), // Replaced with the platform path in load()

            // Password Generation
            default_length: 16,
            default_exclude_ambiguous: false,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Set the history file based on the app config dir
        config.history_file = crate::utils::default_history_file();

        // History
        if let Ok(file) = env::var("PASSFORGE_HISTORY_FILE") {
            config.history_file = PathBuf::from(file);
        }

        // Password Generation
        if let Ok(val) = env::var("PASSFORGE_DEFAULT_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_length = length;
            }
        }

        if let Ok(val) = env::var("PASSFORGE_EXCLUDE_AMBIGUOUS") {
            if let Ok(exclude) = val.parse() {
                config.default_exclude_ambiguous = exclude;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }

    // Generation options seeded from the configured defaults
    pub fn default_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.default_length,
            exclude_ambiguous: self.default_exclude_ambiguous,
            ..GenerationOptions::default()
        }
    }

    // Create directories needed for operation
    pub fn ensure_directories_exist(&self) {
        // Create the history file's directory if it doesn't exist
        if let Some(parent) = self.history_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Failed to create history directory: {}", e);
                }
            }
        }
    }
}
