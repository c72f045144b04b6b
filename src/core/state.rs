// src/core/state.rs
use serde::{Serialize, Deserialize};

use crate::history::HistoryStore;
use crate::models::GenerationOptions;

/// Everything the interactive session reads and mutates, in one place.
///
/// Handlers take `&mut AppState` instead of touching globals, so a test can
/// drive them with a throwaway state and inspect the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub options: GenerationOptions,
    pub last_password: Option<String>,
    pub history: HistoryStore,
}

impl AppState {
    pub fn new(options: GenerationOptions, history: HistoryStore) -> Self {
        AppState {
            options,
            last_password: None,
            history,
        }
    }

    /// Record a freshly generated password as the most recent one.
    pub fn set_last_password(&mut self, password: impl Into<String>) {
        self.last_password = Some(password.into());
    }
}
