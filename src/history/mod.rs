// src/history/mod.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Hard cap on stored entries; the oldest are dropped first.
pub const HISTORY_CAPACITY: usize = 50;

/// Second-granularity timestamp format used in entries.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Error, Debug)]
enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, HistoryError>;

/// One saved password record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub password: String,
    pub timestamp: String,
    pub length: usize,
    pub strength: u8,
}

impl HistoryEntry {
    /// Stamp a password for saving; timestamp and length are derived here.
    pub fn new(password: impl Into<String>, strength: u8) -> Self {
        let password = password.into();
        HistoryEntry {
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            length: password.chars().count(),
            strength,
            password,
        }
    }
}

/// Append-only, capacity-bounded store of saved passwords.
///
/// The durable form is a JSON array of entries, rewritten whole after every
/// append. History is a convenience feature: every read or write failure is
/// logged and absorbed here, never surfaced to the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryStore {
    #[serde(skip)]
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Open the store at `path`, reading any persisted entries.
    ///
    /// A missing file starts an empty store silently; an unreadable or
    /// corrupt file starts an empty store with a logged warning. A file
    /// holding more than [`HISTORY_CAPACITY`] entries loads trimmed to
    /// the newest, so the capacity bound holds however the file grew.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!(
                    "Could not read history file {}: {}. Starting with empty history.",
                    path.display(),
                    e
                );
                Vec::new()
            }
        };

        let mut store = HistoryStore { path, entries };
        store.trim_to_capacity();
        store
    }

    /// Append an entry, trim to the newest [`HISTORY_CAPACITY`], persist.
    ///
    /// A failed write means the save is skipped; the in-memory entries are
    /// kept so a later append can still land everything.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
        self.trim_to_capacity();

        if let Err(e) = self.save() {
            log::warn!(
                "Could not write history file {}: {}. Save skipped.",
                self.path.display(),
                e
            );
        }
    }

    // Drop oldest entries from the head until at most HISTORY_CAPACITY remain
    fn trim_to_capacity(&mut self) {
        if self.entries.len() > HISTORY_CAPACITY {
            let excess = self.entries.len() - HISTORY_CAPACITY;
            self.entries.drain(0..excess);
        }
    }

    // Rewrite the whole file with the current entries
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;

        Ok(())
    }

    /// Up to the last `n` entries, most recent first. Does not mutate.
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// All entries in insertion (chronological) order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_entries(path: &Path) -> Result<Vec<HistoryEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
