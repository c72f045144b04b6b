// src/cli/handlers.rs
use std::error::Error;

use serde_json::json;

use crate::core::state::AppState;
use crate::generators::strength::{score_password, strength_label};
use crate::generators::PasswordGenerator;
use crate::history::HistoryEntry;
use crate::models::GenerationOptions;
use crate::utils::{format_time_ago, truncate_string};

// Handlers for CLI subcommands. Each one reads and mutates the shared
// state, prints its result, and leaves prompting to the menu layer.

pub fn handle_generate(
    state: &mut AppState,
    options: GenerationOptions,
    save: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut generator = PasswordGenerator::new();
    let password = generator.generate(&options)?;
    let strength = score_password(&password);

    state.options = options;
    state.set_last_password(&password);

    if save {
        state.history.append(HistoryEntry::new(password.clone(), strength));
    }

    if json {
        let payload = json!({
            "password": password,
            "length": password.chars().count(),
            "strength": strength,
            "label": strength_label(strength),
            "saved": save,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("🔐 Generated Password: {}", password);
        println!("Strength: {}/5 ({})", strength, strength_label(strength));
        if save {
            println!("✅ Password saved to history!");
        }
    }

    Ok(())
}

pub fn handle_score(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let strength = score_password(password);

    if json {
        let payload = json!({
            "strength": strength,
            "label": strength_label(strength),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Strength: {}/5 ({})", strength, strength_label(strength));
    }

    Ok(())
}

pub fn handle_history(state: &AppState, limit: usize, json: bool) -> Result<(), Box<dyn Error>> {
    let entries = state.history.recent(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("❗ No passwords saved yet.");
        return Ok(());
    }

    println!("🕘 Password History ({} of {})", entries.len(), state.history.len());
    for entry in entries {
        println!(
            "{}  {:<35} length {:>3}  strength {}/5  ({})",
            entry.timestamp,
            truncate_string(&entry.password, 32),
            entry.length,
            entry.strength,
            format_time_ago(&entry.timestamp),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryStore;
    use tempfile::TempDir;

    fn state_in(dir: &TempDir) -> AppState {
        AppState::new(
            GenerationOptions::default(),
            HistoryStore::load(dir.path().join("history.json")),
        )
    }

    #[test]
    fn test_generate_records_last_password() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut state = state_in(&dir);

        handle_generate(&mut state, GenerationOptions::default(), false, false).unwrap();

        let last = state.last_password.as_deref().unwrap();
        assert_eq!(last.chars().count(), 16);
        // Generation alone never touches history
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_generate_with_save_appends_history() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut state = state_in(&dir);

        handle_generate(&mut state, GenerationOptions::default(), true, false).unwrap();

        assert_eq!(state.history.len(), 1);
        let entry = &state.history.entries()[0];
        assert_eq!(Some(entry.password.as_str()), state.last_password.as_deref());
        assert_eq!(entry.length, 16);
    }

    #[test]
    fn test_generate_rejects_empty_selection() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut state = state_in(&dir);

        let options = GenerationOptions {
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            ..GenerationOptions::default()
        };

        assert!(handle_generate(&mut state, options, true, false).is_err());
        // A refused generation must not leave anything behind
        assert!(state.history.is_empty());
        assert!(state.last_password.is_none());
    }

    #[test]
    fn test_generate_remembers_options() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut state = state_in(&dir);

        let options = GenerationOptions {
            length: 24,
            include_symbols: false,
            ..GenerationOptions::default()
        };
        handle_generate(&mut state, options.clone(), false, false).unwrap();

        assert_eq!(state.options, options);
    }

    #[test]
    fn test_score_and_history_do_not_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut state = state_in(&dir);

        handle_score("Abc12345!", false).unwrap();
        handle_history(&state, 10, false).unwrap();

        state.history.append(HistoryEntry::new("Abc12345!", 5));
        handle_history(&state, 10, true).unwrap();
    }

    #[test]
    fn test_history_lists_multibyte_passwords() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut state = state_in(&dir);

        // Nine emoji: 36 bytes, so a byte-indexed display width would
        // split a character mid-sequence
        state.history.append(HistoryEntry::new("🔐".repeat(9), 3));

        // Render from a fresh load of the durable file, like a later run
        let reloaded = AppState::new(
            GenerationOptions::default(),
            HistoryStore::load(dir.path().join("history.json")),
        );
        assert_eq!(reloaded.history.len(), 1);
        assert_eq!(reloaded.history.entries()[0].length, 9);
        handle_history(&reloaded, 10, false).unwrap();
    }
}
