// src/cli/menu.rs
use inquire::{Confirm, Select, Text};
use std::error::Error;

use crate::core::state::AppState;
use crate::generators::strength::{score_password, strength_label};
use crate::generators::PasswordGenerator;
use crate::history::HistoryEntry;
use crate::models::GenerationOptions;
use crate::utils::{format_time_ago, truncate_string};

pub fn run_cli_menu(state: &mut AppState) -> Result<(), Box<dyn Error>> {
    println!("🦀🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║          🔐 PASSFORGE                ║");
    println!("╚══════════════════════════════════════╝");

    let mut password_generator = PasswordGenerator::new();

    // Main application loop
    let mut exit_requested = false;
    while !exit_requested {
        let options = vec![
            "🔐  Generate secure password",
            "📊  Check password strength",
            "🕘  View password history",
            "❌  Exit",
        ];

        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .with_page_size(50)
            .prompt_skippable()?;

        match selection {
            Some("🔐  Generate secure password") => {
                // Get password generation options, defaulting to the last used ones
                let default_length = state.options.length.to_string();
                let length = match Text::new("Password length:")
                    .with_default(&default_length)
                    .prompt()?
                    .parse::<usize>()
                {
                    Ok(length) => length,
                    Err(_) => {
                        println!("❌ Invalid number. Please enter a whole number.");
                        continue;
                    }
                };

                let include_uppercase = Confirm::new("Include uppercase letters?")
                    .with_default(state.options.include_uppercase)
                    .prompt()?;

                let include_lowercase = Confirm::new("Include lowercase letters?")
                    .with_default(state.options.include_lowercase)
                    .prompt()?;

                let include_numbers = Confirm::new("Include numbers?")
                    .with_default(state.options.include_numbers)
                    .prompt()?;

                let include_symbols = Confirm::new("Include symbols?")
                    .with_default(state.options.include_symbols)
                    .prompt()?;

                let exclude_ambiguous = Confirm::new("Exclude ambiguous characters (like l, 1, I, O, 0)?")
                    .with_default(state.options.exclude_ambiguous)
                    .prompt()?;

                let pronounceable = Confirm::new("Make password pronounceable?")
                    .with_default(state.options.pronounceable)
                    .prompt()?;

                let options = GenerationOptions {
                    length,
                    include_lowercase,
                    include_uppercase,
                    include_numbers,
                    include_symbols,
                    exclude_ambiguous,
                    pronounceable,
                };

                match password_generator.generate(&options) {
                    Ok(password) => {
                        let strength = score_password(&password);

                        println!("\n🔐 Generated Password: {}", password);
                        println!("Strength: {}/5 ({})", strength, strength_label(strength));

                        state.options = options;
                        state.set_last_password(&password);

                        let save = Confirm::new("Save this password?")
                            .with_default(false)
                            .prompt()?;

                        if save {
                            state.history.append(HistoryEntry::new(password, strength));
                            println!("✅ Password saved to history!");
                        }
                    }
                    Err(e) => {
                        println!("❌ Failed to generate password: {}", e);
                        continue;
                    }
                }

                // Wait for user to press enter
                let _ = Text::new("Press enter to continue...").prompt();
            }
            Some("📊  Check password strength") => {
                let password = Text::new("Password to check:").prompt()?;

                let strength = score_password(&password);
                println!("Strength: {}/5 ({})", strength, strength_label(strength));

                // Wait for user to press enter
                let _ = Text::new("Press enter to continue...").prompt();
            }
            Some("🕘  View password history") => {
                if state.history.is_empty() {
                    println!("❗ No passwords saved yet.");
                    continue;
                }

                println!("\n🕘 Password History");
                for entry in state.history.recent(10) {
                    println!(
                        "{}  {:<35} length {:>3}  strength {}/5  ({})",
                        entry.timestamp,
                        truncate_string(&entry.password, 32),
                        entry.length,
                        entry.strength,
                        format_time_ago(&entry.timestamp),
                    );
                }

                // Wait for user to press enter
                let _ = Text::new("Press enter to continue...").prompt();
            }
            Some("❌  Exit") | None => {
                println!("👋 Goodbye!");
                exit_requested = true;
            }
            _ => {}
        }
    }

    Ok(())
}
