// src/generators/strength.rs
use super::pool::SYMBOLS;

/// Score a password from 0 to 5.
///
/// One point for each of: length >= 8, length >= 12, a lowercase letter, an
/// uppercase letter, a digit, a character from the fixed punctuation set.
/// Six criteria can fire, so the raw sum is clamped to 5. This is a fixed
/// ordinal heuristic used for display parity, not an entropy estimate.
pub fn score_password(password: &str) -> u8 {
    let mut score = 0u8;
    let length = password.chars().count();

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| SYMBOLS.contains(c)) {
        score += 1;
    }

    score.min(5)
}

// Display wording for the strength indicator
pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 | 1 => "Very weak",
        2 => "Weak",
        3 => "Fair",
        4 => "Good",
        _ => "Strong",
    }
}
