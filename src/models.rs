// src/models.rs
use serde::{Serialize, Deserialize};

use crate::generators::pool::CharacterClass;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
    pub pronounceable: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: false,
            pronounceable: false,
        }
    }
}

impl GenerationOptions {
    // The selected classes in canonical pool order (lower, upper, digits, symbols)
    pub fn character_classes(&self) -> Vec<CharacterClass> {
        let mut classes = Vec::with_capacity(4);
        if self.include_lowercase {
            classes.push(CharacterClass::Lower);
        }
        if self.include_uppercase {
            classes.push(CharacterClass::Upper);
        }
        if self.include_numbers {
            classes.push(CharacterClass::Digits);
        }
        if self.include_symbols {
            classes.push(CharacterClass::Symbols);
        }
        classes
    }
}
