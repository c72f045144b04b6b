// src/generators/pool.rs
use serde::{Serialize, Deserialize};

use super::{GenerateError, Result};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%&*()_-+=";

// Characters that are easy to misread: zero/oh, one/ell/eye
pub const AMBIGUOUS: &str = "0O1lI";

/// One selectable character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterClass {
    Lower,
    Upper,
    Digits,
    Symbols,
}

impl CharacterClass {
    // Canonical assembly order; build_pool walks this, not the caller's order
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(&self) -> &'static str {
        match self {
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }
}

/// The concrete set of characters eligible for sampling.
///
/// Assembly order is deterministic (lower, upper, digits, symbols) so that
/// seeded generation is reproducible; sampling itself treats the pool as an
/// unordered multiset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Wrap an explicit character list as a pool.
    ///
    /// No validation happens here; an empty pool is rejected at generation
    /// time.
    pub fn from_chars(chars: Vec<char>) -> Self {
        CharacterPool { chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

/// Assemble the sampling pool for the requested classes.
///
/// Duplicate class mentions contribute once. With `exclude_ambiguous` the
/// characters `0 O 1 l I` are removed no matter which class supplied them.
/// An empty result (no classes selected, or everything filtered away) is an
/// error; callers must refuse to generate rather than emit an empty password.
pub fn build_pool(classes: &[CharacterClass], exclude_ambiguous: bool) -> Result<CharacterPool> {
    let mut chars: Vec<char> = Vec::new();

    for class in CharacterClass::ALL {
        if classes.contains(&class) {
            chars.extend(class.alphabet().chars());
        }
    }

    if exclude_ambiguous {
        chars.retain(|c| !AMBIGUOUS.contains(*c));
    }

    if chars.is_empty() {
        return Err(GenerateError::NoClassesSelected);
    }

    Ok(CharacterPool { chars })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pool_rejects_empty_selection() {
        assert_eq!(build_pool(&[], false), Err(GenerateError::NoClassesSelected));
        assert_eq!(build_pool(&[], true), Err(GenerateError::NoClassesSelected));
    }

    #[test]
    fn test_build_pool_uses_canonical_order() {
        let a = build_pool(
            &[CharacterClass::Upper, CharacterClass::Lower],
            false,
        )
        .unwrap();
        let b = build_pool(
            &[CharacterClass::Lower, CharacterClass::Upper],
            false,
        )
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.chars()[0], 'a');
        assert_eq!(a.chars()[26], 'A');
    }

    #[test]
    fn test_build_pool_ignores_duplicate_classes() {
        let pool = build_pool(
            &[CharacterClass::Digits, CharacterClass::Digits],
            false,
        )
        .unwrap();
        assert_eq!(pool.len(), 10);
    }

    #[test]
    fn test_full_pool_size() {
        let pool = build_pool(&CharacterClass::ALL, false).unwrap();
        assert_eq!(pool.len(), 26 + 26 + 10 + SYMBOLS.chars().count());
    }

    #[test]
    fn test_exclude_ambiguous_filters_all_five() {
        let pool = build_pool(&CharacterClass::ALL, true).unwrap();
        for c in AMBIGUOUS.chars() {
            assert!(!pool.contains(c), "pool still contains {c:?}");
        }
        // Exactly the five ambiguous characters are gone
        let full = build_pool(&CharacterClass::ALL, false).unwrap();
        assert_eq!(pool.len(), full.len() - 5);
    }

    #[test]
    fn test_exclude_ambiguous_applies_per_class() {
        let digits = build_pool(&[CharacterClass::Digits], true).unwrap();
        assert!(!digits.contains('0'));
        assert!(!digits.contains('1'));
        assert_eq!(digits.len(), 8);

        let upper = build_pool(&[CharacterClass::Upper], true).unwrap();
        assert!(!upper.contains('O'));
        assert!(!upper.contains('I'));
        assert_eq!(upper.len(), 24);

        let lower = build_pool(&[CharacterClass::Lower], true).unwrap();
        assert!(!lower.contains('l'));
        assert_eq!(lower.len(), 25);
    }

    #[test]
    fn test_symbols_unaffected_by_ambiguous_filter() {
        let pool = build_pool(&[CharacterClass::Symbols], true).unwrap();
        assert_eq!(pool.len(), SYMBOLS.chars().count());
    }
}
