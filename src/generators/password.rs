// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::ThreadRng;
use rand::Rng;

use super::pool::{build_pool, CharacterPool};
use super::{GenerateError, Result};
use crate::models::GenerationOptions;

// Tables for the pronounceable construction
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r',
    's', 't', 'v', 'w', 'x', 'y', 'z',
];
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

// Small fixed set used for the single symbol overwrite
pub const PRONOUNCEABLE_SYMBOLS: &[char] = &['!', '@', '#', '$', '%'];

/// Draw `length` characters independently and uniformly from the pool.
///
/// Sampling is with replacement, so repeats are allowed and expected and any
/// length >= 1 is valid. The randomness comes from a general-purpose PRNG
/// supplied by the caller; no cryptographic guarantee is made.
pub fn generate_from_pool<R: Rng>(
    rng: &mut R,
    pool: &CharacterPool,
    length: usize,
) -> Result<String> {
    if length == 0 {
        return Err(GenerateError::InvalidLength(0));
    }
    if pool.is_empty() {
        return Err(GenerateError::NoClassesSelected);
    }

    let chars = pool.chars();
    let dist = Uniform::from(0..chars.len());

    Ok((0..length).map(|_| chars[dist.sample(rng)]).collect())
}

/// Build a password from alternating consonant/vowel syllable patterns.
///
/// The base string starts with a consonant and alternates strictly. With
/// `include_numbers` (and length > 4) one position is overwritten with a
/// random digit; with `include_symbols` (and length > 6) one independently
/// chosen position is overwritten with a character from `!@#$%`; with
/// `include_uppercase` every character is uppercased with probability 0.3.
///
/// The overwrites touch one position each and the uppercasing is
/// probabilistic, so the output is not guaranteed to contain a digit, a
/// symbol, or an uppercase letter - this is a readability heuristic, not a
/// composition guarantee.
pub fn generate_pronounceable<R: Rng>(
    rng: &mut R,
    length: usize,
    include_numbers: bool,
    include_uppercase: bool,
    include_symbols: bool,
) -> Result<String> {
    if length == 0 {
        return Err(GenerateError::InvalidLength(0));
    }

    let mut chars: Vec<char> = (0..length)
        .map(|i| {
            if i % 2 == 0 {
                CONSONANTS[rng.gen_range(0..CONSONANTS.len())]
            } else {
                VOWELS[rng.gen_range(0..VOWELS.len())]
            }
        })
        .collect();

    if include_numbers && length > 4 {
        let pos = rng.gen_range(0..length);
        chars[pos] = rng.gen_range(b'0'..=b'9') as char;
    }

    if include_symbols && length > 6 {
        // Position is drawn independently of the digit's and may land on it
        let pos = rng.gen_range(0..length);
        chars[pos] = PRONOUNCEABLE_SYMBOLS[rng.gen_range(0..PRONOUNCEABLE_SYMBOLS.len())];
    }

    if include_uppercase {
        for c in chars.iter_mut() {
            if rng.gen_bool(0.3) {
                *c = c.to_ascii_uppercase();
            }
        }
    }

    let mut password: String = chars.into_iter().collect();
    // The construction above yields exactly `length` characters; this only
    // guards against a future step growing the string
    password.truncate(length);

    Ok(password)
}

/// Password generator with an explicit random source.
///
/// `new()` uses the thread-local RNG; tests inject a seeded source through
/// `with_rng` to get reproducible output.
pub struct PasswordGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    // Route to the mode selected by the options, validating up front
    pub fn generate(&mut self, options: &GenerationOptions) -> Result<String> {
        if options.length == 0 {
            return Err(GenerateError::InvalidLength(0));
        }

        if options.pronounceable {
            generate_pronounceable(
                &mut self.rng,
                options.length,
                options.include_numbers,
                options.include_uppercase,
                options.include_symbols,
            )
        } else {
            let pool = build_pool(&options.character_classes(), options.exclude_ambiguous)?;
            generate_from_pool(&mut self.rng, &pool, options.length)
        }
    }
}
