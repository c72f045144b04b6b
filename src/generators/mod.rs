// src/generators/mod.rs
use thiserror::Error;

pub mod password;
pub mod pool;
pub mod strength;

pub use password::PasswordGenerator;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("No characters to sample from - select at least one character class")]
    NoClassesSelected,

    #[error("Invalid password length: {0} (must be at least 1)")]
    InvalidLength(usize),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
