// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Every way a cipher call can reject its input.
///
/// Raised before any output is produced; messages are meant for direct
/// display to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Key cannot be empty.")]
    EmptyKey,

    #[error("Key for {cipher} must be an integer, got '{key}'.")]
    NotAnInteger { cipher: &'static str, key: String },

    #[error("Rail Fence cipher needs at least 2 rails, got {0}.")]
    TooFewRails(i64),

    #[error("Monoalphabetic cipher key must contain exactly {expected} characters, got {actual}.")]
    KeyLength { expected: usize, actual: usize },

    #[error("Key must contain only letters, found '{0}'.")]
    NonLetterInKey(char),

    #[error("Key letter '{0}' appears more than once; all 26 letters must be unique.")]
    DuplicateKeyLetter(char),

    #[error("Key must contain at least one letter.")]
    NoKeyLetters,

    #[error(
        "One-Time Pad requires a key at least as long as the letters in the text. \
         Text length: {required}, Key length: {actual}"
    )]
    PadTooShort { required: usize, actual: usize },

    #[error("Hill key must have 4 (2x2) or 9 (3x3) letters, got {0}.")]
    HillKeyLength(usize),

    #[error("The key matrix is not invertible modulo 26. Determinant: {determinant}")]
    NotInvertible { determinant: i64 },

    #[error("Character '{0}' not found in key.")]
    CharacterNotInKey(char),

    #[error("Character '{0}' not found in matrix.")]
    CharacterNotInMatrix(char),

    #[error("Playfair ciphertext must have an even number of letters, got {0}.")]
    OddDigraphText(usize),

    #[error("Ciphertext length {length} is not a multiple of the key length {columns}.")]
    MisalignedCiphertext { length: usize, columns: usize },

    #[error("Unknown cipher: '{0}'")]
    UnknownCipher(String),
}

/// Failures outside the cipher engine itself (config, export).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
