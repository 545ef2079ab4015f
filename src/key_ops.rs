// src/key_ops.rs
//! Random key generation for every cipher variant
//!
//! Keys are plain strings in exactly the shape each cipher parses, so a
//! generated key can be fed straight back into `encrypt`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::consts::{ALPHABET, ALPHABET_LEN, MIN_RAILS};
use crate::core::letters::{letters_only, upper};
use crate::core::mod_inverse;
use crate::cipher::hill::KeyMatrix;
use crate::enums::CipherKind;
use crate::error::ValidationError;

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    upper(rng.random_range(0..ALPHABET_LEN))
}

/// Caesar shift in `1..=25` (never the identity).
pub fn random_shift() -> String {
    rand::rng().random_range(1..ALPHABET_LEN).to_string()
}

/// Shuffled alphabet, usable as a Monoalphabetic key.
pub fn random_permutation_key() -> String {
    let mut letters: Vec<char> = ALPHABET.chars().collect();
    letters.shuffle(&mut rand::rng());
    letters.into_iter().collect()
}

/// `len` uppercase letters, usable as a One-Time Pad.
pub fn random_pad(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len).map(|_| random_letter(&mut rng)).collect()
}

/// Keyword for Vigenère, Playfair or Row/Column (at least one letter).
pub fn random_keyword(len: usize) -> String {
    random_pad(len.max(1))
}

/// Rail count in `2..=max` (`max` is raised to 2 if lower).
pub fn random_rails(max: usize) -> String {
    let max = max.max(MIN_RAILS as usize);
    rand::rng().random_range(MIN_RAILS as usize..=max).to_string()
}

/// Hill key for an `n`×`n` matrix (n = 2 or 3) that is invertible mod 26.
pub fn random_hill_key(n: usize) -> Result<String, ValidationError> {
    if n != 2 && n != 3 {
        return Err(ValidationError::HillKeyLength(n * n));
    }
    loop {
        let key = random_pad(n * n);
        let matrix = KeyMatrix::from_key(&key)?;
        if mod_inverse(matrix.determinant(), ALPHABET_LEN).is_some() {
            return Ok(key);
        }
    }
}

/// A random key valid for `kind`; One-Time Pad keys cover the letters of `text`
/// (at least one letter, since a blank pad is rejected).
pub fn random_key_for(kind: CipherKind, text: &str) -> Result<String, ValidationError> {
    let key = match kind {
        CipherKind::Caesar => random_shift(),
        CipherKind::Monoalphabetic => random_permutation_key(),
        CipherKind::Vigenere | CipherKind::Playfair => random_keyword(8),
        CipherKind::RowColumn => random_keyword(5),
        CipherKind::OneTimePad => random_pad(letters_only(text).len().max(1)),
        CipherKind::RailFence => random_rails(5),
        CipherKind::Hill => random_hill_key(2)?,
    };
    Ok(key)
}
