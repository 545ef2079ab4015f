//! Vigenère cipher

use super::{require_non_blank, ClassicalCipher, Result};
use crate::core::letters::{letters_only, position, prefix_through, with_case_of};
use crate::core::mod26;
use crate::enums::Direction;
use crate::error::ValidationError;
use crate::trace::{StepRecord, Tracer};

/// Caesar shifts driven by a repeating keyword.
///
/// The key index only advances on letters, so punctuation and spaces in the
/// text do not consume key characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vigenere;

impl Vigenere {
    /// Letters of `key`, uppercased; fails if there are none.
    pub fn clean_key(key: &str) -> Result<Vec<char>> {
        require_non_blank(key)?;
        let clean: Vec<char> = letters_only(key).chars().collect();
        if clean.is_empty() {
            return Err(ValidationError::NoKeyLetters);
        }
        Ok(clean)
    }
}

impl ClassicalCipher for Vigenere {
    fn name(&self) -> &'static str {
        "Vigenère Cipher"
    }

    fn mathematical_rule(&self) -> &'static str {
        "1. Repeat the key to match the length of the plaintext.\n\
         2. Encryption: C_i = (P_i + K_i) mod 26\n\
         3. Decryption: P_i = (C_i - K_i + 26) mod 26\n\
         Where K_i is the shift value (A=0, B=1, ..., Z=25) of the key character."
    }

    fn transform(&self, text: &str, key: &str, direction: Direction, tracer: &mut Tracer) -> Result<String> {
        let clean = Self::clean_key(key)?;

        tracer.record(|| {
            StepRecord::new(
                "Key Preparation",
                "Clean the key to contain only letters and convert to uppercase.",
            )
            .states(
                format!("Original Key: {key}"),
                format!("Clean Key: {}", clean.iter().collect::<String>()),
            )
        });

        let mut out = String::with_capacity(text.len());
        let mut key_index = 0usize;

        for (idx, ch) in text.char_indices() {
            let Some(p) = position(ch) else {
                out.push(ch);
                continue;
            };
            let k_char = clean[key_index % clean.len()];
            let k = position(k_char).unwrap_or_default();
            let r = match direction {
                Direction::Encrypt => mod26(p + k),
                Direction::Decrypt => mod26(p - k),
            };
            out.push(with_case_of(r, ch));

            tracer.record(|| {
                let (title, formula) = match direction {
                    Direction::Encrypt => (
                        format!("Encrypt character '{ch}'"),
                        format!("C = ({p} + {k}) mod 26 = {r}"),
                    ),
                    Direction::Decrypt => (
                        format!("Decrypt character '{ch}'"),
                        format!("P = ({p} - {k} + 26) mod 26 = {r}"),
                    ),
                };
                StepRecord::new(
                    title,
                    format!("Use key character '{k_char}' (position {}, shift {k}).", key_index % clean.len()),
                )
                .formula(formula)
                .states(prefix_through(text, idx, ch), out.as_str())
            });

            key_index += 1;
        }

        Ok(out)
    }
}
