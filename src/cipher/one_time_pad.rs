//! One-Time Pad over letters

use super::{require_non_blank, ClassicalCipher, Result};
use crate::core::letters::{letters_only, position, upper};
use crate::core::mod26;
use crate::enums::Direction;
use crate::error::ValidationError;
use crate::trace::{StepRecord, Tracer};

/// Vigenère without wraparound: every text letter consumes its own key letter.
///
/// Both text and key are reduced to uppercase letters before use, so
/// spaces and punctuation are dropped from the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneTimePad;

impl OneTimePad {
    /// Cleans `key` and checks it covers `required` letters.
    pub fn clean_key(key: &str, required: usize) -> Result<String> {
        require_non_blank(key)?;
        let clean = letters_only(key);
        if clean.len() < required {
            return Err(ValidationError::PadTooShort {
                required,
                actual: clean.len(),
            });
        }
        Ok(clean)
    }
}

impl ClassicalCipher for OneTimePad {
    fn name(&self) -> &'static str {
        "One-Time Pad Cipher"
    }

    fn mathematical_rule(&self) -> &'static str {
        "Requirement: The key must be completely random, never reused, and at least as long as the plaintext.\n\
         Encryption: C_i = (P_i + K_i) mod 26\n\
         Decryption: P_i = (C_i - K_i + 26) mod 26\n\
         Where K_i is the shift value (A=0, B=1, ..., Z=25) of the key character."
    }

    fn transform(&self, text: &str, key: &str, direction: Direction, tracer: &mut Tracer) -> Result<String> {
        let clean_text = letters_only(text);
        let clean_key = Self::clean_key(key, clean_text.len())?;

        tracer.record(|| {
            let noun = if direction.is_encrypt() { "plaintext" } else { "ciphertext" };
            StepRecord::new(
                "Preparation & Validation",
                format!("Clean the {noun} and ensure the key is at least as long as the {noun}."),
            )
            .states(
                format!("Original Text: {text}\nOriginal Key: {key}"),
                format!("Clean Text: {clean_text}\nClean Key: {clean_key}"),
            )
        });

        let mut out = String::with_capacity(clean_text.len());
        // Both strings are ASCII letters here, so bytes are characters.
        for (i, (t, k)) in clean_text.bytes().zip(clean_key.bytes()).enumerate() {
            let (t, k_char) = (t as char, k as char);
            let p = position(t).unwrap_or_default();
            let k = position(k_char).unwrap_or_default();
            let r = match direction {
                Direction::Encrypt => mod26(p + k),
                Direction::Decrypt => mod26(p - k),
            };
            out.push(upper(r));

            tracer.record(|| {
                let (title, formula) = match direction {
                    Direction::Encrypt => (
                        format!("Encrypt character '{t}'"),
                        format!("C = ({p} + {k}) mod 26 = {r}"),
                    ),
                    Direction::Decrypt => (
                        format!("Decrypt character '{t}'"),
                        format!("P = ({p} - {k} + 26) mod 26 = {r}"),
                    ),
                };
                StepRecord::new(
                    title,
                    format!("Use perfectly aligned key character '{k_char}' (Shift: {k})."),
                )
                .formula(formula)
                .states(&clean_text[..=i], out.as_str())
            });
        }

        Ok(out)
    }
}
