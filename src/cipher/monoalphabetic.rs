//! Monoalphabetic substitution cipher

use super::{ClassicalCipher, Result};
use crate::consts::ALPHABET;
use crate::core::letters::{position, prefix_through, spaced, upper, with_case_of};
use crate::enums::Direction;
use crate::error::ValidationError;
use crate::trace::{StepRecord, Tracer};

const KEY_LEN: usize = 26;

/// Substitutes each letter through a 26-letter permutation key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Monoalphabetic;

impl Monoalphabetic {
    /// Validates `key` and returns it uppercased, one letter per alphabet slot.
    pub fn parse_key(key: &str) -> Result<Vec<char>> {
        if key.trim().is_empty() {
            return Err(ValidationError::EmptyKey);
        }
        let actual = key.chars().count();
        if actual != KEY_LEN {
            return Err(ValidationError::KeyLength {
                expected: KEY_LEN,
                actual,
            });
        }

        let mut seen = [false; KEY_LEN];
        let mut table = Vec::with_capacity(KEY_LEN);
        for c in key.chars() {
            let pos = position(c).ok_or(ValidationError::NonLetterInKey(c))? as usize;
            let c = c.to_ascii_uppercase();
            if seen[pos] {
                return Err(ValidationError::DuplicateKeyLetter(c));
            }
            seen[pos] = true;
            table.push(c);
        }
        Ok(table)
    }
}

fn mapping_table(top: &str, bottom: &str) -> String {
    format!("Plain:  {}\nCipher: {}", spaced(top.chars()), spaced(bottom.chars()))
}

impl ClassicalCipher for Monoalphabetic {
    fn name(&self) -> &'static str {
        "Monoalphabetic Cipher"
    }

    fn mathematical_rule(&self) -> &'static str {
        "Substitution Rule: Each letter in the plaintext is replaced by the corresponding letter in the 26-letter key alphabet.\n\
         Example: A -> Key[0], B -> Key[1], ..., Z -> Key[25]"
    }

    fn transform(&self, text: &str, key: &str, direction: Direction, tracer: &mut Tracer) -> Result<String> {
        let table = Self::parse_key(key)?;
        let key_str: String = table.iter().collect();

        tracer.record(|| match direction {
            Direction::Encrypt => StepRecord::new("Alphabet Mapping", "Map the standard alphabet to the provided key.")
                .states("Standard Alphabet", "Substitution Key Mapping generated")
                .visualization(mapping_table(ALPHABET, &key_str)),
            Direction::Decrypt => {
                StepRecord::new("Reverse Alphabet Mapping", "Map the provided key back to the standard alphabet.")
                    .states("Substitution Key Mapping", "Reverse Mapping ready")
                    .visualization(mapping_table(&key_str, ALPHABET))
            }
        });

        let mut out = String::with_capacity(text.len());
        for (idx, ch) in text.char_indices() {
            let Some(p) = position(ch) else {
                out.push(ch);
                continue;
            };
            let from = ch.to_ascii_uppercase();
            let (index, to) = match direction {
                Direction::Encrypt => (p, table[p as usize]),
                Direction::Decrypt => {
                    let index = table
                        .iter()
                        .position(|&k| k == from)
                        .ok_or(ValidationError::CharacterNotInKey(from))? as i64;
                    (index, upper(index))
                }
            };
            let mapped = position(to).map_or(to, |pos| with_case_of(pos, ch));
            out.push(mapped);

            tracer.record(|| {
                let step = match direction {
                    Direction::Encrypt => StepRecord::new(
                        format!("Substitute '{ch}'"),
                        format!(
                            "Find the index of '{from}' in the standard alphabet ({index}). \
                             Replace it with the character at index {index} in the key: '{to}'."
                        ),
                    )
                    .formula(format!("P='{from}' -> Index={index} -> C='{to}'")),
                    Direction::Decrypt => StepRecord::new(
                        format!("Reverse substitute '{ch}'"),
                        format!(
                            "Find the index of '{from}' in the key ({index}). \
                             Replace it with the character at index {index} in the standard alphabet: '{to}'."
                        ),
                    )
                    .formula(format!("C='{from}' -> Index={index} -> P='{to}'")),
                };
                step.states(prefix_through(text, idx, ch), out.as_str())
            });
        }

        Ok(out)
    }
}
