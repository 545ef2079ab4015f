//! Caesar (shift) cipher

use super::{parse_integer_key, ClassicalCipher, Result};
use crate::core::letters::{position, prefix_through, with_case_of};
use crate::core::mod26;
use crate::enums::Direction;
use crate::trace::{StepRecord, Tracer};

/// Shifts every letter by a fixed amount; the key is an integer of any sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct Caesar;

impl ClassicalCipher for Caesar {
    fn name(&self) -> &'static str {
        "Caesar Cipher"
    }

    fn mathematical_rule(&self) -> &'static str {
        "Encryption: C = (P + K) mod 26\nDecryption: P = (C - K) mod 26\nWhere K is the shift amount."
    }

    fn transform(&self, text: &str, key: &str, direction: Direction, tracer: &mut Tracer) -> Result<String> {
        let shift = mod26(parse_integer_key(self.name(), key)?);
        let mut out = String::with_capacity(text.len());

        for (idx, ch) in text.char_indices() {
            let Some(p) = position(ch) else {
                out.push(ch);
                continue;
            };
            let r = match direction {
                Direction::Encrypt => mod26(p + shift),
                Direction::Decrypt => mod26(p - shift),
            };
            let c = with_case_of(r, ch);
            out.push(c);

            tracer.record(|| {
                let (title, description, formula) = match direction {
                    Direction::Encrypt => (
                        format!("Shift character '{ch}'"),
                        format!("Shift '{ch}' by {shift} positions in the alphabet to get '{c}'."),
                        format!("C = ({p} + {shift}) mod 26 = {r}"),
                    ),
                    Direction::Decrypt => (
                        format!("Shift character '{ch}' back"),
                        format!("Shift '{ch}' backward by {shift} positions in the alphabet to get '{c}'."),
                        format!("P = ({p} - {shift}) mod 26 = {r}"),
                    ),
                };
                StepRecord::new(title, description)
                    .formula(formula)
                    .states(prefix_through(text, idx, ch), out.as_str())
            });
        }

        Ok(out)
    }
}
