//! Playfair digraph cipher

use super::{require_non_blank, ClassicalCipher, Result};
use crate::consts::{FILLER, PLAYFAIR_ALPHABET, PLAYFAIR_SIZE};
use crate::core::letters::{letters_only, spaced};
use crate::enums::Direction;
use crate::error::ValidationError;
use crate::trace::{StepRecord, Tracer};

const N: usize = PLAYFAIR_SIZE;

/// Substitutes letter pairs using a 5×5 key square with I and J merged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Playfair;

/// The 5×5 key square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    cells: [[char; N]; N],
}

/// Which Playfair rule a digraph fell under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigraphRule {
    SameRow,
    SameColumn,
    Rectangle,
}

impl DigraphRule {
    pub fn label(self) -> &'static str {
        match self {
            DigraphRule::SameRow => "Same Row",
            DigraphRule::SameColumn => "Same Column",
            DigraphRule::Rectangle => "Rectangle",
        }
    }

    fn explanation(self, direction: Direction) -> &'static str {
        match (self, direction) {
            (DigraphRule::SameRow, Direction::Encrypt) => "each letter moves one column to the right.",
            (DigraphRule::SameRow, Direction::Decrypt) => "each letter moves one column to the left.",
            (DigraphRule::SameColumn, Direction::Encrypt) => "each letter moves one row down.",
            (DigraphRule::SameColumn, Direction::Decrypt) => "each letter moves one row up.",
            (DigraphRule::Rectangle, _) => "each letter keeps its row and takes the other letter's column.",
        }
    }
}

impl KeySquare {
    /// Key letters first (J merged into I, first occurrence wins), then the
    /// rest of the alphabet in order.
    pub fn from_key(key: &str) -> Self {
        let mut cells = [[' '; N]; N];
        let mut used = [false; 26];
        let key = merge_j(&letters_only(key));

        let mut slot = 0;
        for c in key.chars().chain(PLAYFAIR_ALPHABET.chars()) {
            let idx = (c as u8 - b'A') as usize;
            if !used[idx] {
                used[idx] = true;
                cells[slot / N][slot % N] = c;
                slot += 1;
            }
        }
        Self { cells }
    }

    pub fn position(&self, target: char) -> Result<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .find_map(|(r, row)| row.iter().position(|&c| c == target).map(|c| (r, c)))
            .ok_or(ValidationError::CharacterNotInMatrix(target))
    }

    /// Applies the Playfair rule to one pair.
    pub fn digraph(&self, a: char, b: char, direction: Direction) -> Result<(char, char, DigraphRule)> {
        let (r1, c1) = self.position(a)?;
        let (r2, c2) = self.position(b)?;
        // +4 is -1 in mod-5 arithmetic
        let shift = if direction.is_encrypt() { 1 } else { N - 1 };

        let out = if r1 == r2 {
            (
                self.cells[r1][(c1 + shift) % N],
                self.cells[r2][(c2 + shift) % N],
                DigraphRule::SameRow,
            )
        } else if c1 == c2 {
            (
                self.cells[(r1 + shift) % N][c1],
                self.cells[(r2 + shift) % N][c2],
                DigraphRule::SameColumn,
            )
        } else {
            (self.cells[r1][c2], self.cells[r2][c1], DigraphRule::Rectangle)
        };
        Ok(out)
    }

    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| spaced(row.iter().copied()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn merge_j(text: &str) -> String {
    text.replace('J', "I")
}

/// Letters only, J→I, a filler between doubled letters that would share a
/// pair, and a trailing filler for an odd count.
pub fn prepare_plaintext(text: &str) -> String {
    let letters: Vec<char> = merge_j(&letters_only(text)).chars().collect();
    let mut out = String::with_capacity(letters.len() * 2);
    let mut len = 0usize;
    for (i, &c) in letters.iter().enumerate() {
        out.push(c);
        len += 1;
        if len % 2 == 1 && letters.get(i + 1) == Some(&c) {
            out.push(FILLER);
            len += 1;
        }
    }
    if len % 2 == 1 {
        out.push(FILLER);
    }
    out
}

impl ClassicalCipher for Playfair {
    fn name(&self) -> &'static str {
        "Playfair Cipher"
    }

    fn mathematical_rule(&self) -> &'static str {
        "1. Generate 5x5 Matrix from key (I/J combined).\n\
         2. Split text into digraphs (pairs). Insert 'X' if a pair has identical letters.\n\
         3. Same Row: Shift Right (Enc) / Left (Dec).\n\
         4. Same Column: Shift Down (Enc) / Up (Dec).\n\
         5. Rectangle: Swap columns."
    }

    fn transform(&self, text: &str, key: &str, direction: Direction, tracer: &mut Tracer) -> Result<String> {
        require_non_blank(key)?;
        let square = KeySquare::from_key(key);

        // Ciphertext is already paired, so only the letter filter applies.
        let prepared = match direction {
            Direction::Encrypt => prepare_plaintext(text),
            Direction::Decrypt => {
                let letters = merge_j(&letters_only(text));
                if letters.len() % 2 != 0 {
                    return Err(ValidationError::OddDigraphText(letters.len()));
                }
                letters
            }
        };

        tracer.record(|| {
            StepRecord::new("Matrix Generation", format!("Generate 5x5 matrix using the key '{key}'."))
                .states(format!("Key: {key}"), "Matrix Generated")
                .visualization(square.render())
        });
        tracer.record(|| {
            let description = match direction {
                Direction::Encrypt => format!(
                    "Remove non-letters, replace 'J' with 'I', insert '{FILLER}' between identical letters \
                     of a pair, and pad with '{FILLER}' if the length is odd."
                ),
                Direction::Decrypt => {
                    "Remove non-letters and replace 'J' with 'I'; the ciphertext is already split into pairs.".to_owned()
                }
            };
            let pairs: Vec<&str> = prepared
                .as_bytes()
                .chunks(2)
                .filter_map(|pair| std::str::from_utf8(pair).ok())
                .collect();
            StepRecord::new("Prepare Text", description)
                .formula(format!("Digraphs: {}", pairs.join(" ")))
                .states(text, prepared.as_str())
        });

        let verb = if direction.is_encrypt() { "Encrypt" } else { "Decrypt" };
        let bytes = prepared.as_bytes();
        let mut out = String::with_capacity(prepared.len());
        for (i, pair) in bytes.chunks(2).enumerate() {
            let (a, b) = (pair[0] as char, pair[1] as char);
            let (x, y, rule) = square.digraph(a, b, direction)?;
            out.push(x);
            out.push(y);

            tracer.record(|| {
                StepRecord::new(
                    format!("{verb} digraph '{a}{b}'"),
                    format!("Rule applied: {}: {}", rule.label(), rule.explanation(direction)),
                )
                .formula(format!("{a}{b} -> {x}{y}"))
                .states(&prepared[..(i + 1) * 2], out.as_str())
            });
        }

        Ok(out)
    }
}
