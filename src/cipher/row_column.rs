//! Row/Column (columnar) transposition

use super::{require_non_blank, ClassicalCipher, Result};
use crate::consts::FILLER;
use crate::core::letters::{alphanumerics_only, letters_only, pad_to_multiple, spaced};
use crate::enums::Direction;
use crate::error::ValidationError;
use crate::trace::{StepRecord, Tracer};

/// Writes text row-major under a keyword and reads the columns in the
/// alphabetical order of the keyword's letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowColumnTransposition;

impl RowColumnTransposition {
    /// Uppercased letters of `key`; one column per letter.
    pub fn clean_key(key: &str) -> Result<Vec<char>> {
        require_non_blank(key)?;
        let clean: Vec<char> = letters_only(key).chars().collect();
        if clean.is_empty() {
            return Err(ValidationError::NoKeyLetters);
        }
        Ok(clean)
    }

    /// Column indices in read order: stable sort by key letter, so equal
    /// letters keep their left-to-right order.
    pub fn column_order(key: &[char]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..key.len()).collect();
        order.sort_by_key(|&col| key[col]);
        order
    }
}

/// Key, read rank per column, separator and the grid itself.
fn layout(key: &[char], order: &[usize], grid: &[Vec<char>]) -> String {
    const INDENT: &str = "           ";
    let cols = key.len();
    let mut rank = vec![0usize; cols];
    for (nth, &col) in order.iter().enumerate() {
        rank[col] = nth + 1;
    }

    let mut lines = vec![
        format!("Key:       {}", spaced(key.iter().copied())),
        format!(
            "Order:     {}",
            rank.iter().map(usize::to_string).collect::<Vec<_>>().join(" ")
        ),
        format!("{INDENT}{}", "-".repeat(cols * 2 - 1)),
    ];
    lines.extend(grid.iter().map(|row| format!("{INDENT}{}", spaced(row.iter().copied()))));
    lines.join("\n")
}

fn read_order(order: &[usize]) -> String {
    order
        .iter()
        .map(|col| (col + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ClassicalCipher for RowColumnTransposition {
    fn name(&self) -> &'static str {
        "Row/Column Transposition Cipher"
    }

    fn mathematical_rule(&self) -> &'static str {
        "Transposition Rule: Write the plaintext row by row into a matrix matching the key length.\n\
         Determine the column sequence by sorting the key alphabetically.\n\
         Read columns vertically according to that sequence to produce the ciphertext."
    }

    fn transform(&self, text: &str, key: &str, direction: Direction, tracer: &mut Tracer) -> Result<String> {
        let key = Self::clean_key(key)?;
        let key_str: String = key.iter().collect();
        let cols = key.len();
        let order = Self::column_order(&key);
        let mut clean = alphanumerics_only(text);

        let out = match direction {
            Direction::Encrypt => {
                pad_to_multiple(&mut clean, cols, FILLER);
                tracer.record(|| {
                    StepRecord::new(
                        "Preparation",
                        format!("Clean plaintext and pad with '{FILLER}' to a multiple of {cols} (key length)."),
                    )
                    .states(text, clean.as_str())
                });

                let chars: Vec<char> = clean.chars().collect();
                let grid: Vec<Vec<char>> = chars.chunks(cols).map(<[char]>::to_vec).collect();
                tracer.record(|| {
                    let mut sorted = key.clone();
                    sorted.sort_unstable();
                    StepRecord::new(
                        "Build Matrix",
                        "Write plaintext row by row under the key. Determine extraction order by sorting the key alphabetically.",
                    )
                    .formula(format!("Sorted Key: {}", sorted.iter().collect::<String>()))
                    .states(format!("Key: {key_str}"), format!("Read columns: {}", read_order(&order)))
                    .visualization(layout(&key, &order, &grid))
                });

                let out: String = order
                    .iter()
                    .flat_map(|&col| grid.iter().map(move |row| row[col]))
                    .collect();
                tracer.record(|| {
                    StepRecord::new(
                        "Extract Columns",
                        "Read the matrix downward, taking columns in the sequence determined by the key.",
                    )
                    .states("Matrix Grid", out.as_str())
                });
                out
            }
            Direction::Decrypt => {
                let chars: Vec<char> = clean.chars().collect();
                if chars.len() % cols != 0 {
                    return Err(ValidationError::MisalignedCiphertext {
                        length: chars.len(),
                        columns: cols,
                    });
                }
                let rows = chars.len() / cols;
                tracer.record(|| {
                    StepRecord::new(
                        "Determine Pattern",
                        "Calculate column extraction order based on alphabetical sorting of the key.",
                    )
                    .states(
                        format!("Key: {key_str}"),
                        format!("Columns: {cols}, Rows: {rows}, Read columns: {}", read_order(&order)),
                    )
                });

                let mut grid = vec![vec![FILLER; cols]; rows];
                for (chunk, &col) in chars.chunks(rows.max(1)).zip(&order) {
                    for (row, &c) in chunk.iter().enumerate() {
                        grid[row][col] = c;
                    }
                }
                tracer.record(|| {
                    StepRecord::new(
                        "Rebuild Matrix",
                        "Fill the matrix columns vertically using the ciphertext chunks according to the extraction order.",
                    )
                    .states(clean.as_str(), "Matrix Reconstructed")
                    .visualization(layout(&key, &order, &grid))
                });

                let out: String = grid.iter().flatten().collect();
                tracer.record(|| {
                    StepRecord::new(
                        "Read Row by Row",
                        "Read the reconstructed matrix row by row to reveal the plaintext.",
                    )
                    .states("Reconstructed Matrix", out.as_str())
                });
                out
            }
        };

        Ok(out)
    }
}
