//! Rail Fence transposition

use super::{parse_integer_key, ClassicalCipher, Result};
use crate::consts::MIN_RAILS;
use crate::core::letters::alphanumerics_only;
use crate::enums::Direction;
use crate::error::ValidationError;
use crate::trace::{StepRecord, Tracer};

/// Writes the text along a zig-zag across `rails` rows and reads it row by row.
#[derive(Debug, Clone, Copy, Default)]
pub struct RailFence;

type Grid = Vec<Vec<Option<char>>>;

impl RailFence {
    pub fn parse_rails(&self, key: &str) -> Result<usize> {
        let rails = parse_integer_key(self.name(), key)?;
        if rails < MIN_RAILS {
            return Err(ValidationError::TooFewRails(rails));
        }
        usize::try_from(rails).map_err(|_| ValidationError::TooFewRails(rails))
    }
}

/// Row visited at each column of the zig-zag. Direction flips on the first
/// and last rail.
fn zigzag_rows(len: usize, rails: usize) -> Vec<usize> {
    let mut rows = Vec::with_capacity(len);
    let mut row = 0usize;
    let mut down = true;
    for _ in 0..len {
        if row == 0 {
            down = true;
        } else if row == rails - 1 {
            down = false;
        }
        rows.push(row);
        if down {
            row += 1;
        } else {
            row -= 1;
        }
    }
    rows
}

fn encryption_grid(text: &[char], rails: usize) -> Grid {
    let mut grid = vec![vec![None; text.len()]; rails];
    for (col, (&row, &c)) in zigzag_rows(text.len(), rails).iter().zip(text).enumerate() {
        grid[row][col] = Some(c);
    }
    grid
}

/// Marks the zig-zag cells, then fills them row-major from `text`.
fn decryption_grid(text: &[char], rails: usize) -> Grid {
    let mut marked = vec![vec![false; text.len()]; rails];
    for (col, &row) in zigzag_rows(text.len(), rails).iter().enumerate() {
        marked[row][col] = true;
    }

    let mut chars = text.iter().copied();
    marked
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|is_path| if is_path { chars.next() } else { None })
                .collect()
        })
        .collect()
}

fn read_rows(grid: &Grid) -> String {
    grid.iter().flatten().flatten().collect()
}

fn read_zigzag(grid: &Grid, len: usize) -> String {
    zigzag_rows(len, grid.len())
        .into_iter()
        .enumerate()
        .filter_map(|(col, row)| grid[row][col])
        .collect()
}

fn grid_to_string(grid: &Grid) -> String {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.unwrap_or('.').to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl ClassicalCipher for RailFence {
    fn name(&self) -> &'static str {
        "Rail Fence Cipher"
    }

    fn mathematical_rule(&self) -> &'static str {
        "Transposition Rule: Write the plaintext downwards and diagonally on successive 'rails' of an imaginary fence, \
         then read off each row successively. The key is the number of rails."
    }

    fn transform(&self, text: &str, key: &str, direction: Direction, tracer: &mut Tracer) -> Result<String> {
        let rails = self.parse_rails(key)?;
        let clean = alphanumerics_only(text);
        let chars: Vec<char> = clean.chars().collect();
        // Past `len` rails the zig-zag never turns, so extra rows stay empty.
        let grid_rails = rails.min(chars.len()).max(MIN_RAILS as usize);

        tracer.record(|| {
            let noun = if direction.is_encrypt() { "plaintext" } else { "ciphertext" };
            StepRecord::new(
                "Preparation",
                format!("Clean the {noun} (remove spaces/punctuation, uppercase) to prepare for transposition."),
            )
            .states(text, clean.as_str())
        });

        let out = match direction {
            Direction::Encrypt => {
                let grid = encryption_grid(&chars, grid_rails);
                tracer.record(|| {
                    StepRecord::new(
                        "Zig-Zag Grid Generation",
                        format!("Place characters diagonally up and down across {rails} rails."),
                    )
                    .states(format!("Rails: {rails}"), "Grid built")
                    .visualization(grid_to_string(&grid))
                });
                let out = read_rows(&grid);
                tracer.record(|| {
                    StepRecord::new(
                        "Read Row by Row",
                        "Read the grid from left to right, line by line, to form the ciphertext.",
                    )
                    .formula("Concat(Row_1, Row_2, ..., Row_K)")
                    .states("Completed Grid", out.as_str())
                });
                out
            }
            Direction::Decrypt => {
                let grid = decryption_grid(&chars, grid_rails);
                tracer.record(|| {
                    StepRecord::new(
                        "Grid Reconstruction",
                        "Mark the zig-zag path, then fill those cells row by row using the ciphertext.",
                    )
                    .states(format!("Rails: {rails}"), "Grid reconstructed")
                    .visualization(grid_to_string(&grid))
                });
                let out = read_zigzag(&grid, chars.len());
                tracer.record(|| {
                    StepRecord::new(
                        "Read Zig-Zag Path",
                        "Trace the zig-zag path to read the original plaintext.",
                    )
                    .states("Reconstructed Grid", out.as_str())
                });
                out
            }
        };

        Ok(out)
    }
}
