//! Hill matrix cipher (2×2 and 3×3)

use super::{ClassicalCipher, Result};
use crate::consts::{ALPHABET_LEN, FILLER, HILL_KEY_LENGTHS};
use crate::core::letters::{letters_only, pad_to_multiple, position, upper};
use crate::core::{mod26, mod_inverse};
use crate::enums::Direction;
use crate::error::ValidationError;
use crate::trace::{StepRecord, Tracer};

/// Multiplies blocks of letters by a key matrix modulo 26.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hill;

/// Square matrix of residues mod 26, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    n: usize,
    cells: Vec<i64>,
}

impl KeyMatrix {
    /// Builds the matrix from the letters of `key` (A=0 .. Z=25).
    pub fn from_key(key: &str) -> Result<Self> {
        let letters = letters_only(key);
        if !HILL_KEY_LENGTHS.contains(&letters.len()) {
            return Err(ValidationError::HillKeyLength(letters.len()));
        }
        let n = if letters.len() == 4 { 2 } else { 3 };
        let cells = letters.chars().filter_map(position).collect();
        Ok(Self { n, cells })
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> i64 {
        self.cells[r * self.n + c]
    }

    /// Determinant reduced mod 26 (cofactor expansion along the first row for 3×3).
    pub fn determinant(&self) -> i64 {
        let m = |r, c| self.at(r, c);
        let det = if self.n == 2 {
            m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0)
        } else {
            m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
                - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
                + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
        };
        mod26(det)
    }

    /// `det(K)⁻¹ · adj(K) mod 26`, or `NotInvertible` naming the determinant.
    pub fn inverse(&self) -> Result<(Self, i64, i64)> {
        let det = self.determinant();
        let det_inv = mod_inverse(det, ALPHABET_LEN).ok_or(ValidationError::NotInvertible { determinant: det })?;

        let m = |r, c| self.at(r, c);
        let adj: Vec<i64> = if self.n == 2 {
            vec![m(1, 1), -m(0, 1), -m(1, 0), m(0, 0)]
        } else {
            vec![
                m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1),
                -(m(0, 1) * m(2, 2) - m(0, 2) * m(2, 1)),
                m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1),
                -(m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0)),
                m(0, 0) * m(2, 2) - m(0, 2) * m(2, 0),
                -(m(0, 0) * m(1, 2) - m(0, 2) * m(1, 0)),
                m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0),
                -(m(0, 0) * m(2, 1) - m(0, 1) * m(2, 0)),
                m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0),
            ]
        };
        let cells = adj.into_iter().map(|a| mod26(a * det_inv)).collect();
        Ok((Self { n: self.n, cells }, det, det_inv))
    }

    /// `self · v mod 26`.
    pub fn multiply(&self, v: &[i64]) -> Vec<i64> {
        (0..self.n)
            .map(|r| mod26((0..self.n).map(|c| self.at(r, c) * v[c]).sum()))
            .collect()
    }

    pub fn render(&self) -> String {
        self.cells
            .chunks(self.n)
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|v| format!("{v:>2}")).collect();
                format!("[ {} ]", cells.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn join(v: &[i64]) -> String {
    v.iter().map(i64::to_string).collect::<Vec<_>>().join(", ")
}

impl ClassicalCipher for Hill {
    fn name(&self) -> &'static str {
        "Hill Cipher"
    }

    fn mathematical_rule(&self) -> &'static str {
        "Encryption: C = (K * P) mod 26\n\
         Decryption: P = (K^-1 * C) mod 26\n\
         Where K is an NxN matrix (2x2 or 3x3) converted from the key string."
    }

    fn transform(&self, text: &str, key: &str, direction: Direction, tracer: &mut Tracer) -> Result<String> {
        let key_matrix = KeyMatrix::from_key(key)?;
        let n = key_matrix.dimension();

        tracer.record(|| {
            StepRecord::new(
                "Key Matrix Generation",
                format!("Generate {n}x{n} matrix from key '{key}'. A=0, B=1, ... Z=25."),
            )
            .states(format!("Key: {key}"), format!("{n}x{n} Matrix created"))
            .visualization(key_matrix.render())
        });

        let (matrix, label) = match direction {
            Direction::Encrypt => (key_matrix, "Matrix"),
            Direction::Decrypt => {
                let (inverse, det, det_inv) = key_matrix.inverse()?;
                tracer.record(|| {
                    StepRecord::new(
                        "Inverse Matrix Calculation",
                        format!(
                            "det(K) mod 26 = {det}, whose inverse modulo 26 is {det_inv}. \
                             Multiply the adjugate by {det_inv} and reduce modulo 26."
                        ),
                    )
                    .formula("K⁻¹ = det(K)⁻¹ · adj(K) mod 26")
                    .states("Original Matrix", "Inverse Matrix generated")
                    .visualization(inverse.render())
                });
                (inverse, "InvMatrix")
            }
        };

        let mut prepared = letters_only(text);
        pad_to_multiple(&mut prepared, n, FILLER);
        tracer.record(|| {
            StepRecord::new(
                "Text Formatting",
                format!("Remove non-letters and pad with '{FILLER}' so the length is a multiple of {n}."),
            )
            .states(text, prepared.as_str())
        });

        let mut out = String::with_capacity(prepared.len());
        for (i, block) in prepared.as_bytes().chunks(n).enumerate() {
            let vector: Vec<i64> = block.iter().filter_map(|&b| position(b as char)).collect();
            let result = matrix.multiply(&vector);
            let block_out: String = result.iter().map(|&v| upper(v)).collect();
            out.push_str(&block_out);

            tracer.record(|| {
                let block_in = &prepared[i * n..(i + 1) * n];
                StepRecord::new(
                    format!("Multiply block '{block_in}'"),
                    format!(
                        "Convert '{block_in}' to numbers, multiply by the {} matrix, apply modulo 26, and convert back to letters.",
                        if direction.is_encrypt() { "key" } else { "inverse" }
                    ),
                )
                .formula(format!(
                    "[ {} ] * {label} mod 26 = [ {} ] = '{block_out}'",
                    join(&vector),
                    join(&result)
                ))
                .states(&prepared[..(i + 1) * n], out.as_str())
            });
        }

        Ok(out)
    }
}
