// src/cipher/mod.rs
//! Classical cipher engine
//!
//! Every variant implements one routine, [`ClassicalCipher::transform`],
//! which computes the result and narrates it through a [`Tracer`]. The
//! four public operations are thin wrappers around it, so a result and
//! its step-by-step explanation always come from the same code.

use tracing::debug;

use crate::enums::{CipherKind, Direction};
use crate::error::ValidationError;
use crate::trace::{StepRecord, Tracer};

pub mod caesar;
pub mod hill;
pub mod monoalphabetic;
pub mod one_time_pad;
pub mod playfair;
pub mod rail_fence;
pub mod registry;
pub mod row_column;
pub mod vigenere;

pub use caesar::Caesar;
pub use hill::Hill;
pub use monoalphabetic::Monoalphabetic;
pub use one_time_pad::OneTimePad;
pub use playfair::Playfair;
pub use rail_fence::RailFence;
pub use registry::CipherRegistry;
pub use row_column::RowColumnTransposition;
pub use vigenere::Vigenere;

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Shared capability contract of all classical ciphers.
pub trait ClassicalCipher {
    /// Display name, unique within a registry.
    fn name(&self) -> &'static str;

    /// Static explanation of the rule the cipher applies.
    fn mathematical_rule(&self) -> &'static str;

    /// Runs the cipher in `direction`, narrating each operation to `tracer`.
    ///
    /// Fails before producing any output when `key` is invalid.
    fn transform(&self, text: &str, key: &str, direction: Direction, tracer: &mut Tracer) -> Result<String>;

    fn encrypt(&self, text: &str, key: &str) -> Result<String> {
        debug!(cipher = self.name(), "encrypt");
        self.transform(text, key, Direction::Encrypt, &mut Tracer::silent())
    }

    fn decrypt(&self, text: &str, key: &str) -> Result<String> {
        debug!(cipher = self.name(), "decrypt");
        self.transform(text, key, Direction::Decrypt, &mut Tracer::silent())
    }

    fn encryption_steps(&self, text: &str, key: &str) -> Result<Vec<StepRecord>> {
        self.steps(text, key, Direction::Encrypt)
    }

    fn decryption_steps(&self, text: &str, key: &str) -> Result<Vec<StepRecord>> {
        self.steps(text, key, Direction::Decrypt)
    }

    /// Traced run in either direction. The last step's `output_state` is
    /// always the value the untraced call returns.
    fn steps(&self, text: &str, key: &str, direction: Direction) -> Result<Vec<StepRecord>> {
        let mut tracer = Tracer::recording();
        let result = self.transform(text, key, direction, &mut tracer)?;
        let steps = tracer.finish(text, &result);
        debug!(cipher = self.name(), ?direction, steps = steps.len(), "traced");
        Ok(steps)
    }
}

impl ClassicalCipher for CipherKind {
    fn name(&self) -> &'static str {
        match self {
            CipherKind::Caesar => Caesar.name(),
            CipherKind::Monoalphabetic => Monoalphabetic.name(),
            CipherKind::Playfair => Playfair.name(),
            CipherKind::Hill => Hill.name(),
            CipherKind::Vigenere => Vigenere.name(),
            CipherKind::OneTimePad => OneTimePad.name(),
            CipherKind::RailFence => RailFence.name(),
            CipherKind::RowColumn => RowColumnTransposition.name(),
        }
    }

    fn mathematical_rule(&self) -> &'static str {
        match self {
            CipherKind::Caesar => Caesar.mathematical_rule(),
            CipherKind::Monoalphabetic => Monoalphabetic.mathematical_rule(),
            CipherKind::Playfair => Playfair.mathematical_rule(),
            CipherKind::Hill => Hill.mathematical_rule(),
            CipherKind::Vigenere => Vigenere.mathematical_rule(),
            CipherKind::OneTimePad => OneTimePad.mathematical_rule(),
            CipherKind::RailFence => RailFence.mathematical_rule(),
            CipherKind::RowColumn => RowColumnTransposition.mathematical_rule(),
        }
    }

    fn transform(&self, text: &str, key: &str, direction: Direction, tracer: &mut Tracer) -> Result<String> {
        match self {
            CipherKind::Caesar => Caesar.transform(text, key, direction, tracer),
            CipherKind::Monoalphabetic => Monoalphabetic.transform(text, key, direction, tracer),
            CipherKind::Playfair => Playfair.transform(text, key, direction, tracer),
            CipherKind::Hill => Hill.transform(text, key, direction, tracer),
            CipherKind::Vigenere => Vigenere.transform(text, key, direction, tracer),
            CipherKind::OneTimePad => OneTimePad.transform(text, key, direction, tracer),
            CipherKind::RailFence => RailFence.transform(text, key, direction, tracer),
            CipherKind::RowColumn => RowColumnTransposition.transform(text, key, direction, tracer),
        }
    }
}

/// Parses an integer key such as a shift or a rail count.
pub(crate) fn parse_integer_key(cipher: &'static str, key: &str) -> Result<i64> {
    key.trim().parse::<i64>().map_err(|_| ValidationError::NotAnInteger {
        cipher,
        key: key.to_owned(),
    })
}

/// Rejects keys that are empty or only whitespace.
pub(crate) fn require_non_blank(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        Err(ValidationError::EmptyKey)
    } else {
        Ok(())
    }
}
