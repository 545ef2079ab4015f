use serde::{Deserialize, Serialize};

use crate::cipher::ClassicalCipher;
use crate::enums::{CipherKind, Direction};
use crate::error::ValidationError;
use crate::trace::StepRecord;

/// A complete traced run: what went in, what came out, and every step between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceReport {
    pub cipher: CipherKind,
    pub cipher_name: String,
    pub direction: Direction,
    pub input: String,
    pub key: String,
    pub output: String,
    pub steps: Vec<StepRecord>,
}

impl TraceReport {
    pub fn build(cipher: CipherKind, direction: Direction, text: &str, key: &str) -> Result<Self, ValidationError> {
        let steps = cipher.steps(text, key, direction)?;
        // The trace always closes on the full result.
        let output = steps
            .last()
            .map(|s| s.output_state.clone())
            .unwrap_or_default();
        Ok(Self {
            cipher,
            cipher_name: cipher.name().to_owned(),
            direction,
            input: text.to_owned(),
            key: key.to_owned(),
            output,
            steps,
        })
    }
}
