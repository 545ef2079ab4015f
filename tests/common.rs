// tests/common.rs
//! Shared test utilities: logging setup and trace assertions
#![allow(dead_code)]

use cipher_trace::{ClassicalCipher, Direction, StepRecord};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Test-friendly logging; respects RUST_LOG. Safe to call repeatedly.
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Like [`setup`] but forces debug output for this crate.
pub fn setup_debug() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::new("cipher_trace=debug"))
        .try_init()
        .ok();
}

/// Runs the plain and the traced call and checks that they agree.
pub fn traced<C: ClassicalCipher + ?Sized>(
    cipher: &C,
    text: &str,
    key: &str,
    direction: Direction,
) -> (String, Vec<StepRecord>) {
    let result = match direction {
        Direction::Encrypt => cipher.encrypt(text, key),
        Direction::Decrypt => cipher.decrypt(text, key),
    }
    .expect("cipher call failed");
    let steps = cipher.steps(text, key, direction).expect("traced call failed");
    assert!(!steps.is_empty(), "trace must not be empty");
    assert_eq!(
        steps.last().unwrap().output_state,
        result,
        "trace for {} must end on the real result",
        cipher.name()
    );
    (result, steps)
}

pub fn titles(steps: &[StepRecord]) -> Vec<&str> {
    steps.iter().map(|s| s.title.as_str()).collect()
}
