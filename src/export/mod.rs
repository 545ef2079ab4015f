// src/export/mod.rs
//! Export utilities for traced cipher runs
//!
//! Exports include the key in clear text; these ciphers offer no secrecy anyway.

pub use json::{report_to_json, write_json};
pub use report::TraceReport;

pub mod json;
mod report;
