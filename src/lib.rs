// src/lib.rs
//! cipher-trace: classical ciphers that explain themselves
//!
//! Features:
//! - Eight classical ciphers behind one `ClassicalCipher` contract
//! - Step-by-step traces whose last step always matches the real result
//! - Ordered registry for lookup by display name or slug
//! - Random key generation, JSON export, TOML config

pub mod cipher;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod export;
pub mod key_ops;
pub mod trace;

// Re-export everything users need at the crate root
pub use cipher::{ClassicalCipher, CipherRegistry};
pub use config::load as load_config;
pub use core::{mod26, mod_inverse};
pub use enums::{CipherKind, Direction, TraceFormat};
pub use error::{CoreError, ValidationError};
pub use export::{report_to_json, TraceReport};
pub use trace::{render_steps, StepRecord, Tracer};
