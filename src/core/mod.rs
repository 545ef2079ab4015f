// src/core/mod.rs
//! Alphabet and modular-arithmetic primitives shared by every cipher

pub mod letters;
pub mod modular;

pub use modular::{mod26, mod_inverse, modulo};
