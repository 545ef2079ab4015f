// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the closed set of cipher variants and the
//! user-visible choices around them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The eight classical ciphers the engine knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CipherKind {
    #[default]
    Caesar,
    Monoalphabetic,
    Playfair,
    Hill,
    Vigenere,
    OneTimePad,
    RailFence,
    RowColumn,
}

impl CipherKind {
    /// Every variant, in registry order.
    pub const ALL: [CipherKind; 8] = [
        CipherKind::Caesar,
        CipherKind::Monoalphabetic,
        CipherKind::Playfair,
        CipherKind::Hill,
        CipherKind::Vigenere,
        CipherKind::OneTimePad,
        CipherKind::RailFence,
        CipherKind::RowColumn,
    ];

    /// Short machine-friendly name, also used in config files.
    pub fn slug(self) -> &'static str {
        match self {
            CipherKind::Caesar => "caesar",
            CipherKind::Monoalphabetic => "monoalphabetic",
            CipherKind::Playfair => "playfair",
            CipherKind::Hill => "hill",
            CipherKind::Vigenere => "vigenere",
            CipherKind::OneTimePad => "one-time-pad",
            CipherKind::RailFence => "rail-fence",
            CipherKind::RowColumn => "row-column",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::cipher::ClassicalCipher::name(self))
    }
}

impl FromStr for CipherKind {
    type Err = ValidationError;

    /// Accepts either the slug (`rail-fence`) or the display name
    /// (`Rail Fence Cipher`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CipherKind::ALL
            .into_iter()
            .find(|kind| {
                kind.slug().eq_ignore_ascii_case(wanted) || kind.to_string().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ValidationError::UnknownCipher(wanted.to_owned()))
    }
}

/// Which way a cipher runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    pub fn is_encrypt(self) -> bool {
        matches!(self, Direction::Encrypt)
    }
}

/// How a trace is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TraceFormat {
    #[default]
    Text,
    Json,
}
