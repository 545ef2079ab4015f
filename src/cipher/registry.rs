//! Registry of the available ciphers
//!
//! Built once by the caller and shared by reference; it is never mutated
//! after construction.

use super::{ClassicalCipher, Result};
use crate::enums::CipherKind;
use crate::error::ValidationError;

/// Insertion-ordered list of cipher variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherRegistry {
    ciphers: Vec<CipherKind>,
}

impl CipherRegistry {
    /// All eight classical ciphers in menu order.
    pub fn standard() -> Self {
        Self::from_kinds(CipherKind::ALL)
    }

    /// Registry over an explicit list. Duplicate names are kept as given;
    /// lookups return the first match.
    pub fn from_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = CipherKind>,
    {
        Self {
            ciphers: kinds.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CipherKind> + '_ {
        self.ciphers.iter()
    }

    pub fn len(&self) -> usize {
        self.ciphers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ciphers.is_empty()
    }

    /// Display names, for populating selection menus.
    pub fn names(&self) -> Vec<&'static str> {
        self.ciphers.iter().map(|c| c.name()).collect()
    }

    /// Finds a cipher by display name (exact match first, then ignoring ASCII case).
    pub fn get(&self, name: &str) -> Option<&CipherKind> {
        self.ciphers
            .iter()
            .find(|c| c.name() == name)
            .or_else(|| self.ciphers.iter().find(|c| c.name().eq_ignore_ascii_case(name)))
    }

    /// Like [`get`](Self::get) but also accepts slugs, failing with `UnknownCipher`.
    pub fn resolve(&self, name: &str) -> Result<CipherKind> {
        if let Some(kind) = self.get(name) {
            return Ok(*kind);
        }
        name.parse::<CipherKind>()
            .ok()
            .filter(|kind| self.ciphers.contains(kind))
            .ok_or_else(|| ValidationError::UnknownCipher(name.to_owned()))
    }
}

impl Default for CipherRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a CipherRegistry {
    type Item = &'a CipherKind;
    type IntoIter = std::slice::Iter<'a, CipherKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.ciphers.iter()
    }
}
