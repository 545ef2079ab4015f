//! Modular arithmetic over the 26-letter alphabet

use crate::consts::ALPHABET_LEN;

/// Non-negative remainder of `a` modulo `m` (`m > 0`), for any sign of `a`.
#[inline]
pub fn modulo(a: i64, m: i64) -> i64 {
    ((a % m) + m) % m
}

/// `a mod 26`, always in `0..26`.
#[inline]
pub fn mod26(a: i64) -> i64 {
    modulo(a, ALPHABET_LEN)
}

/// Multiplicative inverse of `a` modulo `m` by exhaustive search over `1..m`.
///
/// Returns `None` when `a` shares a factor with `m`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let a = modulo(a, m);
    (1..m).find(|x| (a * x) % m == 1)
}
