//! Letter ⇄ position helpers and the text filters the ciphers share
//!
//! Only ASCII letters take part in transforms. Case is carried separately
//! from the position so a transform can re-apply it afterwards.

/// Alphabet position of an ASCII letter (A/a = 0 .. Z/z = 25).
#[inline]
pub fn position(c: char) -> Option<i64> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as i64)
    } else {
        None
    }
}

/// Uppercase letter for a position already reduced to `0..26`.
#[inline]
pub fn upper(pos: i64) -> char {
    (b'A' + pos as u8) as char
}

/// Letter for `pos` in the same case as `like`.
#[inline]
pub fn with_case_of(pos: i64, like: char) -> char {
    let c = upper(pos);
    if like.is_ascii_lowercase() {
        c.to_ascii_lowercase()
    } else {
        c
    }
}

/// Uppercased ASCII letters of `text`, everything else dropped.
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Uppercased ASCII letters and digits of `text`, everything else dropped.
pub fn alphanumerics_only(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Appends `filler` until the char count is a multiple of `block`.
pub fn pad_to_multiple(text: &mut String, block: usize, filler: char) {
    let len = text.chars().count();
    let rem = len % block;
    if rem != 0 {
        text.extend(std::iter::repeat(filler).take(block - rem));
    }
}

/// `text` up to and including the character starting at byte `idx`.
#[inline]
pub fn prefix_through(text: &str, idx: usize, c: char) -> &str {
    &text[..idx + c.len_utf8()]
}

/// Characters separated by single spaces, e.g. `"A B C"`.
pub fn spaced<I>(chars: I) -> String
where
    I: IntoIterator<Item = char>,
{
    let mut out = String::new();
    for c in chars {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
