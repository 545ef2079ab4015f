// tests/cipher/monoalphabetic.rs
use crate::common::{titles, traced};
use cipher_trace::cipher::Monoalphabetic;
use cipher_trace::{ClassicalCipher, Direction, ValidationError};

const KEY: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

#[test]
fn substitutes_through_the_key() {
    assert_eq!(Monoalphabetic.encrypt("HELLO", KEY).unwrap(), "ITSSG");
    assert_eq!(Monoalphabetic.decrypt("ITSSG", KEY).unwrap(), "HELLO");
}

#[test]
fn preserves_case_and_non_letters() {
    let ct = Monoalphabetic.encrypt("hello, World 42", KEY).unwrap();
    assert_eq!(ct, "itssg, Vgksr 42");
    assert_eq!(Monoalphabetic.decrypt(&ct, KEY).unwrap(), "hello, World 42");
}

#[test]
fn lowercase_key_is_accepted() {
    let lower = KEY.to_ascii_lowercase();
    assert_eq!(Monoalphabetic.encrypt("HELLO", &lower).unwrap(), "ITSSG");
}

#[test]
fn key_must_be_a_26_letter_permutation() {
    assert_eq!(
        Monoalphabetic.encrypt("A", "QWERTY"),
        Err(ValidationError::KeyLength {
            expected: 26,
            actual: 6
        })
    );
    assert_eq!(
        Monoalphabetic.encrypt("A", "QWERTYUIOPASDFGHJKLZXCVBN1"),
        Err(ValidationError::NonLetterInKey('1'))
    );
    assert_eq!(
        Monoalphabetic.encrypt("A", "AACDEFGHIJKLMNOPQRSTUVWXYZ"),
        Err(ValidationError::DuplicateKeyLetter('A'))
    );
    assert_eq!(Monoalphabetic.encrypt("A", "   "), Err(ValidationError::EmptyKey));
}

#[test]
fn trace_starts_with_mapping_table() {
    let (result, steps) = traced(&Monoalphabetic, "AB", KEY, Direction::Encrypt);
    assert_eq!(result, "QW");
    assert_eq!(titles(&steps), ["Alphabet Mapping", "Substitute 'A'", "Substitute 'B'"]);
    let table = steps[0].visualization.as_deref().unwrap();
    assert!(table.starts_with("Plain:  A B C"));
    assert!(table.contains("Cipher: Q W E"));
    assert_eq!(steps[1].formula.as_deref(), Some("P='A' -> Index=0 -> C='Q'"));
}

#[test]
fn decrypt_trace_uses_reverse_mapping() {
    let (_, steps) = traced(&Monoalphabetic, "Q", KEY, Direction::Decrypt);
    assert_eq!(steps[0].title, "Reverse Alphabet Mapping");
    assert_eq!(steps[1].formula.as_deref(), Some("C='Q' -> Index=0 -> P='A'"));
}
