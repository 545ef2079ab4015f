// tests/cipher/caesar.rs
use crate::common::{setup, traced};
use cipher_trace::cipher::Caesar;
use cipher_trace::{ClassicalCipher, Direction, ValidationError};

#[test]
fn keeps_case_and_punctuation() {
    setup();
    assert_eq!(Caesar.encrypt("Hello, World!", "3").unwrap(), "Khoor, Zruog!");
    assert_eq!(Caesar.decrypt("Khoor, Zruog!", "3").unwrap(), "Hello, World!");
}

#[test]
fn shift_is_reduced_mod_26() {
    assert_eq!(Caesar.encrypt("HELLO", "29").unwrap(), "KHOOR");
    assert_eq!(Caesar.encrypt("HELLO", "-23").unwrap(), "KHOOR");
    assert_eq!(Caesar.encrypt("HELLO", "26").unwrap(), "HELLO");
    assert_eq!(Caesar.encrypt("HELLO", "-26").unwrap(), "HELLO");
}

#[test]
fn key_is_trimmed_before_parsing() {
    assert_eq!(Caesar.encrypt("abc", " 1 ").unwrap(), "bcd");
}

#[test]
fn non_integer_key_is_rejected() {
    assert_eq!(
        Caesar.encrypt("HELLO", "three"),
        Err(ValidationError::NotAnInteger {
            cipher: "Caesar Cipher",
            key: "three".into()
        })
    );
    assert!(Caesar.decrypt("HELLO", "").is_err());
}

#[test]
fn one_step_per_letter_then_closing_step() {
    let (result, steps) = traced(&Caesar, "HI!", "1", Direction::Encrypt);
    assert_eq!(result, "IJ!");
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0].title, "Shift character 'H'");
    assert_eq!(steps[0].formula.as_deref(), Some("C = (7 + 1) mod 26 = 8"));
    assert_eq!(steps[0].input_state, "H");
    assert_eq!(steps[0].output_state, "I");
    assert_eq!(steps[1].output_state, "IJ");
    assert_eq!(steps[2].title, "Final Result");
    assert_eq!(steps[2].input_state, "HI!");
}

#[test]
fn decrypt_formula_shows_subtraction() {
    let (_, steps) = traced(&Caesar, "A", "1", Direction::Decrypt);
    assert_eq!(steps[0].formula.as_deref(), Some("P = (0 - 1) mod 26 = 25"));
    assert_eq!(steps[0].output_state, "Z");
}

#[test]
fn empty_text_yields_single_step() {
    let (result, steps) = traced(&Caesar, "", "5", Direction::Encrypt);
    assert_eq!(result, "");
    assert_eq!(steps.len(), 1);
}
