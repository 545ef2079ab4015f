// tests/cipher/hill.rs
use crate::common::{titles, traced};
use cipher_trace::cipher::hill::KeyMatrix;
use cipher_trace::cipher::Hill;
use cipher_trace::{ClassicalCipher, Direction, ValidationError};

#[test]
fn three_by_three_textbook_key() {
    assert_eq!(Hill.encrypt("ACT", "GYBNQKURP").unwrap(), "POH");
    assert_eq!(Hill.decrypt("POH", "GYBNQKURP").unwrap(), "ACT");
    assert_eq!(Hill.encrypt("act", "gyb nqk urp").unwrap(), "POH");
}

#[test]
fn two_by_two_round_trip() {
    assert_eq!(Hill.encrypt("HELP", "HILL").unwrap(), "DRPA");
    assert_eq!(Hill.decrypt("DRPA", "HILL").unwrap(), "HELP");
}

#[test]
fn odd_block_is_padded_with_x() {
    let ct = Hill.encrypt("HELLO", "HILL").unwrap();
    assert_eq!(ct.len(), 6);
    assert_eq!(Hill.decrypt(&ct, "HILL").unwrap(), "HELLOX");
}

#[test]
fn only_four_or_nine_letters() {
    assert_eq!(Hill.encrypt("ABC", "ABCDE"), Err(ValidationError::HillKeyLength(5)));
    assert_eq!(Hill.encrypt("ABC", "ABCDEFGHIJ"), Err(ValidationError::HillKeyLength(10)));
    assert_eq!(Hill.encrypt("ABC", ""), Err(ValidationError::HillKeyLength(0)));
}

#[test]
fn singular_key_encrypts_but_cannot_decrypt() {
    assert!(Hill.encrypt("HELP", "ABAB").is_ok());
    let err = Hill.decrypt("HELP", "ABAB").unwrap_err();
    assert_eq!(err, ValidationError::NotInvertible { determinant: 0 });
    assert!(err.to_string().contains("Determinant: 0"));
    assert_eq!(KeyMatrix::from_key("HILL").unwrap().determinant(), 15);
}

#[test]
fn encrypt_trace() {
    let (_, steps) = traced(&Hill, "ACT", "GYBNQKURP", Direction::Encrypt);
    assert_eq!(titles(&steps), ["Key Matrix Generation", "Text Formatting", "Multiply block 'ACT'"]);
    assert_eq!(
        steps[0].visualization.as_deref(),
        Some("[  6 24  1 ]\n[ 13 16 10 ]\n[ 20 17 15 ]")
    );
    assert_eq!(
        steps[2].formula.as_deref(),
        Some("[ 0, 2, 19 ] * Matrix mod 26 = [ 15, 14, 7 ] = 'POH'")
    );
}

#[test]
fn decrypt_trace_includes_inverse() {
    let (_, steps) = traced(&Hill, "POH", "GYBNQKURP", Direction::Decrypt);
    assert_eq!(
        titles(&steps),
        [
            "Key Matrix Generation",
            "Inverse Matrix Calculation",
            "Text Formatting",
            "Multiply block 'POH'"
        ]
    );
    assert_eq!(steps[1].formula.as_deref(), Some("K⁻¹ = det(K)⁻¹ · adj(K) mod 26"));
    assert_eq!(
        steps[1].visualization.as_deref(),
        Some("[  8  5 10 ]\n[ 21  8 21 ]\n[ 21 12  8 ]")
    );
}
