// tests/cipher/playfair.rs
use crate::common::{titles, traced};
use cipher_trace::cipher::playfair::{prepare_plaintext, DigraphRule, KeySquare};
use cipher_trace::cipher::Playfair;
use cipher_trace::{ClassicalCipher, Direction, ValidationError};

#[test]
fn monarchy_instruments() {
    assert_eq!(Playfair.encrypt("INSTRUMENTS", "MONARCHY").unwrap(), "GATLMZCLRQXA");
    assert_eq!(Playfair.decrypt("GATLMZCLRQXA", "MONARCHY").unwrap(), "INSTRUMENTSX");
}

#[test]
fn decrypt_ignores_case_and_separators() {
    assert_eq!(Playfair.decrypt("ga tl mz cl rq xa", "monarchy").unwrap(), "INSTRUMENTSX");
}

#[test]
fn j_is_merged_into_i() {
    assert_eq!(prepare_plaintext("JAM"), "IAMX");
    assert_eq!(
        Playfair.encrypt("JAM", "MONARCHY").unwrap(),
        Playfair.encrypt("IAM", "MONARCHY").unwrap()
    );
    let square = KeySquare::from_key("JUPITER");
    assert!(square.position('J').is_err());
    // JUPITER becomes IUPTER: the merged J takes I's first slot
    assert_eq!(square.position('I').unwrap(), (0, 0));
    assert_eq!(square.position('E').unwrap(), (0, 4));
}

#[test]
fn doubled_letters_get_filler() {
    assert_eq!(prepare_plaintext("hello world"), "HELXLOWORLDX");
    let ct = Playfair.encrypt("hello world", "PLAYFAIR").unwrap();
    assert_eq!(Playfair.decrypt(&ct, "PLAYFAIR").unwrap(), "HELXLOWORLDX");
}

#[test]
fn decrypt_rules_invert_encrypt_rules() {
    let square = KeySquare::from_key("MONARCHY");
    for (a, b) in [('S', 'T'), ('M', 'E'), ('I', 'N')] {
        let (x, y, rule) = square.digraph(a, b, Direction::Encrypt).unwrap();
        let (p, q, back) = square.digraph(x, y, Direction::Decrypt).unwrap();
        assert_eq!((p, q), (a, b));
        assert_eq!(rule, back);
    }
    assert_eq!(DigraphRule::Rectangle.label(), "Rectangle");
}

#[test]
fn odd_ciphertext_is_rejected() {
    assert_eq!(Playfair.decrypt("ABC", "MONARCHY"), Err(ValidationError::OddDigraphText(3)));
}

#[test]
fn blank_key_is_rejected() {
    assert_eq!(Playfair.encrypt("HELLO", "  "), Err(ValidationError::EmptyKey));
}

#[test]
fn trace_has_matrix_prep_and_one_step_per_pair() {
    let (_, steps) = traced(&Playfair, "INSTRUMENTS", "MONARCHY", Direction::Encrypt);
    assert_eq!(steps.len(), 8);
    assert_eq!(titles(&steps)[..3], ["Matrix Generation", "Prepare Text", "Encrypt digraph 'IN'"]);
    assert_eq!(
        steps[0].visualization.as_deref(),
        Some("M O N A R\nC H Y B D\nE F G I K\nL P Q S T\nU V W X Z")
    );
    assert_eq!(steps[1].formula.as_deref(), Some("Digraphs: IN ST RU ME NT SX"));
    assert_eq!(steps[2].formula.as_deref(), Some("IN -> GA"));
    assert!(steps[2].description.starts_with("Rule applied: Rectangle"));
}
