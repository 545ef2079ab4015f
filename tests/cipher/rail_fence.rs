// tests/cipher/rail_fence.rs
use crate::common::{titles, traced};
use cipher_trace::cipher::RailFence;
use cipher_trace::{ClassicalCipher, Direction, ValidationError};

const PLAIN: &str = "WEAREDISCOVEREDFLEEATONCE";
const CIPHER: &str = "WECRLTEERDSOEEFEAOCAIVDEN";

#[test]
fn three_rails() {
    assert_eq!(RailFence.encrypt(PLAIN, "3").unwrap(), CIPHER);
    assert_eq!(RailFence.decrypt(CIPHER, "3").unwrap(), PLAIN);
}

#[test]
fn text_is_cleaned_and_uppercased() {
    assert_eq!(
        RailFence.encrypt("We are discovered. Flee at once!", "3").unwrap(),
        CIPHER
    );
}

#[test]
fn round_trips_for_many_rail_counts() {
    for rails in 2..=8 {
        let key = rails.to_string();
        let ct = RailFence.encrypt("DEFENDTHEEASTWALL2024", &key).unwrap();
        assert_eq!(RailFence.decrypt(&ct, &key).unwrap(), "DEFENDTHEEASTWALL2024", "rails={rails}");
    }
}

#[test]
fn more_rails_than_letters_is_identity() {
    assert_eq!(RailFence.encrypt("HI", "5").unwrap(), "HI");
}

#[test]
fn rail_count_must_be_at_least_two() {
    assert_eq!(RailFence.encrypt("HELLO", "1"), Err(ValidationError::TooFewRails(1)));
    assert_eq!(RailFence.encrypt("HELLO", "-3"), Err(ValidationError::TooFewRails(-3)));
    assert!(matches!(
        RailFence.encrypt("HELLO", "two"),
        Err(ValidationError::NotAnInteger { .. })
    ));
}

#[test]
fn encrypt_trace_shows_zigzag_grid() {
    let (_, steps) = traced(&RailFence, "ABCD", "2", Direction::Encrypt);
    assert_eq!(titles(&steps), ["Preparation", "Zig-Zag Grid Generation", "Read Row by Row"]);
    assert_eq!(steps[1].visualization.as_deref(), Some("A . C .\n. B . D"));
    assert_eq!(steps[2].output_state, "ACBD");
}

#[test]
fn decrypt_trace_rebuilds_grid() {
    let (result, steps) = traced(&RailFence, "ACBD", "2", Direction::Decrypt);
    assert_eq!(result, "ABCD");
    assert_eq!(titles(&steps), ["Preparation", "Grid Reconstruction", "Read Zig-Zag Path"]);
    assert_eq!(steps[1].visualization.as_deref(), Some("A . C .\n. B . D"));
}

#[test]
fn huge_rail_count_behaves_like_one_rail_per_letter() {
    assert_eq!(RailFence.encrypt("HELLO", "4000000000").unwrap(), "HELLO");
    assert_eq!(RailFence.decrypt("HELLO", "4000000000").unwrap(), "HELLO");
    let (_, steps) = traced(&RailFence, "HELLO", "4000000000", Direction::Encrypt);
    assert_eq!(steps[1].input_state, "Rails: 4000000000");
    assert_eq!(steps[1].visualization.as_deref().unwrap().lines().count(), 5);
}

#[test]
fn rails_past_length_match_rails_equal_to_length() {
    let ct = RailFence.encrypt("DEFENDTHEEAST", "13").unwrap();
    assert_eq!(RailFence.encrypt("DEFENDTHEEAST", "50").unwrap(), ct);
    assert_eq!(RailFence.decrypt(&ct, "50").unwrap(), "DEFENDTHEEAST");
}
