//! Unit tests for the password generator.

use passcraft::crypto::RandomSource;
use passcraft::generators::{GeneratorError, PasswordGenerator};
use passcraft::models::{CharacterClasses, CredentialKind, PasswordGenerationOptions, SYMBOLS};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rstest::rstest;

fn options(length: usize, classes: CharacterClasses, keyword: &str) -> PasswordGenerationOptions {
    PasswordGenerationOptions {
        length,
        classes,
        keyword: keyword.to_string(),
    }
}

fn only(uppercase: bool, lowercase: bool, digits: bool, symbols: bool) -> CharacterClasses {
    CharacterClasses { uppercase, lowercase, digits, symbols }
}

// ─── Output shape ───

#[test]
fn test_default_options_produce_sixteen_chars() {
    let credential = PasswordGenerator::new()
        .generate_password(&PasswordGenerationOptions::default())
        .unwrap();
    assert_eq!(credential.text.chars().count(), 16);
    assert_eq!(credential.kind, CredentialKind::Password);
}

#[rstest]
#[case(8)]
#[case(16)]
#[case(33)]
#[case(64)]
fn test_length_is_exact(#[case] length: usize) {
    let mut generator = PasswordGenerator::new();
    let credential = generator
        .generate_password(&options(length, CharacterClasses::default(), ""))
        .unwrap();
    assert_eq!(credential.text.chars().count(), length);
}

#[rstest]
#[case(only(true, false, false, false), 'A'..='Z')]
#[case(only(false, true, false, false), 'a'..='z')]
#[case(only(false, false, true, false), '0'..='9')]
fn test_single_class_stays_in_alphabet(
    #[case] classes: CharacterClasses,
    #[case] range: std::ops::RangeInclusive<char>,
) {
    let mut generator = PasswordGenerator::new();
    for _ in 0..20 {
        let credential = generator.generate_password(&options(32, classes, "")).unwrap();
        assert!(credential.text.chars().all(|c| range.contains(&c)), "{}", credential.text);
    }
}

#[test]
fn test_symbols_only_uses_fixed_symbol_set() {
    let mut generator = PasswordGenerator::new();
    let credential = generator
        .generate_password(&options(40, only(false, false, false, true), ""))
        .unwrap();
    assert!(credential.text.chars().all(|c| SYMBOLS.contains(c)));
}

// ─── Keyword ───

#[test]
fn test_keyword_is_embedded_verbatim() {
    let mut generator = PasswordGenerator::new();
    for _ in 0..50 {
        let credential = generator
            .generate_password(&options(12, CharacterClasses::default(), "rust"))
            .unwrap();
        assert_eq!(credential.text.chars().count(), 12);
        assert!(credential.text.contains("rust"));
    }
}

#[test]
fn test_keyword_filling_whole_length() {
    let mut generator = PasswordGenerator::new();
    let credential = generator
        .generate_password(&options(8, CharacterClasses::default(), "exactly8"))
        .unwrap();
    assert_eq!(credential.text, "exactly8");
}

#[test]
fn test_keyword_with_multibyte_chars_counts_characters() {
    let mut generator = PasswordGenerator::new();
    let credential = generator
        .generate_password(&options(10, CharacterClasses::default(), "ñandú"))
        .unwrap();
    assert_eq!(credential.text.chars().count(), 10);
    assert!(credential.text.contains("ñandú"));
}

#[test]
fn test_keyword_lands_at_every_offset() {
    // Lowercase-only filler so the upper-case keyword cannot occur by chance.
    let mut generator = PasswordGenerator::with_random(RandomSource::with_rng(ChaCha20Rng::seed_from_u64(5)));
    let mut seen = [false; 9];
    for _ in 0..1_000 {
        let credential = generator
            .generate_password(&options(10, only(false, true, false, false), "KW"))
            .unwrap();
        let offset = credential.text.find("KW").unwrap();
        seen[offset] = true;
    }
    assert!(seen.iter().all(|s| *s), "offsets seen: {seen:?}");
}

// ─── Validation ───

#[test]
fn test_no_class_enabled_is_invalid() {
    let result = PasswordGenerator::new().generate_password(&options(16, only(false, false, false, false), ""));
    assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
}

#[rstest]
#[case(0)]
#[case(7)]
#[case(65)]
#[case(1000)]
fn test_length_out_of_range_is_invalid(#[case] length: usize) {
    let result = PasswordGenerator::new().generate_password(&options(length, CharacterClasses::default(), ""));
    assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
}

#[test]
fn test_keyword_longer_than_length_is_invalid() {
    let result = PasswordGenerator::new()
        .generate_password(&options(8, CharacterClasses::default(), "much-too-long"));
    assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
}

#[test]
fn test_consecutive_passwords_differ() {
    let mut generator = PasswordGenerator::new();
    let first = generator.generate_password(&options(32, CharacterClasses::default(), "")).unwrap();
    let second = generator.generate_password(&options(32, CharacterClasses::default(), "")).unwrap();
    assert_ne!(first.text, second.text);
}
