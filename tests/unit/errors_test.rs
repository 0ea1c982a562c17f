use passcraft::crypto::CryptoError;
use passcraft::generators::GeneratorError;
use passcraft::store::StoreError;

// === CryptoError Tests ===

#[test]
fn crypto_error_display() {
    let err = CryptoError::InvalidArgument("empty alphabet".to_string());
    assert_eq!(err.to_string(), "Invalid argument: empty alphabet");
}

// === GeneratorError Tests ===

#[test]
fn generator_error_display() {
    assert_eq!(
        GeneratorError::InvalidArgument("Wordlist is empty".to_string()).to_string(),
        "Invalid argument: Wordlist is empty"
    );
}

#[test]
fn generator_error_wraps_crypto_error() {
    let err: GeneratorError = CryptoError::InvalidArgument("bound".to_string()).into();
    assert_eq!(err.to_string(), "Random source error: Invalid argument: bound");
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), "Invalid argument: bound");
}

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::Validation("Name cannot be empty".to_string()).to_string(),
        "Validation error: Name cannot be empty"
    );
    assert_eq!(StoreError::NotFound(3).to_string(), "No saved password at index 3");
    assert_eq!(StoreError::NothingToExport.to_string(), "No saved passwords to export");
}

#[test]
fn store_error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: StoreError = io.into();
    assert!(matches!(err, StoreError::Io(_)));
    assert_eq!(err.to_string(), "IO error: denied");
}

#[test]
fn store_error_implements_error_trait() {
    let err: Box<dyn std::error::Error + Send + Sync> = Box::new(StoreError::NotFound(0));
    assert!(err.source().is_none());
}
