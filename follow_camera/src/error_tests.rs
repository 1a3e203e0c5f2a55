//! Unit tests for error.rs
//!
//! Tests Display formatting and trait impls for Error.

use super::*;

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_invalid_config_display() {
    let err = Error::InvalidConfig(String::from("sensitivity must be finite and > 0, got 0"));
    assert_eq!(
        err.to_string(),
        "Invalid configuration: sensitivity must be finite and > 0, got 0"
    );
}

// ============================================================================
// Trait impls
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidConfig(String::from("bad value"));
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("bad value"));
}

#[test]
fn test_error_clone_eq() {
    let err = Error::InvalidConfig(String::from("bad value"));
    let clone = err.clone();
    assert_eq!(err, clone);
}

#[test]
fn test_result_alias() {
    fn produces_error() -> Result<()> {
        Err(Error::InvalidConfig(String::from("nope")))
    }
    assert!(produces_error().is_err());
}
