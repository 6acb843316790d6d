use manybaht::errors::ManybahtError;

#[test]
fn test_error_codes_are_stable() {
    assert_eq!(ManybahtError::invalid_input_format("x").code(), "E001");
    assert_eq!(ManybahtError::unsupported_platform("x").code(), "E002");
    assert_eq!(ManybahtError::malformed_platform_url("x").code(), "E003");
    assert_eq!(ManybahtError::unsupported_variant("x").code(), "E004");
    assert_eq!(ManybahtError::configuration("x").code(), "E005");
}

#[test]
fn test_error_types_and_messages() {
    let err = ManybahtError::malformed_platform_url("Invalid YouTube URL format");
    assert_eq!(err.error_type(), "Malformed Platform URL");
    assert_eq!(err.message(), "Invalid YouTube URL format");
}

#[test]
fn test_display_uses_simple_format() {
    let err = ManybahtError::configuration("modulus too small: 7 bits, need at least 8");
    assert_eq!(
        err.to_string(),
        "Configuration Error: modulus too small: 7 bits, need at least 8"
    );
    assert_eq!(err.to_string(), err.format_simple());
}

#[test]
fn test_colored_format_contains_parts() {
    let err = ManybahtError::unsupported_platform("Unsupported platform");
    let formatted = err.format_colored();
    assert!(formatted.contains("E002"));
    assert!(formatted.contains("Unsupported Platform"));
    assert!(formatted.contains("Unsupported platform"));
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&ManybahtError::invalid_input_format("x"));
}
