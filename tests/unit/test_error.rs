use radiusdesk_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_connectivity() {
    let error = AppError::Connectivity("dns failure".to_string());
    assert_eq!(error.to_string(), "connectivity error: dns failure");
}

#[test]
fn test_app_error_display_authentication() {
    let error = AppError::Authentication("bad credentials".to_string());
    assert_eq!(error.to_string(), "authentication error: bad credentials");
}

#[test]
fn test_app_error_display_validation() {
    let error = AppError::Validation("quantity must be at least 1".to_string());
    assert_eq!(
        error.to_string(),
        "validation error: quantity must be at least 1"
    );
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::NotFound("voucher 'abc'".to_string());
    assert_eq!(error.to_string(), "not found: voucher 'abc'");
}

#[test]
fn test_app_error_display_backend() {
    let error = AppError::Backend {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "boom".to_string(),
    };
    let text = error.to_string();
    assert!(text.contains("500"));
    assert!(text.ends_with("boom"));
}

#[test]
fn test_app_error_display_protocol_and_config() {
    assert_eq!(
        AppError::Protocol("no token".to_string()).to_string(),
        "protocol error: no token"
    );
    assert_eq!(
        AppError::Config("base URL is empty".to_string()).to_string(),
        "config error: base URL is empty"
    );
}

#[test]
fn test_app_error_from_serde_is_protocol() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Protocol(_) => (),
        other => panic!("Expected Protocol error, got {other:?}"),
    }
}

#[test]
fn test_app_error_predicates() {
    assert!(AppError::Authentication("x".to_string()).is_authentication());
    assert!(!AppError::Validation("x".to_string()).is_authentication());
    assert!(AppError::Validation("x".to_string()).is_validation());
    assert!(!AppError::NotFound("x".to_string()).is_validation());
}
