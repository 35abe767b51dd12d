use assert_json_diff::assert_json_include;
use radiusdesk_client::error::AppError;
use radiusdesk_client::model::requests::{CreateUserRequest, CreateVoucherRequest, Validate};
use serde_json::json;

fn validation_message(result: Result<(), AppError>) -> String {
    match result {
        Err(AppError::Validation(msg)) => msg,
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn test_voucher_request_valid() {
    assert!(CreateVoucherRequest::new(1, 2, 1).validate().is_ok());
    assert!(CreateVoucherRequest::new(1, 2, 1000).validate().is_ok());
}

#[test]
fn test_voucher_request_requires_quantity() {
    let msg = validation_message(CreateVoucherRequest::new(1, 2, 0).validate());
    assert!(msg.contains("quantity"));
}

#[test]
fn test_voucher_request_rejects_oversized_batch() {
    let msg = validation_message(CreateVoucherRequest::new(1, 2, 1001).validate());
    assert!(msg.contains("1000"));
}

#[test]
fn test_voucher_request_requires_realm_and_profile() {
    let msg = validation_message(CreateVoucherRequest::new(0, 2, 1).validate());
    assert!(msg.contains("realm_id"));
    let msg = validation_message(CreateVoucherRequest::new(1, 0, 1).validate());
    assert!(msg.contains("profile_id"));
}

#[test]
fn test_voucher_request_missing_fields_when_deserialized() {
    let request: CreateVoucherRequest =
        serde_json::from_value(json!({ "profile_id": 2, "quantity": 3 })).unwrap();
    assert_eq!(request.realm_id, 0);
    let msg = validation_message(request.validate());
    assert!(msg.contains("realm_id"));
}

#[test]
fn test_voucher_request_expiry_rules() {
    assert!(
        CreateVoucherRequest::new(1, 2, 1)
            .expiring_after_days(7)
            .validate()
            .is_ok()
    );
    let msg = validation_message(
        CreateVoucherRequest::new(1, 2, 1)
            .expiring_after_days(0)
            .validate(),
    );
    assert!(msg.contains("days_valid"));
}

#[test]
fn test_voucher_request_pwd_length_bounds() {
    assert!(
        CreateVoucherRequest::new(1, 2, 1)
            .with_pwd_length(2)
            .validate()
            .is_err()
    );
    assert!(
        CreateVoucherRequest::new(1, 2, 1)
            .with_pwd_length(8)
            .validate()
            .is_ok()
    );
}

#[test]
fn test_voucher_request_serialization() {
    let request = CreateVoucherRequest::new(1, 2, 5)
        .with_batch("event")
        .with_precede("ev")
        .single_field();
    let value = serde_json::to_value(&request).unwrap();

    assert_json_include!(
        actual: value.clone(),
        expected: json!({
            "realm_id": 1,
            "profile_id": 2,
            "quantity": 5,
            "batch": "event",
            "precede": "ev",
            "pwd_length": 6,
            "single_field": true,
            "never_expire": true
        })
    );
    assert!(value.get("days_valid").is_none());
}

#[test]
fn test_user_request_valid() {
    let request = CreateUserRequest::new("alice", "pw", 1, 2)
        .with_name("Alice")
        .with_surname("Smith")
        .with_email("alice@example.com");
    assert!(request.validate().is_ok());
}

#[test]
fn test_user_request_requires_username_and_password() {
    let msg = validation_message(CreateUserRequest::new("  ", "pw", 1, 2).validate());
    assert!(msg.contains("username"));
    let msg = validation_message(CreateUserRequest::new("alice", "", 1, 2).validate());
    assert!(msg.contains("password"));
}

#[test]
fn test_user_request_rejects_whitespace_username() {
    let msg = validation_message(CreateUserRequest::new("al ice", "pw", 1, 2).validate());
    assert!(msg.contains("whitespace"));
}

#[test]
fn test_user_request_requires_ids() {
    assert!(CreateUserRequest::new("alice", "pw", 0, 2).validate().is_err());
    assert!(CreateUserRequest::new("alice", "pw", 1, 0).validate().is_err());
}

#[test]
fn test_user_request_rejects_invalid_email() {
    let msg = validation_message(
        CreateUserRequest::new("alice", "pw", 1, 2)
            .with_email("not-an-email")
            .validate(),
    );
    assert!(msg.contains("email"));
}

#[test]
fn test_user_request_rejects_reserved_attribute() {
    let msg = validation_message(
        CreateUserRequest::new("alice", "pw", 1, 2)
            .with_attribute("token", "sneaky")
            .validate(),
    );
    assert!(msg.contains("token"));
}

#[test]
fn test_user_request_serializes_attributes_flat() {
    let request = CreateUserRequest::new("alice", "pw", 1, 2)
        .with_phone("+27 11 000")
        .with_attribute("language", "4_4")
        .inactive();
    let value = serde_json::to_value(&request).unwrap();

    assert_json_include!(
        actual: value.clone(),
        expected: json!({
            "username": "alice",
            "password": "pw",
            "realm_id": 1,
            "profile_id": 2,
            "phone": "+27 11 000",
            "active": false,
            "language": "4_4"
        })
    );
    assert!(value.get("email").is_none());
    assert!(value.get("attributes").is_none());
}

#[test]
fn test_user_request_masks_password_when_printed() {
    let request = CreateUserRequest::new("alice", "hunter2secret", 1, 2).with_name("Alice");

    let debug = format!("{request:?}");
    let display = request.to_string();

    assert!(!debug.contains("hunter2secret"));
    assert!(!display.contains("hunter2secret"));
    assert!(debug.contains("***"));
    assert!(display.contains("\"username\":\"alice\""));

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["password"], json!("hunter2secret"));
}

#[test]
fn test_user_request_trims_username() {
    let request = CreateUserRequest::new("  alice ", "pw", 1, 2);
    assert_eq!(request.username, "alice");
    assert!(request.validate().is_ok());

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["username"], json!("alice"));
}

#[test]
fn test_user_request_rejects_padded_username_when_deserialized() {
    let request: CreateUserRequest = serde_json::from_value(json!({
        "username": " alice",
        "password": "pw",
        "realm_id": 1,
        "profile_id": 2
    }))
    .unwrap();

    let msg = validation_message(request.validate());
    assert!(msg.contains("whitespace"));
}
