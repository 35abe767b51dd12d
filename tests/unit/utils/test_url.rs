use radiusdesk_client::error::AppError;
use radiusdesk_client::utils::url::{join_url, normalize_base_url, validated_base_url};

const EXPECTED: &str = "https://radius.example.com/cake4/rd_cake";

#[test]
fn test_normalize_appends_suffix_when_absent() {
    assert_eq!(normalize_base_url("https://radius.example.com"), EXPECTED);
}

#[test]
fn test_normalize_ignores_trailing_slashes() {
    assert_eq!(normalize_base_url("https://radius.example.com/"), EXPECTED);
    assert_eq!(normalize_base_url("https://radius.example.com///"), EXPECTED);
}

#[test]
fn test_normalize_keeps_existing_suffix() {
    assert_eq!(
        normalize_base_url("https://radius.example.com/cake4/rd_cake"),
        EXPECTED
    );
    assert_eq!(
        normalize_base_url("https://radius.example.com/cake4/rd_cake/"),
        EXPECTED
    );
}

#[test]
fn test_normalize_trims_whitespace() {
    assert_eq!(normalize_base_url("  https://radius.example.com/  "), EXPECTED);
}

#[test]
fn test_normalize_keeps_sub_path_before_suffix() {
    assert_eq!(
        normalize_base_url("http://10.0.0.1:8080/radius"),
        "http://10.0.0.1:8080/radius/cake4/rd_cake"
    );
}

#[test]
fn test_normalize_is_idempotent() {
    let inputs = [
        "https://radius.example.com",
        "https://radius.example.com/",
        "https://radius.example.com/cake4/rd_cake",
        "https://radius.example.com/cake4/rd_cake//",
        "http://10.0.0.1:8080/radius/",
        " http://host ",
    ];
    for input in inputs {
        let once = normalize_base_url(input);
        let twice = normalize_base_url(&once);
        assert_eq!(once, twice, "normalization of {input:?} is not idempotent");
        assert_eq!(once.matches("/cake4/rd_cake").count(), 1);
        assert!(!once.ends_with('/'));
    }
}

#[test]
fn test_validated_base_url_accepts_http_and_https() {
    assert_eq!(
        validated_base_url("https://radius.example.com").unwrap(),
        EXPECTED
    );
    assert!(validated_base_url("http://localhost:8000").is_ok());
}

#[test]
fn test_validated_base_url_rejects_empty() {
    assert!(matches!(validated_base_url("   "), Err(AppError::Config(_))));
    assert!(matches!(validated_base_url("/"), Err(AppError::Config(_))));
}

#[test]
fn test_validated_base_url_rejects_bad_scheme_and_garbage() {
    assert!(matches!(
        validated_base_url("ftp://radius.example.com"),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        validated_base_url("radius.example.com"),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_join_url() {
    assert_eq!(
        join_url(EXPECTED, "vouchers/index.json"),
        "https://radius.example.com/cake4/rd_cake/vouchers/index.json"
    );
    assert_eq!(
        join_url(&format!("{EXPECTED}/"), "/vouchers/add.json"),
        "https://radius.example.com/cake4/rd_cake/vouchers/add.json"
    );
}
