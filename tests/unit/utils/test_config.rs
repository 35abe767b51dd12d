use radiusdesk_client::application::config::{Config, Credentials, RestApiConfig};
use radiusdesk_client::constants::DEFAULT_TIMEOUT_SECS;
use radiusdesk_client::utils::config::{get_env_or_default, get_env_or_none};
use radiusdesk_client::error::AppError;
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("RD_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("RD_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("RD_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("RD_MISSING_VAR");
    }
    let result: String = get_env_or_default("RD_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("RD_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("RD_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("RD_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("RD_TEST_VAR_OPTION", "123");
        let result: Option<u64> = get_env_or_none("RD_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("RD_TEST_VAR_OPTION");
    }
    let missing: Option<u64> = get_env_or_none("RD_TEST_VAR_OPTION");
    assert_eq!(missing, None);
}

#[test]
fn test_config_new_defaults() {
    let config = Config::new("https://radius.test", "admin", "secret", "3");
    assert_eq!(config.rest_api.base_url, "https://radius.test");
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.credentials.username, "admin");
    assert_eq!(config.credentials.password, "secret");
    assert_eq!(config.cloud_id, "3");
}

#[test]
fn test_config_with_timeout() {
    let config = Config::new("https://radius.test", "admin", "secret", "3").with_timeout(5);
    assert_eq!(config.rest_api.timeout, 5);
}

#[test]
fn test_config_serialization_omits_password() {
    let config = Config {
        credentials: Credentials {
            username: "admin".to_string(),
            password: "secret".to_string(),
        },
        rest_api: RestApiConfig {
            base_url: "https://radius.test".to_string(),
            timeout: 10,
        },
        cloud_id: "1".to_string(),
    };

    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("secret"));
    assert!(json.contains("admin"));
    assert!(!config.to_string().contains("secret"));

    let restored: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.credentials.username, "admin");
    assert!(restored.credentials.password.is_empty());
}

#[test]
fn test_config_from_env() {
    use radiusdesk_client::utils::config::config_from_env;

    // RADIUSDESK_* variables are only touched by this test
    unsafe {
        env::remove_var("RADIUSDESK_URL");
        env::set_var("RADIUSDESK_USERNAME", "operator");
        env::set_var("RADIUSDESK_PASSWORD", "pw");
        env::set_var("RADIUSDESK_CLOUD_ID", "4");
        env::set_var("RADIUSDESK_TIMEOUT", "12");
    }
    match config_from_env() {
        Err(AppError::Config(msg)) => assert!(msg.contains("RADIUSDESK_URL")),
        other => panic!("Expected config error, got {other:?}"),
    }

    unsafe {
        env::set_var("RADIUSDESK_URL", " https://radius.test/ ");
    }
    let config = config_from_env().unwrap();
    assert_eq!(config.rest_api.base_url, "https://radius.test/");
    assert_eq!(config.credentials.username, "operator");
    assert_eq!(config.cloud_id, "4");
    assert_eq!(config.rest_api.timeout, 12);

    unsafe {
        for var in [
            "RADIUSDESK_URL",
            "RADIUSDESK_USERNAME",
            "RADIUSDESK_PASSWORD",
            "RADIUSDESK_CLOUD_ID",
            "RADIUSDESK_TIMEOUT",
        ] {
            env::remove_var(var);
        }
    }
}
