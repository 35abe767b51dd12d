use crate::support::{MockTransport, client_with, test_config};
use radiusdesk_client::prelude::*;

#[test]
fn test_client_normalizes_base_url() {
    let mock = MockTransport::new();
    let client = client_with(&mock);

    assert_eq!(client.base_url(), "https://radius.test/cake4/rd_cake");
    assert_eq!(client.config().cloud_id, "7");
}

#[test]
fn test_client_keeps_existing_suffix() {
    let mock = MockTransport::new();
    let mut config = test_config();
    config.rest_api.base_url = "https://radius.test/cake4/rd_cake/".to_string();

    let client = Client::with_transport(config, mock).unwrap();
    assert_eq!(client.base_url(), "https://radius.test/cake4/rd_cake");
}

#[test]
fn test_client_rejects_invalid_base_url() {
    let mock = MockTransport::new();
    let mut config = test_config();
    config.rest_api.base_url = "not a url".to_string();

    let result = Client::with_transport(config, mock);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_client_rejects_unsupported_scheme() {
    let mock = MockTransport::new();
    let mut config = test_config();
    config.rest_api.base_url = "ftp://radius.test".to_string();

    let result = Client::with_transport(config, mock);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_new_lazy_builds_reqwest_transport() {
    let client = Client::new_lazy(test_config()).unwrap();
    assert_eq!(client.base_url(), "https://radius.test/cake4/rd_cake");
}

#[test]
fn test_new_lazy_rejects_zero_timeout() {
    let config = test_config().with_timeout(0);

    match Client::new_lazy(config) {
        Err(AppError::Config(msg)) => assert!(msg.contains("timeout")),
        Err(other) => panic!("Expected config error, got {other:?}"),
        Ok(_) => panic!("Expected config error, got a client"),
    }
}

#[test]
fn test_reqwest_transport_rejects_zero_timeout() {
    let mut config = test_config();
    config.rest_api.timeout = 0;
    assert!(matches!(
        ReqwestTransport::new(&config.rest_api),
        Err(AppError::Config(_))
    ));

    config.rest_api.timeout = 1;
    assert!(ReqwestTransport::new(&config.rest_api).is_ok());
}

#[tokio::test]
async fn test_construction_makes_no_request() {
    let mock = MockTransport::new();
    let client = client_with(&mock);

    let _ = client.vouchers();
    let _ = client.users();

    assert_eq!(mock.calls(), 0);
    assert_eq!(client.auth_state().await, AuthState::Unauthenticated);
}

#[test]
fn test_sub_clients_are_built_once() {
    let mock = MockTransport::new();
    let client = client_with(&mock);

    assert!(std::ptr::eq(client.vouchers(), client.vouchers()));
    assert!(std::ptr::eq(client.users(), client.users()));
    assert_eq!(
        tokio_test::block_on(client.auth_state()),
        AuthState::Unauthenticated
    );
}

#[tokio::test]
async fn test_establish_session_authenticates() {
    let mock = MockTransport::new();
    mock.push_login();
    let client = client_with(&mock);

    let session = client.establish_session().await.unwrap();

    assert_eq!(session.token, crate::support::TOKEN);
    assert!(client.is_authenticated().await);
    assert_eq!(client.get_session().await.unwrap(), session);
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_new_fails_when_backend_unreachable() {
    let config = Config::new("http://127.0.0.1:9", "admin", "secret", "1").with_timeout(2);

    let result = Client::new(config).await;
    assert!(matches!(result, Err(AppError::Connectivity(_))));
}

#[tokio::test]
async fn test_check_connection_does_not_fail() {
    let mock = MockTransport::new();
    let client = client_with(&mock);

    assert!(!client.check_connection().await);
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let mock = MockTransport::new();
    mock.push_login();
    let client = client_with(&mock);

    client.establish_session().await.unwrap();
    client.logout().await;

    assert!(!client.is_authenticated().await);
    assert_eq!(client.auth_state().await, AuthState::Unauthenticated);
}
