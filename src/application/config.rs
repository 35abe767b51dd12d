use crate::constants::DEFAULT_TIMEOUT_SECS;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Authentication credentials for the RadiusDesk dashboard
pub struct Credentials {
    /// Username of the RadiusDesk administrator
    pub username: String,
    /// Password of the RadiusDesk administrator, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the RadiusDesk instance, with or without the `/cake4/rd_cake` suffix
    pub base_url: String,
    /// Timeout in seconds for a single REST API request
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Endpoint configuration for the RadiusDesk client
///
/// Built explicitly by the caller; the client never reads the environment.
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Cloud (tenant) identifier attached to every request
    pub cloud_id: String,
}

impl Config {
    /// Creates a configuration with the default request timeout
    ///
    /// # Arguments
    /// * `base_url` - RadiusDesk URL; the `/cake4/rd_cake` suffix is added if missing
    /// * `username` - Dashboard username
    /// * `password` - Dashboard password
    /// * `cloud_id` - Cloud identifier sent with every request
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        cloud_id: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials {
                username: username.into(),
                password: password.into(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            cloud_id: cloud_id.into(),
        }
    }

    /// Overrides the request timeout, in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.rest_api.timeout = timeout_secs;
        self
    }
}
