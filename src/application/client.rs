/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client facade for the RadiusDesk API
//!
//! This module provides the entry point callers construct once per backend:
//! - Base URL normalization
//! - A single session shared by every sub-client
//! - Lazily built sub-clients for vouchers and permanent users
//!
//! # Example
//! ```ignore
//! use radiusdesk_client::prelude::*;
//!
//! let config = Config::new("https://radiusdesk.example.com", "admin", "secret", "1");
//! let client = Client::new(config).await?;
//!
//! let vouchers = client.vouchers().list(5, None).await?;
//! ```

use crate::application::auth::{AuthState, Session};
use crate::application::config::Config;
use crate::application::services::{UserClient, VoucherClient};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::utils::url::validated_base_url;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

/// Facade over the RadiusDesk API
///
/// Owns one session (through its [`Auth`](crate::application::auth::Auth))
/// and one sub-client per resource kind.
pub struct Client {
    http_client: Arc<HttpClient>,
    vouchers: OnceCell<VoucherClient>,
    users: OnceCell<UserClient>,
}

impl Client {
    /// Creates a new client and performs initial authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the configuration is invalid or authentication fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        client.establish_session().await?;
        Ok(client)
    }

    /// Creates a new client without performing initial authentication
    ///
    /// Authentication will be performed automatically on the first request.
    ///
    /// # Errors
    /// * `AppError::Config` - If the base URL is unusable or the HTTP client cannot be built
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let transport = Arc::new(ReqwestTransport::new(&config.rest_api)?);
        Self::with_transport(config, transport)
    }

    /// Creates a new client on top of a caller supplied transport
    ///
    /// # Errors
    /// * `AppError::Config` - If the base URL is unusable
    pub fn with_transport(
        config: Config,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, AppError> {
        let base_url = validated_base_url(&config.rest_api.base_url)?;
        debug!("Normalized base URL: {}", base_url);

        let http_client = Arc::new(HttpClient::new(Arc::new(config), base_url, transport));

        Ok(Self {
            http_client,
            vouchers: OnceCell::new(),
            users: OnceCell::new(),
        })
    }

    /// Checks connectivity and credentials; never fails
    ///
    /// A held session the backend rejects is replaced within the same call.
    ///
    /// # Returns
    /// * `true` if a session can be established or the held one is valid
    pub async fn check_connection(&self) -> bool {
        self.http_client.auth().check_connection().await
    }

    /// Explicitly (re-)establishes the session
    ///
    /// This is the only way back to `Authenticated` after the backend has
    /// rejected the session.
    pub async fn establish_session(&self) -> Result<Session, AppError> {
        self.http_client.auth().establish().await
    }

    /// Voucher sub-client
    pub fn vouchers(&self) -> &VoucherClient {
        self.vouchers
            .get_or_init(|| VoucherClient::new(self.http_client.clone()))
    }

    /// Permanent user sub-client
    pub fn users(&self) -> &UserClient {
        self.users
            .get_or_init(|| UserClient::new(self.http_client.clone()))
    }

    /// Gets the current session, logging in if none was established yet
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.http_client.get_session().await
    }

    /// Returns true if a session is currently held
    pub async fn is_authenticated(&self) -> bool {
        self.http_client.auth().is_authenticated().await
    }

    /// Returns the authentication state
    pub async fn auth_state(&self) -> AuthState {
        self.http_client.auth().state().await
    }

    /// Drops the session; the next request logs in again
    pub async fn logout(&self) {
        self.http_client.auth().logout().await
    }

    /// Returns the normalized base URL
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Returns the configuration the client was built with
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }
}
