/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Session authentication for the RadiusDesk dashboard
//!
//! This module owns the single session of a client:
//! - Login against `dashboard/authenticate.json`
//! - Token validation against `dashboard/check-token.json`
//! - Invalidation when the backend rejects the token
//!
//! A rejected session is never renewed behind the caller's back; every
//! request fails with `AppError::Authentication` until [`Auth::establish`]
//! is called again.

use crate::application::config::Config;
use crate::constants::{AUTHENTICATE_PATH, CHECK_TOKEN_PATH};
use crate::error::AppError;
use crate::model::auth::{LoginData, LoginRequest};
use crate::model::http::interpret_response;
use crate::transport::{HttpRequest, HttpTransport};
use crate::utils::url::join_url;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Authenticated context attached to every request
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Token issued by the login endpoint
    pub token: String,
    /// Cloud the session operates on
    pub cloud_id: String,
    /// When the session was established
    pub established_at: DateTime<Utc>,
}

/// Position of a client in the authentication state machine
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthState {
    /// No session yet; the first request logs in
    #[default]
    Unauthenticated,
    /// A session is held and attached to requests
    Authenticated(Session),
    /// The backend rejected the session; requests fail until re-established
    Revoked,
}

impl AuthState {
    /// Returns true if a session is currently held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

/// Authentication manager for the RadiusDesk API
pub struct Auth {
    config: Arc<Config>,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    state: Arc<RwLock<AuthState>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and the cloud id
    /// * `base_url` - Normalized base URL
    /// * `transport` - Transport used for the login and check requests
    pub fn new(config: Arc<Config>, base_url: String, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config,
            base_url,
            transport,
            state: Arc::new(RwLock::new(AuthState::Unauthenticated)),
        }
    }

    /// Gets the session to attach to a request
    ///
    /// Logs in if no session was ever established.
    ///
    /// # Returns
    /// * `Ok(Session)` - The held session
    /// * `Err(AppError::Authentication)` - If the session was revoked or login is rejected
    pub async fn get_session(&self) -> Result<Session, AppError> {
        {
            let state = self.state.read().await;
            match &*state {
                AuthState::Authenticated(session) => return Ok(session.clone()),
                AuthState::Revoked => {
                    return Err(AppError::Authentication(
                        "session was rejected by the backend, establish a new one".to_string(),
                    ));
                }
                AuthState::Unauthenticated => {}
            }
        }

        info!("No active session, logging in");
        self.establish().await
    }

    /// Performs the credential exchange and stores the resulting session
    ///
    /// # Returns
    /// * `Ok(Session)` - Freshly established session
    /// * `Err(AppError::Authentication)` - Credentials rejected
    /// * `Err(AppError::Connectivity)` - Backend unreachable
    /// * `Err(AppError::Protocol)` - Response without a token
    pub async fn establish(&self) -> Result<Session, AppError> {
        let url = join_url(&self.base_url, AUTHENTICATE_PATH);
        let body = serde_json::to_value(LoginRequest {
            username: self.config.credentials.username.clone(),
            password: self.config.credentials.password.clone(),
        })?;

        info!(
            "Logging in to {} as {}",
            self.base_url, self.config.credentials.username
        );

        let result = self.login(HttpRequest::post(url, body)).await;

        match result {
            Ok(session) => {
                let mut state = self.state.write().await;
                *state = AuthState::Authenticated(session.clone());
                info!("✓ Login successful, cloud: {}", session.cloud_id);
                Ok(session)
            }
            Err(e) => {
                if e.is_authentication() {
                    self.invalidate().await;
                }
                Err(e)
            }
        }
    }

    async fn login(&self, request: HttpRequest) -> Result<Session, AppError> {
        let response = self.transport.execute(request).await?;

        let envelope = interpret_response(response).map_err(|e| match e {
            AppError::NotFound(message) => AppError::Backend {
                status: StatusCode::NOT_FOUND,
                message,
            },
            other => other,
        })?;

        if !envelope.success {
            let message = envelope
                .message_text()
                .unwrap_or_else(|| "credentials rejected".to_string());
            warn!("Login rejected: {}", message);
            return Err(AppError::Authentication(message));
        }

        let login = LoginData::from_data(envelope.data)?;
        Ok(login.into_session(&self.config.cloud_id))
    }

    /// Checks that the backend is reachable and the credentials work
    ///
    /// Validates the held session if there is one, otherwise tries to
    /// establish a session. A held session the backend rejects is replaced by
    /// a fresh one. Never fails: every error becomes `false`.
    pub async fn check_connection(&self) -> bool {
        let current = self.current_session().await;

        let result = match current {
            Some(session) => match self.verify(&session).await {
                Err(e) if e.is_authentication() => {
                    info!("Held session rejected, establishing a new one");
                    self.establish().await.map(|_| ())
                }
                other => other,
            },
            None => self.establish().await.map(|_| ()),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("Connection check failed: {}", e);
                false
            }
        }
    }

    async fn verify(&self, session: &Session) -> Result<(), AppError> {
        let url = join_url(&self.base_url, CHECK_TOKEN_PATH);
        let request = HttpRequest::get(url)
            .with_query("token", session.token.as_str())
            .with_query("cloud_id", session.cloud_id.as_str());

        debug!("Verifying session token");
        let response = self.transport.execute(request).await?;

        let outcome = interpret_response(response).and_then(|envelope| {
            if envelope.success {
                Ok(())
            } else {
                Err(AppError::Authentication(
                    envelope
                        .message_text()
                        .unwrap_or_else(|| "token is no longer valid".to_string()),
                ))
            }
        });

        if outcome.as_ref().err().is_some_and(AppError::is_authentication) {
            self.invalidate().await;
        }
        outcome
    }

    /// Marks the held session as rejected by the backend
    pub async fn invalidate(&self) {
        let mut state = self.state.write().await;
        if state.is_authenticated() {
            warn!("Session rejected by the backend, invalidating it");
            *state = AuthState::Revoked;
        }
    }

    /// Drops the held session; the next request logs in again
    pub async fn logout(&self) {
        info!("Logging out");
        let mut state = self.state.write().await;
        *state = AuthState::Unauthenticated;
    }

    /// Returns the held session without any network call
    pub async fn current_session(&self) -> Option<Session> {
        match &*self.state.read().await {
            AuthState::Authenticated(session) => Some(session.clone()),
            _ => None,
        }
    }

    /// Returns the current state machine position
    pub async fn state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    /// Returns true if a session is currently held
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    /// Returns the normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
