/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::error::AppError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of the dashboard login request
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    /// Dashboard username
    pub username: String,
    /// Dashboard password
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// `data` member of a successful login response
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoginData {
    /// Session token to attach to every subsequent request
    pub token: String,
    /// Remaining fields (user details, rights, white label settings)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoginData {
    /// Extracts the login payload from the envelope `data` member
    ///
    /// # Errors
    /// * `AppError::Protocol` - If `data` is missing or lacks a non-empty `token`
    pub fn from_data(data: Option<Value>) -> Result<Self, AppError> {
        let data = data.ok_or_else(|| {
            AppError::Protocol("login response has no 'data' member".to_string())
        })?;
        let login: LoginData = serde_json::from_value(data)?;
        if login.token.trim().is_empty() {
            return Err(AppError::Protocol("login response carries an empty token".to_string()));
        }
        Ok(login)
    }

    /// Converts the login payload into a session bound to a cloud
    pub fn into_session(self, cloud_id: &str) -> Session {
        Session {
            token: self.token,
            cloud_id: cloud_id.to_string(),
            established_at: Utc::now(),
        }
    }
}
