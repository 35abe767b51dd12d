/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::responses::ApiEnvelope;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::utils::url::join_url;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// HTTP client that attaches the session and tenant to every request
///
/// A request rejected with an authentication error invalidates the session
/// held by [`Auth`]; it is not retried.
pub struct HttpClient {
    auth: Arc<Auth>,
    transport: Arc<dyn HttpTransport>,
    config: Arc<Config>,
    base_url: String,
}

impl HttpClient {
    /// Creates a client sharing the given transport with a new [`Auth`]
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and the cloud id
    /// * `base_url` - Normalized base URL
    /// * `transport` - Transport used for every request
    pub fn new(config: Arc<Config>, base_url: String, transport: Arc<dyn HttpTransport>) -> Self {
        let auth = Arc::new(Auth::new(
            config.clone(),
            base_url.clone(),
            transport.clone(),
        ));
        Self {
            auth,
            transport,
            config,
            base_url,
        }
    }

    /// Makes a GET request with query parameters
    pub async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<ApiEnvelope, AppError> {
        let mut request = HttpRequest::get(join_url(&self.base_url, path));
        request.query = query;
        self.request(request).await
    }

    /// Makes a POST request with a JSON object body
    pub async fn post(&self, path: &str, body: Value) -> Result<ApiEnvelope, AppError> {
        self.request(HttpRequest::post(join_url(&self.base_url, path), body))
            .await
    }

    /// Sends a request with the session attached and interprets the response
    ///
    /// # Returns
    /// * `Ok(ApiEnvelope)` - Parsed envelope; `success` may still be false
    /// * `Err(AppError)` - Transport, status or token failures
    pub async fn request(&self, request: HttpRequest) -> Result<ApiEnvelope, AppError> {
        let session = self.auth.get_session().await?;
        let request = attach_session(request, &session);

        debug!("{} {}", request.method, request.url);
        let response = self.transport.execute(request).await?;

        match interpret_response(response) {
            Err(e) if e.is_authentication() => {
                self.auth.invalidate().await;
                Err(e)
            }
            other => other,
        }
    }

    /// Gets the current session, logging in if none was established
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.auth.get_session().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Adds `token` and `cloud_id` to a request
///
/// GET requests carry them as query parameters. POST requests with an object
/// body carry them as body fields, anything else as query parameters.
pub fn attach_session(mut request: HttpRequest, session: &Session) -> HttpRequest {
    let merged = match request.body.as_mut() {
        Some(Value::Object(body)) if request.method != Method::GET => {
            body.insert("token".to_string(), Value::String(session.token.clone()));
            body.insert(
                "cloud_id".to_string(),
                Value::String(session.cloud_id.clone()),
            );
            true
        }
        _ => false,
    };

    if merged {
        request
    } else {
        request
            .with_query("token", session.token.as_str())
            .with_query("cloud_id", session.cloud_id.as_str())
    }
}

/// Maps a raw response onto the error taxonomy and parses its envelope
///
/// * 401 / 403 and envelopes blaming the token → `AppError::Authentication`
/// * 404 → `AppError::NotFound`
/// * other non-2xx → `AppError::Backend`
/// * unparseable body → `AppError::Protocol`
pub fn interpret_response(response: HttpResponse) -> Result<ApiEnvelope, AppError> {
    let HttpResponse { status, body } = response;

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            error!("Unauthorized: {}", body);
            return Err(AppError::Authentication(body_message(status, &body)));
        }
        StatusCode::NOT_FOUND => {
            debug!("Not found: {}", body);
            return Err(AppError::NotFound(body_message(status, &body)));
        }
        s if !s.is_success() => {
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Backend {
                status,
                message: body_message(status, &body),
            });
        }
        _ => {}
    }

    let envelope = ApiEnvelope::parse(&body)?;
    if envelope.is_token_rejection() {
        let message = envelope.message_text().unwrap_or_default();
        error!("Token rejected: {}", message);
        return Err(AppError::Authentication(message));
    }
    Ok(envelope)
}

fn body_message(status: StatusCode, body: &str) -> String {
    ApiEnvelope::parse(body)
        .ok()
        .and_then(|envelope| envelope.message_text())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        })
}
