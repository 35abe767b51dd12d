/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Transport seam between the client and the network.
//!
//! Everything above this module speaks in [`HttpRequest`] / [`HttpResponse`];
//! only [`ReqwestTransport`] touches sockets. Tests swap in their own
//! [`HttpTransport`] to count or script round trips.

use crate::application::config::RestApiConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// A single outgoing request, fully resolved against the base URL
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL without query string
    pub url: String,
    /// Query parameters, in insertion order
    pub query: Vec<(String, String)>,
    /// Optional JSON body
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Creates a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a POST request with a JSON body
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Appends a query parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Looks up the first query parameter with the given key
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A raw response: status plus body text
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Creates a response from a status and a body
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Creates a 200 response carrying the given JSON value
    pub fn ok_json(body: &Value) -> Self {
        Self::new(StatusCode::OK, body.to_string())
    }
}

/// Executes HTTP requests on behalf of the client
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs exactly one round trip
    ///
    /// Non-success statuses are returned as responses, not errors; only
    /// failures to complete the exchange are errors.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, AppError>;
}

/// Production transport backed by `reqwest`
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport with the configured request timeout
    ///
    /// # Errors
    /// * `AppError::Config` - If the timeout is zero or the HTTP client cannot be built
    pub fn new(rest_api: &RestApiConfig) -> Result<Self, AppError> {
        if rest_api.timeout == 0 {
            return Err(AppError::Config(
                "request timeout must be at least one second".to_string(),
            ));
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(rest_api.timeout))
            .build()
            .map_err(|e| AppError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest::Client`
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method, &request.url)
            .header("Accept", "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
