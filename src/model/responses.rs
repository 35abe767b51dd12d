/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::TOKEN_REJECTION_MESSAGES;
use crate::error::AppError;
use crate::presentation::serialization::deserialize_optional_id;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Standard RadiusDesk response envelope
///
/// Single-object endpoints put their payload in `data`; index endpoints use
/// `items` and `totalCount` at the top level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope {
    /// Outcome flag set by the backend
    pub success: bool,
    /// Payload of single-object endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Human readable message, either a string or `{"message": "..."}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    /// Per-field validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
    /// Page of records for index endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Value>>,
    /// Server-side total for index endpoints
    #[serde(
        default,
        rename = "totalCount",
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_count: Option<u64>,
    /// Anything else the backend sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiEnvelope {
    /// Parses an envelope from a response body
    ///
    /// # Errors
    /// * `AppError::Protocol` - If the body is not JSON or lacks `success`
    pub fn parse(body: &str) -> Result<Self, AppError> {
        serde_json::from_str(body).map_err(|e| {
            AppError::Protocol(format!("unexpected response body ({e}): {}", preview(body)))
        })
    }

    /// Returns the most specific message the backend gave, if any
    #[must_use]
    pub fn message_text(&self) -> Option<String> {
        if let Some(text) = self.message.as_ref().and_then(value_text) {
            return Some(text);
        }
        let Some(Value::Object(errors)) = &self.errors else {
            return None;
        };
        let joined = errors
            .iter()
            .filter_map(|(field, msg)| value_text(msg).map(|m| format!("{field}: {m}")))
            .collect::<Vec<_>>()
            .join("; ");
        (!joined.is_empty()).then_some(joined)
    }

    /// Returns true if an unsuccessful envelope rejects the session token
    ///
    /// Only the exact rejection messages count; a failure whose message merely
    /// mentions a token is an ordinary backend failure.
    #[must_use]
    pub fn is_token_rejection(&self) -> bool {
        if self.success {
            return false;
        }
        self.message_text().is_some_and(|message| {
            let normalized = message.trim().trim_end_matches('.').to_ascii_lowercase();
            TOKEN_REJECTION_MESSAGES.contains(&normalized.as_str())
        })
    }

    /// Turns an unsuccessful envelope into `AppError::Backend`
    ///
    /// # Errors
    /// * `AppError::Backend` - If `success` is false
    pub fn into_success(self) -> Result<Self, AppError> {
        if self.success {
            Ok(self)
        } else {
            Err(AppError::Backend {
                status: StatusCode::OK,
                message: self
                    .message_text()
                    .unwrap_or_else(|| "request was not successful".to_string()),
            })
        }
    }

    /// Deserializes every record in `data`, which may be an object or an array
    ///
    /// # Errors
    /// * `AppError::Protocol` - If a record does not match the expected type
    pub fn data_records<R: DeserializeOwned>(&self) -> Result<Vec<R>, AppError> {
        match &self.data {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(values)) => values
                .iter()
                .map(|v| serde_json::from_value(v.clone()).map_err(AppError::from))
                .collect(),
            Some(value) => Ok(vec![serde_json::from_value(value.clone())?]),
        }
    }
}

/// A page of records plus the backend's total
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListResult<R> {
    /// Total number of records on the server, not the page size
    #[serde(rename = "totalCount")]
    pub total_count: u64,
    /// Records in backend order
    pub items: Vec<R>,
}

impl<R> ListResult<R> {
    /// Returns the number of records in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if this page holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the records
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }
}

impl<R> IntoIterator for ListResult<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Outcome of a delete request
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DeleteResult {
    /// True if the backend reports the record as deleted
    pub success: bool,
    /// Backend message, typically present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Remaining envelope fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeleteResult {
    /// Builds an unsuccessful result carrying a message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            extra: Map::new(),
        }
    }
}

impl From<ApiEnvelope> for DeleteResult {
    fn from(envelope: ApiEnvelope) -> Self {
        let message = envelope.message_text();
        let mut extra = envelope.extra;
        if let Some(data) = envelope.data {
            extra.insert("data".to_string(), data);
        }
        Self {
            success: envelope.success,
            message,
            extra,
        }
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => map.get("message").and_then(value_text),
        Value::Array(values) => values.iter().find_map(value_text),
        _ => None,
    }
}

fn preview(body: &str) -> String {
    const MAX: usize = 120;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
