use crate::presentation::serialization::{deserialize_optional_id, deserialize_optional_text};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A voucher as returned by the RadiusDesk backend
///
/// Only the commonly used fields are named; everything else the backend sends
/// is kept in `extra`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Voucher {
    /// Internal numeric id
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u64>,
    /// Voucher code, the natural key
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Voucher password (equal to the code for single-field vouchers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Batch label the voucher was created under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    /// Realm name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    /// Realm id
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub realm_id: Option<u64>,
    /// Profile name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Profile id
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_id: Option<u64>,
    /// Usage status (`new`, `used`, `depleted`, `expired`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation timestamp as reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Backend fields without a named counterpart
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Voucher {
    /// Returns the voucher code
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if the voucher has not been used yet
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.status.as_deref() == Some("new")
    }
}
