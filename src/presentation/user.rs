use crate::presentation::serialization::{
    deserialize_optional_bool, deserialize_optional_id, deserialize_optional_text,
};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A permanent user as returned by the RadiusDesk backend
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PermanentUser {
    /// Internal numeric id
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u64>,
    /// Login name, the natural key
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
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
    /// Whether the account may authenticate
    #[serde(
        default,
        deserialize_with = "deserialize_optional_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub active: Option<bool>,
    /// Creation timestamp as reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Backend fields without a named counterpart
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PermanentUser {
    /// Returns "name surname" when either part is known
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match (self.name.as_deref(), self.surname.as_deref()) {
            (Some(n), Some(s)) => Some(format!("{n} {s}")),
            (Some(n), None) => Some(n.to_string()),
            (None, Some(s)) => Some(s.to_string()),
            (None, None) => None,
        }
    }
}
