/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Lenient deserializers for RadiusDesk payloads.
//!
//! The backend is inconsistent about scalar encodings: ids and counts arrive
//! as numbers or numeric strings, booleans as `true`/`false`, `1`/`0` or
//! `"1"`/`"0"`.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Deserializes an optional unsigned id from a number or numeric string
///
/// `null`, a missing field and an empty string all yield `None`.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid id: {n}"))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid id: {s}"))),
        Some(other) => Err(de::Error::custom(format!("invalid id: {other}"))),
    }
}

/// Deserializes an optional boolean from a bool, a 0/1 number or a string
pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(b)),
        Some(Value::Number(n)) => Ok(Some(n.as_i64().unwrap_or(0) != 0)),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            other => Err(de::Error::custom(format!("invalid boolean: {other}"))),
        },
        Some(other) => Err(de::Error::custom(format!("invalid boolean: {other}"))),
    }
}

/// Deserializes an optional string, accepting numbers as their decimal text
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!("expected text, got {other}"))),
    }
}
