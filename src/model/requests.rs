/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::MAX_VOUCHER_BATCH;
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Attribute keys that collide with named fields or with fields the client sets itself
const RESERVED_FIELDS: [&str; 12] = [
    "username",
    "password",
    "realm_id",
    "profile_id",
    "name",
    "surname",
    "email",
    "phone",
    "address",
    "active",
    "token",
    "cloud_id",
];

/// Checks performed on a request before it is sent
pub trait Validate {
    /// Returns `AppError::Validation` describing the first problem found
    fn validate(&self) -> Result<(), AppError>;
}

fn require_id(field: &str, value: u64) -> Result<(), AppError> {
    if value == 0 {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Request to create one or more vouchers
///
/// Required: `realm_id`, `profile_id` and a `quantity` of at least one.
/// Fields absent from a deserialized request default to zero and fail validation.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateVoucherRequest {
    /// Realm the vouchers belong to
    #[serde(default)]
    pub realm_id: u64,
    /// Profile applied to the vouchers
    #[serde(default)]
    pub profile_id: u64,
    /// Number of vouchers to generate
    #[serde(default)]
    pub quantity: u32,
    /// Optional batch label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    /// Optional prefix prepended to generated codes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precede: Option<String>,
    /// Length of generated passwords
    #[serde(default = "default_pwd_length")]
    pub pwd_length: u8,
    /// Use the code as the password
    #[serde(default)]
    pub single_field: bool,
    /// Never expire the vouchers
    #[serde(default = "default_true")]
    pub never_expire: bool,
    /// Days the vouchers stay valid after first use, when they expire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_valid: Option<u32>,
}

fn default_pwd_length() -> u8 {
    6
}

fn default_true() -> bool {
    true
}

impl CreateVoucherRequest {
    /// Creates a request for `quantity` non-expiring vouchers
    pub fn new(realm_id: u64, profile_id: u64, quantity: u32) -> Self {
        Self {
            realm_id,
            profile_id,
            quantity,
            batch: None,
            precede: None,
            pwd_length: default_pwd_length(),
            single_field: false,
            never_expire: true,
            days_valid: None,
        }
    }

    /// Sets the batch label
    #[must_use]
    pub fn with_batch(mut self, batch: impl Into<String>) -> Self {
        self.batch = Some(batch.into());
        self
    }

    /// Sets the code prefix
    #[must_use]
    pub fn with_precede(mut self, precede: impl Into<String>) -> Self {
        self.precede = Some(precede.into());
        self
    }

    /// Sets the generated password length
    #[must_use]
    pub fn with_pwd_length(mut self, pwd_length: u8) -> Self {
        self.pwd_length = pwd_length;
        self
    }

    /// Uses the voucher code as its password
    #[must_use]
    pub fn single_field(mut self) -> Self {
        self.single_field = true;
        self
    }

    /// Makes the vouchers expire `days` after first use
    #[must_use]
    pub fn expiring_after_days(mut self, days: u32) -> Self {
        self.never_expire = false;
        self.days_valid = Some(days);
        self
    }
}

impl Validate for CreateVoucherRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_id("realm_id", self.realm_id)?;
        require_id("profile_id", self.profile_id)?;
        if self.quantity == 0 {
            return Err(AppError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }
        if self.quantity > MAX_VOUCHER_BATCH {
            return Err(AppError::Validation(format!(
                "quantity must not exceed {MAX_VOUCHER_BATCH}"
            )));
        }
        if !(3..=32).contains(&self.pwd_length) {
            return Err(AppError::Validation(
                "pwd_length must be between 3 and 32".to_string(),
            ));
        }
        if !self.never_expire && self.days_valid.unwrap_or(0) == 0 {
            return Err(AppError::Validation(
                "days_valid must be at least 1 for expiring vouchers".to_string(),
            ));
        }
        Ok(())
    }
}

/// Request to create a permanent user
///
/// Required: `username`, `password`, `realm_id`, `profile_id`. Profile
/// attributes beyond the named ones go into `attributes` and are sent as
/// top-level fields.
///
/// `Debug` and `Display` print the request with the password masked.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserRequest {
    /// Login name
    #[serde(default)]
    pub username: String,
    /// Login password
    #[serde(default)]
    pub password: String,
    /// Realm the user belongs to
    #[serde(default)]
    pub realm_id: u64,
    /// Profile applied to the user
    #[serde(default)]
    pub profile_id: u64,
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
    /// Whether the account may authenticate right away
    #[serde(default = "default_true")]
    pub active: bool,
    /// Additional profile attributes
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl CreateUserRequest {
    /// Creates an active user request with no profile attributes
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        realm_id: u64,
        profile_id: u64,
    ) -> Self {
        Self {
            username: username.into().trim().to_string(),
            password: password.into(),
            realm_id,
            profile_id,
            name: None,
            surname: None,
            email: None,
            phone: None,
            address: None,
            active: true,
            attributes: BTreeMap::new(),
        }
    }

    /// Sets the first name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the last name
    #[must_use]
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    /// Sets the contact email
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the contact phone
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the postal address
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Creates the user disabled
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Adds a free-form profile attribute
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl CreateUserRequest {
    fn masked(&self) -> Result<Value, fmt::Error> {
        let mut value = serde_json::to_value(self).map_err(|_| fmt::Error)?;
        if let Some(map) = value.as_object_mut() {
            map.insert("password".to_string(), Value::String("***".to_string()));
        }
        Ok(value)
    }
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string_pretty(&self.masked()?).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl fmt::Display for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked()?)
    }
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.username.trim().is_empty() {
            return Err(AppError::Validation("username is required".to_string()));
        }
        if self.username.chars().any(char::is_whitespace) {
            return Err(AppError::Validation(
                "username must not contain whitespace".to_string(),
            ));
        }
        if self.password.is_empty() {
            return Err(AppError::Validation("password is required".to_string()));
        }
        require_id("realm_id", self.realm_id)?;
        require_id("profile_id", self.profile_id)?;
        if let Some(email) = self.email.as_deref().filter(|e| !e.contains('@')) {
            return Err(AppError::Validation(format!("invalid email: {email}")));
        }
        if let Some(key) = self
            .attributes
            .keys()
            .find(|k| RESERVED_FIELDS.contains(&k.as_str()))
        {
            return Err(AppError::Validation(format!(
                "attribute '{key}' is reserved"
            )));
        }
        Ok(())
    }
}
