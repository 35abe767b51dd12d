/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # RadiusDesk Client Prelude
//!
//! Imports the types and traits most callers need.
//!
//! ```rust,ignore
//! use radiusdesk_client::prelude::*;
//!
//! let config = Config::new("https://radiusdesk.example.com", "admin", "secret", "1");
//! let client = Client::new_lazy(config)?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the RadiusDesk client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// FACADE AND AUTHENTICATION
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Session and authentication state
pub use crate::application::auth::{Auth, AuthState, Session};

// ============================================================================
// RESOURCE SERVICES
// ============================================================================

/// Resource kinds and the resource service trait
pub use crate::application::interfaces::resource::{
    ResourceKind, ResourceService, UserKind, VoucherKind,
};

/// Resource service implementations
pub use crate::application::services::{ResourceClient, UserClient, VoucherClient};

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport trait and implementation
pub use crate::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{CreateUserRequest, CreateVoucherRequest, Validate};

/// Response models
pub use crate::model::responses::{ApiEnvelope, DeleteResult, ListResult};

/// Resource records
pub use crate::presentation::{PermanentUser, Voucher};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Base URL normalization
pub use crate::utils::url::normalize_base_url;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
