/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # RadiusDesk Client
//!
//! An async client for the RadiusDesk management API (`rd_cake`).
//!
//! The [`Client`](application::client::Client) facade owns a single
//! authenticated session and hands out resource-scoped sub-clients for
//! vouchers and permanent users:
//!
//! ```ignore
//! use radiusdesk_client::prelude::*;
//!
//! let config = Config::new("https://radiusdesk.example.com", "admin", "secret", "1");
//! let client = Client::new_lazy(config)?;
//!
//! if !client.check_connection().await {
//!     std::process::exit(1);
//! }
//!
//! let voucher = client.vouchers().create(&CreateVoucherRequest::new(1, 2, 1)).await?;
//! let page = client.vouchers().list(5, None).await?;
//! let result = client.vouchers().delete(voucher.id.unwrap_or_default()).await?;
//! ```
//!
//! Base URLs are normalized so that the `/cake4/rd_cake` suffix is present
//! exactly once. The session is established on first use and is never renewed
//! silently: after the backend rejects it, the caller must call
//! [`Client::establish_session`](application::client::Client::establish_session)
//! or build a new client.

/// Facade, authentication, configuration and resource services
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error taxonomy
pub mod error;
/// Wire models and the authenticated HTTP client
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Typed resource records
pub mod presentation;
/// Transport abstraction over the HTTP stack
pub mod transport;
/// Logging, environment and URL helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
