/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Login models
pub mod auth;
/// Authenticated HTTP client and response interpretation
pub mod http;
/// Request models and validation
pub mod requests;
/// Response envelope and result models
pub mod responses;
