/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Environment variable helpers.
//!
//! The client itself never reads the process environment. These helpers exist
//! for callers (binaries, demos, live tests) that assemble a [`Config`] from
//! `RADIUSDESK_*` variables.

use crate::application::config::Config;
use crate::constants::{
    DEFAULT_TIMEOUT_SECS, ENV_CLOUD_ID, ENV_PASSWORD, ENV_TIMEOUT, ENV_URL, ENV_USERNAME,
};
use crate::error::AppError;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, error};

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|val| val.parse::<T>().ok())
}

fn require_env(env_var: &str) -> Result<String, AppError> {
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => Ok(val.trim().to_string()),
        _ => Err(AppError::Config(format!("{env_var} is not set"))),
    }
}

/// Builds a [`Config`] from the `RADIUSDESK_*` environment variables
///
/// `RADIUSDESK_URL`, `RADIUSDESK_USERNAME`, `RADIUSDESK_PASSWORD` and
/// `RADIUSDESK_CLOUD_ID` are required. `RADIUSDESK_TIMEOUT` overrides the
/// default request timeout.
///
/// # Errors
/// * `AppError::Config` - If a required variable is missing or empty
pub fn config_from_env() -> Result<Config, AppError> {
    let config = Config::new(
        require_env(ENV_URL)?,
        require_env(ENV_USERNAME)?,
        require_env(ENV_PASSWORD)?,
        require_env(ENV_CLOUD_ID)?,
    )
    .with_timeout(get_env_or_default(ENV_TIMEOUT, DEFAULT_TIMEOUT_SECS));

    debug!(
        "Loaded configuration for {} (cloud {})",
        config.rest_api.base_url, config.cloud_id
    );
    Ok(config)
}
