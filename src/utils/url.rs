/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::API_PATH_SUFFIX;
use crate::error::AppError;
use reqwest::Url;

/// Normalizes a RadiusDesk base URL so it ends with the API path suffix exactly once
///
/// Surrounding whitespace and trailing slashes are ignored, so
/// `https://host`, `https://host/`, `https://host/cake4/rd_cake` and
/// `https://host/cake4/rd_cake/` all normalize to `https://host/cake4/rd_cake`.
/// The function is idempotent.
#[must_use]
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.ends_with(API_PATH_SUFFIX) {
        trimmed.to_string()
    } else {
        format!("{trimmed}{API_PATH_SUFFIX}")
    }
}

/// Normalizes a base URL and checks that the result is an absolute http(s) URL
///
/// # Errors
/// * `AppError::Config` - If the URL is empty, unparseable or not http/https
pub fn validated_base_url(base_url: &str) -> Result<String, AppError> {
    if base_url.trim().trim_end_matches('/').is_empty() {
        return Err(AppError::Config("base URL is empty".to_string()));
    }
    let normalized = normalize_base_url(base_url);
    let parsed = Url::parse(&normalized)
        .map_err(|e| AppError::Config(format!("invalid base URL '{base_url}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(normalized),
        other => Err(AppError::Config(format!(
            "unsupported URL scheme '{other}' in '{base_url}'"
        ))),
    }
}

/// Joins an endpoint path onto a normalized base URL
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
