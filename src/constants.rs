/// Path suffix every RadiusDesk API URL lives under
pub const API_PATH_SUFFIX: &str = "/cake4/rd_cake";
/// User agent string used in HTTP requests to identify this client to the backend
pub const USER_AGENT: &str = "radiusdesk-client/0.1.0";
/// Default timeout in seconds for a single HTTP request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default page size used when a caller does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 50;
/// Largest voucher batch the backend accepts in a single add request
pub const MAX_VOUCHER_BATCH: u32 = 1000;
/// Login endpoint, relative to the normalized base URL
pub const AUTHENTICATE_PATH: &str = "dashboard/authenticate.json";
/// Token validation endpoint, relative to the normalized base URL
pub const CHECK_TOKEN_PATH: &str = "dashboard/check-token.json";
/// Environment variable holding the RadiusDesk base URL
pub const ENV_URL: &str = "RADIUSDESK_URL";
/// Environment variable holding the dashboard username
pub const ENV_USERNAME: &str = "RADIUSDESK_USERNAME";
/// Environment variable holding the dashboard password
pub const ENV_PASSWORD: &str = "RADIUSDESK_PASSWORD";
/// Environment variable holding the cloud id
pub const ENV_CLOUD_ID: &str = "RADIUSDESK_CLOUD_ID";
/// Environment variable overriding the request timeout, in seconds
pub const ENV_TIMEOUT: &str = "RADIUSDESK_TIMEOUT";
/// Messages the backend sends when it rejects the session token, compared case-insensitively
pub const TOKEN_REJECTION_MESSAGES: [&str; 7] = [
    "token missing",
    "token invalid",
    "invalid token",
    "token expired",
    "token missing or invalid",
    "token not valid",
    "no token supplied",
];
