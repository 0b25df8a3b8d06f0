//! Domain constants
//!
//! Credential keys, standard header names and values shared by all clients.

// ============================================================================
// CREDENTIAL KEYS
// ============================================================================

/// Base URL every request path is joined onto
pub const CREDENTIAL_URL: &str = "url";

/// API key sent by gateway clients
pub const CREDENTIAL_API_KEY: &str = "api_key";

/// Basic auth user name
pub const CREDENTIAL_USERNAME: &str = "username";

/// Basic auth password
pub const CREDENTIAL_PASSWORD: &str = "password";

// ============================================================================
// HEADER CONSTANTS
// ============================================================================

/// Accept header name
pub const HEADER_ACCEPT: &str = "Accept";

/// Content-Type header name
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

/// API key header name
pub const API_KEY_HEADER: &str = "x-api-key";

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Form-urlencoded content type
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

// ============================================================================
// GATEWAY CONSTANTS
// ============================================================================

/// Body field carrying the gateway's error message
pub const GATEWAY_MESSAGE_FIELD: &str = "message";

/// Body message the gateway returns alongside a 2xx status when the upstream failed
pub const GATEWAY_INTERNAL_ERROR_SENTINEL: &str = "Internal server error";

/// Status reported for a sentinel failure
pub const GATEWAY_SENTINEL_STATUS: u16 = 500;
