//! Network constants for the Doraquants backend.

/// Default REST API base URL (local development backend).
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Value shipped in sample `.env` files; treated as "no key configured".
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Environment variable holding the base URL.
pub const ENV_API_URL: &str = "DORAQUANTS_API_URL";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "DORAQUANTS_API_KEY";
