//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// localStorage key holding the session token
    pub const TOKEN_KEY: &'static str = "auth_token";

    /// API base URL baked in at build time; the page origin is used otherwise
    pub const API_BASE: Option<&'static str> = option_env!("PORTAL_API_BASE");
}

/// Notification configuration
pub struct NotificationConfig;

impl NotificationConfig {
    /// Lifetime of a notification unless overridden
    pub const DEFAULT_DURATION_MS: u32 = 5_000;
}
