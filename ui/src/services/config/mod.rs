//! Service endpoint configuration.
//!
//! Centralizes the base URLs for the identity service and the linking
//! provider, plus the polling parameters for hosted widget sessions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// Base URL of the identity service (sign-in / sign-up)
    pub identity_base_url: String,

    /// Base URL of the account-linking provider
    pub linking_base_url: String,

    /// Delay between hosted widget result polls, in milliseconds
    pub widget_poll_interval_ms: u32,

    /// Maximum number of widget result polls before giving up
    pub widget_poll_attempts: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            identity_base_url: "https://api.horizon-banking.example/v1".to_string(),
            linking_base_url: "https://link.horizon-banking.example/v1".to_string(),
            widget_poll_interval_ms: 2_000,
            widget_poll_attempts: 150,
        }
    }
}

impl ServiceConfig {
    pub fn endpoint(&self, base: &str, path: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_duplicate_slashes() {
        let config = ServiceConfig::default();
        assert_eq!(
            config.endpoint("https://api.example/v1/", "/auth/sign-in"),
            "https://api.example/v1/auth/sign-in"
        );
        assert_eq!(
            config.endpoint("https://api.example/v1", "auth/sign-up"),
            "https://api.example/v1/auth/sign-up"
        );
    }
}
