// Client-side adapters for the Horizon external services.
//
// This module provides the complete call boundary to:
// - The identity service (sign-in, sign-up)
// - The account-linking provider (link tokens, hosted widget sessions)
//
// Flow logic consumes the boundary through the traits in `traits`, never
// through these HTTP implementations directly.

pub mod errors;
pub mod identity;
pub mod linking;
pub mod traits;
pub mod types;

use async_trait::async_trait;

use crate::auth::validation::ValidatedSubmission;
use crate::services::config::ServiceConfig;

// Re-export core types for easy access
pub use errors::{ServiceError, ServiceResult};
pub use linking::open_hosted_widget;
pub use traits::{IdentityService, LinkingProvider};
pub use types::{
    ApiErrorBody, Identity, LinkToken, LinkTokenRequest, SignUpRequest, WidgetOutcome,
    WidgetResultResponse,
};

/// HTTP client for both external services
pub struct HorizonClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ServiceConfig,
}

impl HorizonClient {
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl Default for HorizonClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl IdentityService for HorizonClient {
    async fn sign_up(&self, submission: &ValidatedSubmission) -> ServiceResult<Identity> {
        identity::sign_up_impl(self, submission).await
    }

    async fn sign_in(&self, submission: &ValidatedSubmission) -> ServiceResult<Identity> {
        identity::sign_in_impl(self, submission).await
    }
}

#[async_trait(?Send)]
impl LinkingProvider for HorizonClient {
    async fn create_link_token(&self, identity: &Identity) -> ServiceResult<LinkToken> {
        linking::create_link_token_impl(self, identity).await
    }

    async fn await_widget_outcome(&self, token: &LinkToken) -> ServiceResult<WidgetOutcome> {
        linking::await_widget_outcome_impl(self, token).await
    }
}
