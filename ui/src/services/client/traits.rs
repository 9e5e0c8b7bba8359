//! Service boundary traits.
//!
//! The flow logic consumes these traits instead of concrete HTTP clients so
//! submission and linking behavior can be tested against in-memory fakes.
//! Traits are `?Send` because everything runs on the browser's single thread.

use async_trait::async_trait;

use crate::auth::validation::ValidatedSubmission;
use crate::services::client::errors::ServiceResult;
use crate::services::client::types::{Identity, LinkToken, WidgetOutcome};

/// Identity service boundary: authentication and account creation.
///
/// Both operations accept only a [`ValidatedSubmission`], so an unvalidated
/// payload cannot reach the wire.
#[async_trait(?Send)]
pub trait IdentityService {
    /// Create an account from a validated sign-up submission.
    async fn sign_up(&self, submission: &ValidatedSubmission) -> ServiceResult<Identity>;

    /// Authenticate a validated sign-in submission.
    async fn sign_in(&self, submission: &ValidatedSubmission) -> ServiceResult<Identity>;
}

/// Account-linking provider boundary.
#[async_trait(?Send)]
pub trait LinkingProvider {
    /// Request a single-use link token scoped to `identity`.
    async fn create_link_token(&self, identity: &Identity) -> ServiceResult<LinkToken>;

    /// Wait for the hosted widget session opened with `token` to finish.
    /// Resolves with the terminal outcome, or an error if the provider
    /// never reports one.
    async fn await_widget_outcome(&self, token: &LinkToken) -> ServiceResult<WidgetOutcome>;
}
