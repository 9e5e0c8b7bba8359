//! Flow orchestration.
//!
//! The synchronous half ([`prepare_submission`]) runs inside the state
//! borrow: it validates the record and claims the single submission slot.
//! The asynchronous half ([`run_submission`], [`run_link_widget`]) talks
//! to the service boundary and feeds results back through dispatched
//! actions, so no state borrow is ever held across an await.

use crate::auth::controller::{begin_account_link, on_authenticated, PostAuthDirective};
use crate::auth::registry::{resolve, FormMode};
use crate::auth::types::{AuthAction, AuthFlowState};
use crate::auth::validation::{validate, ValidatedSubmission, ValidationOutcome};
use crate::services::client::{IdentityService, LinkToken, LinkingProvider};

/// What a submit action decided to do.
#[derive(Debug)]
pub enum SubmitDecision {
    /// A submission is already in flight; nothing changed.
    AlreadySubmitting,
    /// Validation failed; field errors were recorded on the state.
    Invalid,
    /// The submission slot is claimed; run the async half with this payload.
    Ready(ValidatedSubmission),
}

/// Validate the current record and, if it passes, move the machine to
/// `Submitting`. Re-submitting while in flight is a no-op with no state
/// change, which keeps at most one adapter call outstanding.
pub fn prepare_submission(state: &mut AuthFlowState) -> SubmitDecision {
    if state.submission.is_submitting() {
        return SubmitDecision::AlreadySubmitting;
    }

    let schema = resolve(state.mode);
    match validate(&state.record, &schema) {
        ValidationOutcome::Invalid(errors) => {
            state.field_errors = errors;
            SubmitDecision::Invalid
        }
        ValidationOutcome::Valid(submission) => {
            if !state.submission.try_begin() {
                return SubmitDecision::AlreadySubmitting;
            }
            state.field_errors.clear();
            SubmitDecision::Ready(submission)
        }
    }
}

/// Drive one claimed submission through the identity service and the
/// post-auth controller. Every outcome is delivered as dispatched actions.
pub async fn run_submission<S, L, D>(
    submission: ValidatedSubmission,
    identity_service: &S,
    linking_provider: &L,
    dispatch: &D,
) where
    S: IdentityService,
    L: LinkingProvider,
    D: Fn(AuthAction),
{
    let mode = submission.mode();
    let result = match mode {
        FormMode::SignIn => identity_service.sign_in(&submission).await,
        FormMode::SignUp => identity_service.sign_up(&submission).await,
    };

    match result {
        Ok(identity) => {
            dispatch(AuthAction::SubmissionSucceeded(identity.clone()));

            match on_authenticated(mode, &identity) {
                PostAuthDirective::NavigateHome => {
                    dispatch(AuthAction::RequestNavigation);
                }
                PostAuthDirective::BeginAccountLink => {
                    dispatch(AuthAction::EnterLinkAccount);
                    begin_account_link(identity, linking_provider, dispatch).await;
                }
            }
        }
        Err(err) => {
            dispatch(AuthAction::SubmissionFailed(err.user_message()));
        }
    }
}

/// Wait out a hosted widget session and record its terminal result.
/// Both completion and abandonment end the flow; the linked-account
/// handle is carried in the outcome and processed no further.
pub async fn run_link_widget<L, D>(token: LinkToken, provider: &L, dispatch: &D)
where
    L: LinkingProvider,
    D: Fn(AuthAction),
{
    dispatch(AuthAction::WidgetOpened);

    match provider.await_widget_outcome(&token).await {
        Ok(outcome) => {
            dispatch(AuthAction::WidgetCompleted(outcome));
        }
        Err(err) => {
            dispatch(AuthAction::WidgetFailed(err.user_message()));
        }
    }
}

#[cfg(test)]
#[path = "flow_tests.rs"]
mod flow_tests;
