//! Post-auth transition controller.
//!
//! Decides what happens after the submission machine reaches
//! `Succeeded`: sign-in navigates away, sign-up enters the account-linking
//! sub-state. Token acquisition failures surface as retryable errors that
//! preserve the authenticated identity, so a retry never re-validates or
//! re-submits the original form.

use tracing::info;

use crate::auth::registry::FormMode;
use crate::auth::types::AuthAction;
use crate::services::client::{Identity, LinkingProvider};

/// Instruction returned to the UI layer after authentication succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostAuthDirective {
    /// Sign-in: redirect to the authenticated landing destination.
    NavigateHome,
    /// Sign-up: switch to the linking sub-state and acquire a token.
    BeginAccountLink,
}

/// Pure policy: invoked exactly once per successful submission.
pub fn on_authenticated(mode: FormMode, identity: &Identity) -> PostAuthDirective {
    info!(
        "authentication complete for {} via {}",
        identity.display_name,
        mode.as_str()
    );

    match mode {
        FormMode::SignIn => PostAuthDirective::NavigateHome,
        FormMode::SignUp => PostAuthDirective::BeginAccountLink,
    }
}

/// Acquire a link token for `identity` and hand it to the flow state.
/// Failure dispatches a retryable error instead of stalling the panel.
pub async fn begin_account_link<L, D>(identity: Identity, provider: &L, dispatch: &D)
where
    L: LinkingProvider,
    D: Fn(AuthAction),
{
    dispatch(AuthAction::SetRequestingLinkToken(true));

    match provider.create_link_token(&identity).await {
        Ok(token) => {
            dispatch(AuthAction::SetLinkToken(token));
        }
        Err(err) => {
            dispatch(AuthAction::LinkTokenFailed(err.user_message()));
        }
    }

    dispatch(AuthAction::SetRequestingLinkToken(false));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: "usr_1".to_string(),
            display_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn sign_in_navigates_and_never_links() {
        assert_eq!(
            on_authenticated(FormMode::SignIn, &identity()),
            PostAuthDirective::NavigateHome
        );
    }

    #[test]
    fn sign_up_enters_the_linking_sub_state() {
        assert_eq!(
            on_authenticated(FormMode::SignUp, &identity()),
            PostAuthDirective::BeginAccountLink
        );
    }
}
