// Core types for the auth flow - no dioxus imports needed here
use std::collections::BTreeMap;
use std::fmt;

use crate::auth::machine::SubmissionState;
use crate::auth::registry::{FieldName, FormMode};
use crate::services::client::{Identity, LinkToken, WidgetOutcome};

/// Raw form values keyed by field name. Holds the union of fields across
/// both modes; values default to the empty string. Which entries matter
/// is decided by the resolved schema, never by this record.
#[derive(Clone, PartialEq)]
pub struct FormInputRecord {
    values: BTreeMap<FieldName, String>,
}

impl Default for FormInputRecord {
    fn default() -> Self {
        Self {
            values: FieldName::ALL
                .iter()
                .map(|name| (*name, String::new()))
                .collect(),
        }
    }
}

impl FormInputRecord {
    pub fn value(&self, name: FieldName) -> &str {
        self.values.get(&name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: FieldName, value: String) {
        self.values.insert(name, value);
    }
}

// Raw values may hold credentials; debug output shows presence only.
impl fmt::Debug for FormInputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.values.iter().map(|(name, value)| {
                (name.as_str(), if value.is_empty() { "<empty>" } else { "<set>" })
            }))
            .finish()
    }
}

/// Which panel of the flow is on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowPhase {
    /// Credential / profile form for the current mode
    Credentials,
    /// Post-authentication account-linking sub-state (sign-up only)
    LinkAccount,
}

/// Sub-state for the account-linking phase
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LinkState {
    pub token: Option<LinkToken>,
    pub is_requesting_token: bool,
    pub is_widget_open: bool,
    /// Retryable token/widget failure, shown with a retry affordance
    pub error: Option<String>,
    /// Terminal widget result; set once, ends the flow
    pub outcome: Option<WidgetOutcome>,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum AuthAction {
    /// Reset the flow for a (possibly different) mode
    SetMode(FormMode),
    SetField(FieldName, String),
    SetFieldErrors(BTreeMap<FieldName, String>),

    // Submission lifecycle
    BeginSubmission,
    SubmissionSucceeded(Identity),
    SubmissionFailed(String),

    // Post-auth transitions
    RequestNavigation,
    EnterLinkAccount,
    SetRequestingLinkToken(bool),
    SetLinkToken(LinkToken),
    LinkTokenFailed(String),
    WidgetOpened,
    WidgetCompleted(WidgetOutcome),
    WidgetFailed(String),
}

/// Complete state of one form instance. Owned exclusively by that
/// instance; nothing here is shared across forms.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthFlowState {
    pub mode: FormMode,
    pub record: FormInputRecord,
    pub field_errors: BTreeMap<FieldName, String>,
    pub submission: SubmissionState,
    pub phase: FlowPhase,
    pub link: LinkState,
    /// At-most-once latch for the sign-in navigation side effect
    pub navigation_requested: bool,
}

impl AuthFlowState {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            record: FormInputRecord::default(),
            field_errors: BTreeMap::new(),
            submission: SubmissionState::Idle,
            phase: FlowPhase::Credentials,
            link: LinkState::default(),
            navigation_requested: false,
        }
    }

    /// Reduces the state based on an action in-place (preserves Dioxus
    /// Signal reactivity). Invalid lifecycle transitions are no-ops.
    pub fn reduce_in_place(&mut self, action: AuthAction) {
        match action {
            AuthAction::SetMode(mode) => {
                *self = AuthFlowState::new(mode);
            }
            AuthAction::SetField(name, value) => {
                self.record.set(name, value);
                // Editing a field retires its stale error immediately
                self.field_errors.remove(&name);
            }
            AuthAction::SetFieldErrors(errors) => {
                self.field_errors = errors;
            }

            AuthAction::BeginSubmission => {
                if self.submission.try_begin() {
                    self.field_errors.clear();
                }
            }
            AuthAction::SubmissionSucceeded(identity) => {
                self.submission.resolve_success(identity);
            }
            AuthAction::SubmissionFailed(message) => {
                self.submission.resolve_failure(message);
            }

            AuthAction::RequestNavigation => {
                self.navigation_requested = true;
            }
            AuthAction::EnterLinkAccount => {
                self.phase = FlowPhase::LinkAccount;
            }
            AuthAction::SetRequestingLinkToken(requesting) => {
                self.link.is_requesting_token = requesting;
            }
            AuthAction::SetLinkToken(token) => {
                self.link.token = Some(token);
                self.link.error = None;
            }
            AuthAction::LinkTokenFailed(message) => {
                self.link.token = None;
                self.link.error = Some(message);
            }
            AuthAction::WidgetOpened => {
                self.link.is_widget_open = true;
            }
            AuthAction::WidgetCompleted(outcome) => {
                self.link.outcome = Some(outcome);
                self.link.is_widget_open = false;
            }
            AuthAction::WidgetFailed(message) => {
                // The token was consumed by the failed session; a retry
                // starts from a fresh token request.
                self.link.is_widget_open = false;
                self.link.token = None;
                self.link.error = Some(message);
            }
        }
    }

    /// Helper methods for common state queries
    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    pub fn authenticated_identity(&self) -> Option<&Identity> {
        self.submission.identity()
    }

    pub fn should_show_link_panel(&self) -> bool {
        self.phase == FlowPhase::LinkAccount
    }

    pub fn flow_finished(&self) -> bool {
        self.link.outcome.is_some()
    }
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
    fn record_defaults_cover_the_field_union() {
        let record = FormInputRecord::default();
        for name in FieldName::ALL {
            assert_eq!(record.value(name), "");
        }
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut state = AuthFlowState::new(FormMode::SignIn);
        let mut errors = BTreeMap::new();
        errors.insert(FieldName::Email, "Email is required".to_string());
        errors.insert(FieldName::Password, "Password is required".to_string());
        state.reduce_in_place(AuthAction::SetFieldErrors(errors));

        state.reduce_in_place(AuthAction::SetField(
            FieldName::Email,
            "a@b.com".to_string(),
        ));

        assert!(!state.field_errors.contains_key(&FieldName::Email));
        assert!(state.field_errors.contains_key(&FieldName::Password));
    }

    #[test]
    fn begin_submission_while_in_flight_changes_nothing() {
        let mut state = AuthFlowState::new(FormMode::SignIn);
        state.reduce_in_place(AuthAction::BeginSubmission);
        let snapshot = state.clone();

        state.reduce_in_place(AuthAction::BeginSubmission);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn set_mode_resets_the_whole_instance() {
        let mut state = AuthFlowState::new(FormMode::SignIn);
        state.reduce_in_place(AuthAction::SetField(
            FieldName::Email,
            "a@b.com".to_string(),
        ));
        state.reduce_in_place(AuthAction::BeginSubmission);

        state.reduce_in_place(AuthAction::SetMode(FormMode::SignUp));
        assert_eq!(state.mode, FormMode::SignUp);
        assert_eq!(state.record.value(FieldName::Email), "");
        assert_eq!(state.submission, SubmissionState::Idle);
    }

    #[test]
    fn widget_failure_consumes_the_token_and_keeps_the_identity() {
        let mut state = AuthFlowState::new(FormMode::SignUp);
        state.reduce_in_place(AuthAction::BeginSubmission);
        state.reduce_in_place(AuthAction::SubmissionSucceeded(identity()));
        state.reduce_in_place(AuthAction::EnterLinkAccount);
        state.reduce_in_place(AuthAction::SetLinkToken(LinkToken {
            value: "tok_1".to_string(),
            widget_url: "https://link.example/widget/tok_1".to_string(),
        }));
        state.reduce_in_place(AuthAction::WidgetOpened);
        state.reduce_in_place(AuthAction::WidgetFailed("session expired".to_string()));

        assert!(state.link.token.is_none());
        assert!(state.link.error.is_some());
        // The authenticated identity survives for the retry path.
        assert_eq!(state.authenticated_identity().unwrap().id, "usr_1");
    }

    #[test]
    fn widget_completion_finishes_the_flow() {
        let mut state = AuthFlowState::new(FormMode::SignUp);
        state.reduce_in_place(AuthAction::WidgetCompleted(WidgetOutcome::Abandoned));
        assert!(state.flow_finished());
        assert!(!state.link.is_widget_open);
    }
}
