// Wire types for the identity service and the account-linking provider.
use serde::{Deserialize, Serialize};

/// Opaque handle returned by the identity service on successful
/// authentication or account creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub email: String,
}

/// Single-use token issued by the linking provider, scoped to one identity.
/// The provider owns expiry; this core only carries the token to the widget.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LinkToken {
    #[serde(rename = "linkToken")]
    pub value: String,
    #[serde(rename = "widgetUrl")]
    pub widget_url: String,
}

/// Terminal result of a hosted widget session.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetOutcome {
    /// The user connected an account; carries the provider's account handle.
    Linked(String),
    /// The user closed the widget without linking.
    Abandoned,
}

/// Sign-up payload sent to the identity service
#[derive(Serialize, Debug, Clone)]
pub struct SignUpRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
    #[serde(rename = "identityNumber")]
    pub identity_number: String,
    pub email: String,
    pub password: String,
}

/// Structured error body returned by both services
#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: Option<String>,
}

/// Link token request payload
#[derive(Serialize, Debug, Clone)]
pub struct LinkTokenRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Polled result of a hosted widget session
#[derive(Deserialize, Debug, Clone)]
pub struct WidgetResultResponse {
    pub status: String,
    #[serde(rename = "accountHandle")]
    pub account_handle: Option<String>,
}

impl WidgetResultResponse {
    /// Maps the wire status to a terminal outcome; `None` while pending.
    pub fn into_outcome(self) -> Option<WidgetOutcome> {
        match self.status.as_str() {
            "linked" => Some(WidgetOutcome::Linked(
                self.account_handle.unwrap_or_default(),
            )),
            "abandoned" => Some(WidgetOutcome::Abandoned),
            _ => None,
        }
    }
}
