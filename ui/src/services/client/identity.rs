use serde_json::json;
use tracing::{error, info, instrument};

use crate::auth::registry::FieldName;
use crate::auth::validation::ValidatedSubmission;
use crate::services::client::errors::{ServiceError, ServiceResult};
use crate::services::client::types::{ApiErrorBody, Identity, SignUpRequest};
use crate::services::client::HorizonClient;

impl SignUpRequest {
    /// Builds the wire payload from a validated submission. Field values are
    /// already trimmed and narrowed to the sign-up schema.
    pub fn from_submission(submission: &ValidatedSubmission) -> Self {
        Self {
            first_name: submission.value(FieldName::FirstName).to_string(),
            last_name: submission.value(FieldName::LastName).to_string(),
            address1: submission.value(FieldName::Address1).to_string(),
            city: submission.value(FieldName::City).to_string(),
            state: submission.value(FieldName::State).to_string(),
            postal_code: submission.value(FieldName::PostalCode).to_string(),
            date_of_birth: submission.value(FieldName::DateOfBirth).to_string(),
            identity_number: submission.value(FieldName::IdentityNumber).to_string(),
            email: submission.value(FieldName::Email).to_string(),
            password: submission.value(FieldName::Password).to_string(),
        }
    }
}

/// Core sign-in call against the identity service
#[instrument(skip(client, submission), err)]
pub(crate) async fn sign_in_impl(
    client: &HorizonClient,
    submission: &ValidatedSubmission,
) -> ServiceResult<Identity> {
    let email = submission.value(FieldName::Email);
    info!("signing in {}", email);

    let url = client
        .config
        .endpoint(&client.config.identity_base_url, "auth/sign-in");

    let request_body = json!({
        "email": email,
        "password": submission.value(FieldName::Password),
    });

    let response = client
        .http
        .post(&url)
        .header("Content-Type", "application/json")
        .json(&request_body)
        .send()
        .await
        .map_err(|e| ServiceError::Network {
            operation: "sign-in",
            message: format!("failed to call sign-in: {}", e),
        })?;

    parse_identity_response("sign-in", response).await
}

/// Core sign-up call against the identity service
#[instrument(skip(client, submission), err)]
pub(crate) async fn sign_up_impl(
    client: &HorizonClient,
    submission: &ValidatedSubmission,
) -> ServiceResult<Identity> {
    let request_body = SignUpRequest::from_submission(submission);
    info!("creating account for {}", request_body.email);

    let url = client
        .config
        .endpoint(&client.config.identity_base_url, "auth/sign-up");

    let response = client
        .http
        .post(&url)
        .header("Content-Type", "application/json")
        .json(&request_body)
        .send()
        .await
        .map_err(|e| ServiceError::Network {
            operation: "sign-up",
            message: format!("failed to call sign-up: {}", e),
        })?;

    parse_identity_response("sign-up", response).await
}

/// Shared response handling for both identity operations
async fn parse_identity_response(
    operation: &'static str,
    response: reqwest::Response,
) -> ServiceResult<Identity> {
    if response.status().is_success() {
        let identity: Identity =
            response
                .json()
                .await
                .map_err(|e| ServiceError::InvalidResponse {
                    operation,
                    detail: format!("failed to parse response: {}", e),
                })?;

        if identity.id.is_empty() {
            return Err(ServiceError::InvalidResponse {
                operation,
                detail: "response carried no identity id".to_string(),
            });
        }

        info!("{} succeeded for identity {}", operation, identity.id);
        Ok(identity)
    } else {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|e| format!("failed to read error response: {}", e));

        error!("{} failed with status {}: {}", operation, status, error_text);

        // Prefer the structured error body when the service provides one
        match serde_json::from_str::<ApiErrorBody>(&error_text) {
            Ok(body) => Err(ServiceError::Rejected {
                operation,
                code: body.error,
                message: body.message.unwrap_or(error_text),
            }),
            Err(_) => Err(ServiceError::Rejected {
                operation,
                code: format!("Http{}", status.as_u16()),
                message: error_text,
            }),
        }
    }
}
