use thiserror::Error;

/// Failures crossing the external service boundary.
///
/// Every adapter call resolves to either a domain value or one of these
/// variants. Raw diagnostic detail stays inside the variant for logging;
/// anything shown to the user goes through [`ServiceError::user_message`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServiceError {
    #[error("network error during {operation}: {message}")]
    Network {
        operation: &'static str,
        message: String,
    },

    #[error("{operation} rejected with {code}: {message}")]
    Rejected {
        operation: &'static str,
        code: String,
        message: String,
    },

    #[error("invalid response from {operation}: {detail}")]
    InvalidResponse {
        operation: &'static str,
        detail: String,
    },

    #[error("link widget failed: {reason}")]
    Widget { reason: String },
}

impl ServiceError {
    /// User-safe summary for display near the submit control.
    ///
    /// Never leaks status codes, response bodies, or transport detail.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Network { .. } => {
                "We couldn't reach the service. Check your connection and try again.".to_string()
            }
            ServiceError::Rejected { code, .. } => match code.as_str() {
                "InvalidCredentials" => "Incorrect email or password.".to_string(),
                "DuplicateAccount" => {
                    "An account with this email already exists.".to_string()
                }
                "InvalidFields" => {
                    "Some of your details were declined. Please review them and try again."
                        .to_string()
                }
                _ => "The request was declined. Please review your details and try again."
                    .to_string(),
            },
            ServiceError::InvalidResponse { .. } => {
                "Something went wrong on our side. Please try again.".to_string()
            }
            ServiceError::Widget { .. } => {
                "Account linking didn't finish. Please try again.".to_string()
            }
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ServiceError::Network { .. } | ServiceError::Widget { .. }
        )
    }
}

/// Result type for service adapter operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_hides_transport_detail() {
        let err = ServiceError::Network {
            operation: "sign-in",
            message: "dns error: failed to lookup api.horizon-banking.example".to_string(),
        };
        let message = err.user_message();
        assert!(!message.contains("dns"));
        assert!(!message.contains("api.horizon-banking.example"));
    }

    #[test]
    fn user_message_maps_known_rejection_codes() {
        let err = ServiceError::Rejected {
            operation: "sign-in",
            code: "InvalidCredentials".to_string(),
            message: "password mismatch for user 42".to_string(),
        };
        assert_eq!(err.user_message(), "Incorrect email or password.");

        let err = ServiceError::Rejected {
            operation: "sign-up",
            code: "DuplicateAccount".to_string(),
            message: "unique constraint violation".to_string(),
        };
        assert!(err.user_message().contains("already exists"));
    }

    #[test]
    fn retryable_classification() {
        assert!(ServiceError::Network {
            operation: "sign-in",
            message: "timeout".to_string()
        }
        .is_retryable());
        assert!(!ServiceError::Rejected {
            operation: "sign-in",
            code: "InvalidCredentials".to_string(),
            message: String::new()
        }
        .is_retryable());
    }
}
