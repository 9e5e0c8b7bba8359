use gloo_timers::future::TimeoutFuture;
use tracing::{error, info, instrument, warn};

use crate::services::client::errors::{ServiceError, ServiceResult};
use crate::services::client::types::{
    ApiErrorBody, Identity, LinkToken, LinkTokenRequest, WidgetOutcome, WidgetResultResponse,
};
use crate::services::client::HorizonClient;

/// Request a single-use link token for `identity`
#[instrument(skip(client, identity), err)]
pub(crate) async fn create_link_token_impl(
    client: &HorizonClient,
    identity: &Identity,
) -> ServiceResult<LinkToken> {
    info!("requesting link token for identity {}", identity.id);

    let url = client
        .config
        .endpoint(&client.config.linking_base_url, "link/token");

    let request_body = LinkTokenRequest {
        user_id: identity.id.clone(),
    };

    let response = client
        .http
        .post(&url)
        .header("Content-Type", "application/json")
        .json(&request_body)
        .send()
        .await
        .map_err(|e| ServiceError::Network {
            operation: "create-link-token",
            message: format!("failed to call link token endpoint: {}", e),
        })?;

    if response.status().is_success() {
        let token: LinkToken =
            response
                .json()
                .await
                .map_err(|e| ServiceError::InvalidResponse {
                    operation: "create-link-token",
                    detail: format!("failed to parse response: {}", e),
                })?;

        if token.value.is_empty() {
            return Err(ServiceError::InvalidResponse {
                operation: "create-link-token",
                detail: "response carried an empty token".to_string(),
            });
        }

        info!("link token issued for identity {}", identity.id);
        Ok(token)
    } else {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|e| format!("failed to read error response: {}", e));

        error!(
            "create-link-token failed with status {}: {}",
            status, error_text
        );

        match serde_json::from_str::<ApiErrorBody>(&error_text) {
            Ok(body) => Err(ServiceError::Rejected {
                operation: "create-link-token",
                code: body.error,
                message: body.message.unwrap_or(error_text),
            }),
            Err(_) => Err(ServiceError::Rejected {
                operation: "create-link-token",
                code: format!("Http{}", status.as_u16()),
                message: error_text,
            }),
        }
    }
}

/// Poll the provider until the hosted widget session reports a terminal
/// outcome. The token is consumed by the session; a timed-out session
/// surfaces as a widget error so the flow can offer a retry.
#[instrument(skip(client, token), err)]
pub(crate) async fn await_widget_outcome_impl(
    client: &HorizonClient,
    token: &LinkToken,
) -> ServiceResult<WidgetOutcome> {
    let url = client
        .config
        .endpoint(&client.config.linking_base_url, "link/result");

    for attempt in 0..client.config.widget_poll_attempts {
        let response = client
            .http
            .get(&url)
            .query(&[("token", token.value.as_str())])
            .send()
            .await
            .map_err(|e| ServiceError::Network {
                operation: "widget-result",
                message: format!("failed to poll widget result: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("widget result poll returned status {}", status);
            return Err(ServiceError::Widget {
                reason: format!("result endpoint returned status {}", status),
            });
        }

        let result: WidgetResultResponse =
            response
                .json()
                .await
                .map_err(|e| ServiceError::InvalidResponse {
                    operation: "widget-result",
                    detail: format!("failed to parse response: {}", e),
                })?;

        if let Some(outcome) = result.into_outcome() {
            info!(
                "widget session finished after {} polls: {}",
                attempt + 1,
                match &outcome {
                    WidgetOutcome::Linked(_) => "linked",
                    WidgetOutcome::Abandoned => "abandoned",
                }
            );
            return Ok(outcome);
        }

        TimeoutFuture::new(client.config.widget_poll_interval_ms).await;
    }

    Err(ServiceError::Widget {
        reason: "widget session never reported a terminal state".to_string(),
    })
}

/// Open the provider's hosted widget in a separate browser context.
/// Consumes the token's one permitted launch; completion is observed
/// through [`await_widget_outcome_impl`].
#[cfg(feature = "web")]
pub fn open_hosted_widget(token: &LinkToken) -> ServiceResult<()> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window().ok_or_else(|| ServiceError::Widget {
        reason: "no browser window available".to_string(),
    })?;

    window
        .open_with_url_and_target(&token.widget_url, "_blank")
        .map_err(|err: JsValue| ServiceError::Widget {
            reason: format!("failed to open widget: {:?}", err),
        })?
        .ok_or_else(|| ServiceError::Widget {
            reason: "browser blocked the widget window".to_string(),
        })?;

    info!("hosted widget opened");
    Ok(())
}

#[cfg(not(feature = "web"))]
pub fn open_hosted_widget(_token: &LinkToken) -> ServiceResult<()> {
    Err(ServiceError::Widget {
        reason: "hosted widget requires the web feature".to_string(),
    })
}
