use dioxus::prelude::*;

use crate::auth::controller::begin_account_link;
use crate::auth::logic::run_link_widget;
use crate::auth::types::{AuthAction, AuthFlowState};
use crate::components::display::LoadingIndicator;
use crate::components::inputs::SubmitErrorNotice;
use crate::services::client::{open_hosted_widget, HorizonClient, WidgetOutcome};
use crate::utils::format::mask_sensitive;
use crate::{console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct LinkAccountPanelProps {
    pub state: Signal<AuthFlowState>,
    pub dispatch: EventHandler<AuthAction>,
}

/// Post-authentication linking sub-state. The only action here is to
/// launch the provider's hosted widget with the issued token; widget
/// completion or abandonment ends the flow.
#[component]
pub fn LinkAccountPanel(props: LinkAccountPanelProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let snapshot = state();

    // Account handles are external identifiers; show them masked.
    let linked_handle = match &snapshot.link.outcome {
        Some(WidgetOutcome::Linked(handle)) => Some(mask_sensitive(handle)),
        _ => None,
    };

    rsx! {
        div {
            class: "link-account-panel",

            if let Some(masked) = &linked_handle {
                div {
                    class: "link-result success",
                    "✓ Your bank account {masked} is connected."
                }
            } else if let Some(WidgetOutcome::Abandoned) = &snapshot.link.outcome {
                div {
                    class: "link-result",
                    "Linking was cancelled. You can connect an account later from your dashboard."
                }
            } else if snapshot.link.is_widget_open {
                LoadingIndicator {
                    message: "Waiting for the linking widget to finish...".to_string()
                }
            } else if snapshot.link.is_requesting_token {
                LoadingIndicator {
                    message: "Preparing account linking...".to_string()
                }
            } else if let Some(token) = snapshot.link.token.clone() {
                div {
                    class: "button-section",
                    button {
                        class: "link-button",
                        onclick: move |_| {
                            if state.peek().link.is_widget_open {
                                return;
                            }
                            let token = token.clone();
                            match open_hosted_widget(&token) {
                                Ok(()) => {
                                    console_info!("linking widget launched");
                                    spawn(async move {
                                        let client = HorizonClient::new();
                                        let forward =
                                            move |action: AuthAction| dispatch.call(action);
                                        run_link_widget(token, &client, &forward).await;
                                    });
                                }
                                Err(err) => {
                                    console_warn!("widget launch failed: {}", err);
                                    dispatch.call(AuthAction::WidgetFailed(
                                        err.user_message(),
                                    ));
                                }
                            }
                        },
                        "Connect your bank account"
                    }
                }
            }

            if snapshot.link.outcome.is_none() {
                SubmitErrorNotice {
                    message: snapshot.link.error.clone()
                }
                if snapshot.link.error.is_some() && !snapshot.link.is_requesting_token {
                    div {
                        class: "button-section",
                        button {
                            class: "retry-button",
                            onclick: move |_| {
                                // Retry re-acquires a token with the identity
                                // preserved from the successful sign-up; the
                                // original form is not re-validated.
                                if let Some(identity) =
                                    state.peek().authenticated_identity().cloned()
                                {
                                    spawn(async move {
                                        let client = HorizonClient::new();
                                        let forward =
                                            move |action: AuthAction| dispatch.call(action);
                                        begin_account_link(identity, &client, &forward)
                                            .await;
                                    });
                                }
                            },
                            "Try again"
                        }
                    }
                }
            }
        }
    }
}
