use dioxus::prelude::*;

use crate::auth::logic::{prepare_submission, run_submission, SubmitDecision};
use crate::auth::registry::resolve;
use crate::auth::types::{AuthAction, AuthFlowState};
use crate::components::inputs::{FieldErrorFeedback, SubmitErrorNotice, ValidatedInput};
use crate::services::client::HorizonClient;
use crate::{console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct AuthFormComponentProps {
    pub state: Signal<AuthFlowState>,
    pub dispatch: EventHandler<AuthAction>,
}

/// Mode-dependent credential / profile form. The rendered field set comes
/// entirely from the resolved schema, so sign-in and sign-up share one
/// component with zero mode branches in the field markup.
#[component]
pub fn AuthFormComponent(props: AuthFormComponentProps) -> Element {
    let mut state = props.state;
    let dispatch = props.dispatch;

    let snapshot = state();
    let schema = resolve(snapshot.mode);
    let is_submitting = snapshot.is_submitting();

    rsx! {
        div {
            class: "auth-form",

            for def in schema.fields() {
                div {
                    key: "{def.name.as_str()}",
                    class: "input-section",
                    label {
                        class: "input-label",
                        "{def.label}:"
                    }
                    ValidatedInput {
                        value: snapshot.record.value(def.name).to_string(),
                        placeholder: def.placeholder.to_string(),
                        input_type: def.input,
                        input_class: "input-field".to_string(),
                        disabled: false,
                        on_change: {
                            let name = def.name;
                            move |value: String| {
                                dispatch.call(AuthAction::SetField(name, value));
                            }
                        }
                    }
                    FieldErrorFeedback {
                        message: snapshot.field_errors.get(&def.name).cloned()
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    disabled: is_submitting,
                    onclick: move |_| {
                        let decision = state.with_mut(prepare_submission);
                        match decision {
                            SubmitDecision::Ready(submission) => {
                                console_info!(
                                    "submitting {} form",
                                    submission.mode().as_str()
                                );
                                spawn(async move {
                                    let client = HorizonClient::new();
                                    let forward =
                                        move |action: AuthAction| dispatch.call(action);
                                    run_submission(submission, &client, &client, &forward)
                                        .await;
                                });
                            }
                            SubmitDecision::Invalid => {
                                console_warn!("submit blocked by field validation");
                            }
                            SubmitDecision::AlreadySubmitting => {}
                        }
                    },
                    if is_submitting {
                        "Loading..."
                    } else {
                        "{snapshot.mode.action_label()}"
                    }
                }
            }

            SubmitErrorNotice {
                message: snapshot.submission.failure_message().map(str::to_string)
            }
        }
    }
}
