//! Input components for form rendering and error display

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorFeedbackProps {
    pub message: Option<String>,
}

/// Inline error rendered directly under the offending field
#[component]
pub fn FieldErrorFeedback(props: FieldErrorFeedbackProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "validation-feedback invalid",
                "⚠ {message}"
            }
        },
        None => rsx! { div {} },
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SubmitErrorNoticeProps {
    pub message: Option<String>,
}

/// Single summary message shown near the submit control for
/// submission-level failures
#[component]
pub fn SubmitErrorNotice(props: SubmitErrorNoticeProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "submit-result error",
                "✗ {message}"
            }
        },
        None => rsx! { div {} },
    }
}
