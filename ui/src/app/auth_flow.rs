use dioxus::prelude::*;

use crate::auth::registry::FormMode;
use crate::auth::types::{AuthAction, AuthFlowState};
use crate::components::display::HeaderBox;
use crate::components::forms::{AuthFormComponent, LinkAccountPanel};
use crate::console_info;
use crate::services::navigation;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

#[derive(Props, PartialEq, Clone)]
pub struct AuthFlowProps {
    pub mode: FormMode,
}

/// One complete form instance: credential form, submission lifecycle,
/// and - for sign-up - the account-linking sub-state. Each mounted
/// instance owns its state exclusively.
#[component]
pub fn AuthFlow(props: AuthFlowProps) -> Element {
    let mode = props.mode;

    // Consolidated state management
    let mut state = use_signal(|| AuthFlowState::new(mode));

    // Dispatch function for actions - using in-place reduction to preserve
    // Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: AuthAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // The mode prop can change while the component stays mounted; the
    // equality guard makes this settle in one extra render.
    if state.peek().mode != mode {
        state.with_mut(|s| s.reduce_in_place(AuthAction::SetMode(mode)));
    }

    // Sign-in success path: perform the redirect once the latch flips.
    let navigation_requested = use_memo(move || state().navigation_requested);
    use_effect(move || {
        if navigation_requested() {
            console_info!("sign-in complete, redirecting to home");
            navigation::navigate_to_authenticated_home();
        }
    });

    let snapshot = state();
    let linking = snapshot.should_show_link_panel();
    let title = if linking {
        "Link Account"
    } else {
        snapshot.mode.action_label()
    };
    let subtext = if linking {
        "Link your account to get started"
    } else {
        "Please enter your details"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }

        section {
            class: "auth-flow",

            HeaderBox {
                title: title.to_string(),
                subtext: subtext.to_string(),
            }

            if linking {
                LinkAccountPanel {
                    state: state,
                    dispatch: dispatch
                }
            } else {
                AuthFormComponent {
                    state: state,
                    dispatch: dispatch
                }

                footer {
                    class: "auth-footer",
                    if snapshot.mode == FormMode::SignIn {
                        p { "Don't have an account?" }
                        a {
                            class: "auth-footer-link",
                            href: "/sign-up",
                            "Sign Up"
                        }
                    } else {
                        p { "Already have an account?" }
                        a {
                            class: "auth-footer-link",
                            href: "/sign-in",
                            "Sign In"
                        }
                    }
                }
            }
        }
    }
}
