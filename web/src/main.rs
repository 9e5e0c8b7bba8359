use dioxus::prelude::*;
use ui::auth::FormMode;
use ui::components::display::HeaderBox;
use ui::AuthFlow;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/sign-in")]
    SignIn {},
    #[route("/sign-up")]
    SignUp {},
}

/// Authenticated landing destination. Account data rendering lives
/// elsewhere; this page only anchors the post-sign-in redirect.
#[component]
fn Home() -> Element {
    rsx! {
        section {
            class: "home",
            HeaderBox {
                title: "Welcome".to_string(),
                subtext: "Access and manage your account and transactions efficiently."
                    .to_string(),
            }
            div {
                class: "home-links",
                Link { to: Route::SignIn {}, "Sign In" }
                Link { to: Route::SignUp {}, "Sign Up" }
            }
        }
    }
}

#[component]
fn SignIn() -> Element {
    rsx! {
        AuthFlow { mode: FormMode::SignIn }
    }
}

#[component]
fn SignUp() -> Element {
    rsx! {
        AuthFlow { mode: FormMode::SignUp }
    }
}
