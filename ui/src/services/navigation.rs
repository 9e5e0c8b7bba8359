//! Navigation boundary.
//!
//! A single operation, invoked at most once per flow and only from the
//! sign-in success path. The at-most-once guarantee is enforced by the
//! flow state's navigation latch; this module just performs the redirect.

use tracing::info;

#[cfg(feature = "web")]
pub fn navigate_to_authenticated_home() {
    info!("navigating to authenticated home");

    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href("/") {
            crate::console_error!("navigation to authenticated home failed: {:?}", err);
        }
    }
}

#[cfg(not(feature = "web"))]
pub fn navigate_to_authenticated_home() {
    info!("navigation requested outside a browser context");
}
