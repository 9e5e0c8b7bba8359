//! User Interface Components
//!
//! Reusable Dioxus components for the banking interface:
//!
//! - **forms**: the mode-driven auth form and the account-linking panel
//! - **display**: header and loading/status display components
//! - **inputs**: validated input fields and error feedback
//!
//! Components carry no flow logic of their own; they render
//! `AuthFlowState` and emit `AuthAction`s.

pub mod display;
pub mod forms;
pub mod inputs;
