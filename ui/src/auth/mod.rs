//! Authentication and account-linking flow
//!
//! This module implements the mode-dependent form workflow behind the
//! sign-in and sign-up screens:
//!
//! - **registry**: declarative field schema per form mode, resolved as
//!   data rather than branched over in components
//! - **validation**: one-pass validation producing either a normalized
//!   submission or the full per-field error map
//! - **machine**: the submission lifecycle as a single tagged state with
//!   guarded transitions (single-flight per form instance)
//! - **controller**: post-authentication policy - navigate on sign-in,
//!   enter the account-linking sub-state on sign-up
//! - **logic**: async orchestration wiring the above to the external
//!   service boundary through dispatched actions
//!
//! Everything here is renderer-agnostic; the Dioxus components in
//! `crate::components` drive it through [`AuthAction`] dispatch.

pub mod controller;
pub mod logic;
pub mod machine;
pub mod registry;
pub mod types;
pub mod validation;

pub use controller::{on_authenticated, PostAuthDirective};
pub use logic::{prepare_submission, run_link_widget, run_submission, SubmitDecision};
pub use machine::SubmissionState;
pub use registry::{resolve, FieldDefinition, FieldName, FieldSchema, FormMode, Rule};
pub use types::{AuthAction, AuthFlowState, FlowPhase, FormInputRecord, LinkState};
pub use validation::{validate, ValidatedSubmission, ValidationOutcome};
