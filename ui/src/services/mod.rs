//! Infrastructure Services
//!
//! This module provides the external call boundary for the application:
//!
//! - **client**: HTTP adapters for the identity service and the linking
//!   provider, plus the boundary traits the flow logic consumes
//! - **config**: endpoint configuration and widget polling parameters
//! - **navigation**: the single redirect operation for the sign-in
//!   success path
//!
//! Services are WASM-first: `?Send` async traits, browser APIs gated
//! behind the `web` feature.

pub mod client;
pub mod config;
pub mod navigation;
