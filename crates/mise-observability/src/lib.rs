//! # mise-observability
//!
//! Subscriber setup, span macros per operation, and the structured events the
//! progress engine emits on every state change.

pub mod events;
pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing};
