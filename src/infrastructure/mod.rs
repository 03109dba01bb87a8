//! # Infrastructure Layer
//!
//! Handles interactions with external systems: the Matrix homeserver and the log sinks.
//! Implements the traits defined in the Domain layer (e.g., ChatProvider).

pub mod logging;
pub mod matrix;
