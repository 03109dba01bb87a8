//! # Application Layer
//!
//! Contains the core logic of the bot: the command registry, the validator chain
//! and the message router that ties them together.

pub mod chain;
pub mod registry;
pub mod router;
