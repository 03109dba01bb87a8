//! # Interface Layer
//!
//! The concrete commands and validators exposed to chat users.

pub mod commands;
pub mod validators;
