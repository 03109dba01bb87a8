//! # Gateway Errors
//!
//! Failures that abort command registration. Routing faults travel as plain `anyhow`
//! errors since they only concern the one message being handled.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// A command definition could not be loaded; the whole batch is discarded.
    #[error("command discovery failed: {0:#}")]
    Discovery(anyhow::Error),

    /// Two definitions in one batch declare the same name (strict registration only).
    #[error("command `{0}` is declared more than once")]
    DuplicateCommand(String),
}
