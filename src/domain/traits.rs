//! # Domain Traits
//!
//! Abstract interfaces for the pluggable pieces of the bot: the chat transport,
//! the validators guarding a command, and the commands themselves.

use crate::domain::types::InboundMessage;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Asynchronous pass/fail predicate gating a command.
///
/// `Ok(false)` is a normal rejection. `Err` means the check itself broke and aborts
/// routing of that one message.
#[async_trait]
pub trait MessageValidator: Send + Sync {
    async fn validate(&self, message: &InboundMessage) -> Result<bool>;
}

pub type SharedValidator = Arc<dyn MessageValidator>;

/// A named command with its validator sequence.
#[async_trait]
pub trait Command: Send + Sync {
    /// Name matched against the text following the prefix
    fn name(&self) -> &str;

    /// Validators run in order before `execute`
    fn validators(&self) -> &[SharedValidator];

    async fn execute(&self, chat: &dyn ChatProvider, message: &InboundMessage) -> Result<()>;
}

pub type SharedCommand = Arc<dyn Command>;
