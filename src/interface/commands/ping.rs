//! # Ping Command
//!
//! Replies `pong`. No validators, so it answers in every room.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, Command, SharedCommand, SharedValidator};
use crate::domain::types::InboundMessage;
use crate::strings::messages;

pub struct PingCommand;

pub async fn load(_config: &AppConfig) -> Result<SharedCommand> {
    Ok(Arc::new(PingCommand))
}

#[async_trait]
impl Command for PingCommand {
    fn name(&self) -> &str {
        "ping"
    }

    fn validators(&self) -> &[SharedValidator] {
        &[]
    }

    async fn execute(&self, chat: &dyn ChatProvider, _message: &InboundMessage) -> Result<()> {
        super::reply(chat, messages::PONG).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockChat;

    #[tokio::test]
    async fn test_replies_pong() {
        let chat = MockChat::new();
        let message = InboundMessage::new("!ping", "@a:example.org", "!r:example.org");

        PingCommand.execute(&chat, &message).await.unwrap();
        assert_eq!(chat.sent(), vec!["pong"]);
        assert!(PingCommand.validators().is_empty());
    }
}
