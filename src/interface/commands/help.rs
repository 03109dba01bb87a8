//! # Help Command
//!
//! Displays the list of built-in commands, using the prefix the user just typed.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, Command, SharedCommand, SharedValidator};
use crate::domain::types::InboundMessage;
use crate::interface::validators::RoomAllowList;

pub struct HelpCommand {
    validators: Vec<SharedValidator>,
}

pub async fn load(config: &AppConfig) -> Result<SharedCommand> {
    Ok(Arc::new(HelpCommand {
        validators: vec![Arc::new(RoomAllowList::from_config(&config.commands))],
    }))
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn validators(&self) -> &[SharedValidator] {
        &self.validators
    }

    async fn execute(&self, chat: &dyn ChatProvider, message: &InboundMessage) -> Result<()> {
        // The router only matches `<prefix><name>` exactly
        let prefix = message
            .content
            .strip_suffix(self.name())
            .unwrap_or_default();
        super::reply(chat, &crate::strings::help::main(prefix)).await
    }
}
