//! # Whoami Command
//!
//! Echoes the sender and room ids back, handy when filling in `allowed_rooms` / `admins`.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, Command, SharedCommand, SharedValidator};
use crate::domain::types::InboundMessage;
use crate::interface::validators::RoomAllowList;
use crate::strings::messages;

pub struct WhoamiCommand {
    validators: Vec<SharedValidator>,
}

pub async fn load(config: &AppConfig) -> Result<SharedCommand> {
    Ok(Arc::new(WhoamiCommand {
        validators: vec![Arc::new(RoomAllowList::from_config(&config.commands))],
    }))
}

#[async_trait]
impl Command for WhoamiCommand {
    fn name(&self) -> &str {
        "whoami"
    }

    fn validators(&self) -> &[SharedValidator] {
        &self.validators
    }

    async fn execute(&self, chat: &dyn ChatProvider, message: &InboundMessage) -> Result<()> {
        super::reply(chat, &messages::whoami_msg(&message.sender, &message.room_id)).await
    }
}
