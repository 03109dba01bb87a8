//! # Version Command
//!
//! Admin-only: the room check runs first, then the sender check.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, Command, SharedCommand, SharedValidator};
use crate::domain::types::InboundMessage;
use crate::interface::validators::{RoomAllowList, SenderAllowList};
use crate::strings::messages;

pub struct VersionCommand {
    validators: Vec<SharedValidator>,
}

pub async fn load(config: &AppConfig) -> Result<SharedCommand> {
    let admins = SenderAllowList::from_config(&config.commands)
        .context("invalid `commands.admins` for the version command")?;
    Ok(Arc::new(VersionCommand {
        validators: vec![
            Arc::new(RoomAllowList::from_config(&config.commands)),
            Arc::new(admins),
        ],
    }))
}

#[async_trait]
impl Command for VersionCommand {
    fn name(&self) -> &str {
        "version"
    }

    fn validators(&self) -> &[SharedValidator] {
        &self.validators
    }

    async fn execute(&self, chat: &dyn ChatProvider, _message: &InboundMessage) -> Result<()> {
        let reply = messages::version_msg(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        super::reply(chat, &reply).await
    }
}
