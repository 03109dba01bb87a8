//! # Message Router
//!
//! Decides, per inbound message, whether a command runs.
//! Flow: prefix check -> registry lookup -> validator chain -> `execute`.
//! Anything that falls out before `execute` is a silent no-op for the user.

use anyhow::{Context, Result};
use tokio::sync::RwLock;

use crate::application::chain;
use crate::application::registry::CommandRegistry;
use crate::domain::prefix::{Prefix, PrefixRejection};
use crate::domain::traits::ChatProvider;
use crate::domain::types::{Dispatch, InboundMessage};
use crate::strings::logs;

pub struct MessageRouter {
    prefix: RwLock<Prefix>,
    registry: CommandRegistry,
}

impl MessageRouter {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            prefix: RwLock::new(Prefix::default()),
            registry,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub async fn prefix(&self) -> Prefix {
        self.prefix.read().await.clone()
    }

    /// Replaces the prefix if `candidate` is valid; otherwise keeps the current one.
    pub async fn set_prefix(&self, candidate: &str) -> Result<(), PrefixRejection> {
        let prefix = Prefix::parse(candidate)?;
        *self.prefix.write().await = prefix;
        Ok(())
    }

    pub async fn route(&self, chat: &dyn ChatProvider, message: &InboundMessage) -> Result<Dispatch> {
        // Read once so the whole routing sees a single prefix value
        let prefix = self.prefix().await;

        let Some(name) = prefix.strip(&message.content) else {
            return Ok(Dispatch::NotACommand);
        };

        let Some(command) = self.registry.get(name) else {
            tracing::debug!("{}", logs::unknown_command(name, &message.sender));
            return Ok(Dispatch::UnknownCommand(name.to_string()));
        };

        if !chain::evaluate(message, command.validators())
            .await
            .with_context(|| format!("validator fault in command `{name}`"))?
        {
            tracing::info!("{}", logs::command_rejected(name, &message.sender));
            return Ok(Dispatch::Rejected(name.to_string()));
        }

        command
            .execute(chat, message)
            .await
            .with_context(|| format!("command `{name}` failed"))?;
        tracing::info!("{}", logs::command_executed(name, &message.sender));

        Ok(Dispatch::Executed(name.to_string()))
    }
}
