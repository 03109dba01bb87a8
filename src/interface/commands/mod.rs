//! # Command Handlers
//!
//! Catalog of the commands compiled into the bot.
//! Each module exposes an async `load` building its command from the configuration;
//! `discover` gathers them all for the registry.

pub mod help;
pub mod ping;
pub mod uptime;
pub mod version;
pub mod whoami;

use anyhow::Result;
use chrono::Local;
use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};

use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, SharedCommand};

/// Loads every command definition. Fails as a whole if any single definition fails.
pub async fn discover(config: &AppConfig) -> Result<Vec<SharedCommand>> {
    let started = Local::now();
    let loaders: Vec<BoxFuture<'_, Result<SharedCommand>>> = vec![
        help::load(config).boxed(),
        ping::load(config).boxed(),
        uptime::load(config, started).boxed(),
        whoami::load(config).boxed(),
        version::load(config).boxed(),
    ];
    try_join_all(loaders).await
}

pub(crate) async fn reply(chat: &dyn ChatProvider, content: &str) -> Result<()> {
    chat.send_message(content)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
