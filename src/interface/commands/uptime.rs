//! # Uptime Command
//!
//! Replies with the time elapsed since the bot started.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta};
use std::sync::Arc;

use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, Command, SharedCommand, SharedValidator};
use crate::domain::types::InboundMessage;
use crate::interface::validators::RoomAllowList;
use crate::strings::messages;

pub struct UptimeCommand {
    started: DateTime<Local>,
    validators: Vec<SharedValidator>,
}

pub async fn load(config: &AppConfig, started: DateTime<Local>) -> Result<SharedCommand> {
    Ok(Arc::new(UptimeCommand {
        started,
        validators: vec![Arc::new(RoomAllowList::from_config(&config.commands))],
    }))
}

fn format_uptime(elapsed: TimeDelta) -> String {
    let secs = elapsed.num_seconds().max(0);
    let (days, hours, minutes, seconds) =
        (secs / 86_400, secs % 86_400 / 3_600, secs % 3_600 / 60, secs % 60);
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else {
        format!("{minutes}m {seconds}s")
    }
}

#[async_trait]
impl Command for UptimeCommand {
    fn name(&self) -> &str {
        "uptime"
    }

    fn validators(&self) -> &[SharedValidator] {
        &self.validators
    }

    async fn execute(&self, chat: &dyn ChatProvider, _message: &InboundMessage) -> Result<()> {
        let elapsed = Local::now().signed_duration_since(self.started);
        super::reply(chat, &messages::uptime_msg(&format_uptime(elapsed))).await
    }
}
