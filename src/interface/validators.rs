//! # Validators
//!
//! Built-in `MessageValidator`s configured from the `commands` section of `config.yaml`.

use anyhow::{Result, bail};
use async_trait::async_trait;
use std::collections::HashSet;

use crate::domain::config::CommandsConfig;
use crate::domain::traits::MessageValidator;
use crate::domain::types::InboundMessage;

/// Passes messages from rooms in `commands.allowed_rooms`. An empty list allows every room.
pub struct RoomAllowList {
    rooms: HashSet<String>,
}

impl RoomAllowList {
    pub fn new(rooms: impl IntoIterator<Item = String>) -> Self {
        Self {
            rooms: rooms.into_iter().collect(),
        }
    }

    pub fn from_config(config: &CommandsConfig) -> Self {
        Self::new(config.allowed_rooms.iter().cloned())
    }
}

#[async_trait]
impl MessageValidator for RoomAllowList {
    async fn validate(&self, message: &InboundMessage) -> Result<bool> {
        Ok(self.rooms.is_empty() || self.rooms.contains(&message.room_id))
    }
}

/// Passes messages whose sender is listed in `commands.admins` (case-insensitive).
/// An empty list lets nobody through.
pub struct SenderAllowList {
    senders: HashSet<String>,
}

impl SenderAllowList {
    pub fn new(senders: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut normalized = HashSet::new();
        for sender in senders {
            if !is_user_id(&sender) {
                bail!("`{sender}` is not a Matrix user id (expected @user:server)");
            }
            normalized.insert(sender.to_lowercase());
        }
        Ok(Self { senders: normalized })
    }

    pub fn from_config(config: &CommandsConfig) -> Result<Self> {
        Self::new(config.admins.iter().cloned())
    }
}

fn is_user_id(candidate: &str) -> bool {
    candidate
        .strip_prefix('@')
        .and_then(|rest| rest.split_once(':'))
        .is_some_and(|(local, server)| !local.is_empty() && !server.is_empty())
}

#[async_trait]
impl MessageValidator for SenderAllowList {
    async fn validate(&self, message: &InboundMessage) -> Result<bool> {
        Ok(self.senders.contains(&message.sender.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(sender: &str, room: &str) -> InboundMessage {
        InboundMessage::new("!version", sender, room)
    }

    #[tokio::test]
    async fn test_room_allow_list() {
        let validator = RoomAllowList::new(vec!["!ops:example.org".to_string()]);
        assert!(validator.validate(&msg("@a:example.org", "!ops:example.org")).await.unwrap());
        assert!(!validator.validate(&msg("@a:example.org", "!lobby:example.org")).await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_room_list_allows_all() {
        let validator = RoomAllowList::from_config(&CommandsConfig::default());
        assert!(validator.validate(&msg("@a:example.org", "!any:example.org")).await.unwrap());
    }

    #[tokio::test]
    async fn test_sender_allow_list_ignores_case() {
        let validator = SenderAllowList::new(vec!["@Alice:Example.org".to_string()]).unwrap();
        assert!(validator.validate(&msg("@alice:example.org", "!r:example.org")).await.unwrap());
        assert!(!validator.validate(&msg("@bob:example.org", "!r:example.org")).await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_sender_list_denies_all() {
        let validator = SenderAllowList::from_config(&CommandsConfig::default()).unwrap();
        assert!(!validator.validate(&msg("@alice:example.org", "!r:example.org")).await.unwrap());
    }

    #[test]
    fn test_malformed_admin_is_rejected() {
        for bad in ["alice", "@alice", "@:example.org", "@alice:"] {
            assert!(SenderAllowList::new(vec![bad.to_string()]).is_err(), "{bad}");
        }
    }
}
