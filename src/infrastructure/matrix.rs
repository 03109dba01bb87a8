//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` trait for the Matrix protocol using the `matrix_sdk`,
//! and wires the Matrix sync loop to the `MessageRouter`: text messages are converted
//! into `InboundMessage`s and routed, invites are auto-accepted.

use anyhow::{Context, Result};
use async_trait::async_trait;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, RoomMessageEventContent, SyncRoomMessageEvent},
    },
};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::application::router::MessageRouter;
use crate::domain::config::MatrixConfig;
use crate::domain::traits::ChatProvider;
use crate::domain::types::InboundMessage;
use crate::strings::logs;

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn send_message(&self, content: &str) -> Result<String, String> {
        tracing::info!("Bot sending message to {}: {}", self.room_id(), content);
        self.room
            .send(RoomMessageEventContent::text_markdown(content))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }
}

/// Builds the client, logs in and applies the optional display name.
pub async fn connect(config: &MatrixConfig) -> Result<Client> {
    let client = Client::builder()
        .homeserver_url(&config.homeserver)
        .build()
        .await
        .context("Failed to build Matrix client")?;

    client
        .matrix_auth()
        .login_username(&config.username, &config.password)
        .send()
        .await
        .context("Matrix login failed")?;

    tracing::info!("{}", logs::logged_in(&config.username));

    if let Some(name) = &config.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    Ok(client)
}

/// Messages sent before the bot started are replayed by the first sync; skip them.
pub fn is_fresh(origin_server_ts_millis: u64, start_time: SystemTime) -> bool {
    UNIX_EPOCH + Duration::from_millis(origin_server_ts_millis) >= start_time
}

/// Registers the message and invite handlers on `client`.
pub fn attach_router(client: &Client, router: Arc<MessageRouter>, start_time: SystemTime) {
    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };
            if !is_fresh(ev.origin_server_ts().get().into(), start_time) {
                return;
            }
            let MessageType::Text(text_content) = &original_msg.content.msgtype else {
                return;
            };
            if original_msg.sender == room.own_user_id() {
                return;
            }

            let body = &text_content.body;
            tracing::debug!("{}", logs::message_received(original_msg.sender.as_str(), body));

            let message = InboundMessage::new(
                body.as_str(),
                original_msg.sender.as_str(),
                room.room_id().as_str(),
            )
            .with_event_id(original_msg.event_id.as_str());
            let chat = MatrixService::new(room);

            let event_id = message.event_id.as_deref();
            match router.route(&chat, &message).await {
                Ok(dispatch) if !dispatch.executed() => {
                    tracing::debug!("{}", logs::not_dispatched(event_id, &format!("{dispatch:?}")));
                }
                Ok(_) => {}
                Err(e) => tracing::error!("{}", logs::route_failed(event_id, &format!("{e:#}"))),
            }
        }
    });

    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership != MembershipState::Invite {
            return;
        }
        tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
        match room.join().await {
            Ok(_) => tracing::info!("{}", logs::JOIN_INVITE_SUCCESS),
            Err(e) => tracing::warn!("{}", logs::join_invite_fail(&e.to_string())),
        }
    });
}

/// Runs the sync loop until it fails.
pub async fn sync(client: Client) -> Result<()> {
    tracing::info!("{}", logs::SYNC_LOOP_START);
    client
        .sync(SyncSettings::default())
        .await
        .map_err(|e| anyhow::anyhow!(logs::sync_loop_fail(&e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fresh() {
        let start = UNIX_EPOCH + Duration::from_secs(1_000);
        assert!(is_fresh(1_000_000, start));
        assert!(is_fresh(1_500_000, start));
        assert!(!is_fresh(999_999, start));
    }
}
