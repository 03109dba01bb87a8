//! # Domain Types
//!
//! Common data structures passed between the transport, the gateway and the commands.

/// A text message received from the chat transport.
///
/// Only `content` is interpreted by the gateway. The remaining fields are context
/// for validators and commands (who sent it, where).
/// `event_id` identifies the message in routing logs.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    pub content: String,
    pub sender: String,
    pub room_id: String,
    pub event_id: Option<String>,
}

impl InboundMessage {
    pub fn new(
        content: impl Into<String>,
        sender: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            sender: sender.into(),
            room_id: room_id.into(),
            event_id: None,
        }
    }

    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }
}

/// What the gateway did with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Content did not start with the prefix.
    NotACommand,
    /// Prefix matched but no command is registered under the name.
    UnknownCommand(String),
    /// A validator returned false; the command was not executed.
    Rejected(String),
    /// Every validator passed and the command ran.
    Executed(String),
}

impl Dispatch {
    pub fn executed(&self) -> bool {
        matches!(self, Dispatch::Executed(_))
    }
}
