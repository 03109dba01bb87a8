//! # Messages
//!
//! Contains constant strings and format functions for user-facing replies.

pub const PONG: &str = "pong";

pub fn uptime_msg(uptime: &str) -> String {
    format!("⏱️ Up for {uptime}")
}

pub fn whoami_msg(sender: &str, room_id: &str) -> String {
    format!("You are `{sender}` in `{room_id}`")
}

pub fn version_msg(name: &str, version: &str) -> String {
    format!("**{name}** v{version}")
}
