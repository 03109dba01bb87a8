//! # Log Strings
//!
//! Operator-facing log lines emitted during startup, registration and routing.

pub const STARTING: &str = "Starting Command Gateway...";
pub const CONFIG_READ_ERROR: &str = "Failed to read config file";
pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML";

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub fn prefix_set(prefix: &str) -> String {
    format!("Command prefix set to `{prefix}`")
}

pub fn prefix_rejected(err: &str) -> String {
    format!("Ignoring configured prefix: {err}")
}

pub fn commands_registered(count: usize, names: &[String]) -> String {
    format!("Registered {count} command(s): {}", names.join(", "))
}

pub const NO_COMMANDS_REGISTERED: &str = "No commands registered, every message will be ignored";

pub fn duplicate_command(name: &str) -> String {
    format!("Command `{name}` declared more than once, the later definition wins")
}

pub fn command_rejected(name: &str, sender: &str) -> String {
    format!("Command `{name}` from {sender} stopped by a validator")
}

pub fn command_executed(name: &str, sender: &str) -> String {
    format!("Command `{name}` executed for {sender}")
}

pub fn unknown_command(name: &str, sender: &str) -> String {
    format!("Ignoring unknown command '{name}' from {sender}")
}

pub fn not_dispatched(event_id: Option<&str>, outcome: &str) -> String {
    format!("Message {} not dispatched: {outcome}", event_label(event_id))
}

pub fn route_failed(event_id: Option<&str>, err: &str) -> String {
    format!("Failed to route message {}: {err}", event_label(event_id))
}

fn event_label(event_id: Option<&str>) -> &str {
    event_id.unwrap_or("<no event id>")
}

pub fn message_received(sender: &str, body: &str) -> String {
    format!("Received message from {sender}: \n{body}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id:?}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub const JOIN_INVITE_SUCCESS: &str = "✅ Successfully joined room!";
pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub const SHUTDOWN: &str = "Shutting down...";

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}
