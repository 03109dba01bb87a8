//! Test doubles shared by the unit tests: an in-memory chat and scripted validators/commands.

use anyhow::{Result, bail};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::traits::{ChatProvider, Command, MessageValidator, SharedValidator};
use crate::domain::types::InboundMessage;

/// Records every message sent to it.
#[derive(Default)]
pub struct MockChat {
    sent: Mutex<Vec<String>>,
}

impl MockChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockChat {
    async fn send_message(&self, content: &str) -> Result<String, String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(content.to_string());
        Ok(format!("$event{}", sent.len()))
    }

    fn room_id(&self) -> String {
        "!room:example.org".to_string()
    }
}

/// Always answers `verdict` and counts how often it was asked.
pub struct CountingValidator {
    verdict: bool,
    calls: AtomicUsize,
}

impl CountingValidator {
    pub fn new(verdict: bool) -> Self {
        Self {
            verdict,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageValidator for CountingValidator {
    async fn validate(&self, _message: &InboundMessage) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Ok(self.verdict)
    }
}

/// Fails instead of producing a verdict.
pub struct FaultyValidator;

#[async_trait]
impl MessageValidator for FaultyValidator {
    async fn validate(&self, _message: &InboundMessage) -> Result<bool> {
        bail!("validator fault")
    }
}

/// Passes and appends its id to a shared log.
pub struct RecordingValidator {
    id: usize,
    log: Arc<Mutex<Vec<usize>>>,
}

impl RecordingValidator {
    pub fn new(id: usize, log: Arc<Mutex<Vec<usize>>>) -> Self {
        Self { id, log }
    }
}

#[async_trait]
impl MessageValidator for RecordingValidator {
    async fn validate(&self, _message: &InboundMessage) -> Result<bool> {
        tokio::task::yield_now().await;
        self.log.lock().unwrap().push(self.id);
        Ok(true)
    }
}

/// Command that counts executions and optionally replies with a fixed text.
pub struct StubCommand {
    name: String,
    validators: Vec<SharedValidator>,
    reply: Option<String>,
    executions: AtomicUsize,
}

impl StubCommand {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            validators: Vec::new(),
            reply: None,
            executions: AtomicUsize::new(0),
        }
    }

    pub fn with_validators(mut self, validators: Vec<SharedValidator>) -> Self {
        self.validators = validators;
        self
    }

    pub fn replying(mut self, reply: &str) -> Self {
        self.reply = Some(reply.to_string());
        self
    }

    pub fn executions(&self) -> usize {
        self.executions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Command for StubCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn validators(&self) -> &[SharedValidator] {
        &self.validators
    }

    async fn execute(&self, chat: &dyn ChatProvider, _message: &InboundMessage) -> Result<()> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        if let Some(reply) = &self.reply {
            chat.send_message(reply).await.map_err(|e| anyhow::anyhow!(e))?;
        }
        Ok(())
    }
}
