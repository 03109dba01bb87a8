//! # Command Registry
//!
//! Maps command names to their handlers. Filled at startup from the command catalog
//! (see `interface::commands::discover`) and only read afterwards.

use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::future::Future;

use crate::domain::error::GatewayError;
use crate::domain::traits::SharedCommand;
use crate::strings::logs;

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, SharedCommand>,
    strict: bool,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject duplicate names within a discovery batch instead of overwriting.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Awaits the discovery of every command definition and registers the results.
    ///
    /// Discovery is all-or-nothing: if it fails, nothing from this batch is registered.
    /// Names already present are overwritten (last-write-wins), so running the same
    /// discovery twice leaves the registry unchanged. Returns the discovered commands
    /// in catalog order.
    pub async fn discover_and_register<F>(
        &mut self,
        discovery: F,
    ) -> Result<Vec<SharedCommand>, GatewayError>
    where
        F: Future<Output = Result<Vec<SharedCommand>>>,
    {
        let discovered = discovery.await.map_err(GatewayError::Discovery)?;

        let mut seen = HashSet::new();
        let duplicates: Vec<&str> = discovered
            .iter()
            .map(|command| command.name())
            .filter(|name| !seen.insert(*name))
            .collect();

        if let Some(name) = duplicates.first() {
            if self.strict {
                return Err(GatewayError::DuplicateCommand(name.to_string()));
            }
            for name in &duplicates {
                tracing::warn!("{}", logs::duplicate_command(name));
            }
        }

        for command in &discovered {
            self.commands
                .insert(command.name().to_string(), command.clone());
        }

        Ok(discovered)
    }

    pub fn get(&self, name: &str) -> Option<&SharedCommand> {
        self.commands.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubCommand;
    use std::sync::Arc;

    fn batch(names: &[&str]) -> Vec<SharedCommand> {
        names
            .iter()
            .map(|name| Arc::new(StubCommand::new(name)) as SharedCommand)
            .collect()
    }

    #[tokio::test]
    async fn test_registers_discovered_commands() {
        let mut registry = CommandRegistry::new();
        let discovered = registry
            .discover_and_register(async { Ok(batch(&["ping", "uptime"])) })
            .await
            .unwrap();

        let order: Vec<&str> = discovered.iter().map(|c| c.name()).collect();
        assert_eq!(order, vec!["ping", "uptime"]);
        assert_eq!(registry.names(), vec!["ping", "uptime"]);
        assert!(registry.get("ping").is_some());
        assert!(registry.get("pong").is_none());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let first = Arc::new(StubCommand::new("ping"));
        let second = Arc::new(StubCommand::new("ping"));
        let mut registry = CommandRegistry::new();

        let discovered = registry
            .discover_and_register(async {
                Ok(vec![first.clone() as SharedCommand, second.clone() as SharedCommand])
            })
            .await
            .unwrap();

        // Both are reported, only the later one is kept
        assert_eq!(discovered.len(), 2);
        assert_eq!(registry.len(), 1);
        let kept = registry.get("ping").unwrap();
        assert!(Arc::ptr_eq(kept, &(second as SharedCommand)));
    }

    #[tokio::test]
    async fn test_rediscovery_converges() {
        let commands = batch(&["ping", "uptime", "whoami"]);
        let mut registry = CommandRegistry::new();

        registry
            .discover_and_register(async { Ok(commands.clone()) })
            .await
            .unwrap();
        let once = registry.names();

        registry
            .discover_and_register(async { Ok(commands.clone()) })
            .await
            .unwrap();

        assert_eq!(registry.names(), once);
        assert_eq!(registry.len(), 3);
    }

    #[tokio::test]
    async fn test_discovery_failure_registers_nothing() {
        let mut registry = CommandRegistry::new();
        let result = registry
            .discover_and_register(async { Err(anyhow::anyhow!("broken definition")) })
            .await;

        match result {
            Err(GatewayError::Discovery(e)) => assert!(e.to_string().contains("broken")),
            other => panic!("expected discovery error, got {:?}", other.map(|v| v.len())),
        }
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_strict_rejects_duplicates() {
        let mut registry = CommandRegistry::new().strict(true);
        let result = registry
            .discover_and_register(async { Ok(batch(&["ping", "help", "ping"])) })
            .await;

        assert!(matches!(result, Err(GatewayError::DuplicateCommand(name)) if name == "ping"));
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_strict_allows_rediscovery() {
        // Duplicate detection is per batch, re-registering the same names is fine
        let mut registry = CommandRegistry::new().strict(true);
        for _ in 0..2 {
            registry
                .discover_and_register(async { Ok(batch(&["ping"])) })
                .await
                .unwrap();
        }
        assert_eq!(registry.len(), 1);
    }
}
