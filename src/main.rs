//! # Main Entry Point
//!
//! Initializes the command gateway:
//! - Domain: Configuration, Prefix and Types
//! - Infrastructure: Matrix, Logging
//! - Application: Registry, Validator Chain, Router
//! - Interface: Commands and Validators
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::registry::CommandRegistry;
use crate::application::router::MessageRouter;
use crate::domain::config::AppConfig;
use crate::infrastructure::{logging, matrix};
use crate::strings::logs;

#[derive(Debug, Parser)]
#[command(version, about = "Prefix command gateway for a Matrix bot")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "data/config.yaml")]
    config: PathBuf,
}

/// Builds the registry from the command catalog and applies the configured prefix.
async fn build_router(config: &AppConfig) -> Result<MessageRouter> {
    let mut registry = CommandRegistry::new().strict(config.gateway.strict_registration);
    registry
        .discover_and_register(interface::commands::discover(config))
        .await
        .context("Failed to register commands")?;

    let router = MessageRouter::new(registry);
    let registry = router.registry();
    if registry.is_empty() {
        tracing::warn!("{}", logs::NO_COMMANDS_REGISTERED);
    } else {
        tracing::info!("{}", logs::commands_registered(registry.len(), &registry.names()));
    }

    match router.set_prefix(&config.gateway.prefix).await {
        Ok(()) => tracing::info!("{}", logs::prefix_set(router.prefix().await.as_str())),
        Err(rejection) => tracing::warn!("{}", logs::prefix_rejected(&rejection.to_string())),
    }
    Ok(router)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    let _guard = logging::init(&config.system.log_dir)?;
    tracing::info!("{}", logs::STARTING);

    // 3. Commands
    let router = Arc::new(build_router(&config).await?);

    // 4. Matrix Setup
    let start_time = std::time::SystemTime::now();
    let client = matrix::connect(&config.services.matrix).await?;
    matrix::attach_router(&client, router, start_time);

    // 5. Sync until failure or Ctrl-C
    tokio::select! {
        res = matrix::sync(client) => {
            if let Err(e) = &res {
                tracing::error!("{e:#}");
            }
            res?;
        }
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
            }
            tracing::info!("{}", logs::SHUTDOWN);
        }
    }

    Ok(())
}
