//! feedbot admin CLI
//!
//! Registers and deletes the bot's slash commands.
//! Reads DISCORD_BOT_TOKEN, DISCORD_APPLICATION_ID and DISCORD_API_URL from
//! the environment.

mod client;
mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use client::DiscordAdminClient;

#[derive(Parser)]
#[command(name = "feedbot-admin", version, about = "Manage feedbot slash commands")]
struct Cli {
    #[command(subcommand)]
    command: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Register every command defined in a YAML file
    Register {
        #[arg(long, default_value = "discord_commands.yaml")]
        file: PathBuf,
        /// Register in one guild instead of globally
        #[arg(long)]
        guild_id: Option<String>,
    },
    /// Delete a command by id
    Delete {
        #[arg(long)]
        command_id: String,
        #[arg(long)]
        guild_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr, stdout stays free for scripting
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = DiscordAdminClient::from_env()?;

    match cli.command {
        Action::Register { file, guild_id } => {
            let definitions = commands::load_definitions(&file)?;
            tracing::info!(count = definitions.len(), file = %file.display(), "Registering commands");

            let report = commands::register_all(&client, &definitions, guild_id.as_deref()).await;
            if !report.is_success() {
                anyhow::bail!(
                    "{} of {} commands failed to register",
                    report.failed.len(),
                    definitions.len()
                );
            }
        }
        Action::Delete {
            command_id,
            guild_id,
        } => {
            client.delete(&command_id, guild_id.as_deref()).await?;
            tracing::info!(command_id = %command_id, "Command deleted");
        }
    }

    Ok(())
}
