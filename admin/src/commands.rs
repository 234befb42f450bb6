//! Command definitions
//!
//! Slash commands are declared in a YAML list; each entry is sent to the API
//! as-is, so any field the platform understands can be used.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::client::DiscordAdminClient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDefinition {
    pub name: String,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Outcome of registering a list of definitions
#[derive(Debug, Default)]
pub struct RegistrationReport {
    pub created: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl RegistrationReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub fn parse_definitions(yaml: &str) -> Result<Vec<CommandDefinition>> {
    serde_yaml::from_str(yaml).context("Failed to parse command definitions")
}

pub fn load_definitions(path: &Path) -> Result<Vec<CommandDefinition>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_definitions(&content)
}

/// Register every definition in order; a failure does not stop the rest
pub async fn register_all(
    client: &DiscordAdminClient,
    definitions: &[CommandDefinition],
    guild_id: Option<&str>,
) -> RegistrationReport {
    let mut report = RegistrationReport::default();

    for definition in definitions {
        match client.register(definition, guild_id).await {
            Ok(_) => {
                tracing::info!(command = %definition.name, "Command registered");
                report.created.push(definition.name.clone());
            }
            Err(e) => {
                tracing::error!(command = %definition.name, error = %e, "Command registration failed");
                report.failed.push((definition.name.clone(), e.to_string()));
            }
        }
    }

    report
}
