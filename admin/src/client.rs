//! HTTP client for the Discord application commands API

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

pub const DEFAULT_API_URL: &str = "https://discord.com/api/v10";

/// Client scoped to one application
#[derive(Clone)]
pub struct DiscordAdminClient {
    client: reqwest::Client,
    base_url: String,
    application_id: String,
}

impl DiscordAdminClient {
    /// Create a new client from environment variables
    ///
    /// Required env vars:
    /// - DISCORD_BOT_TOKEN: the bot token
    /// - DISCORD_APPLICATION_ID: the application owning the commands
    ///
    /// Optional:
    /// - DISCORD_API_URL (default https://discord.com/api/v10)
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("DISCORD_BOT_TOKEN").context("DISCORD_BOT_TOKEN not set")?;
        let application_id =
            std::env::var("DISCORD_APPLICATION_ID").context("DISCORD_APPLICATION_ID not set")?;
        let base_url =
            std::env::var("DISCORD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&base_url, &application_id, &token)
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str, application_id: &str, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bot {}", token)).context("Invalid bot token format")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            application_id: application_id.to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Commands collection, global or scoped to a guild
    pub fn commands_path(&self, guild_id: Option<&str>) -> String {
        match guild_id {
            Some(guild) => format!(
                "/applications/{}/guilds/{}/commands",
                self.application_id, guild
            ),
            None => format!("/applications/{}/commands", self.application_id),
        }
    }

    /// Create or overwrite one command; returns the API's response body
    pub async fn register<T: Serialize>(
        &self,
        definition: &T,
        guild_id: Option<&str>,
    ) -> Result<String> {
        let path = self.commands_path(guild_id);
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(definition)
            .send()
            .await
            .with_context(|| format!("Failed to POST {}", path))?;

        handle_text_response(response).await
    }

    /// Delete one command by id
    pub async fn delete(&self, command_id: &str, guild_id: Option<&str>) -> Result<()> {
        let path = format!("{}/{}", self.commands_path(guild_id), command_id);
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("Failed to DELETE {}", path))?;

        handle_text_response(response).await.map(|_| ())
    }
}

async fn handle_text_response(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("API error ({}): {}", status, body);
    }

    Ok(body)
}
