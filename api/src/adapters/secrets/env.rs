//! Environment-backed secret source

use async_trait::async_trait;

use crate::domain::ports::{BotToken, SecretSource};
use crate::error::SecretError;

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";

/// Reads the bot token from the process environment on every call
pub struct EnvSecretSource {
    variable: String,
}

impl EnvSecretSource {
    pub fn new() -> Self {
        Self::with_variable(BOT_TOKEN_VAR)
    }

    pub fn with_variable(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl Default for EnvSecretSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretSource for EnvSecretSource {
    async fn bot_token(&self) -> Result<BotToken, SecretError> {
        match std::env::var(&self.variable) {
            Ok(token) if !token.trim().is_empty() => Ok(BotToken::new(token.trim())),
            _ => Err(SecretError::Missing(self.variable.clone())),
        }
    }
}
