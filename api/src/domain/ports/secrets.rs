//! Secret source port trait
//!
//! Credentials are resolved once per invocation and passed explicitly to the
//! components that need them.

use async_trait::async_trait;

use crate::error::SecretError;

/// Bot credential forwarded as `Authorization: Bot <token>`
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn authorization_header(&self) -> String {
        format!("Bot {}", self.0)
    }
}

impl std::fmt::Debug for BotToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BotToken(<redacted>)")
    }
}

/// Port trait for resolving secrets
#[async_trait]
pub trait SecretSource: Send + Sync {
    async fn bot_token(&self) -> Result<BotToken, SecretError>;
}
