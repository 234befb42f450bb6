//! Command router
//!
//! Maps an inbound slash command onto its handler.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use super::fetch_pipeline::{FetchOutcome, FetchPipeline};
use crate::domain::entities::{Interaction, ReplyTarget};
use crate::domain::ports::{BlobStore, BotToken, FeedSource, NotificationSink, SecretSource};
use crate::error::AppError;

pub const GREETING_REPLY: &str = "Hello World!";
pub const COMMAND_FAILED_REPLY: &str = "Error executing command.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Fetch { feed: Option<String> },
    Unknown(String),
}

impl Command {
    pub fn from_interaction(interaction: &Interaction) -> Self {
        match interaction.data.name.as_str() {
            "hello" => Command::Hello,
            "fetch" => Command::Fetch {
                feed: interaction.first_option_value(),
            },
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Summary returned to the trigger once a command has been handled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandOutcome {
    Hello { replied: bool },
    Fetch(FetchOutcome),
    Unknown { name: String },
}

/// Entry point used by the HTTP layer
#[async_trait]
pub trait InteractionHandler: Send + Sync {
    async fn handle(&self, interaction: &Interaction) -> Result<CommandOutcome, AppError>;
}

pub struct CommandRouter<B, F, N, S>
where
    B: BlobStore,
    F: FeedSource,
    N: NotificationSink,
    S: SecretSource,
{
    pipeline: FetchPipeline<B, F, N>,
    secrets: Arc<S>,
}

impl<B, F, N, S> CommandRouter<B, F, N, S>
where
    B: BlobStore,
    F: FeedSource,
    N: NotificationSink,
    S: SecretSource,
{
    pub fn new(pipeline: FetchPipeline<B, F, N>, secrets: Arc<S>) -> Self {
        Self { pipeline, secrets }
    }

    /// Reply target plus a freshly resolved bot token
    async fn reply_context(
        &self,
        interaction: &Interaction,
    ) -> Result<(ReplyTarget, BotToken), AppError> {
        let token = self.secrets.bot_token().await?;
        Ok((interaction.reply_target(), token))
    }
}

#[async_trait]
impl<B, F, N, S> InteractionHandler for CommandRouter<B, F, N, S>
where
    B: BlobStore,
    F: FeedSource,
    N: NotificationSink,
    S: SecretSource,
{
    async fn handle(&self, interaction: &Interaction) -> Result<CommandOutcome, AppError> {
        match Command::from_interaction(interaction) {
            Command::Unknown(name) => {
                tracing::debug!(command = %name, "Ignoring unknown command");
                Ok(CommandOutcome::Unknown { name })
            }
            Command::Hello => {
                let (target, token) = self.reply_context(interaction).await?;
                let replied = match self
                    .pipeline
                    .dispatcher()
                    .send_text(&target, &token, GREETING_REPLY)
                    .await
                {
                    Ok(replied) => replied,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to send greeting");
                        false
                    }
                };
                Ok(CommandOutcome::Hello { replied })
            }
            Command::Fetch { feed } => {
                let (target, token) = self.reply_context(interaction).await?;
                match self.pipeline.run(&target, &token, feed.as_deref()).await {
                    Ok(outcome) => Ok(CommandOutcome::Fetch(outcome)),
                    Err(e) => {
                        tracing::error!(feed = ?feed, error = %e, "Fetch command failed");
                        if let Err(reply_err) = self
                            .pipeline
                            .dispatcher()
                            .send_text(&target, &token, COMMAND_FAILED_REPLY)
                            .await
                        {
                            tracing::error!(error = %reply_err, "Failed to report command failure");
                        }
                        Err(e)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{WatermarkGate, WatermarkStore};
    use crate::config::FeedCatalog;
    use crate::domain::entities::FeedKey;
    use crate::error::SecretError;
    use crate::test_utils::{
        test_interaction, InMemoryBlobStore, RecordingSink, StaticFeedSource, StaticSecretSource,
    };

    type TestRouter =
        CommandRouter<InMemoryBlobStore, StaticFeedSource, RecordingSink, StaticSecretSource>;

    fn router(sink: Arc<RecordingSink>, secrets: StaticSecretSource) -> TestRouter {
        let pipeline = FetchPipeline::new(
            WatermarkStore::new(Arc::new(InMemoryBlobStore::new()), "bucket", "aws_rss_bot"),
            Arc::new(StaticFeedSource::with_status(500)),
            sink,
            FeedCatalog::new().with_feed(
                FeedKey::new("security").unwrap(),
                "https://example.com/security/feed",
            ),
            WatermarkGate::default(),
        );
        CommandRouter::new(pipeline, Arc::new(secrets))
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            Command::from_interaction(&test_interaction("hello", None)),
            Command::Hello
        );
        assert_eq!(
            Command::from_interaction(&test_interaction("fetch", Some("security"))),
            Command::Fetch {
                feed: Some("security".to_string())
            }
        );
        assert_eq!(
            Command::from_interaction(&test_interaction("weather", None)),
            Command::Unknown("weather".to_string())
        );
    }

    #[tokio::test]
    async fn hello_replies_with_greeting() {
        let sink = Arc::new(RecordingSink::new());
        let router = router(sink.clone(), StaticSecretSource::new("bot-token"));

        let outcome = router
            .handle(&test_interaction("hello", None))
            .await
            .unwrap();

        assert_eq!(outcome, CommandOutcome::Hello { replied: true });
        assert_eq!(sink.texts(), vec![GREETING_REPLY]);
        assert_eq!(sink.tokens(), vec!["bot-token"]);
    }

    #[tokio::test]
    async fn hello_reply_failure_is_only_logged() {
        let sink = Arc::new(RecordingSink::new().unreachable());
        let router = router(sink, StaticSecretSource::new("bot-token"));

        let outcome = router
            .handle(&test_interaction("hello", None))
            .await
            .unwrap();

        assert_eq!(outcome, CommandOutcome::Hello { replied: false });
    }

    #[tokio::test]
    async fn unknown_command_is_silent() {
        let sink = Arc::new(RecordingSink::new());
        let router = router(sink.clone(), StaticSecretSource::missing());

        let outcome = router
            .handle(&test_interaction("weather", None))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            CommandOutcome::Unknown {
                name: "weather".to_string()
            }
        );
        assert!(sink.posts().is_empty());
    }

    #[tokio::test]
    async fn fetch_error_sends_generic_reply_and_propagates() {
        let sink = Arc::new(RecordingSink::new());
        let router = router(sink.clone(), StaticSecretSource::new("bot-token"));

        let result = router.handle(&test_interaction("fetch", None)).await;

        assert!(matches!(result, Err(AppError::MissingArgument(_))));
        assert_eq!(sink.texts(), vec![COMMAND_FAILED_REPLY]);
    }

    #[tokio::test]
    async fn missing_token_fails_before_any_post() {
        let sink = Arc::new(RecordingSink::new());
        let router = router(sink.clone(), StaticSecretSource::missing());

        let result = router.handle(&test_interaction("hello", None)).await;

        assert!(matches!(
            result,
            Err(AppError::Secret(SecretError::Missing(_)))
        ));
        assert!(sink.posts().is_empty());
    }
}
