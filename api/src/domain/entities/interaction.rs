//! Interaction domain entities
//!
//! The inbound slash-command payload and the reply target derived from it.

use serde::{Deserialize, Serialize};

/// Slash-command invocation as delivered by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub application_id: String,
    pub token: String,
    pub data: InteractionData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOption {
    #[serde(default)]
    pub name: Option<String>,
    pub value: serde_json::Value,
}

impl Interaction {
    /// Value of the first command option, rendered as a string
    pub fn first_option_value(&self) -> Option<String> {
        self.data.options.first().map(|opt| match &opt.value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    pub fn reply_target(&self) -> ReplyTarget {
        ReplyTarget {
            application_id: self.application_id.clone(),
            token: self.token.clone(),
        }
    }
}

/// Where follow-up messages for one interaction are posted.
///
/// Every message of an invocation reuses the same target.
#[derive(Clone, PartialEq, Eq)]
pub struct ReplyTarget {
    pub application_id: String,
    pub token: String,
}

impl std::fmt::Debug for ReplyTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyTarget")
            .field("application_id", &self.application_id)
            .field("token", &"<redacted>")
            .finish()
    }
}
