use serde::{Deserialize, Serialize};

use crate::SlackError;

/// Body of a `chat.postMessage` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub channel: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl OutgoingMessage {
    pub fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
            username: None,
        }
    }

    /// Sets the label the message is posted under.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

/// Where Slack placed a successfully posted message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostedMessage {
    pub channel: Option<String>,
    pub ts: Option<String>,
}

/// Envelope shared by every Web API response.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    ok: bool,
    error: Option<String>,
    warning: Option<String>,
    channel: Option<String>,
    ts: Option<String>,
}

impl ApiResponse {
    pub(crate) fn into_result(self) -> Result<PostedMessage, SlackError> {
        if let Some(ref warning) = self.warning {
            tracing::warn!(%warning, "Slack returned a warning");
        }

        if !self.ok {
            let code = self.error.unwrap_or_else(|| "unknown_error".to_string());
            return Err(SlackError::Api(code));
        }

        Ok(PostedMessage {
            channel: self.channel,
            ts: self.ts,
        })
    }
}
