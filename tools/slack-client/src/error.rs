use thiserror::Error;

/// Errors returned by the Slack client.
#[derive(Error, Debug)]
pub enum SlackError {
    #[error("request to Slack failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Slack responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// `ok: false` in the response body; carries Slack's error code.
    #[error("Slack API error: {0}")]
    Api(String),

    #[error("invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl SlackError {
    /// Slack's error code, if the API itself rejected the call.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            SlackError::Api(code) => Some(code),
            _ => None,
        }
    }
}
