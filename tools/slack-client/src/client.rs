use std::{fmt, future::Future, time::Duration};

use reqwest::{Client, Url};

use crate::{
    OutgoingMessage, PostedMessage, SlackError,
    message::ApiResponse,
};

/// Base URL of the public Slack Web API.
pub const DEFAULT_API_URL: &str = "https://slack.com/api";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can deliver a message to a channel.
pub trait MessageSender {
    fn post_message(
        &self,
        message: &OutgoingMessage,
    ) -> impl Future<Output = Result<PostedMessage, SlackError>> + Send;
}

/// Slack Web API client authenticated with a single token.
#[derive(Clone)]
pub struct SlackClient {
    http: Client,
    token: String,
    endpoint: Url,
}

impl fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackClient")
            .field("token", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl SlackClient {
    /// Creates a client against the public API with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self, SlackError> {
        Self::builder(token).build()
    }

    pub fn builder(token: impl Into<String>) -> SlackClientBuilder {
        SlackClientBuilder {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Full URL of the `chat.postMessage` method.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl MessageSender for SlackClient {
    async fn post_message(&self, message: &OutgoingMessage) -> Result<PostedMessage, SlackError> {
        tracing::debug!(channel = %message.channel, bytes = message.text.len(), "posting message");

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SlackError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: ApiResponse = response.json().await?;
        let posted = body.into_result()?;

        tracing::debug!(ts = ?posted.ts, "message posted");
        Ok(posted)
    }
}

/// Builder for [`SlackClient`].
#[derive(Debug, Clone)]
pub struct SlackClientBuilder {
    token: String,
    api_url: String,
    timeout: Duration,
}

impl SlackClientBuilder {
    /// Overrides the API base URL (e.g. for a proxy or a test server).
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<SlackClient, SlackError> {
        let endpoint = endpoint_url(&self.api_url)?;
        let http = Client::builder().timeout(self.timeout).build()?;

        Ok(SlackClient {
            http,
            token: self.token,
            endpoint,
        })
    }
}

/// Joins the base URL and the method name.
///
/// `Url::join` would replace the last path segment, so the base is treated as
/// a plain prefix instead.
fn endpoint_url(api_url: &str) -> Result<Url, SlackError> {
    let raw = format!("{}/chat.postMessage", api_url.trim_end_matches('/'));
    Url::parse(&raw).map_err(|e| SlackError::InvalidUrl {
        url: api_url.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://slack.com/api", "https://slack.com/api/chat.postMessage")]
    #[case("https://slack.com/api/", "https://slack.com/api/chat.postMessage")]
    #[case("http://127.0.0.1:9000", "http://127.0.0.1:9000/chat.postMessage")]
    fn endpoint_keeps_base_path(#[case] base: &str, #[case] expected: &str) {
        assert_eq!(endpoint_url(base).unwrap().as_str(), expected);
    }

    #[test]
    fn builder_api_url_sets_endpoint() {
        let client = SlackClient::builder("t")
            .api_url("http://127.0.0.1:9000/api/")
            .build()
            .unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://127.0.0.1:9000/api/chat.postMessage"
        );
    }

    #[test]
    fn relative_api_url_is_rejected() {
        let err = SlackClient::builder("t").api_url("slack/api").build().unwrap_err();
        assert!(matches!(err, SlackError::InvalidUrl { .. }));
    }

    #[test]
    fn debug_output_hides_token() {
        let client = SlackClient::new("xoxb-secret").unwrap();
        let shown = format!("{client:?}");
        assert!(!shown.contains("xoxb-secret"));
        assert!(shown.contains("chat.postMessage"));
    }
}
