//! Slack Client - Minimal Slack Web API Client
//!
//! Posts plain-text messages to a channel through `chat.postMessage`.
//! Only the single call needed by the relay tools is covered; there is no
//! retry, batching or rate-limit handling.
//!
//! # Usage
//!
//! ```no_run
//! use slack_client::{MessageSender, OutgoingMessage, SlackClient};
//!
//! # async fn demo() -> Result<(), slack_client::SlackError> {
//! let client = SlackClient::new("xoxb-token")?;
//! let message = OutgoingMessage::new("#general", "deploy finished").with_username("ci");
//! client.post_message(&message).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod message;

pub use client::{DEFAULT_API_URL, DEFAULT_TIMEOUT, MessageSender, SlackClient, SlackClientBuilder};
pub use error::SlackError;
pub use message::{OutgoingMessage, PostedMessage};
