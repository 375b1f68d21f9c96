//! stdslack - Standard Input to Slack
//!
//! Reads standard input and posts it as a message on a Slack channel, either
//! as one message or line by line while echoing to standard output.

pub mod channel;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod relay;

pub use channel::Channel;
pub use config::ConfigStore;
pub use error::{Error, Result};
pub use relay::{Mode, Relay, RelaySummary};
