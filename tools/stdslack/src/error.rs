//! Errors surfaced to the user. Each one is fatal and ends the run with exit code 1.

use std::{io, path::PathBuf};

use slack_client::SlackError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("A channel is required")]
    MissingChannel,

    #[error("run `stdslack --token=YOUR_TOKEN` to set token before using")]
    TokenNotSet { path: PathBuf },

    #[error("config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not determine the home directory, pass --config")]
    NoHomeDir,

    #[error("Content needs to be given to stdin to use")]
    InteractiveStdin,

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Send(#[source] SlackError),

    #[error("failed to set up Slack client: {0}")]
    Client(#[source] SlackError),
}

impl Error {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
