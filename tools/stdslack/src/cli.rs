use std::{io::IsTerminal, path::PathBuf, time::Duration};

use clap::{ArgAction, Parser};
use slack_client::{DEFAULT_API_URL, SlackClient};
use tokio::io::BufReader;

use crate::{Channel, ConfigStore, Error, Mode, Relay, Result};

/// Posts standard input as a message on Slack.
#[derive(Parser, Debug, Clone)]
#[command(name = "stdslack", version)]
#[command(about = "Reads from standard input and posts the input as a message on Slack")]
pub struct Args {
    /// Channel to post to.
    #[arg(short, long)]
    pub channel: Option<String>,

    /// Slack auth token. Saves it to the config file and exits.
    #[arg(short, long)]
    pub token: Option<String>,

    /// Echo each line to stdout and post it as its own message.
    #[arg(long)]
    pub tee: bool,

    /// Label the messages are posted under.
    #[arg(short, long, env = "STDSLACK_USERNAME", default_value = "stdslack")]
    pub username: String,

    /// Token file location (defaults to ~/.stdslackconf).
    #[arg(long, env = "STDSLACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Slack Web API base URL.
    #[arg(long, env = "STDSLACK_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "STDSLACK_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs one invocation against the process's real stdin and stdout.
pub async fn execute(args: &Args) -> Result<()> {
    let store = ConfigStore::resolve(args.config.as_deref())?;

    if let Some(token) = args.token.as_deref().filter(|t| !t.is_empty()) {
        store.save(token)?;
        println!("Wrote token to {}", store.path().display());
        return Ok(());
    }

    let channel = Channel::from_arg(args.channel.as_deref())?;
    let token = store.load()?;

    let client = SlackClient::builder(token)
        .api_url(&args.api_url)
        .timeout(Duration::from_secs(args.timeout))
        .build()
        .map_err(Error::Client)?;

    let stdin_is_terminal = std::io::stdin().is_terminal();
    let relay = Relay::new(&client, channel, &args.username);
    relay
        .run(
            Mode::from_tee(args.tee),
            stdin_is_terminal,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        )
        .await?;

    Ok(())
}
