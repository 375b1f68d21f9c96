//! stdslack - Standard Input to Slack
//!
//! # Usage
//!
//! ```bash
//! # Store the auth token once
//! stdslack --token xoxb-...
//!
//! # Post a whole file as one message
//! cat report.txt | stdslack --channel ops
//!
//! # Follow a log, echoing each line and posting it separately
//! tail -f build.log | stdslack -c builds --tee
//! ```

use std::process::ExitCode;

use clap::Parser;
use stdslack::{cli, cli::Args, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    logging::init(args.verbose);

    match cli::execute(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "exiting after fatal error");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
