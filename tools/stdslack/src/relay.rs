//! Standard input to Slack dispatch.
//!
//! Batch mode posts everything read as one message. Tee mode echoes each line
//! to the output and posts it on its own, blank lines included; a failed post
//! is reported and the stream carries on.

use slack_client::{MessageSender, OutgoingMessage, PostedMessage, SlackError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::{Channel, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Batch,
    Tee,
}

impl Mode {
    pub fn from_tee(tee: bool) -> Self {
        if tee { Mode::Tee } else { Mode::Batch }
    }
}

/// Counts of posts made during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelaySummary {
    pub sent: usize,
    pub failed: usize,
}

/// Posts input to one channel under one sender label.
pub struct Relay<'a, S> {
    sender: &'a S,
    channel: Channel,
    username: String,
}

impl<'a, S: MessageSender> Relay<'a, S> {
    pub fn new(sender: &'a S, channel: Channel, username: impl Into<String>) -> Self {
        Self {
            sender,
            channel,
            username: username.into(),
        }
    }

    /// Relays `input` in the given mode.
    ///
    /// Refuses to start when `stdin_is_terminal` is set, since nothing has been
    /// piped in and reading would block on the keyboard.
    pub async fn run<R, W>(
        &self,
        mode: Mode,
        stdin_is_terminal: bool,
        input: R,
        output: W,
    ) -> Result<RelaySummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if stdin_is_terminal {
            return Err(Error::InteractiveStdin);
        }

        tracing::debug!(channel = %self.channel, ?mode, "relaying standard input");

        let summary = match mode {
            Mode::Batch => self.batch(input).await?,
            Mode::Tee => self.tee(input, output).await?,
        };

        tracing::info!(sent = summary.sent, failed = summary.failed, "relay finished");
        Ok(summary)
    }

    async fn batch<R>(&self, mut input: R) -> Result<RelaySummary>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut content = Vec::new();
        input
            .read_to_end(&mut content)
            .await
            .map_err(|e| Error::io("failed to read standard input", e))?;

        let text = String::from_utf8_lossy(&content);
        self.send(&text).await.map_err(Error::Send)?;

        Ok(RelaySummary { sent: 1, failed: 0 })
    }

    async fn tee<R, W>(&self, mut input: R, mut output: W) -> Result<RelaySummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut summary = RelaySummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = input
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|e| Error::io("failed to read standard input", e))?;
            if n == 0 {
                break;
            }

            let line = strip_line_ending(&buf);
            echo_line(&mut output, line).await?;

            let text = String::from_utf8_lossy(line);
            match self.send(&text).await {
                Ok(_) => summary.sent += 1,
                Err(e) => {
                    summary.failed += 1;
                    tracing::debug!(error = ?e, "line not posted");
                    eprintln!("{e}");
                }
            }
        }

        Ok(summary)
    }

    async fn send(&self, text: &str) -> std::result::Result<PostedMessage, SlackError> {
        let mut message = OutgoingMessage::new(self.channel.as_str(), text);
        if !self.username.is_empty() {
            message = message.with_username(self.username.as_str());
        }
        self.sender.post_message(&message).await
    }
}

async fn echo_line<W>(output: &mut W, line: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let write = async {
        output.write_all(line).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
        Ok::<_, std::io::Error>(())
    };
    write
        .await
        .map_err(|e| Error::io("failed to write standard output", e))
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
