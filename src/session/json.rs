use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    game::GameEngine,
    session::messages::{ClientCommand, ServerEvent},
};

/// Drive an engine with newline-delimited JSON.
///
/// Every input line is one [`ClientCommand`] and produces exactly one
/// [`ServerEvent`] line. The current state is written once before any input
/// is read. Returns when the input ends.
pub async fn run<R, W>(engine: &mut GameEngine, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_event(&mut output, &ServerEvent::state(engine)).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("failed to read command")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = match serde_json::from_str::<ClientCommand>(line) {
            Ok(command) => {
                tracing::debug!("Received command: {:?}", command);
                command.apply(engine);
                ServerEvent::state(engine)
            }
            Err(e) => {
                tracing::warn!("Rejected command {:?}: {}", line, e);
                ServerEvent::Error {
                    message: format!("invalid command: {}", e),
                }
            }
        };

        write_event(&mut output, &event).await?;
    }

    Ok(())
}

async fn write_event<W: AsyncWrite + Unpin>(output: &mut W, event: &ServerEvent) -> Result<()> {
    let mut json = serde_json::to_string(event).context("failed to serialize event")?;
    json.push('\n');
    output.write_all(json.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
