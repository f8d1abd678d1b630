//! # Intent Bridge
//!
//! Newline-delimited JSON between the presentation layer and the commands.
//!
//! ```text
//! stdin  ──► {"intent":"addCourse","name":"Chor"}
//! stdout ◄── {"type":"snapshot","courses":[...],...}
//! stdin  ──► {"intent":"addPoint"}
//! stdout ◄── {"type":"error","code":"INVALID_REQUEST","message":"..."}
//! ```
//!
//! One snapshot is written at startup, then exactly one line per non-blank
//! input line. Errors are reported and the loop keeps going; it ends when
//! the input closes.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::commands::{self, Intent, Reply};
use crate::error::ApiError;
use crate::state::AppState;

/// Serves intents from `input` until end of stream.
pub async fn serve<R, W>(state: &AppState, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_reply(&mut output, &Reply::Snapshot(state.snapshot().await)).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<Intent>(line) {
            Ok(intent) => {
                debug!(?intent, "Intent received");
                commands::dispatch(state, intent)
                    .await
                    .unwrap_or_else(Reply::Error)
            }
            Err(e) => {
                warn!(error = %e, "Malformed intent");
                Reply::Error(ApiError::invalid_request(e.to_string()))
            }
        };

        write_reply(&mut output, &reply).await?;
    }

    debug!("Input closed");
    Ok(())
}

async fn write_reply<W: AsyncWrite + Unpin>(output: &mut W, reply: &Reply) -> std::io::Result<()> {
    let mut line = serde_json::to_vec(reply)?;
    line.push(b'\n');
    output.write_all(&line).await?;
    output.flush().await
}
