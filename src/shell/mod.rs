//! Line-oriented command shell.
//!
//! Reads one command per line and answers each with one or more JSON lines.
//! Stdout carries only JSON; logging goes to stderr.

mod command;
mod session;

pub use command::{Command, USAGE};
pub use session::{Reply, Session};

use crate::error::CommandError;
use anyhow::Result;
use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Run a session until `quit` or end of input.
///
/// Lines that fail to parse, including lines that are not valid UTF-8, are
/// answered with an error object and do not end the session.
pub async fn run_shell<R, W>(session: &mut Session, mut reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let parsed = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => line.parse::<Command>(),
            Err(e) => {
                warn!(error = %e, "Input line is not valid UTF-8");
                Err(CommandError::InvalidEncoding)
            }
        };

        let reply = match parsed {
            Ok(command) => {
                debug!(command = ?command, "Executing command");
                session.execute(command)
            }
            Err(e) => {
                debug!(error = %e, "Rejected input line");
                Reply {
                    lines: vec![json!({ "ok": false, "error": e.to_string() })],
                    quit: false,
                }
            }
        };

        for value in &reply.lines {
            let mut out = serde_json::to_vec(value)?;
            out.push(b'\n');
            writer.write_all(&out).await?;
        }
        writer.flush().await?;

        if reply.quit {
            info!("Shell session ended by user");
            return Ok(());
        }
    }

    info!("Shell input closed");
    Ok(())
}
