//! Interactive console: the desk's submission and dashboard surface.
//!
//! Plays the role of the customer wizard and the support dashboard: every
//! command is plain plumbing over the ticket store's contract (file a
//! draft, list or inspect the snapshot, apply a partial update). The loop
//! is generic over the input/output streams so tests can drive a scripted
//! session.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::config::GlobalConfig;
use crate::console::commands::Command;
use crate::models::ticket::TicketPatch;
use crate::store::TicketStore;
use crate::Result;

pub mod commands;
pub mod render;
pub mod wizard;

/// Shared references the console needs to serve a session.
pub struct ConsoleContext {
    /// Global configuration.
    pub config: Arc<GlobalConfig>,
    /// The session's ticket store.
    pub store: Arc<TicketStore>,
}

impl ConsoleContext {
    /// Bundle the configuration and store handles.
    #[must_use]
    pub fn new(config: Arc<GlobalConfig>, store: Arc<TicketStore>) -> Self {
        Self { config, store }
    }
}

/// Drive the console until `quit` or end of input.
///
/// # Errors
///
/// Returns `AppError::Io` if the underlying streams fail; command and
/// wizard mistakes are reported inline and never abort the loop.
pub async fn run<R, W>(mut input: R, mut output: W, ctx: &ConsoleContext) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(&mut output, "nunc. support desk (type 'help' for commands)").await?;

    let mut line = String::new();
    loop {
        output.write_all(b"brewdesk> ").await?;
        output.flush().await?;

        line.clear();
        if input.read_line(&mut line).await? == 0 {
            debug!("console input closed");
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                write_line(&mut output, &err.to_string()).await?;
                continue;
            }
        };

        if matches!(command, Command::Quit) {
            break;
        }
        dispatch(command, &mut input, &mut output, ctx).await?;
    }

    write_line(&mut output, "goodbye").await?;
    Ok(())
}

/// Execute one parsed command against the store.
async fn dispatch<R, W>(
    command: Command,
    input: &mut R,
    output: &mut W,
    ctx: &ConsoleContext,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match command {
        Command::Submit => {
            let Some(draft) = wizard::run(input, output, &ctx.config).await? else {
                write_line(output, "submission cancelled").await?;
                return Ok(());
            };
            let ticket = ctx.store.create(draft);
            write_line(
                output,
                "Ticket submitted successfully. Our support team will get back to you within 24 hours.",
            )
            .await?;
            write_line(output, &render::render_ticket(&ticket)).await?;
        }
        Command::List { filter } => {
            let board = ctx.store.snapshot();
            write_line(output, &render::render_board(&board, filter)).await?;
        }
        Command::Show { id } => {
            if let Some(ticket) = ctx.store.get(&id) {
                write_line(output, &render::render_ticket(&ticket)).await?;
            } else {
                write_line(output, &format!("no ticket {id} on the board")).await?;
            }
        }
        Command::Status { id, status } => {
            if ctx.store.get(&id).is_none() {
                write_line(output, &format!("no ticket {id} on the board")).await?;
            } else {
                ctx.store.update(
                    &id,
                    TicketPatch {
                        status: Some(status),
                        ..TicketPatch::default()
                    },
                );
                write_line(output, &format!("{id} is now {status}")).await?;
            }
        }
        Command::Assign { id, expert } => {
            if ctx.store.get(&id).is_none() {
                write_line(output, &format!("no ticket {id} on the board")).await?;
            } else {
                ctx.store.update(
                    &id,
                    TicketPatch {
                        assigned_expert: Some(expert.clone()),
                        ..TicketPatch::default()
                    },
                );
                write_line(output, &format!("{id} assigned to {expert}")).await?;
            }
        }
        Command::Stats => {
            let board = ctx.store.snapshot();
            write_line(output, &render::render_stats(&board)).await?;
        }
        Command::Export => {
            let board = ctx.store.snapshot();
            let json = serde_json::to_string_pretty(board.as_ref())?;
            write_line(output, &json).await?;
        }
        Command::Help => write_line(output, render::HELP).await?,
        // Handled by the caller before dispatch.
        Command::Quit => {}
    }
    Ok(())
}

/// Write a line followed by a newline and flush.
pub(crate) async fn write_line<W>(output: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
