//! Three-step submission wizard.
//!
//! Mirrors the customer-facing flow: pick a device, pick a category and
//! urgency, describe the problem. The wizard enforces the intake
//! constraints (device chosen, category chosen, non-empty description);
//! the store itself accepts anything, so this is the only gate.

use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::GlobalConfig;
use crate::console::write_line;
use crate::models::ticket::{DeviceType, TicketDraft, Urgency};
use crate::Result;

/// Issue categories offered for coffee machines.
pub const MACHINE_CATEGORIES: &[&str] = &["brewing", "milk", "cleaning", "leaking", "power"];

/// Issue categories offered for grinders.
pub const GRINDER_CATEGORIES: &[&str] =
    &["grinding", "dosing", "bean-switching", "calibration", "jamming"];

/// Walk the customer through the submission steps and build a draft.
///
/// Returns `Ok(None)` when the input stream ends mid-wizard (submission
/// cancelled). The customer name comes prefilled from configuration, as
/// on the original form.
///
/// # Errors
///
/// Returns `AppError::Io` if the underlying streams fail.
pub async fn run<R, W>(
    input: &mut R,
    output: &mut W,
    config: &GlobalConfig,
) -> Result<Option<TicketDraft>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    // ── Step 1: device ───────────────────────────────────
    let device_type = loop {
        let Some(answer) = prompt(input, output, "device (machine/grinder): ").await? else {
            return Ok(None);
        };
        match DeviceType::from_str(&answer) {
            Ok(device) => break device,
            Err(err) => write_line(output, &err.to_string()).await?,
        }
    };

    // ── Step 2: category and urgency ─────────────────────
    let offered = match device_type {
        DeviceType::Machine => MACHINE_CATEGORIES,
        DeviceType::Grinder => GRINDER_CATEGORIES,
    };
    write_line(
        output,
        &format!("common categories: {}", offered.join(", ")),
    )
    .await?;
    let issue_category = loop {
        let Some(answer) = prompt(input, output, "issue category: ").await? else {
            return Ok(None);
        };
        if answer.is_empty() {
            write_line(output, "a category is required").await?;
        } else {
            break answer;
        }
    };

    let urgency = loop {
        let Some(answer) = prompt(input, output, "urgency (low/medium/high) [medium]: ").await?
        else {
            return Ok(None);
        };
        if answer.is_empty() {
            break Urgency::Medium;
        }
        match Urgency::from_str(&answer) {
            Ok(urgency) => break urgency,
            Err(err) => write_line(output, &err.to_string()).await?,
        }
    };

    // ── Step 3: description ──────────────────────────────
    let description = loop {
        let Some(answer) = prompt(input, output, "describe the problem: ").await? else {
            return Ok(None);
        };
        if answer.is_empty() {
            write_line(output, "a description is required").await?;
        } else {
            break answer;
        }
    };

    Ok(Some(TicketDraft {
        customer_name: config.default_customer_name.clone(),
        device_type,
        issue_category,
        description,
        urgency,
    }))
}

/// Print a prompt and read one trimmed line; `None` on end of input.
async fn prompt<R, W>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
