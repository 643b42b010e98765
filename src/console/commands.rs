//! Console command grammar.

use std::str::FromStr;

use crate::models::ticket::TicketStatus;
use crate::{AppError, Result};

/// One console command, parsed from a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// File a new ticket through the submission wizard.
    Submit,
    /// List tickets, optionally filtered by status.
    List {
        /// Status filter; `None` lists everything.
        filter: Option<TicketStatus>,
    },
    /// Show one ticket in full.
    Show {
        /// Ticket identifier.
        id: String,
    },
    /// Change a ticket's lifecycle status.
    Status {
        /// Ticket identifier.
        id: String,
        /// Target status.
        status: TicketStatus,
    },
    /// Reassign a ticket to an expert.
    Assign {
        /// Ticket identifier.
        id: String,
        /// Expert label, taken verbatim from the rest of the line.
        expert: String,
    },
    /// Dashboard counters.
    Stats,
    /// Dump the board as JSON.
    Export,
    /// Print the command summary.
    Help,
    /// Leave the console.
    Quit,
}

impl Command {
    /// Parse a line of console input.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Console` for an empty line, an unknown command,
    /// or malformed arguments.
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err(AppError::Console("empty command".into()));
        };

        let command = match keyword {
            "submit" | "new" => Self::Submit,
            "list" | "ls" => {
                let filter = words
                    .next()
                    .map(TicketStatus::from_str)
                    .transpose()?;
                Self::List { filter }
            }
            "show" => Self::Show {
                id: required(words.next(), "show needs a ticket id")?,
            },
            "status" => {
                let id = required(words.next(), "status needs a ticket id")?;
                let status = required(words.next(), "status needs a target status")?;
                Self::Status {
                    id,
                    status: status.parse()?,
                }
            }
            "assign" => {
                let id = required(words.next(), "assign needs a ticket id")?;
                let expert = words.collect::<Vec<_>>().join(" ");
                if expert.is_empty() {
                    return Err(AppError::Console("assign needs an expert name".into()));
                }
                Self::Assign { id, expert }
            }
            "stats" => Self::Stats,
            "export" => Self::Export,
            "help" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(AppError::Console(format!(
                    "unknown command '{other}', try 'help'"
                )))
            }
        };
        Ok(command)
    }
}

/// Pull a mandatory argument or fail with the given message.
fn required(word: Option<&str>, message: &str) -> Result<String> {
    word.map(str::to_owned)
        .ok_or_else(|| AppError::Console(message.into()))
}
