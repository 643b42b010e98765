//! Plain-text renderers for the dashboard views.
//!
//! Pure functions from a board snapshot to display text; the console loop
//! owns all I/O.

use crate::models::ticket::{Ticket, TicketStatus};

/// Command summary printed by `help`.
pub const HELP: &str = "commands:
  submit               file a new ticket (interactive wizard)
  list [status]        list tickets, optionally filtered by status
  show <id>            full detail for one ticket
  status <id> <state>  change a ticket's status (new, assigned, in-progress, resolved)
  assign <id> <name>   reassign a ticket to an expert
  stats                dashboard counters
  export               dump the board as JSON
  help                 this summary
  quit                 leave the console";

/// Dashboard list: one block per ticket, newest first, optionally
/// filtered by status.
#[must_use]
pub fn render_board(tickets: &[Ticket], filter: Option<TicketStatus>) -> String {
    let visible: Vec<&Ticket> = tickets
        .iter()
        .filter(|ticket| filter.is_none_or(|wanted| ticket.status == wanted))
        .collect();

    if visible.is_empty() {
        return "No tickets found matching your filter criteria.".to_owned();
    }

    let mut out = format!("Support tickets ({})", visible.len());
    for ticket in visible {
        out.push_str(&format!(
            "\n{:<7} {:<8} {:<7} {:<12} {} / {}",
            ticket.id,
            ticket.device_type,
            ticket.urgency,
            ticket.status.as_str().replace('-', " "),
            ticket.customer_name,
            ticket.issue_category.replace('-', " "),
        ));
        if let Some(ref expert) = ticket.assigned_expert {
            out.push_str(&format!("\n        assigned to: {expert}"));
        }
    }
    out
}

/// Detail pane for a single ticket.
#[must_use]
pub fn render_ticket(ticket: &Ticket) -> String {
    let mut out = format!(
        "Ticket {} ({})\n\
         Customer:  {}\n\
         Device:    {} / {}\n\
         Urgency:   {}\n\
         Filed:     {}\n\
         Description:\n  {}",
        ticket.id,
        ticket.status.as_str().replace('-', " "),
        ticket.customer_name,
        ticket.device_type,
        ticket.issue_category.replace('-', " "),
        ticket.urgency,
        ticket.created_at.format("%Y-%m-%d %H:%M UTC"),
        ticket.description,
    );
    if let Some(ref solution) = ticket.suggested_solution {
        out.push_str(&format!(
            "\nAnalysis & suggestion [{}]:\n  {solution}",
            ticket.estimated_type
        ));
    }
    if let Some(ref expert) = ticket.assigned_expert {
        out.push_str(&format!("\nAssigned expert: {expert}"));
    }
    out
}

/// Dashboard counters: new, in progress (assigned counts as in progress,
/// as the dashboard tiles do), resolved, total.
#[must_use]
pub fn render_stats(tickets: &[Ticket]) -> String {
    let new = count(tickets, TicketStatus::New);
    let in_progress =
        count(tickets, TicketStatus::InProgress) + count(tickets, TicketStatus::Assigned);
    let resolved = count(tickets, TicketStatus::Resolved);
    format!(
        "New tickets:  {new}\nIn progress:  {in_progress}\nResolved:     {resolved}\nTotal:        {}",
        tickets.len()
    )
}

fn count(tickets: &[Ticket], status: TicketStatus) -> usize {
    tickets.iter().filter(|t| t.status == status).count()
}
