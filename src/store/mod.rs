//! In-memory ticket store with change notification.
//!
//! [`TicketStore`] owns the canonical, ordered ticket collection for the
//! lifetime of the process. The whole board lives behind a
//! [`tokio::sync::watch`] channel as an `Arc<Vec<Ticket>>`: every mutation
//! replaces the collection wholesale and publishes the new snapshot, so
//! readers either hold a stable old board or observe the complete new one,
//! never a half-applied edit.
//!
//! There is exactly one writer path (the store's own operations) and the
//! desk drives all mutations from a single task, so operations do not take
//! an external lock. Views hold [`watch::Receiver`] handles and re-render
//! from the snapshot whenever it changes.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::models::ticket::{Ticket, TicketDraft, TicketPatch};
use crate::triage;

/// Prefix for generated ticket identifiers.
pub const TICKET_ID_PREFIX: &str = "T-";

/// Immutable snapshot of the ticket collection, newest first.
pub type Board = Arc<Vec<Ticket>>;

/// Authoritative owner of the session's ticket collection.
///
/// Created once at startup and passed around by explicit `Arc` handle;
/// there is no ambient global instance.
#[derive(Debug)]
pub struct TicketStore {
    board: watch::Sender<Board>,
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TicketStore {
    /// Build a store over an initial board, newest first.
    #[must_use]
    pub fn new(initial: Vec<Ticket>) -> Self {
        let (board, _) = watch::channel(Arc::new(initial));
        Self { board }
    }

    /// File a new ticket from an intake draft.
    ///
    /// Generates the next identifier, runs the triage rules to fill the
    /// derived fields, stamps the creation instant, and prepends the
    /// record to the board. The operation is total: no validation happens
    /// here; the submission wizard is responsible for its own constraints
    /// and the store records whatever it is handed.
    ///
    /// Identifiers are the collection size plus one, zero-padded to three
    /// digits. Tickets are never removed within a session, so the sequence
    /// cannot collide; if deletion ever enters scope this scheme has to be
    /// revisited before it.
    #[must_use = "the committed ticket carries the generated id and triage"]
    pub fn create(&self, draft: TicketDraft) -> Ticket {
        let current = self.snapshot();
        let sequence = current.len() + 1;
        let id = format!("{TICKET_ID_PREFIX}{sequence:03}");

        let outcome = triage::classify(&draft.issue_category, draft.urgency);
        let ticket = Ticket::new(
            id,
            draft,
            outcome.estimated_type,
            outcome.assigned_expert,
            outcome.suggested_solution,
        );

        let mut next = Vec::with_capacity(current.len() + 1);
        next.push(ticket.clone());
        next.extend(current.iter().cloned());
        self.board.send_replace(Arc::new(next));

        info!(
            id = %ticket.id,
            category = %ticket.issue_category,
            estimated_type = %ticket.estimated_type,
            "ticket filed"
        );
        ticket
    }

    /// Merge a partial update onto the ticket with the given id.
    ///
    /// Unspecified fields keep their values; `id` and `created_at` are
    /// never touched. An unknown id is a silent no-op: the board is left
    /// untouched and subscribers are not woken.
    pub fn update(&self, id: &str, patch: TicketPatch) {
        let current = self.snapshot();
        let Some(position) = current.iter().position(|ticket| ticket.id == id) else {
            debug!(id, "update for unknown ticket id ignored");
            return;
        };

        let mut next: Vec<Ticket> = current.as_ref().clone();
        next[position].apply(patch);
        self.board.send_replace(Arc::new(next));

        info!(id, "ticket updated");
    }

    /// Current board snapshot, newest first.
    ///
    /// The returned `Arc` is detached from future mutations; re-call or
    /// [`subscribe`](Self::subscribe) to observe changes.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.borrow().clone()
    }

    /// Subscribe to board changes.
    ///
    /// The receiver holds the current snapshot immediately and is notified
    /// whenever a mutation publishes a new board.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Board> {
        self.board.subscribe()
    }

    /// Look up a single ticket by id in the current snapshot.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Ticket> {
        self.snapshot()
            .iter()
            .find(|ticket| ticket.id == id)
            .cloned()
    }

    /// Number of tickets on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.board.borrow().len()
    }

    /// Whether the board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.board.borrow().is_empty()
    }
}
