//! End-to-end intake journey over the store contract.

use brewdesk::console::render;
use brewdesk::models::ticket::{
    DeviceType, IssueType, TicketDraft, TicketPatch, TicketStatus, Urgency,
};
use brewdesk::seed;
use brewdesk::store::TicketStore;
use brewdesk::triage::rules::{EXPERT_TECHNICAL_SUPPORT, SOLUTION_LEAKING};

fn leak_draft() -> TicketDraft {
    TicketDraft {
        customer_name: "Natalie".into(),
        device_type: DeviceType::Machine,
        issue_category: "leaking".into(),
        description: "Water pools under the machine after every espresso.".into(),
        urgency: Urgency::High,
    }
}

#[test]
fn submission_lands_on_top_of_the_dashboard_fully_triaged() {
    let store = TicketStore::new(seed::demo_board());

    let ticket = store.create(leak_draft());

    assert_eq!(ticket.id, "T-004");
    assert_eq!(ticket.status, TicketStatus::New);
    assert_eq!(ticket.estimated_type, IssueType::Hardware);
    assert_eq!(ticket.assigned_expert.as_deref(), Some(EXPERT_TECHNICAL_SUPPORT));
    assert_eq!(ticket.suggested_solution.as_deref(), Some(SOLUTION_LEAKING));

    let board = store.snapshot();
    assert_eq!(board[0].id, "T-004");

    // Both dashboard views derive straight from the snapshot.
    let listing = render::render_board(&board, Some(TicketStatus::New));
    assert!(listing.contains("Support tickets (2)"), "{listing}");
    assert!(listing.contains("T-004"));
    assert!(listing.contains("T-001"));
}

#[test]
fn resolving_a_ticket_moves_it_between_dashboard_filters() {
    let store = TicketStore::new(seed::demo_board());
    let _ = store.create(leak_draft());

    store.update(
        "T-004",
        TicketPatch {
            status: Some(TicketStatus::Resolved),
            ..TicketPatch::default()
        },
    );

    let board = store.snapshot();
    let resolved = render::render_board(&board, Some(TicketStatus::Resolved));
    assert!(resolved.contains("T-004"));

    let fresh = render::render_board(&board, Some(TicketStatus::New));
    assert!(!fresh.contains("T-004"));

    let stats = render::render_stats(&board);
    assert!(stats.contains("Resolved:     1"), "{stats}");
    assert!(stats.contains("Total:        4"), "{stats}");
}

#[test]
fn full_lifecycle_keeps_identity_and_creation_instant() {
    let store = TicketStore::default();
    let created = store.create(leak_draft());

    for status in [
        TicketStatus::Assigned,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
    ] {
        store.update(
            &created.id,
            TicketPatch {
                status: Some(status),
                ..TicketPatch::default()
            },
        );
    }

    let finished = store.get(&created.id).expect("ticket survives its lifecycle");
    assert_eq!(finished.status, TicketStatus::Resolved);
    assert_eq!(finished.id, created.id);
    assert_eq!(finished.created_at, created.created_at);
    assert_eq!(store.len(), 1, "lifecycle must not duplicate the record");
}
