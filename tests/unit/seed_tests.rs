//! Demo board content tests.

use brewdesk::models::ticket::{DeviceType, IssueType, TicketStatus, Urgency};
use brewdesk::seed;
use brewdesk::triage;
use brewdesk::triage::rules::{EXPERT_HARDWARE, EXPERT_TECHNICAL_SUPPORT, SOLUTION_LEAKING};

#[test]
fn demo_board_has_three_tickets_newest_first() {
    let board = seed::demo_board();

    let ids: Vec<&str> = board.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["T-001", "T-002", "T-003"]);

    for pair in board.windows(2) {
        assert!(pair[0].created_at > pair[1].created_at, "not newest first");
    }
}

#[test]
fn demo_tickets_cover_the_lifecycle_states() {
    let board = seed::demo_board();

    assert_eq!(board[0].status, TicketStatus::New);
    assert_eq!(board[1].status, TicketStatus::Assigned);
    assert_eq!(board[2].status, TicketStatus::InProgress);
}

#[test]
fn leak_ticket_carries_full_triage_guidance() {
    let board = seed::demo_board();
    let leak = &board[0];

    assert_eq!(leak.customer_name, "Sarah Chen");
    assert_eq!(leak.device_type, DeviceType::Machine);
    assert_eq!(leak.urgency, Urgency::High);
    assert_eq!(leak.estimated_type, IssueType::Hardware);
    assert_eq!(leak.assigned_expert.as_deref(), Some(EXPERT_TECHNICAL_SUPPORT));
    assert_eq!(leak.suggested_solution.as_deref(), Some(SOLUTION_LEAKING));
}

#[test]
fn grinder_ticket_has_expert_but_no_solution_yet() {
    let board = seed::demo_board();
    let grinder = &board[1];

    assert_eq!(grinder.device_type, DeviceType::Grinder);
    assert_eq!(grinder.assigned_expert.as_deref(), Some(EXPERT_HARDWARE));
    assert!(grinder.suggested_solution.is_none());
}

// The seeded derived fields must agree with what the live rules would
// produce for the same category and urgency.
#[test]
fn demo_derived_fields_agree_with_the_rule_tables() {
    for ticket in seed::demo_board() {
        let triage = triage::classify(&ticket.issue_category, ticket.urgency);
        assert_eq!(ticket.estimated_type, triage.estimated_type, "{}", ticket.id);
        assert_eq!(
            ticket.assigned_expert.as_deref(),
            Some(triage.assigned_expert.as_str()),
            "{}",
            ticket.id
        );
    }
}
