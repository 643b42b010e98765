//! Demo board seeded at startup.
//!
//! Three canned tickets so the dashboard has something to show on first
//! launch. Nothing persists across sessions, so the timestamps are
//! relative to process start rather than fixed calendar instants.

use chrono::{Duration, Utc};

use crate::models::ticket::{DeviceType, IssueType, Ticket, TicketStatus, Urgency};
use crate::triage::rules::{
    EXPERT_HARDWARE, EXPERT_SOFTWARE, EXPERT_TECHNICAL_SUPPORT, SOLUTION_LEAKING,
};

/// The demo tickets, newest first.
#[must_use]
pub fn demo_board() -> Vec<Ticket> {
    let now = Utc::now();
    vec![
        Ticket {
            id: "T-001".to_owned(),
            customer_name: "Sarah Chen".to_owned(),
            device_type: DeviceType::Machine,
            issue_category: "leaking".to_owned(),
            description: "Coffee machine is leaking water from the bottom. Started yesterday \
                          morning. Water pools under the machine after each brew cycle."
                .to_owned(),
            urgency: Urgency::High,
            status: TicketStatus::New,
            assigned_expert: Some(EXPERT_TECHNICAL_SUPPORT.to_owned()),
            suggested_solution: Some(SOLUTION_LEAKING.to_owned()),
            estimated_type: IssueType::Hardware,
            created_at: now - Duration::days(1),
        },
        Ticket {
            id: "T-002".to_owned(),
            customer_name: "Michael Weber".to_owned(),
            device_type: DeviceType::Grinder,
            issue_category: "grinding".to_owned(),
            description: "Grinder makes loud grinding noise and coffee comes out very \
                          inconsistent. Some beans seem to get stuck."
                .to_owned(),
            urgency: Urgency::Medium,
            status: TicketStatus::Assigned,
            assigned_expert: Some(EXPERT_HARDWARE.to_owned()),
            suggested_solution: None,
            estimated_type: IssueType::Hardware,
            created_at: now - Duration::days(2),
        },
        Ticket {
            id: "T-003".to_owned(),
            customer_name: "Lisa Park".to_owned(),
            device_type: DeviceType::Machine,
            issue_category: "brewing".to_owned(),
            description: "Coffee tastes very weak even on strongest setting. Used to work fine \
                          but gradually getting weaker over past week."
                .to_owned(),
            urgency: Urgency::Medium,
            status: TicketStatus::InProgress,
            assigned_expert: Some(EXPERT_SOFTWARE.to_owned()),
            suggested_solution: None,
            estimated_type: IssueType::Maintenance,
            created_at: now - Duration::days(3),
        },
    ]
}
