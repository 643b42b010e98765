//! Ticket model and its closed vocabularies.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Appliance family a ticket is filed against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceType {
    /// Coffee machine: brewing, milk steaming, cleaning.
    Machine,
    /// Coffee grinder: grinding, dosing, bean switching.
    Grinder,
}

impl DeviceType {
    /// String form used in storage and display.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Machine => "machine",
            Self::Grinder => "grinder",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "machine" => Ok(Self::Machine),
            "grinder" => Ok(Self::Grinder),
            other => Err(AppError::Console(format!(
                "unknown device type '{other}' (expected machine or grinder)"
            ))),
        }
    }
}

/// Customer-reported urgency of an issue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    /// Can wait a few days.
    Low,
    /// Would like help soon.
    Medium,
    /// Urgent, device unusable.
    High,
}

impl Urgency {
    /// String form used in storage and display.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::Console(format!(
                "unknown urgency '{other}' (expected low, medium, or high)"
            ))),
        }
    }
}

/// Lifecycle status of a ticket.
///
/// Every ticket starts as `New`; the status changes only through an
/// explicit update, never as a side effect of another operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    /// Freshly filed, nobody has looked at it yet.
    New,
    /// An expert has been assigned.
    Assigned,
    /// Resolution work is under way.
    InProgress,
    /// Issue resolved.
    Resolved,
}

impl TicketStatus {
    /// String form used in storage and display.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Assigned => "assigned",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "assigned" => Ok(Self::Assigned),
            "in-progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(AppError::Console(format!(
                "unknown status '{other}' (expected new, assigned, in-progress, or resolved)"
            ))),
        }
    }
}

/// Estimated nature of the reported issue, derived at intake.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    /// Physical defect in the unit.
    Hardware,
    /// Firmware or configuration problem.
    Software,
    /// Operating mistake on the customer side.
    UserError,
    /// Routine upkeep needed (descaling, cleaning).
    Maintenance,
}

impl IssueType {
    /// String form used in storage and display.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hardware => "hardware",
            Self::Software => "software",
            Self::UserError => "user-error",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-supplied fields for filing a new ticket.
///
/// Everything else on [`Ticket`] is generated or derived at intake. The
/// submission wizard enforces its own constraints (device chosen, category
/// chosen, non-empty description) before building a draft; the store
/// accepts whatever it is given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct TicketDraft {
    /// Customer filing the ticket.
    pub customer_name: String,
    /// Appliance family.
    pub device_type: DeviceType,
    /// Issue category tag. The UI offers a fixed per-device vocabulary,
    /// but the tag is treated as opaque text everywhere downstream.
    pub issue_category: String,
    /// Free-text problem description.
    pub description: String,
    /// Customer-reported urgency.
    pub urgency: Urgency,
}

/// Partial update applied to an existing ticket.
///
/// `Some` fields overwrite; `None` fields are left untouched. A ticket's
/// `id` and `created_at` can never be patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", default)]
pub struct TicketPatch {
    /// New lifecycle status.
    pub status: Option<TicketStatus>,
    /// New urgency.
    pub urgency: Option<Urgency>,
    /// Replacement problem description.
    pub description: Option<String>,
    /// Expert taking over the ticket.
    pub assigned_expert: Option<String>,
    /// Replacement solution guidance.
    pub suggested_solution: Option<String>,
}

/// A customer-reported device issue with lifecycle status and derived
/// triage guidance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Ticket {
    /// Unique identifier, assigned in creation order; never reassigned.
    pub id: String,
    /// Customer who filed the ticket.
    pub customer_name: String,
    /// Appliance family.
    pub device_type: DeviceType,
    /// Issue category tag.
    pub issue_category: String,
    /// Free-text problem description.
    pub description: String,
    /// Customer-reported urgency.
    pub urgency: Urgency,
    /// Current lifecycle status.
    pub status: TicketStatus,
    /// Expert label derived at intake, reassignable afterwards.
    pub assigned_expert: Option<String>,
    /// Canned solution guidance derived at intake.
    pub suggested_solution: Option<String>,
    /// Estimated issue nature derived at intake.
    pub estimated_type: IssueType,
    /// Creation timestamp; immutable after intake.
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Assemble a freshly triaged ticket from its intake draft.
    ///
    /// Derived fields are required up front so a partially triaged record
    /// can never be observed: status is `New` and `created_at` is stamped
    /// here, once.
    #[must_use]
    pub fn new(
        id: String,
        draft: TicketDraft,
        estimated_type: IssueType,
        assigned_expert: String,
        suggested_solution: String,
    ) -> Self {
        Self {
            id,
            customer_name: draft.customer_name,
            device_type: draft.device_type,
            issue_category: draft.issue_category,
            description: draft.description,
            urgency: draft.urgency,
            status: TicketStatus::New,
            assigned_expert: Some(assigned_expert),
            suggested_solution: Some(suggested_solution),
            estimated_type,
            created_at: Utc::now(),
        }
    }

    /// Merge a partial update onto this ticket.
    ///
    /// Unspecified fields keep their current value; `id` and `created_at`
    /// are untouchable by construction.
    pub fn apply(&mut self, patch: TicketPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(urgency) = patch.urgency {
            self.urgency = urgency;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(expert) = patch.assigned_expert {
            self.assigned_expert = Some(expert);
        }
        if let Some(solution) = patch.suggested_solution {
            self.suggested_solution = Some(solution);
        }
    }
}
