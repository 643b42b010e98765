//! Rule evaluator deriving triage fields from category and urgency.
//!
//! Stateless and side-effect free: identical inputs always yield the same
//! [`Triage`]. Each table is consulted independently; a category can hit
//! a row in one table and fall through to the default in another.

use tracing::debug;

use crate::models::ticket::{IssueType, Urgency};
use crate::triage::rules::{
    EXPERT_RULES, EXPERT_UNASSIGNED, SOLUTION_PENDING, SOLUTION_RULES, TYPE_DEFAULT, TYPE_RULES,
};

/// Fields derived at intake from a ticket's category and urgency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triage {
    /// Estimated nature of the issue.
    pub estimated_type: IssueType,
    /// Canned solution guidance.
    pub suggested_solution: String,
    /// Expert label, or the auto-assignment placeholder.
    pub assigned_expert: String,
}

/// Run all three rule tables against a ticket's category and urgency.
#[must_use]
pub fn classify(issue_category: &str, urgency: Urgency) -> Triage {
    Triage {
        estimated_type: estimate_type(issue_category),
        suggested_solution: suggest_solution(issue_category).to_owned(),
        assigned_expert: assign_expert(issue_category, urgency).to_owned(),
    }
}

/// Estimated-type table: first matching row wins, default is user-error.
#[must_use]
pub fn estimate_type(issue_category: &str) -> IssueType {
    for rule in TYPE_RULES {
        if contains_any(issue_category, rule.needles) {
            debug!(category = issue_category, verdict = %rule.verdict, "type rule matched");
            return rule.verdict;
        }
    }
    TYPE_DEFAULT
}

/// Suggested-solution table: first matching row wins, default is the
/// analysis-pending message.
#[must_use]
pub fn suggest_solution(issue_category: &str) -> &'static str {
    for rule in SOLUTION_RULES {
        if issue_category.contains(rule.needle) {
            debug!(category = issue_category, needle = rule.needle, "solution rule matched");
            return rule.advice;
        }
    }
    SOLUTION_PENDING
}

/// Expert-assignment table: first matching row wins, default is the
/// auto-assignment placeholder.
#[must_use]
pub fn assign_expert(issue_category: &str, urgency: Urgency) -> &'static str {
    for rule in EXPERT_RULES {
        let urgency_ok = rule.required_urgency.is_none_or(|required| required == urgency);
        if urgency_ok && contains_any(issue_category, rule.needles) {
            debug!(category = issue_category, expert = rule.expert, "expert rule matched");
            return rule.expert;
        }
    }
    EXPERT_UNASSIGNED
}

/// Substring containment against any needle in the rule.
fn contains_any(category: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| category.contains(needle))
}
