//! Triage rule tables.
//!
//! Three independent decision tables keyed by substring containment on the
//! issue category, evaluated top to bottom; the first matching rule wins
//! and an explicit default catches everything else. The tables are not
//! mutually consistent for every category the wizard offers ("jamming"
//! reaches a hardware expert while its estimated type stays user-error);
//! that mismatch is part of the shipped rule set and is kept as-is.

use crate::models::ticket::{IssueType, Urgency};

/// Technical-support expert handling urgent leak reports.
pub const EXPERT_TECHNICAL_SUPPORT: &str = "Mischa (Technical Support)";
/// Hardware expert handling grinder mechanics.
pub const EXPERT_HARDWARE: &str = "Emma (Hardware)";
/// Software expert handling brew and milk programs.
pub const EXPERT_SOFTWARE: &str = "David (Software)";
/// Placeholder shown until a real expert picks the ticket up.
pub const EXPERT_UNASSIGNED: &str = "Auto-assignment pending";

/// Canned guidance for leaking brew heads.
pub const SOLUTION_LEAKING: &str = "Exchange of one unit (espresso) suggested: Leaking Brewhead, the unit will be returned and exchange delivery will be send out to customer";
/// Canned guidance for grinder mechanism trouble.
pub const SOLUTION_GRINDING: &str = "Hardware issue detected: Grinder mechanism may need cleaning or replacement. Check for bean residue buildup.";
/// Canned guidance for weak or failed brewing.
pub const SOLUTION_BREWING: &str = "Maintenance required: Likely needs descaling or cleaning cycle. Check water quality and filter status.";
/// Canned guidance for milk steaming problems.
pub const SOLUTION_MILK: &str = "Maintenance required: Steam wand cleaning needed. Check milk system for blockages.";
/// Fallback guidance when no rule recognizes the category.
pub const SOLUTION_PENDING: &str = "Analysis pending: Please review ticket details for proper categorization.";

/// One row of the estimated-type table.
pub(crate) struct TypeRule {
    /// Substrings; any hit selects this row.
    pub needles: &'static [&'static str],
    /// Issue type assigned on a hit.
    pub verdict: IssueType,
}

/// Estimated-type table, priority order.
pub(crate) const TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        needles: &["leaking", "grinding"],
        verdict: IssueType::Hardware,
    },
    TypeRule {
        needles: &["brewing", "milk"],
        verdict: IssueType::Maintenance,
    },
];

/// Estimated type when no row matches.
pub(crate) const TYPE_DEFAULT: IssueType = IssueType::UserError;

/// One row of the suggested-solution table.
pub(crate) struct SolutionRule {
    /// Substring selecting this row.
    pub needle: &'static str,
    /// Canned guidance text.
    pub advice: &'static str,
}

/// Suggested-solution table, priority order.
pub(crate) const SOLUTION_RULES: &[SolutionRule] = &[
    SolutionRule {
        needle: "leaking",
        advice: SOLUTION_LEAKING,
    },
    SolutionRule {
        needle: "grinding",
        advice: SOLUTION_GRINDING,
    },
    SolutionRule {
        needle: "brewing",
        advice: SOLUTION_BREWING,
    },
    SolutionRule {
        needle: "milk",
        advice: SOLUTION_MILK,
    },
];

/// One row of the expert-assignment table.
pub(crate) struct ExpertRule {
    /// Substrings; any hit selects this row.
    pub needles: &'static [&'static str],
    /// Urgency the ticket must carry for this row to apply; `None` means
    /// any urgency qualifies.
    pub required_urgency: Option<Urgency>,
    /// Expert label assigned on a hit.
    pub expert: &'static str,
}

/// Expert-assignment table, priority order.
pub(crate) const EXPERT_RULES: &[ExpertRule] = &[
    ExpertRule {
        needles: &["leaking"],
        required_urgency: Some(Urgency::High),
        expert: EXPERT_TECHNICAL_SUPPORT,
    },
    ExpertRule {
        needles: &["grinding", "jamming"],
        required_urgency: None,
        expert: EXPERT_HARDWARE,
    },
    ExpertRule {
        needles: &["brewing", "milk"],
        required_urgency: None,
        expert: EXPERT_SOFTWARE,
    },
];
