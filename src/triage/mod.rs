//! Intake triage modules.
//!
//! Provides the fixed substring-matching rule tables and their evaluator,
//! which derive an estimated issue type, a suggested solution, and an
//! assigned expert from a ticket's category and urgency at intake.

pub mod engine;
pub mod rules;

pub use engine::{classify, Triage};
