#![forbid(unsafe_code)]

//! `brewdesk`: support desk for nunc. coffee appliances.
//!
//! Customers file device-issue tickets; a dashboard console lists and
//! inspects them. Tickets are triaged at intake by a fixed set of
//! substring-matching rules. All state lives in one process for one
//! session; there is no persistence and no backend.

pub mod config;
pub mod console;
pub mod errors;
pub mod models;
pub mod seed;
pub mod store;
pub mod triage;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
