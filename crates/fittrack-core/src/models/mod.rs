//! Data models for FitTrack entities.
//!
//! - `ActivityRecord`: a logged workout session
//! - `DietaryRecord`: a logged meal
//! - `ProgressReport`: server-computed totals over a date range
//! - `QueryScope`, `Resource`: what a read targets and which endpoint serves it

pub mod activity;
pub mod diet;
pub mod query;
pub mod report;

pub use activity::ActivityRecord;
pub use diet::DietaryRecord;
pub use query::{QueryScope, Resource};
pub use report::ProgressReport;
