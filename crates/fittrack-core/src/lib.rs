//! FitTrack client library.
//!
//! Provides the REST client for the FitTrack backend, typed activity and
//! dietary records, an in-memory response cache keyed by user and date
//! range, and client-side progress statistics.

pub mod api;
pub mod cache;
pub mod config;
pub mod models;
pub mod stats;

pub use api::{ApiClient, ApiError, FitnessApi};
pub use cache::ResponseCache;
pub use config::Config;
pub use models::{ActivityRecord, DietaryRecord, ProgressReport, QueryScope, Resource};
