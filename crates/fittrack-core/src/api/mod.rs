//! REST API access for the FitTrack backend.
//!
//! - `ApiClient`: HTTP transport with status-to-error mapping
//! - `FitnessApi`: cache-backed reads and invalidating writes for
//!   activity logs, dietary logs and progress reports

pub mod client;
pub mod error;
pub mod fitness;

pub use client::ApiClient;
pub use error::ApiError;
pub use fitness::FitnessApi;
