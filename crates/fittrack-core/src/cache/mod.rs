//! In-memory response caching for log reads.
//!
//! Responses are cached under keys of the form
//! `{resource}-{user_id}-{start_date}-{end_date}`. Every key for one
//! resource and user shares the prefix `{resource}-{user_id}-`, which is
//! what writes invalidate. Nothing is persisted and nothing expires on its
//! own.

pub mod key;
pub mod store;

pub use key::{derive_key, key_prefix};
pub use store::{CachedPayload, ResponseCache};
