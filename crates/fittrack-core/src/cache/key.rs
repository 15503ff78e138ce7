use chrono::NaiveDate;

use crate::models::{QueryScope, Resource};

const DELIMITER: char = '-';

/// Build the cache key for a read. Absent bounds become empty segments.
pub fn derive_key(
    resource: &str,
    user_id: i64,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> String {
    let start = start_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
    let end = end_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
    format!("{}{}{}{}", key_prefix(resource, user_id), start, DELIMITER, end)
}

/// Prefix shared by every key for `resource` and `user_id`, whatever the range.
pub fn key_prefix(resource: &str, user_id: i64) -> String {
    format!("{}{}{}{}", resource, DELIMITER, user_id, DELIMITER)
}

pub(crate) fn scope_key(resource: Resource, scope: &QueryScope) -> String {
    derive_key(resource.name(), scope.user_id, scope.start_date, scope.end_date)
}
