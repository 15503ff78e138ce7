//! Cache-backed access to fitness logs, dietary logs and progress reports.
//!
//! Log reads are served from the `ResponseCache` when an entry exists for
//! the exact scope; otherwise the server is queried and the decoded
//! response stored. Successful writes drop every cached entry for the
//! record owner's resource, so the next read re-fetches. Progress reports
//! bypass the cache entirely.

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use crate::cache::key::{key_prefix, scope_key};
use crate::cache::{CachedPayload, ResponseCache};
use crate::config::Config;
use crate::models::{ActivityRecord, DietaryRecord, ProgressReport, QueryScope, Resource};

use super::{ApiClient, ApiError};

/// A record type stored in one of the log collections.
trait LogRecord: Serialize + DeserializeOwned + Clone {
    const RESOURCE: Resource;

    fn id(&self) -> Option<i64>;
    fn user_id(&self) -> i64;
    fn into_payload(records: Vec<Self>) -> CachedPayload;
    fn from_payload(payload: CachedPayload) -> Option<Vec<Self>>;
}

impl LogRecord for ActivityRecord {
    const RESOURCE: Resource = Resource::FitnessLogs;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn into_payload(records: Vec<Self>) -> CachedPayload {
        CachedPayload::Activity(records)
    }

    fn from_payload(payload: CachedPayload) -> Option<Vec<Self>> {
        match payload {
            CachedPayload::Activity(records) => Some(records),
            _ => None,
        }
    }
}

impl LogRecord for DietaryRecord {
    const RESOURCE: Resource = Resource::DietaryLogs;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn into_payload(records: Vec<Self>) -> CachedPayload {
        CachedPayload::Dietary(records)
    }

    fn from_payload(payload: CachedPayload) -> Option<Vec<Self>> {
        match payload {
            CachedPayload::Dietary(records) => Some(records),
            _ => None,
        }
    }
}

/// Public entry point for reading and writing FitTrack data.
///
/// The cache is handed in by the caller and owned by this value from then on.
pub struct FitnessApi {
    client: ApiClient,
    cache: ResponseCache,
}

impl FitnessApi {
    /// Create an access module with an empty cache
    pub fn new(client: ApiClient) -> Self {
        Self::with_cache(client, ResponseCache::new())
    }

    pub fn with_cache(client: ApiClient, cache: ResponseCache) -> Self {
        Self { client, cache }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(ApiClient::from_config(config)?))
    }

    /// Whether a read for `scope` would currently be served from cache.
    pub fn is_cached(&self, resource: Resource, scope: &QueryScope) -> bool {
        resource.is_cacheable() && self.cache.has(&scope_key(resource, scope))
    }

    // ===== Reads =====

    pub async fn fetch_fitness_logs(&self, scope: &QueryScope) -> Result<Vec<ActivityRecord>> {
        self.fetch_logs(scope).await
    }

    pub async fn fetch_dietary_logs(&self, scope: &QueryScope) -> Result<Vec<DietaryRecord>> {
        self.fetch_logs(scope).await
    }

    /// Fetch progress reports. Never cached.
    pub async fn fetch_progress_reports(&self, scope: &QueryScope) -> Result<Vec<ProgressReport>> {
        let resource = Resource::ProgressReports;
        let mut query = vec![("userId", scope.user_id.to_string())];
        if let Some(start) = scope.start_date {
            query.push(("startDate", start.to_string()));
        }
        if let Some(end) = scope.end_date {
            query.push(("endDate", end.to_string()));
        }

        let path = format!("/{}", resource.name());
        self.client.get(&path, &query).await.inspect_err(|e| {
            error!(resource = %resource, user_id = scope.user_id, error = %e, "Failed to fetch progress reports");
        })
    }

    async fn fetch_logs<T: LogRecord>(&self, scope: &QueryScope) -> Result<Vec<T>> {
        let resource = T::RESOURCE;
        let key = scope_key(resource, scope);

        if let Some(records) = self.cache.get(&key).and_then(T::from_payload) {
            debug!(key = %key, count = records.len(), "Serving from cache");
            return Ok(records);
        }

        debug!(key = %key, "Cache miss");
        let query: Vec<(&str, String)> = match scope.date_range() {
            Some((start, end)) => vec![("startDate", start.to_string()), ("endDate", end.to_string())],
            None => Vec::new(),
        };
        let path = format!("/{}/{}", resource.name(), scope.user_id);

        let records: Vec<T> = self.client.get(&path, &query).await.inspect_err(|e| {
            error!(resource = %resource, user_id = scope.user_id, error = %e, "Failed to fetch logs");
        })?;

        self.cache.set(key, T::into_payload(records.clone()));
        Ok(records)
    }

    // ===== Writes =====

    pub async fn create_fitness_log(&self, record: &ActivityRecord) -> Result<ActivityRecord> {
        self.create(record).await
    }

    pub async fn update_fitness_log(&self, record: &ActivityRecord) -> Result<ActivityRecord> {
        self.update(record).await
    }

    pub async fn create_dietary_log(&self, record: &DietaryRecord) -> Result<DietaryRecord> {
        self.create(record).await
    }

    pub async fn update_dietary_log(&self, record: &DietaryRecord) -> Result<DietaryRecord> {
        self.update(record).await
    }

    async fn create<T: LogRecord>(&self, record: &T) -> Result<T> {
        let resource = T::RESOURCE;
        let path = format!("/{}", resource.name());

        let saved = self.client.post(&path, record).await.inspect_err(|e| {
            error!(resource = %resource, user_id = record.user_id(), error = %e, "Failed to create log");
        })?;

        self.invalidate(resource, record.user_id());
        Ok(saved)
    }

    /// Invalidates the owner named in `record`. If the update moves the
    /// record to another user, the previous owner's entries are kept.
    async fn update<T: LogRecord>(&self, record: &T) -> Result<T> {
        let resource = T::RESOURCE;
        let Some(id) = record.id() else {
            let err = ApiError::MissingId(resource.name());
            error!(resource = %resource, user_id = record.user_id(), error = %err, "Refusing update");
            return Err(err.into());
        };
        let path = format!("/{}/{}", resource.name(), id);

        let saved = self.client.put(&path, record).await.inspect_err(|e| {
            error!(resource = %resource, id = id, error = %e, "Failed to update log");
        })?;

        self.invalidate(resource, record.user_id());
        Ok(saved)
    }

    fn invalidate(&self, resource: Resource, user_id: i64) {
        let removed = self.cache.invalidate(&key_prefix(resource.name(), user_id));
        debug!(resource = %resource, user_id = user_id, removed = removed, "Cache invalidated after write");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn api() -> FitnessApi {
        FitnessApi::new(ApiClient::new("http://127.0.0.1:9").unwrap())
    }

    #[tokio::test]
    async fn test_update_without_id_fails_before_network() {
        let api = api();
        let record = ActivityRecord::new(7, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), "run", 30, "high");
        let err = api.update_fitness_log(&record).await.unwrap_err();
        let api_err = err.downcast_ref::<ApiError>().expect("typed error");
        assert!(matches!(api_err, ApiError::MissingId("fitness-logs")));
    }

    #[tokio::test]
    async fn test_update_dietary_without_id_fails() {
        let api = api();
        let record = DietaryRecord::new(7, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), "snack", 150);
        let err = api.update_dietary_log(&record).await.unwrap_err();
        assert!(err.downcast_ref::<ApiError>().is_some_and(|e| e.is_validation()));
    }

    #[test]
    fn test_payload_variant_mismatch_is_a_miss() {
        assert!(ActivityRecord::from_payload(CachedPayload::Dietary(Vec::new())).is_none());
        assert!(DietaryRecord::from_payload(CachedPayload::Activity(Vec::new())).is_none());
    }

    #[test]
    fn test_progress_reports_never_report_cached() {
        let api = api();
        assert!(!api.is_cached(Resource::ProgressReports, &QueryScope::user(7)));
    }
}
