use chrono::NaiveDate;

/// Remote collections served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    FitnessLogs,
    DietaryLogs,
    ProgressReports,
}

impl Resource {
    /// Path segment on the server, also used as the cache key namespace.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::FitnessLogs => "fitness-logs",
            Resource::DietaryLogs => "dietary-logs",
            Resource::ProgressReports => "progress-reports",
        }
    }

    /// Progress reports are always fetched fresh.
    pub fn is_cacheable(&self) -> bool {
        !matches!(self, Resource::ProgressReports)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which user's records a read targets, optionally bounded by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryScope {
    pub user_id: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl QueryScope {
    pub fn user(user_id: i64) -> Self {
        Self {
            user_id,
            start_date: None,
            end_date: None,
        }
    }

    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn from_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Both bounds, or nothing. Log endpoints only filter on a full range.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_date_range_requires_both_bounds() {
        assert_eq!(QueryScope::user(1).date_range(), None);
        assert_eq!(QueryScope::user(1).from_date(day(1)).date_range(), None);
        assert_eq!(QueryScope::user(1).until(day(9)).date_range(), None);
        assert_eq!(
            QueryScope::user(1).between(day(1), day(9)).date_range(),
            Some((day(1), day(9)))
        );
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(Resource::FitnessLogs.to_string(), "fitness-logs");
        assert_eq!(Resource::DietaryLogs.name(), "dietary-logs");
        assert!(!Resource::ProgressReports.is_cacheable());
        assert!(Resource::FitnessLogs.is_cacheable());
    }
}
