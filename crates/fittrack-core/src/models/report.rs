use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Totals computed by the server for one user over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_calories_consumed: u64,
    /// Minutes
    #[serde(default)]
    pub total_workout_duration: u64,
}

impl ProgressReport {
    pub fn period_display(&self) -> String {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => format!("{} to {}", start, end),
            (Some(start), None) => format!("since {}", start),
            (None, Some(end)) => format!("until {}", end),
            (None, None) => "all time".to_string(),
        }
    }
}
