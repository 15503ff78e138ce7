use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Minutes
    pub duration: u32,
    pub intensity: String,
}

impl ActivityRecord {
    pub fn new(
        user_id: i64,
        date: NaiveDate,
        activity_type: impl Into<String>,
        duration: u32,
        intensity: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_id,
            date,
            activity_type: activity_type.into(),
            duration,
            intensity: intensity.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn display_duration(&self) -> String {
        let hours = self.duration / 60;
        let minutes = self.duration % 60;
        if hours == 0 {
            format!("{}m", minutes)
        } else if minutes == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, minutes)
        }
    }
}
