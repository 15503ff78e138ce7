use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub date: NaiveDate,
    #[serde(rename = "mealType")]
    pub meal_type: String,
    pub calories: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DietaryRecord {
    pub fn new(user_id: i64, date: NaiveDate, meal_type: impl Into<String>, calories: u32) -> Self {
        Self {
            id: None,
            user_id,
            date,
            meal_type: meal_type.into(),
            calories,
            description: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_keeps_description() {
        let meal = DietaryRecord::new(3, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), "lunch", 650)
            .with_description("lentil soup");
        let json = serde_json::to_string(&meal).unwrap();
        assert!(json.contains("\"mealType\":\"lunch\""));
        assert!(!json.contains("\"id\""));

        let parsed: DietaryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, meal);
    }

    #[test]
    fn test_description_is_optional_on_the_wire() {
        let json = r#"{"id": 4, "userId": 3, "date": "2024-01-05", "mealType": "dinner", "calories": 800}"#;
        let meal: DietaryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(meal.description, None);
        assert!(meal.is_persisted());
    }
}
