//! Client-side progress statistics over fetched logs.
//!
//! Mirrors the totals the backend reports (calories consumed, workout
//! minutes) and adds a per-day series for progress charts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ActivityRecord, DietaryRecord};

/// Default daily calorie target used by the dashboard
pub const DEFAULT_CALORIE_TARGET: u32 = 2000;

/// Default daily step target
pub const DEFAULT_STEP_TARGET: u32 = 10_000;

/// Default daily water target in liters
pub const DEFAULT_WATER_TARGET_LITERS: f64 = 2.0;

/// Daily targets shown on the dashboard. Persisted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessGoals {
    pub calorie_target: u32,
    pub step_target: u32,
    pub water_target_liters: f64,
}

impl Default for FitnessGoals {
    fn default() -> Self {
        Self {
            calorie_target: DEFAULT_CALORIE_TARGET,
            step_target: DEFAULT_STEP_TARGET,
            water_target_liters: DEFAULT_WATER_TARGET_LITERS,
        }
    }
}

impl FitnessGoals {
    /// Percentage of the calorie target reached, rounded down.
    pub fn calorie_progress(&self, calories: u64) -> u64 {
        if self.calorie_target == 0 {
            return 0;
        }
        calories * 100 / u64::from(self.calorie_target)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailyTotals {
    pub date: Option<NaiveDate>,
    pub calories: u64,
    pub workout_minutes: u64,
    pub activities: usize,
    pub meals: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub total_calories_consumed: u64,
    pub total_workout_duration: u64,
    pub activity_count: usize,
    pub meal_count: usize,
    /// One entry per day with any record, oldest first
    pub days: Vec<DailyTotals>,
}

impl ProgressSummary {
    pub fn from_logs(activities: &[ActivityRecord], meals: &[DietaryRecord]) -> Self {
        let mut by_day: BTreeMap<NaiveDate, DailyTotals> = BTreeMap::new();

        for activity in activities {
            let day = by_day.entry(activity.date).or_default();
            day.workout_minutes += u64::from(activity.duration);
            day.activities += 1;
        }
        for meal in meals {
            let day = by_day.entry(meal.date).or_default();
            day.calories += u64::from(meal.calories);
            day.meals += 1;
        }

        let days: Vec<DailyTotals> = by_day
            .into_iter()
            .map(|(date, totals)| DailyTotals {
                date: Some(date),
                ..totals
            })
            .collect();

        Self {
            total_calories_consumed: days.iter().map(|d| d.calories).sum(),
            total_workout_duration: days.iter().map(|d| d.workout_minutes).sum(),
            activity_count: activities.len(),
            meal_count: meals.len(),
            days,
        }
    }

    /// Mean calories over days that have at least one meal logged
    pub fn average_daily_calories(&self) -> Option<u64> {
        let logged: Vec<u64> = self
            .days
            .iter()
            .filter(|d| d.meals > 0)
            .map(|d| d.calories)
            .collect();
        if logged.is_empty() {
            None
        } else {
            Some(logged.iter().sum::<u64>() / logged.len() as u64)
        }
    }

    /// Days whose intake exceeded the calorie target
    pub fn days_over_target(&self, goals: &FitnessGoals) -> usize {
        self.days
            .iter()
            .filter(|d| d.calories > u64::from(goals.calorie_target))
            .count()
    }
}
