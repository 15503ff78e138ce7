//! Plain-text rendering for the dashboard and reports.

use std::fmt::Write;

use fittrack_core::stats::{FitnessGoals, ProgressSummary};
use fittrack_core::{ActivityRecord, Config, DietaryRecord, ProgressReport, QueryScope};

/// Width of the widest bar in the per-day series
const BAR_WIDTH: u64 = 30;

/// Truncate a string to a maximum length, adding ellipsis if needed
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

fn id_display(id: Option<i64>) -> String {
    id.map(|id| format!("#{}", id)).unwrap_or_else(|| "-".to_string())
}

pub fn activity_line(record: &ActivityRecord) -> String {
    format!(
        "{:>6}  {}  {:<14} {:>8}  {}",
        id_display(record.id),
        record.date,
        truncate(&record.activity_type, 14),
        record.display_duration(),
        record.intensity
    )
}

pub fn meal_line(record: &DietaryRecord) -> String {
    let mut line = format!(
        "{:>6}  {}  {:<10} {:>6} kcal",
        id_display(record.id),
        record.date,
        truncate(&record.meal_type, 10),
        record.calories
    );
    if let Some(ref description) = record.description {
        let _ = write!(line, "  {}", truncate(description, 30));
    }
    line
}

fn scope_header(scope: &QueryScope) -> String {
    match (scope.start_date, scope.end_date) {
        (Some(start), Some(end)) => format!("User {} | {} to {}", scope.user_id, start, end),
        _ => format!("User {} | all dates", scope.user_id),
    }
}

fn bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    "#".repeat((value * BAR_WIDTH / max) as usize)
}

pub fn dashboard(
    scope: &QueryScope,
    activities: &[ActivityRecord],
    meals: &[DietaryRecord],
    summary: &ProgressSummary,
    goals: &FitnessGoals,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "FitTrack Dashboard - {}", scope_header(scope));

    let _ = writeln!(out, "\nDaily Activity ({})", activities.len());
    if activities.is_empty() {
        let _ = writeln!(out, "  no activity logged");
    }
    for record in activities {
        let _ = writeln!(out, "{}", activity_line(record));
    }

    let _ = writeln!(out, "\nDiet Tracking ({})", meals.len());
    if meals.is_empty() {
        let _ = writeln!(out, "  no meals logged");
    }
    for record in meals {
        let _ = writeln!(out, "{}", meal_line(record));
    }

    let _ = writeln!(out, "\nProgress");
    let _ = writeln!(out, "  Goals: {}", goals_line(goals));
    let _ = writeln!(out, "  Total workout: {} min", summary.total_workout_duration);
    let _ = writeln!(out, "  Total intake:  {} kcal", summary.total_calories_consumed);
    if let Some(average) = summary.average_daily_calories() {
        let _ = writeln!(
            out,
            "  Daily average: {} kcal ({}% of {} target, {} day(s) over)",
            average,
            goals.calorie_progress(average),
            goals.calorie_target,
            summary.days_over_target(goals)
        );
    }

    let max_minutes = summary.days.iter().map(|d| d.workout_minutes).max().unwrap_or(0);
    for day in &summary.days {
        if let Some(date) = day.date {
            let _ = writeln!(
                out,
                "  {}  {:>4} min {}",
                date,
                day.workout_minutes,
                bar(day.workout_minutes, max_minutes)
            );
        }
    }

    out
}

fn goals_line(goals: &FitnessGoals) -> String {
    format!(
        "{} kcal, {} steps, {:.1} L water per day",
        goals.calorie_target, goals.step_target, goals.water_target_liters
    )
}

pub fn settings(config: &Config) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "API URL:      {}", config.api_url());
    let user = config
        .default_user_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "not set".to_string());
    let _ = writeln!(out, "Default user: {}", user);
    let _ = writeln!(out, "Goals:        {}", goals_line(&config.goals));
    out
}

pub fn reports(reports: &[ProgressReport]) -> String {
    if reports.is_empty() {
        return "No progress reports\n".to_string();
    }
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(
            out,
            "User {} ({}): {} kcal consumed, {} min of workouts",
            report.user_id,
            report.period_display(),
            report.total_calories_consumed,
            report.total_workout_duration
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("swim", 10), "swim");
        assert_eq!(truncate("interval training", 10), "interva...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_lines() {
        let run = ActivityRecord::new(7, day(2), "running", 75, "high").with_id(3);
        let line = activity_line(&run);
        assert!(line.contains("#3"));
        assert!(line.contains("2024-01-02"));
        assert!(line.contains("1h 15m"));

        let meal = DietaryRecord::new(7, day(2), "lunch", 640).with_description("salad");
        let line = meal_line(&meal);
        assert!(line.contains("640 kcal"));
        assert!(line.ends_with("salad"));
    }

    #[test]
    fn test_dashboard_sections() {
        let activities = vec![
            ActivityRecord::new(7, day(1), "run", 30, "high"),
            ActivityRecord::new(7, day(2), "bike", 60, "moderate"),
        ];
        let meals = vec![DietaryRecord::new(7, day(1), "dinner", 2500)];
        let summary = ProgressSummary::from_logs(&activities, &meals);
        let scope = QueryScope::user(7).between(day(1), day(7));

        let out = dashboard(&scope, &activities, &meals, &summary, &FitnessGoals::default());
        assert!(out.starts_with("FitTrack Dashboard - User 7 | 2024-01-01 to 2024-01-07"));
        assert!(out.contains("Daily Activity (2)"));
        assert!(out.contains("Diet Tracking (1)"));
        assert!(out.contains("Total workout: 90 min"));
        assert!(out.contains("Goals: 2000 kcal, 10000 steps, 2.0 L water per day"));
        assert!(out.contains("125% of 2000 target, 1 day(s) over"));
        assert!(out.contains(&"#".repeat(30)));
    }

    #[test]
    fn test_empty_dashboard() {
        let scope = QueryScope::user(1);
        let out = dashboard(&scope, &[], &[], &ProgressSummary::default(), &FitnessGoals::default());
        assert!(out.contains("all dates"));
        assert!(out.contains("no activity logged"));
        assert!(out.contains("no meals logged"));
        assert!(!out.contains("Daily average"));
    }

    #[test]
    fn test_settings() {
        let out = settings(&Config::default());
        assert!(out.contains("API URL:      http://localhost:3000"));
        assert!(out.contains("Default user: not set"));

        let config = Config {
            default_user_id: Some(9),
            ..Config::default()
        };
        assert!(settings(&config).contains("Default user: 9"));
    }

    #[test]
    fn test_reports() {
        assert_eq!(reports(&[]), "No progress reports\n");
        let report: ProgressReport = sample_report();
        assert!(reports(&[report]).contains("User 7 (all time): 100 kcal consumed, 20 min"));
    }

    fn sample_report() -> ProgressReport {
        ProgressReport {
            user_id: 7,
            start_date: None,
            end_date: None,
            total_calories_consumed: 100,
            total_workout_duration: 20,
        }
    }
}
