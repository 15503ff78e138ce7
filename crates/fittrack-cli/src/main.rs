//! FitTrack - a terminal dashboard for activity and diet logs.
//!
//! Reads go through the cache-backed `FitnessApi`; writes invalidate the
//! affected user's cached logs.

mod render;

use std::io;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fittrack_core::stats::{FitnessGoals, ProgressSummary};
use fittrack_core::{ActivityRecord, Config, DietaryRecord, FitnessApi, QueryScope};

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(author, version, about = "Fitness and diet tracking dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL (overrides config and FITTRACK_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Args)]
struct RangeArgs {
    /// User ID (defaults to the configured user)
    #[arg(short, long, env = "FITTRACK_USER")]
    user: Option<i64>,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show activity, diet and progress for a user
    Dashboard {
        #[command(flatten)]
        range: RangeArgs,
        /// Daily calorie target (overrides the saved goal)
        #[arg(long)]
        calorie_target: Option<u32>,
    },
    /// Show saved settings, or change them
    Config {
        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// Show server progress reports
    Report {
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Log a workout
    LogActivity {
        #[command(flatten)]
        activity: ActivityArgs,
    },
    /// Correct a logged workout
    UpdateActivity {
        /// Record ID
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        activity: ActivityArgs,
    },
    /// Log a meal
    LogMeal {
        #[command(flatten)]
        meal: MealArgs,
    },
    /// Correct a logged meal
    UpdateMeal {
        /// Record ID
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        meal: MealArgs,
    },
}

#[derive(Args, Default)]
struct SettingsArgs {
    /// API base URL to save
    #[arg(long)]
    url: Option<String>,
    /// Default user ID to save
    #[arg(long)]
    user: Option<i64>,
    /// Daily calorie target
    #[arg(long)]
    calorie_target: Option<u32>,
    /// Daily step target
    #[arg(long)]
    step_target: Option<u32>,
    /// Daily water target in liters
    #[arg(long)]
    water_target: Option<f64>,
}

impl SettingsArgs {
    /// Apply the given settings. Returns true if anything changed.
    fn apply(&self, config: &mut Config) -> bool {
        let before = config.clone();
        if let Some(ref url) = self.url {
            config.api_url = Some(url.clone());
        }
        if let Some(user) = self.user {
            config.default_user_id = Some(user);
        }
        if let Some(target) = self.calorie_target {
            config.goals.calorie_target = target;
        }
        if let Some(target) = self.step_target {
            config.goals.step_target = target;
        }
        if let Some(target) = self.water_target {
            config.goals.water_target_liters = target;
        }
        *config != before
    }
}

#[derive(Args)]
struct ActivityArgs {
    /// User ID
    #[arg(short, long, env = "FITTRACK_USER")]
    user: i64,
    /// Date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,
    /// Activity type (running, cycling, ...)
    #[arg(short = 't', long = "type")]
    activity_type: String,
    /// Duration in minutes
    #[arg(long)]
    duration: u32,
    /// Intensity (low, moderate, high)
    #[arg(long, default_value = "moderate")]
    intensity: String,
}

impl ActivityArgs {
    fn into_record(self) -> ActivityRecord {
        ActivityRecord::new(
            self.user,
            self.date.unwrap_or_else(today),
            self.activity_type,
            self.duration,
            self.intensity,
        )
    }
}

#[derive(Args)]
struct MealArgs {
    /// User ID
    #[arg(short, long, env = "FITTRACK_USER")]
    user: i64,
    /// Date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,
    /// Meal type (breakfast, lunch, dinner, snack)
    #[arg(short, long)]
    meal: String,
    /// Calories
    #[arg(short, long)]
    calories: u32,
    /// Free-text description
    #[arg(long)]
    description: Option<String>,
}

impl MealArgs {
    fn into_record(self) -> DietaryRecord {
        let record = DietaryRecord::new(
            self.user,
            self.date.unwrap_or_else(today),
            self.meal,
            self.calories,
        );
        match self.description {
            Some(description) => record.with_description(description),
            None => record,
        }
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn resolve_scope(range: &RangeArgs, config: &Config) -> Result<QueryScope> {
    let user_id = range
        .user
        .or(config.default_user_id)
        .context("No user given. Pass --user or set default_user_id in the config file.")?;

    let mut scope = QueryScope::user(user_id);
    scope.start_date = range.from;
    scope.end_date = range.to;
    Ok(scope)
}

/// Log endpoints only filter on a full range, so a lone bound is rejected.
fn require_full_range(scope: &QueryScope) -> Result<()> {
    if scope.start_date.is_some() != scope.end_date.is_some() {
        anyhow::bail!("--from and --to must be given together");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api_url = Some(url);
    }
    info!(api_url = %config.api_url(), "FitTrack starting");

    let api = FitnessApi::from_config(&config)?;

    match cli.command {
        Commands::Dashboard {
            range,
            calorie_target,
        } => {
            let scope = resolve_scope(&range, &config)?;
            require_full_range(&scope)?;
            let (activities, meals) = futures::future::try_join(
                api.fetch_fitness_logs(&scope),
                api.fetch_dietary_logs(&scope),
            )
            .await?;

            let summary = ProgressSummary::from_logs(&activities, &meals);
            let goals = FitnessGoals {
                calorie_target: calorie_target.unwrap_or(config.goals.calorie_target),
                ..config.goals
            };
            print!("{}", render::dashboard(&scope, &activities, &meals, &summary, &goals));
        }
        Commands::Config { settings } => {
            // Edit the file contents, not the environment-adjusted view
            let mut saved = Config::load_saved()?;
            if settings.apply(&mut saved) {
                saved.save()?;
                info!("Configuration saved");
            }
            print!("{}", render::settings(&saved));
        }
        Commands::Report { range } => {
            let scope = resolve_scope(&range, &config)?;
            let reports = api.fetch_progress_reports(&scope).await?;
            print!("{}", render::reports(&reports));
        }
        Commands::LogActivity { activity } => {
            let saved = api.create_fitness_log(&activity.into_record()).await?;
            println!("Logged {}", render::activity_line(&saved));
        }
        Commands::UpdateActivity { id, activity } => {
            let saved = api
                .update_fitness_log(&activity.into_record().with_id(id))
                .await?;
            println!("Updated {}", render::activity_line(&saved));
        }
        Commands::LogMeal { meal } => {
            let saved = api.create_dietary_log(&meal.into_record()).await?;
            println!("Logged {}", render::meal_line(&saved));
        }
        Commands::UpdateMeal { id, meal } => {
            let saved = api.update_dietary_log(&meal.into_record().with_id(id)).await?;
            println!("Updated {}", render::meal_line(&saved));
        }
    }

    Ok(())
}
