// ABOUTME: Vitalis evaluation CLI - runs the rule evaluators over JSON input files
// ABOUTME: Handles reading alerts, meal compliance scoring, and recommendation snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! Offline front end for the rule evaluators.
//!
//! Usage:
//! ```bash
//! # Evaluate one reading (or an array of readings) and print the alerts
//! vitalis-eval reading --file readings.json
//!
//! # Score a day of meals against clinical guidelines
//! vitalis-eval meal --file meal_day.json
//!
//! # Produce recommendations and food suggestions from a snapshot
//! vitalis-eval recommend --file snapshot.json --meal-type dinner
//! ```
//!
//! Input files are plain JSON. The `meal` subcommand expects an object with
//! a `profile` and the day's `meals`; `recommend` expects a snapshot with
//! `profile`, `readings`, and `catalog`. No data store is involved, which
//! makes this the quickest way to spot-check rule behavior during tuning.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::info;

use vitalis::config;
use vitalis::evaluation::{
    AlertEvaluator, ComplianceReport, ComplianceScorer, DailyAggregateMonitor,
    RecommendationEngine,
};
use vitalis::logging;
use vitalis::models::{
    Alert, BiometricReading, FoodCatalogEntry, MealNutritionProfile, MealType, UserHealthProfile,
};

#[derive(Parser)]
#[command(
    name = "vitalis-eval",
    about = "Evaluate biometric readings and meals against clinical rules",
    long_about = "Offline front end for the Vitalis evaluation pipeline. Feeds JSON input \
                  files through the alert, compliance, and recommendation evaluators and \
                  prints the results as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate biometric readings and print the triggered alerts
    Reading {
        /// Path to a JSON file holding one reading or an array of readings
        #[arg(long)]
        file: PathBuf,
    },
    /// Score a day of meals for guideline compliance
    Meal {
        /// Path to a JSON file with a health profile and the day's meals
        #[arg(long)]
        file: PathBuf,
    },
    /// Generate recommendations and food suggestions from a snapshot
    Recommend {
        /// Path to a JSON snapshot with profile, readings, and catalog
        #[arg(long)]
        file: PathBuf,

        /// Meal slot to suggest foods for
        #[arg(long, default_value = "lunch")]
        meal_type: String,
    },
}

/// One user's day of logged meals, as fed to the `meal` subcommand
#[derive(Debug, Deserialize)]
struct MealDay {
    profile: UserHealthProfile,
    #[serde(default)]
    meals: Vec<MealNutritionProfile>,
}

/// Point-in-time health snapshot, as fed to the `recommend` subcommand
#[derive(Debug, Deserialize)]
struct HealthSnapshot {
    profile: UserHealthProfile,
    #[serde(default)]
    readings: Vec<BiometricReading>,
    #[serde(default)]
    catalog: Vec<FoodCatalogEntry>,
}

/// Combined output of the `meal` subcommand
#[derive(Debug, Serialize)]
struct MealDayReport {
    reports: Vec<ComplianceReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    daily_alert: Option<Alert>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    } else {
        logging::init_from_env()?;
    }

    config::init_configs()?;

    match cli.command {
        Command::Reading { file } => run_reading(&file),
        Command::Meal { file } => run_meal(&file),
        Command::Recommend { file, meal_type } => run_recommend(&file, &meal_type),
    }
}

fn run_reading(file: &Path) -> Result<()> {
    let readings = read_readings(file)?;
    let evaluator = AlertEvaluator::new();
    let alerts: Vec<Alert> = readings
        .iter()
        .flat_map(|reading| evaluator.evaluate(reading))
        .collect();

    info!(
        readings = readings.len(),
        alerts = alerts.len(),
        "reading evaluation complete"
    );
    print_json(&alerts)
}

fn run_meal(file: &Path) -> Result<()> {
    let day: MealDay = read_json(file)?;
    let scorer = ComplianceScorer::new();
    let monitor = DailyAggregateMonitor::new();

    let reports: Vec<ComplianceReport> = day
        .meals
        .iter()
        .map(|meal| scorer.score_meal(meal, &day.profile))
        .collect();
    let daily_alert = monitor.evaluate_daily_calories(day.profile.user_id, &day.meals);

    info!(
        user_id = %day.profile.user_id,
        meals = day.meals.len(),
        "meal compliance evaluation complete"
    );
    print_json(&MealDayReport {
        reports,
        daily_alert,
    })
}

fn run_recommend(file: &Path, meal_type: &str) -> Result<()> {
    let snapshot: HealthSnapshot = read_json(file)?;
    let slot = parse_meal_type(meal_type)?;
    let engine = RecommendationEngine::new();

    let response = engine.recommend_from_snapshot(
        &snapshot.profile,
        &snapshot.readings,
        &snapshot.catalog,
        slot,
    );

    info!(
        user_id = %snapshot.profile.user_id,
        recommendations = response.recommendations.len(),
        "recommendation evaluation complete"
    );
    print_json(&response)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Accept either a bare reading object or an array of readings
fn read_readings(path: &Path) -> Result<Vec<BiometricReading>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if let Ok(batch) = serde_json::from_str::<Vec<BiometricReading>>(&text) {
        return Ok(batch);
    }
    let single: BiometricReading = serde_json::from_str(&text)
        .with_context(|| format!("expected a reading object or array in {}", path.display()))?;
    Ok(vec![single])
}

fn parse_meal_type(raw: &str) -> Result<MealType> {
    match raw.to_lowercase().as_str() {
        "breakfast" => Ok(MealType::Breakfast),
        "lunch" => Ok(MealType::Lunch),
        "dinner" => Ok(MealType::Dinner),
        "snack" => Ok(MealType::Snack),
        "other" => Ok(MealType::Other),
        unknown => bail!(
            "unknown meal type '{unknown}', expected breakfast, lunch, dinner, snack, or other"
        ),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
