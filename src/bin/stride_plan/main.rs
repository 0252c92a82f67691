// ABOUTME: stride-plan - command-line front end for the adaptive training plan engine
// ABOUTME: Creates, regenerates, adapts, and inspects a plan persisted as a JSON file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training
//!
//! Usage:
//! ```bash
//! # Create a 5K plan, three runs a week
//! stride-plan init --plan-type 5k --frequency 3 --days mon,wed,fri
//!
//! # Switch training days from today onward
//! stride-plan reschedule --days tue,thu,sat
//!
//! # Close last week and rebuild this week from the load trend
//! stride-plan adapt --days tue,thu,sat --age 34 --sex female
//!
//! # Move a single run
//! stride-plan move --run-id 7f0c... --to 2026-10-23
//!
//! # Recommended easy pace
//! stride-plan pace
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use chrono::{Local, NaiveDate, Weekday};
use clap::{Args, Parser, Subcommand};
use stride_engine::errors::AppResult;
use stride_engine::logging::LoggingConfig;
use stride_engine::models::{PlanType, Sex};
use stride_engine::plan_store::{default_plan_path, JsonFilePlanStore};
use tracing::info;
use uuid::Uuid;

use commands::plan::AthleteArgs;
use helpers::parse::parse_weekday;

#[derive(Parser)]
#[command(
    name = "stride-plan",
    about = "Stride adaptive training plan CLI",
    long_about = "Create and adapt a running plan that honors your training days and never rewrites completed history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Plan file (defaults to the platform data directory)
    #[arg(long, global = true)]
    plan_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Args)]
struct ProfileArgs {
    /// Age in years, used to estimate max heart rate
    #[arg(long)]
    age: Option<u32>,

    /// Sex for training load coefficients (male, female)
    #[arg(long)]
    sex: Option<Sex>,

    /// Measured max heart rate, overrides the age estimate
    #[arg(long)]
    max_hr: Option<u32>,
}

impl From<ProfileArgs> for AthleteArgs {
    fn from(args: ProfileArgs) -> Self {
        Self {
            age: args.age,
            sex: args.sex,
            max_heart_rate: args.max_hr,
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Create a new onboarding plan, replacing any stored plan
    Init {
        /// Plan type (start_running, 5k, 10k, half, maf)
        #[arg(long)]
        plan_type: PlanType,

        /// Runs per week
        #[arg(long)]
        frequency: u32,

        /// Training days, comma-separated (mon,wed,fri)
        #[arg(long, value_delimiter = ',', value_parser = parse_weekday, required = true)]
        days: Vec<Weekday>,

        /// First day of the plan (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,
    },

    /// Rebuild future weeks for new training days
    Reschedule {
        /// Training days, comma-separated
        #[arg(long, value_delimiter = ',', value_parser = parse_weekday, required = true)]
        days: Vec<Weekday>,

        /// Override today's date
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Close last week and adapt this week's volume
    Adapt {
        /// Training days, comma-separated
        #[arg(long, value_delimiter = ',', value_parser = parse_weekday, required = true)]
        days: Vec<Weekday>,

        /// Override today's date
        #[arg(long)]
        today: Option<NaiveDate>,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Move one planned run to another date
    Move {
        /// Id of the run to move
        #[arg(long)]
        run_id: Uuid,

        /// New date
        #[arg(long)]
        to: NaiveDate,

        /// Override today's date
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Show the recommended easy pace
    Pace {
        /// Override today's date
        #[arg(long)]
        today: Option<NaiveDate>,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Print the stored plan as JSON
    Show,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let path = cli.plan_file.unwrap_or_else(default_plan_path);
    info!(path = %path.display(), "Using plan file");
    let store = JsonFilePlanStore::new(path);
    let today = || Local::now().date_naive();

    match cli.command {
        Command::Init {
            plan_type,
            frequency,
            days,
            start,
        } => commands::plan::init(
            &store,
            plan_type,
            frequency,
            &days,
            start.unwrap_or_else(today),
        ),
        Command::Reschedule { days, today: date } => {
            commands::plan::reschedule(&store, &days, date.unwrap_or_else(today))
        }
        Command::Adapt {
            days,
            today: date,
            profile,
        } => commands::plan::adapt(
            &store,
            &days,
            date.unwrap_or_else(today),
            &profile.into(),
        ),
        Command::Move {
            run_id,
            to,
            today: date,
        } => commands::plan::move_run(&store, run_id, to, date.unwrap_or_else(today)),
        Command::Pace {
            today: date,
            profile,
        } => commands::plan::pace(&store, date.unwrap_or_else(today), &profile.into()),
        Command::Show => commands::plan::show(&store),
    }
}
