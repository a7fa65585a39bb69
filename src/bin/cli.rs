//! Exercise Log CLI
//!
//! Command-line interface for the Exercise Log API:
//! - List exercises
//! - Add, edit and delete exercises
//! - Check server status
//! - Generate a config file

use chrono::{Duration, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use exercise_log::client::{ClientError, ExerciseClient};
use exercise_log::config::generate_default_config;
use exercise_log::storage::{Exercise, NewExercise, Unit};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exercise-log")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track workout exercises from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(
        long,
        env = "EXERCISE_LOG_API_URL",
        default_value = "http://localhost:8082",
        global = true
    )]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all exercises
    List,

    /// Add a new exercise
    Add {
        /// Exercise name
        name: String,
        /// Repetitions
        reps: u32,
        /// Weight
        weight: f64,
        /// Weight unit (kg, lbs)
        #[arg(short, long, default_value = "lbs", value_parser = parse_unit)]
        unit: Unit,
        /// Date: "today", "yesterday" or YYYY-MM-DD (default: today)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Edit an exercise (fields not given keep their current value)
    Edit {
        /// Exercise id
        id: String,
        #[command(flatten)]
        changes: EditArgs,
    },

    /// Delete an exercise and show the remaining list
    Delete {
        /// Exercise id
        id: String,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Field overrides for `edit`
#[derive(Args, Debug, Default)]
pub struct EditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub reps: Option<u32>,
    #[arg(long)]
    pub weight: Option<f64>,
    #[arg(long, value_parser = parse_unit)]
    pub unit: Option<Unit>,
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

impl EditArgs {
    /// Full replacement body: the current record with the given fields swapped in
    fn apply(self, current: &Exercise) -> NewExercise {
        let mut new = current.to_new();
        if let Some(name) = self.name {
            new.name = name;
        }
        if let Some(reps) = self.reps {
            new.reps = reps;
        }
        if let Some(weight) = self.weight {
            new.weight = weight;
        }
        if let Some(unit) = self.unit {
            new.unit = unit;
        }
        if let Some(date) = self.date {
            new.date = date;
        }
        new
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.reps.is_none()
            && self.weight.is_none()
            && self.unit.is_none()
            && self.date.is_none()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = ExerciseClient::new(&cli.api_url);

    match cli.command {
        Commands::List => {
            let exercises = client.list().await.unwrap_or_else(|e| fail(&cli.api_url, e));
            print_exercises(&exercises, &cli.format)?;
        }

        Commands::Add {
            name,
            reps,
            weight,
            unit,
            date,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let new = NewExercise::new(name, reps, weight, unit, date);

            let created = client
                .create(&new)
                .await
                .unwrap_or_else(|e| fail(&cli.api_url, e));
            println!("Added {} ({})", created.name, created.id);
        }

        Commands::Edit { id, changes } => {
            if changes.is_empty() {
                eprintln!("Nothing to change. Pass at least one of --name, --reps, --weight, --unit, --date");
                std::process::exit(2);
            }

            let current = client.get(&id).await.unwrap_or_else(|e| fail(&cli.api_url, e));
            let replaced = client
                .replace(&id, &changes.apply(&current))
                .await
                .unwrap_or_else(|e| fail(&cli.api_url, e));

            println!("Updated {}", replaced.id);
            print_exercises(&[replaced], &cli.format)?;
        }

        Commands::Delete { id } => {
            match client.delete(&id).await {
                Ok(()) => {
                    println!("Deleted {}", id);
                    println!();
                    // Reload the authoritative list instead of patching locally
                    let exercises = client.list().await.unwrap_or_else(|e| fail(&cli.api_url, e));
                    print_exercises(&exercises, &cli.format)?;
                }
                Err(e) => fail(&cli.api_url, e),
            }
        }

        Commands::Status => match client.health().await {
            Ok(health) => {
                println!("Exercise Log v{}", env!("CARGO_PKG_VERSION"));
                println!();
                println!("API Status: {}", health.status);
                println!("Database:   {}", health.database);
                if let Some(count) = health.exercises {
                    println!("Exercises:  {}", count);
                }
                println!("Server:     v{}", health.version);
                println!();
                println!("Uptime: {}", format_duration(health.uptime_seconds));
            }
            Err(e) => fail(&cli.api_url, e),
        },

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Report a client error and exit
fn fail(api_url: &str, error: ClientError) -> ! {
    if error.is_connect() {
        eprintln!("Cannot connect to Exercise Log API at {}", api_url);
        eprintln!("Error: {}", error);
        eprintln!();
        eprintln!("Make sure the API server is running:");
        eprintln!("  cargo run --bin exercise-log-api");
    } else {
        eprintln!("{}", error);
    }
    std::process::exit(1);
}

fn print_exercises(exercises: &[Exercise], format: &str) -> anyhow::Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(exercises)?);
        return Ok(());
    }

    if exercises.is_empty() {
        println!("No exercises logged yet.");
        println!();
        println!("Add your first one with:");
        println!("  exercise-log add Squat 5 100 --unit lbs");
        return Ok(());
    }

    println!(
        "{:<24} {:>6} {:>12} {:<12} {}",
        "Name", "Reps", "Weight", "Date", "ID"
    );
    println!("{}", "-".repeat(92));
    for exercise in exercises {
        println!("{}", table_row(exercise));
    }

    Ok(())
}

fn table_row(exercise: &Exercise) -> String {
    format!(
        "{:<24} {:>6} {:>12} {:<12} {}",
        exercise.name,
        exercise.reps,
        format!("{} {}", exercise.weight, exercise.unit),
        exercise.date.format("%Y-%m-%d"),
        exercise.id
    )
}

fn parse_unit(s: &str) -> Result<Unit, String> {
    s.parse()
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let today = Local::now().date_naive();
    match s {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date: {}. Use YYYY-MM-DD, today or yesterday", other)),
    }
}

/// Format seconds as a human-readable duration
fn format_duration(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m {}s", minutes, seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn squat() -> Exercise {
        Exercise::from_new(
            "1",
            NewExercise::new(
                "Squat",
                5,
                100.0,
                Unit::Lbs,
                NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            ),
        )
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_edit_keeps_unspecified_fields() {
        let changes = EditArgs {
            reps: Some(3),
            unit: Some(Unit::Kg),
            ..EditArgs::default()
        };

        let new = changes.apply(&squat());
        assert_eq!(new.name, "Squat");
        assert_eq!(new.reps, 3);
        assert_eq!(new.weight, 100.0);
        assert_eq!(new.unit, Unit::Kg);
        assert_eq!(new.date, squat().date);
    }

    #[test]
    fn test_edit_args_empty() {
        assert!(EditArgs::default().is_empty());
        let changes = EditArgs {
            name: Some("Front Squat".to_string()),
            ..EditArgs::default()
        };
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2021-01-01"),
            Ok(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())
        );
        assert_eq!(
            parse_date("yesterday").unwrap(),
            parse_date("today").unwrap() - Duration::days(1)
        );
        assert!(parse_date("01/01/2021").is_err());
    }

    #[test]
    fn test_table_row() {
        let row = table_row(&squat());
        assert!(row.starts_with("Squat"));
        assert!(row.contains("100 lbs"));
        assert!(row.contains("2021-01-01"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(59), "0m 59s");
        assert_eq!(format_duration(3_660), "1h 1m");
        assert_eq!(format_duration(90_000), "1d 1h 0m");
    }

    #[test]
    fn test_parse_add_command() {
        let cli = Cli::try_parse_from([
            "exercise-log",
            "add",
            "Squat",
            "5",
            "100",
            "--unit",
            "kg",
            "--date",
            "2021-01-01",
        ])
        .unwrap();

        match cli.command {
            Commands::Add { unit, date, .. } => {
                assert_eq!(unit, Unit::Kg);
                assert_eq!(date, NaiveDate::from_ymd_opt(2021, 1, 1));
            }
            _ => panic!("expected add command"),
        }
    }
}
