//! Inspection CLI for `reminders_core`.
//!
//! # Responsibility
//! - Verify core linkage without the mobile shell.
//! - Inspect and seed the reminders database configured via environment.

use clap::{Parser, Subcommand};
use reminders_core::{
    init_logging_from_config, DataResult, Reminder, ReminderConfig, ReminderDataSource,
    ServiceLocator, DROPPED_PIN_LABEL,
};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "reminders", version, about = "Inspect the location reminders store")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print core health and version.
    Ping,
    /// List stored reminders.
    List,
    /// Save a reminder at a dropped pin (or a named place with --location).
    Add {
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Delete every reminder.
    Clear,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = ReminderConfig::from_env();
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    match run(cli.command.unwrap_or(Command::Ping), &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &ReminderConfig) -> Result<(), String> {
    match command {
        Command::Ping => {
            println!("reminders_core ping={}", reminders_core::ping());
            println!("reminders_core version={}", reminders_core::core_version());
            Ok(())
        }
        Command::List => match data_source(config)?.get_reminders().await {
            DataResult::Success(reminders) => {
                for reminder in reminders {
                    println!("{}", format_row(&reminder));
                }
                Ok(())
            }
            DataResult::Error(err) if err.is_not_found() => {
                println!("{}", err.message());
                Ok(())
            }
            DataResult::Error(err) => Err(err.to_string()),
        },
        Command::Add {
            title,
            description,
            location,
            lat,
            lon,
        } => {
            let location = location.unwrap_or_else(|| DROPPED_PIN_LABEL.to_string());
            let reminder = Reminder::new(
                Some(title),
                description,
                Some(location),
                Some(lat),
                Some(lon),
            );
            data_source(config)?
                .save_reminder(&reminder)
                .await
                .map_err(|err| err.to_string())?;
            println!("saved {}", reminder.id);
            Ok(())
        }
        Command::Clear => data_source(config)?
            .delete_all_reminders()
            .await
            .map_err(|err| err.to_string()),
    }
}

fn data_source(config: &ReminderConfig) -> Result<Arc<dyn ReminderDataSource>, String> {
    ServiceLocator::global()
        .provide_reminder_data_source(config)
        .map_err(|err| format!("failed to open {}: {err}", config.db_path().display()))
}

fn format_row(reminder: &Reminder) -> String {
    let coordinates = reminder
        .coordinates()
        .map(|(lat, lon)| format!("{lat:.5},{lon:.5}"))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}\t{}\t{}\t{}\t{}",
        reminder.id,
        reminder.title.as_deref().unwrap_or(""),
        reminder.description.as_deref().unwrap_or(""),
        reminder.location.as_deref().unwrap_or(""),
        coordinates
    )
}
