//! Tutelage CLI
//!
//! Command-line interface for the mentoring-roster query demonstrator

use clap::{Parser, Subcommand};
use tutelage_core::logging::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "tutelage")]
#[command(about = "Tutelage - Mentoring roster query demonstrator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// Run the query tour against the roster
    Tour(commands::tour::TourArgs),
    /// Enroll a single student, with or without a guide
    Enroll(commands::enroll::EnrollArgs),
}

fn main() {
    // Logging comes up before anything touches the database
    logging::init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed(args) => commands::seed::execute(args),
        Commands::Tour(args) => commands::tour::execute(args),
        Commands::Enroll(args) => commands::enroll::execute(args),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed, transaction rolled back");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
