//! flowmap CLI - Command-line interface
//!
//! This binary renders solved logistics networks from scenario files into
//! deck.gl map documents and prints cost summaries.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::common::FlowType;
use commands::config::ConfigCommands;
use error::CliError;

#[derive(Parser)]
#[command(name = "flowmap")]
#[command(version = flowmap::VERSION)]
#[command(about = "Render logistics network and flow maps", long_about = None)]
struct Cli {
    /// Enable debug logging (also mirrors log lines to stderr)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render store-to-facility assignments
    Network {
        /// Scenario JSON file
        #[arg(long)]
        scenario: PathBuf,

        /// Output file (.html for a standalone page, otherwise deck.gl JSON).
        /// Prints JSON to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Render transport lanes grouped by type
    Flows {
        /// Scenario JSON file
        #[arg(long)]
        scenario: PathBuf,

        /// Lane types to draw, comma-separated (default from config)
        #[arg(long, value_enum, value_delimiter = ',')]
        types: Vec<FlowType>,

        /// Only draw lanes of this brand (__ALL__ for every brand)
        #[arg(long)]
        brand: Option<String>,

        /// Output file (.html for a standalone page, otherwise deck.gl JSON).
        /// Prints JSON to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the cost and facility summary
    Summary {
        /// Scenario JSON file
        #[arg(long)]
        scenario: PathBuf,
    },

    /// Create ~/.flowmap/config.ini with default settings
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// View or modify configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), CliError> = match cli.command {
        Commands::Network { scenario, output } => {
            commands::network::run(commands::network::NetworkArgs {
                scenario,
                output,
                debug: cli.debug,
            })
        }
        Commands::Flows {
            scenario,
            types,
            brand,
            output,
        } => commands::flows::run(commands::flows::FlowsArgs {
            scenario,
            types,
            brand,
            output,
            debug: cli.debug,
        }),
        Commands::Summary { scenario } => commands::summary::run(commands::summary::SummaryArgs {
            scenario,
            debug: cli.debug,
        }),
        Commands::Init { force } => commands::init::run(force),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
