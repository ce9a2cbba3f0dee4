//! Craft Ledger - Development Tools
//!
//! # Usage
//!
//! ```bash
//! # Validate a catalogue data file
//! cargo run -p craft_tools -- validate assets/data/catalogue.ron
//!
//! # What can this inventory craft, and at what scale?
//! cargo run -p craft_tools -- craftable --inventory assets/data/inventory.ron
//!
//! # Rank the whole catalogue by NPC profit
//! cargo run -p craft_tools -- profit
//!
//! # Recipes built purely from drops
//! cargo run -p craft_tools -- profile --type drop --match exclusive
//! ```
//!
//! Reports go to stdout as JSON; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use craft_tools::commands;

#[derive(Parser)]
#[command(name = "craft-tools")]
#[command(about = "Development tools for the crafting economy engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalogue data file
    Validate {
        /// Path to the catalogue RON file
        #[arg(default_value = "assets/data/catalogue.ron")]
        path: PathBuf,
    },

    /// Report recipes craftable right now with an inventory
    Craftable {
        /// Path to the catalogue RON file
        #[arg(short, long, default_value = "assets/data/catalogue.ron")]
        catalogue: PathBuf,

        /// Path to the inventory RON file
        #[arg(short, long, default_value = "assets/data/inventory.ron")]
        inventory: PathBuf,
    },

    /// Analyze craft potential, shortfalls included
    Analyze {
        /// Path to the catalogue RON file
        #[arg(short, long, default_value = "assets/data/catalogue.ron")]
        catalogue: PathBuf,

        /// Path to the inventory RON file
        #[arg(short, long, default_value = "assets/data/inventory.ron")]
        inventory: PathBuf,
    },

    /// Rank every recipe by NPC-price profit
    Profit {
        /// Path to the catalogue RON file
        #[arg(short, long, default_value = "assets/data/catalogue.ron")]
        catalogue: PathBuf,
    },

    /// Filter recipes by material-type profile
    Profile {
        /// Path to the catalogue RON file
        #[arg(short, long, default_value = "assets/data/catalogue.ron")]
        catalogue: PathBuf,

        /// Requested material types (repeatable)
        #[arg(short, long = "type", required = true)]
        types: Vec<String>,

        /// One of: exclusive, contains_any, contains_all, not_contains_any
        #[arg(short, long = "match", default_value = "contains_any")]
        match_profile: String,
    },

    /// Aggregate material demand across the catalogue
    Usage {
        /// Path to the catalogue RON file
        #[arg(short, long, default_value = "assets/data/catalogue.ron")]
        catalogue: PathBuf,

        /// Narrow to one material name
        #[arg(short, long)]
        name: Option<String>,

        /// Narrow to material types (repeatable)
        #[arg(short, long = "type")]
        types: Vec<String>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Validate { path } => commands::cmd_validate(&path),
        Commands::Craftable {
            catalogue,
            inventory,
        } => commands::cmd_craftable(&catalogue, &inventory).map(print_report),
        Commands::Analyze {
            catalogue,
            inventory,
        } => commands::cmd_analyze(&catalogue, &inventory).map(print_report),
        Commands::Profit { catalogue } => commands::cmd_profit(&catalogue).map(print_report),
        Commands::Profile {
            catalogue,
            types,
            match_profile,
        } => commands::cmd_profile(&catalogue, &types, &match_profile).map(print_report),
        Commands::Usage {
            catalogue,
            name,
            types,
        } => commands::cmd_usage(&catalogue, name, &types).map(print_report),
    };

    if let Err(e) = outcome {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

/// Reports go to stdout; logs stay on stderr.
fn print_report(json: String) {
    println!("{json}");
}
