use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use foodservice::{Config, query::InventoryField, seed};
use foodservice_store::Store;

mod cli;

/// foodservice - hospital meal planning and kitchen inventory
#[derive(Parser)]
#[command(name = "foodservice")]
#[command(about = "Patient meal plans, kitchen inventory and nutrition reports", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Reference date (YYYY-MM-DD), overrides config and the system clock
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dashboard stats and inventory alerts
    Dashboard,
    /// List inventory with expiration and stock status
    Inventory {
        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,

        /// Category to show ("all" for every category)
        #[arg(long)]
        category: Option<String>,

        /// Column to sort by
        #[arg(long, default_value_t = InventoryField::Name)]
        sort: InventoryField,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Show a patient's meal plans for a week
    Plan {
        #[arg(long)]
        patient: String,

        /// Any day of the week to show (defaults to the reference date)
        #[arg(long)]
        week: Option<NaiveDate>,
    },
    /// Assign a catalog meal to a patient's day plan
    Assign {
        #[arg(long)]
        patient: String,

        #[arg(long)]
        date: NaiveDate,

        /// breakfast, lunch, dinner or snack
        #[arg(long)]
        slot: String,

        /// Catalog meal id
        #[arg(long)]
        meal: String,

        /// Print the resulting plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show reporting aggregates
    Report,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    foodservice::observability::init_observability(
        "foodservice",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let today = match cli.today {
        Some(today) => today,
        None => config
            .clinic
            .today()?
            .unwrap_or_else(|| Local::now().date_naive()),
    };
    tracing::debug!(%today, "Reference date");

    let mut store = Store::from_snapshot(seed::snapshot(today)?);

    match cli.command {
        Commands::Dashboard => cli::dashboard(&store, today),
        Commands::Inventory {
            search,
            category,
            sort,
            desc,
        } => cli::inventory(&store, &config, today, search, category, sort, desc),
        Commands::Plan { patient, week } => {
            cli::plan(&mut store, &patient, week.unwrap_or(today))
        }
        Commands::Assign {
            patient,
            date,
            slot,
            meal,
            json,
        } => cli::assign(&mut store, &patient, date, &slot, &meal, json),
        Commands::Report => cli::report(&store),
    }
}
