//! Guava CLI - store seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the store document with the bundled catalog and coupons
//! guava seed
//!
//! # Create the bootstrap admin account
//! guava admin create -e admin@example.com -p s3cret
//!
//! # List orders, optionally for one user
//! guava orders list
//! guava orders list --user u-42
//!
//! # Overwrite an order's status
//! guava orders set-status ORD-1a2b3c confirmed
//! ```
//!
//! The store document path comes from `GUAVA_DATA_FILE` (see `config`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use guava_store::Store;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "guava")]
#[command(author, version, about = "Guava store CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the store with the bundled catalog and coupons
    Seed,
    /// Manage admin accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Inspect and drive orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create the bootstrap admin account (no-op if the email exists)
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long, default_value = "Admin")]
        name: String,

        /// Admin phone number
        #[arg(long, default_value = "9999999999")]
        phone: String,

        /// Admin password (stored as-is; the store is a local simulation)
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders, newest first
    List {
        /// Only orders owned by this user ID
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Overwrite an order's status (`pending`, `confirmed`, `packed`,
    /// `shipped`, `delivered`, `cancelled`)
    SetStatus {
        /// Order ID
        order_id: String,

        /// New status
        status: String,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::CliConfig::load()?;
    let store = Store::open(&config.data_file)?;

    match cli.command {
        Commands::Seed => commands::seed::run(&store)?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                name,
                phone,
                password,
            } => commands::admin::create(&store, &email, &name, &phone, &password)?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::List { user } => commands::orders::list(&store, user.as_deref()),
            OrdersAction::SetStatus { order_id, status } => {
                commands::orders::set_status(&store, &order_id, &status)?;
            }
        },
    }
    Ok(())
}
