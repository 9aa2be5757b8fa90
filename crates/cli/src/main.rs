//! Philagri CLI - Inspect the route table and query the seed store.
//!
//! # Usage
//!
//! ```bash
//! # Print the route table, or one role's navigation
//! philagri routes
//! philagri routes --role marketplace
//!
//! # Dump seed data as YAML
//! philagri seed --entity products
//!
//! # List a party's orders
//! philagri orders --party buyer --status shipped
//!
//! # Search the catalog the way the browse page does
//! philagri browse --query rice --max 100 --sort price-low
//! ```
//!
//! # Commands
//!
//! - `routes` - Route table and role navigation
//! - `seed` - YAML dump of the seed collections
//! - `orders` - Orders for a buyer or seller, with totals
//! - `browse` - Filtered and sorted product listing

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};

mod commands;
mod error;

use commands::orders::PartyArg;
use commands::seed::Entity;
use error::CliError;
use philagri_web::store::EntityStore;

#[derive(Parser)]
#[command(name = "philagri")]
#[command(author, version, about = "Philagri CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table, or the navigation for one role
    Routes {
        /// Role whose navigation links to print (`farmowner`, `marketplace`)
        #[arg(short, long)]
        role: Option<String>,
    },
    /// Dump seed data as YAML
    Seed {
        /// Collection to dump (all collections when omitted)
        #[arg(short, long, value_enum)]
        entity: Option<Entity>,
    },
    /// List orders for one side of the marketplace
    Orders {
        /// Which side of the order to match
        #[arg(short, long, value_enum)]
        party: PartyArg,

        /// Party id (defaults to the demo buyer or seller)
        #[arg(short, long)]
        id: Option<String>,

        /// Only orders in this status
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Search, filter and sort the catalog
    Browse {
        /// Substring of name or description
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category name, or `all`
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Minimum price in whole pesos
        #[arg(long)]
        min: Option<u32>,

        /// Maximum price in whole pesos
        #[arg(long)]
        max: Option<u32>,

        /// `rating`, `price-low`, `price-high` or `name`
        #[arg(short, long, default_value = "rating")]
        sort: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli, &mut std::io::stdout().lock()) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let store = EntityStore::seed();
    match cli.command {
        Commands::Routes { role } => commands::routes::run(role.as_deref(), out),
        Commands::Seed { entity } => commands::seed::run(&store, entity, out),
        Commands::Orders { party, id, status } => {
            commands::orders::run(&store, party, id.as_deref(), status.as_deref(), out)
        }
        Commands::Browse {
            query,
            category,
            min,
            max,
            sort,
        } => {
            let args = commands::browse::BrowseArgs {
                query,
                category,
                min,
                max,
                sort,
            };
            commands::browse::run(&store, &args, out)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_orders_command() {
        let cli = Cli::try_parse_from(["philagri", "orders", "--party", "seller", "--status", "shipped"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Orders {
                party: PartyArg::Seller,
                id: None,
                status: Some(_),
            })
        ));
    }
}
