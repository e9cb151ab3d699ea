//! CLI for validating and looking up Australian business identifiers.
//!
//! # Usage
//!
//! ```bash
//! # Local checksum validation (no credentials needed)
//! abr-lookup validate 99124391073
//! abr-lookup validate --acn 124391073
//!
//! # Registry enrichment (requires ABN_LOOKUP_GUID)
//! abr-lookup lookup 99124391073
//! abr-lookup lookup-acn 124391073
//!
//! # Name search
//! abr-lookup search "Sony" --state NSW --state VIC --postcode 2040
//! ```
//!
//! # Environment Variables
//!
//! - `ABN_LOOKUP_GUID`: ABR web services GUID (required for lookups)
//! - `ABR_ENDPOINT`, `ABR_PROXY`, `ABR_TIMEOUT_SECONDS`: optional transport settings

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use abr_lookup::application::services::{LookupService, NameSearchOptions};
use abr_lookup::config;
use abr_lookup::domain::entities::BusinessEntity;
use abr_lookup::domain::identifiers::{Abn, Acn};
use abr_lookup::infrastructure::registry::HttpRegistry;

/// CLI tool for ABN/ACN validation and ABR lookups.
#[derive(Parser)]
#[command(name = "abr-lookup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an identifier checksum locally
    Validate {
        /// The ABN (or ACN with --acn) to validate
        identifier: String,

        /// Treat the identifier as an ACN
        #[arg(long)]
        acn: bool,
    },

    /// Look up a business entity by ABN
    Lookup {
        /// The ABN to look up
        abn: String,
    },

    /// Look up a business entity by ACN
    LookupAcn {
        /// The ACN to look up
        acn: String,
    },

    /// Search the registry by name
    Search {
        /// The search term
        name: String,

        /// Restrict the search to these states (repeatable; default: all)
        #[arg(long = "state")]
        states: Vec<String>,

        /// Filter by postcode
        #[arg(long)]
        postcode: Option<String>,

        /// Maximum number of results
        #[arg(long, default_value_t = 10)]
        max: u32,

        /// Return raw name-search records without the per-result ABN re-lookup
        #[arg(long)]
        skip_enrichment: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { identifier, acn } => {
            if acn {
                print_validation("ACN", &identifier, Acn::new(&identifier).formatted());
            } else {
                print_validation("ABN", &identifier, Abn::new(&identifier).formatted());
            }
        }

        Commands::Lookup { abn } => {
            let service = build_service()?;
            let entity = service.search_by_abn(abn).await?;
            print_entity(&entity);
        }

        Commands::LookupAcn { acn } => {
            let service = build_service()?;
            let entity = service.search_by_acn(acn).await?;
            print_entity(&entity);
        }

        Commands::Search {
            name,
            states,
            postcode,
            max,
            skip_enrichment,
        } => {
            let service = build_service()?;
            let mut options = NameSearchOptions {
                postcode,
                max_search_results: max,
                skip_reenrichment: skip_enrichment,
                ..NameSearchOptions::default()
            };
            if !states.is_empty() {
                options.states = states;
            }

            let entities = service.search_by_name(&name, &options).await?;
            if entities.is_empty() {
                println!("{}", "No matches found.".yellow());
            }
            for (index, entity) in entities.iter().enumerate() {
                println!("{}", format!("── Result {} ──", index + 1).bold());
                print_entity(entity);
            }
        }
    }

    Ok(())
}

fn build_service() -> Result<LookupService<HttpRegistry>> {
    let config = config::load_from_env()?;
    config.print_summary();

    let registry = Arc::new(HttpRegistry::new(&config)?);
    Ok(LookupService::new(registry, config))
}

fn print_validation(kind: &str, raw: &str, formatted: String) {
    if formatted.is_empty() {
        println!("{} {} is {}", kind, raw.trim(), "invalid".red().bold());
    } else {
        println!(
            "{} {} is {} ({})",
            kind,
            raw.trim(),
            "valid".green().bold(),
            formatted
        );
    }
}

fn print_entity(entity: &BusinessEntity) {
    let field = |label: &str, value: &Option<String>| {
        if let Some(value) = value {
            println!("  {:<18} {}", label.dimmed(), value);
        }
    };

    match entity.primary_name {
        Some(ref name) => println!("{}", name.green().bold()),
        None => println!("{}", "(unnamed entity)".dimmed()),
    }

    field("ABN:", &entity.abn);
    field("ACN:", &entity.acn);
    if let Some(current) = entity.abn_current {
        println!("  {:<18} {}", "ABN current:".dimmed(), current);
    }
    field("Type:", &entity.entity_type);
    field("Status:", &entity.status);
    field("Main name:", &entity.main_name);
    field("Trading name:", &entity.trading_name);
    field("Business name:", &entity.business_name);
    field("Legal name:", &entity.legal_name);
    field("Secondary name:", &entity.secondary_name);
    field("Active from:", &entity.active_from_date);
    field("State:", &entity.address_state_code);
    field("Postcode:", &entity.address_post_code);
    field("GST from:", &entity.gst_from_date);
    field("Last updated:", &entity.last_updated);
}
