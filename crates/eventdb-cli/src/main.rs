//! eventdb — Command-line interface for eventdb-core
//!
//! Loads an event catalog and answers the two questions a city search box
//! asks: which cities match what was typed, and which events are in the
//! chosen city.
//!
//! Usage examples
//! --------------
//!
//! - Show catalog stats
//!   $ eventdb stats
//!
//! - List the distinct cities
//!   $ eventdb cities
//!
//! - Suggest cities while typing (case-sensitive substring)
//!   $ eventdb suggest Berlin
//!
//! - List events, all or for one city (exact name)
//!   $ eventdb events
//!   $ eventdb events --city "Berlin, Germany"
//!
//! - Convert a JSON catalog into a fast-loading snapshot
//!   $ eventdb --input events.json.gz snapshot events.bin
//!
//! Data source
//! -----------
//!
//! Without `--input` (or `EVENTDB_CATALOG`) the bundled 32-event sample
//! catalog is used.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use eventdb_cli::{init_logger, render_events, render_suggestions};
use eventdb_core::{Catalog, CitySearch};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logger(args.verbose);

    let catalog = load_catalog(args.input.as_deref(), args.cache)?;
    let index = catalog.city_index();

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            if args.json {
                print_json(&stats)?;
            } else {
                println!("Catalog statistics:");
                println!("  Events: {}", stats.events);
                println!("  Cities: {}", stats.cities);
            }
        }

        Commands::Cities => {
            if args.json {
                print_json(&index)?;
            } else {
                for city in index.iter() {
                    println!("{city}");
                }
            }
        }

        Commands::Suggest { query } => {
            let mut search = CitySearch::new(&index);
            search.type_query(query);
            let suggestions = search.suggestions();
            if args.json {
                print_json(&suggestions)?;
            } else {
                print!("{}", render_suggestions(&suggestions));
            }
        }

        Commands::Events { city } => {
            if let Some(city) = city.as_deref() {
                if !index.contains(city) {
                    warn!(city = %city, "no event is located in this city");
                }
            }
            let events = catalog.filter_by_city(city.as_deref());
            if args.json {
                print_json(&events)?;
            } else if events.is_empty() {
                println!("No events found");
            } else {
                print!("{}", render_events(&events));
            }
        }

        Commands::Snapshot { output } => {
            catalog
                .save_snapshot(&output)
                .with_context(|| format!("writing snapshot to {output}"))?;
            info!(output = %output, events = catalog.len(), "snapshot written");
        }
    }

    Ok(())
}

fn load_catalog(input: Option<&str>, cache: bool) -> anyhow::Result<Cow<'static, Catalog>> {
    match input {
        Some(path) => {
            let loaded = if cache {
                Catalog::load_cached(path)
            } else {
                Catalog::load_from_path(path)
            };
            let catalog = loaded.with_context(|| format!("loading catalog {path}"))?;
            Ok(Cow::Owned(catalog))
        }
        None => bundled_catalog(),
    }
}

#[cfg(feature = "json")]
fn bundled_catalog() -> anyhow::Result<Cow<'static, Catalog>> {
    Ok(Cow::Borrowed(Catalog::sample()?))
}

#[cfg(not(feature = "json"))]
fn bundled_catalog() -> anyhow::Result<Cow<'static, Catalog>> {
    anyhow::bail!("no --input given and the bundled catalog needs the `json` feature")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
