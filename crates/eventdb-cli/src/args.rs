use clap::{Parser, Subcommand};

/// CLI arguments for eventdb
#[derive(Debug, Parser)]
#[command(
    name = "eventdb",
    version,
    about = "Browse an event catalog by city: suggestions and filtered event lists"
)]
pub struct CliArgs {
    /// Catalog file (.json, .json.gz or .bin snapshot). Defaults to the bundled sample.
    #[arg(short = 'i', long = "input", env = "EVENTDB_CATALOG", global = true)]
    pub input: Option<String>,

    /// Keep a `<input>.bin` snapshot beside a JSON input and reuse it while fresh
    #[arg(long = "cache", global = true)]
    pub cache: bool,

    /// Print results as JSON instead of plain lines
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog
    Stats,

    /// List every distinct city, in first-seen order
    Cities,

    /// Suggest cities containing the typed text
    Suggest {
        /// Text typed so far (case-sensitive substring)
        query: String,
    },

    /// List events, optionally only those in one city
    Events {
        /// Exact city name, e.g. "Berlin, Germany"
        #[arg(short = 'c', long = "city")]
        city: Option<String>,
    },

    /// Write the loaded catalog as a bincode snapshot
    Snapshot {
        /// Output path, should end in .bin
        output: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_flag_is_global() {
        let args =
            CliArgs::try_parse_from(["eventdb", "events", "-i", "events.json", "--cache"]).unwrap();
        assert!(args.cache);
        assert_eq!(args.input.as_deref(), Some("events.json"));
        assert!(matches!(args.command, Commands::Events { city: None }));

        let args = CliArgs::try_parse_from(["eventdb", "-i", "events.json", "stats"]).unwrap();
        assert!(!args.cache);
    }
}
