//! eventdb-cli
//! ===========
//!
//! Command-line front end for `eventdb-core`: it loads a catalog, asks the
//! core for city suggestions or a filtered event list, and prints the
//! result.
//!
//! Basic usage:
//!
//! ```text
//! eventdb stats
//! eventdb cities
//! eventdb suggest Berlin
//! eventdb events --city "Berlin, Germany"
//! eventdb --input events.json.gz snapshot events.bin
//! eventdb --input events.json --cache events --city "Berlin, Germany"
//! ```
//!
//! The library target holds the logging setup and the text renderers so the
//! binary stays a thin dispatcher.
#![cfg_attr(docsrs, feature(doc_cfg))]

use eventdb_core::{Event, Suggestion};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the stderr logger. `RUST_LOG` wins over `verbose`.
pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "eventdb=debug,eventdb_core=debug,info"
    } else {
        "eventdb=info,eventdb_core=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// One suggestion per line, the "see all" entry last.
pub fn render_suggestions(suggestions: &[Suggestion<'_>]) -> String {
    suggestions.iter().map(|s| format!("{s}\n")).collect()
}

/// One event per line: start, title, location.
pub fn render_events(events: &[&Event]) -> String {
    events
        .iter()
        .map(|e| {
            format!(
                "{:<25} {:<30} {}\n",
                e.starts_at().unwrap_or("-"),
                e.summary(),
                e.location
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_render_one_per_line() {
        let text = render_suggestions(&[Suggestion::City("Berlin, Germany"), Suggestion::AllCities]);
        assert_eq!(text, "Berlin, Germany\nSee all cities\n");
    }

    #[test]
    fn events_render_with_placeholders() {
        let e = Event::new("1", "London, UK").with_summary("Learn JavaScript");
        let text = render_events(&[&e]);
        assert!(text.starts_with('-'));
        assert!(text.contains("Learn JavaScript"));
        assert!(text.trim_end().ends_with("London, UK"));
    }
}
