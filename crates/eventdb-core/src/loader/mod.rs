// crates/eventdb-core/src/loader/mod.rs

//! # Catalog Loader
//!
//! Handles the physical layer (files, gzip) and delegates to the payload
//! parsers (JSON vs bincode snapshot). The core services only ever see a
//! fully materialized, validated [`Catalog`].

use crate::error::Result;
use crate::model::Catalog;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

mod common_io;
mod snapshot;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
mod sample;

pub use common_io::CatalogFormat;

impl Catalog {
    /// Loads a catalog file, picking the parser from the file name.
    ///
    /// - `*.json`: JSON events (needs `json`)
    /// - `*.json.gz`: gzipped JSON events (needs `json` + `compact`)
    /// - `*.bin`: snapshot written by [`Catalog::save_snapshot`]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        debug!(path = %path.display(), ?format, "loading catalog");

        let catalog = match format {
            CatalogFormat::Snapshot => {
                let mut data = Vec::new();
                common_io::open_stream(path, false)?.read_to_end(&mut data)?;
                Self::from_bytes(&data)?
            }
            CatalogFormat::Json | CatalogFormat::JsonGz => {
                let reader = common_io::open_stream(path, format == CatalogFormat::JsonGz)?;
                Self::parse_json(reader, path)?
            }
        };

        info!(
            path = %path.display(),
            events = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Loads a JSON catalog through a bincode cache stored beside it.
    ///
    /// A fresh `<file>.bin` is read instead of the source. When the cache is
    /// stale, missing or unreadable the source is parsed again and the cache
    /// rewritten; failing to write it only logs a warning. Snapshot inputs
    /// are loaded directly.
    pub fn load_cached(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if CatalogFormat::from_path(path)? == CatalogFormat::Snapshot {
            return Self::load_from_path(path);
        }

        let cache = common_io::cache_path(path);
        if common_io::is_cache_fresh(path, &cache) {
            match Self::load_from_path(&cache) {
                Ok(catalog) => return Ok(catalog),
                Err(err) => warn!(
                    cache = %cache.display(),
                    error = %err,
                    "snapshot cache unreadable, rebuilding from source"
                ),
            }
        }

        let catalog = Self::load_from_path(path)?;
        if let Err(err) = catalog.save_snapshot(&cache) {
            warn!(cache = %cache.display(), error = %err, "could not write snapshot cache");
        }
        Ok(catalog)
    }

    #[cfg(feature = "json")]
    fn parse_json(reader: Box<dyn Read>, _path: &Path) -> Result<Self> {
        Self::from_reader(reader)
    }

    #[cfg(not(feature = "json"))]
    fn parse_json(_reader: Box<dyn Read>, path: &Path) -> Result<Self> {
        Err(crate::error::EventDbError::UnsupportedFormat(format!(
            "{} (JSON support needs the `json` feature)",
            path.display()
        )))
    }
}
