// crates/eventdb-core/src/lib.rs

//! eventdb-core
//! ============
//!
//! City suggestions and city filtering over an event catalog.
//!
//! - [`CityIndex`] derives the distinct cities of a catalog and answers
//!   substring queries for suggestions.
//! - [`filter_by_city`] / [`EventFilter`] narrow the catalog to one city, or
//!   return it whole when nothing is selected.
//! - [`CitySearch`] ties both together as the state of a search box.
//!
//! Loading (JSON, gzipped JSON, bincode snapshots) lives in [`loader`] and is
//! the only place that can fail.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod filter;
pub mod index;
pub mod loader;
pub mod model;
pub mod session;
pub mod traits;
// Raw input shapes (used by the JSON loader)
#[cfg(feature = "json")]
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{EventDbError, Result};
pub use crate::filter::{filter_by_city, EventFilter};
pub use crate::index::CityIndex;
pub use crate::loader::CatalogFormat;
pub use crate::model::{Catalog, CatalogStats, Event, EventTime};
pub use crate::session::{CitySearch, SearchState, Suggestion, ALL_CITIES_LABEL};
pub use crate::traits::Located;

/// Everything a caller usually needs, in one import.
pub mod prelude {
    pub use crate::{
        filter_by_city, Catalog, CatalogStats, CitySearch, CityIndex, Event, EventDbError,
        EventFilter, Located, Result, SearchState, Suggestion, ALL_CITIES_LABEL,
    };
}
