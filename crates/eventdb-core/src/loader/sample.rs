// crates/eventdb-core/src/loader/sample.rs
use crate::error::Result;
use crate::model::Catalog;
use once_cell::sync::OnceCell;

const SAMPLE_JSON: &str = include_str!("../../data/sample_events.json");

// Parsed at most once per process.
static SAMPLE_CATALOG: OnceCell<Catalog> = OnceCell::new();

impl Catalog {
    /// The bundled 32-event catalog.
    ///
    /// Handy for demos and tests; the CLI falls back to it when no
    /// `--input` is given.
    ///
    /// # Example
    /// ```rust
    /// use eventdb_core::Catalog;
    ///
    /// let catalog = Catalog::sample().unwrap();
    /// assert_eq!(catalog.len(), 32);
    /// ```
    pub fn sample() -> Result<&'static Catalog> {
        SAMPLE_CATALOG.get_or_try_init(|| Catalog::from_json_str(SAMPLE_JSON))
    }
}
