// crates/eventdb-core/src/loader/snapshot.rs
use crate::error::Result;
use crate::model::{Catalog, Event};
use bincode::Options;
use std::path::Path;
use tracing::debug;

/// Upper bound for a snapshot payload. Guards against corrupt length prefixes.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl Catalog {
    /// Reconstructs a catalog from a bincode snapshot.
    ///
    /// Snapshots bypass JSON parsing but not validation: ids are checked
    /// again, so a hand-edited snapshot cannot smuggle in duplicates.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let events: Vec<Event> = options().deserialize(data)?;
        Catalog::new(events)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(options().serialize(self)?)
    }

    /// Writes a snapshot that [`Catalog::load_from_path`] can read back.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote catalog snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::EventDbError;
    use crate::model::{Catalog, Event};
    use bincode::Options;

    #[test]
    fn snapshot_preserves_order_and_fields() {
        let catalog = Catalog::new(vec![
            Event::new("b", "London, UK").with_summary("Second"),
            Event::new("a", "Berlin, Germany").with_start("2020-05-19T16:00:00+02:00", "Europe/Berlin"),
        ])
        .unwrap();

        let bytes = catalog.to_bytes().unwrap();
        assert_eq!(Catalog::from_bytes(&bytes).unwrap(), catalog);
    }

    #[test]
    fn duplicate_ids_in_snapshot_are_typed_errors() {
        let events = vec![Event::new("a", "X"), Event::new("a", "Y")];
        let bytes = super::options().serialize(&events).unwrap();
        assert!(matches!(
            Catalog::from_bytes(&bytes),
            Err(EventDbError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(Catalog::from_bytes(&[0xff; 7]).is_err());
    }
}
