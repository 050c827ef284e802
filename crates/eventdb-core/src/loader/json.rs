// crates/eventdb-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use crate::error::Result;
use crate::model::Catalog;
use crate::raw::{into_catalog, CatalogRaw};
use std::io::Read;

impl Catalog {
    /// Parses and validates a JSON catalog from any reader.
    ///
    /// Accepts a bare array of events or an object with an `events` or
    /// `items` array.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: CatalogRaw = serde_json::from_reader(reader)?;
        into_catalog(raw.into_events())
    }

    /// Parses and validates a JSON catalog held in memory.
    ///
    /// # Example
    /// ```rust
    /// use eventdb_core::Catalog;
    ///
    /// let catalog = Catalog::from_json_str(
    ///     r#"{ "items": [ { "id": "a", "location": "London, UK", "kind": "calendar#event" } ] }"#,
    /// ).unwrap();
    /// assert_eq!(catalog.len(), 1);
    ///
    /// assert!(Catalog::from_json_str(r#"[ { "id": "b" } ]"#).is_err());
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: CatalogRaw = serde_json::from_str(s)?;
        into_catalog(raw.into_events())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::EventDbError;
    use crate::model::Catalog;

    #[test]
    fn accepts_bare_list_and_envelopes() {
        let list = r#"[{"id":"1","location":"Berlin, Germany"}]"#;
        let events = r#"{"events":[{"id":"1","location":"Berlin, Germany"}]}"#;
        let items = r#"{"kind":"calendar#events","items":[{"id":"1","location":"Berlin, Germany"}]}"#;
        for src in [list, events, items] {
            let catalog = Catalog::from_json_str(src).unwrap();
            assert_eq!(catalog.events()[0].location, "Berlin, Germany");
        }
    }

    #[test]
    fn keeps_opaque_fields() {
        let src = r#"[{
            "id": "e1",
            "location": "London, UK",
            "summary": "Learn JavaScript",
            "htmlLink": "https://example.com/e1",
            "start": { "dateTime": "2020-05-19T16:00:00+02:00", "timeZone": "Europe/Berlin" }
        }]"#;
        let catalog = Catalog::from_json_str(src).unwrap();
        let event = &catalog.events()[0];
        assert_eq!(event.summary(), "Learn JavaScript");
        assert_eq!(event.html_link.as_deref(), Some("https://example.com/e1"));
        assert_eq!(event.starts_at(), Some("2020-05-19T16:00:00+02:00"));
    }

    #[test]
    fn rejects_event_without_location() {
        let src = r#"[{"id":"1","location":"X"},{"id":"2"}]"#;
        let err = Catalog::from_json_str(src).unwrap_err();
        assert!(matches!(err, EventDbError::MissingLocation { id } if id == "2"));
    }

    #[test]
    fn rejects_event_without_id() {
        let src = r#"[{"location":"X"}]"#;
        let err = Catalog::from_json_str(src).unwrap_err();
        assert!(matches!(err, EventDbError::MissingId { index: 0 }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let src = r#"[{"id":"1","location":"X"},{"id":"1","location":"Y"}]"#;
        assert!(matches!(
            Catalog::from_json_str(src),
            Err(EventDbError::DuplicateId(_))
        ));
    }

    #[test]
    fn syntax_errors_surface_as_json() {
        assert!(matches!(
            Catalog::from_json_str("[{"),
            Err(EventDbError::Json(_))
        ));
    }
}
