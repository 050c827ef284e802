// crates/eventdb-core/src/raw.rs
use crate::error::{EventDbError, Result};
use crate::model::{Catalog, Event, EventTime};
use serde::Deserialize;

/// Raw event as it arrives from a calendar feed.
///
/// `id` and `location` are optional here so that a missing field becomes a
/// proper [`EventDbError`] instead of a generic parse failure. Unknown fields
/// (`kind`, `etag`, `organizer`, ...) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRaw {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_link: Option<String>,
    #[serde(default)]
    pub start: Option<EventTime>,
    #[serde(default)]
    pub end: Option<EventTime>,
}

/// Either a bare array of events, or the `{ "items": [...] }` envelope the
/// calendar API returns.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogRaw {
    List(Vec<EventRaw>),
    Envelope {
        #[serde(alias = "items")]
        events: Vec<EventRaw>,
    },
}

impl CatalogRaw {
    pub fn into_events(self) -> Vec<EventRaw> {
        match self {
            CatalogRaw::List(events) | CatalogRaw::Envelope { events } => events,
        }
    }
}

/// Validates raw events into a [`Catalog`].
///
/// The first malformed event rejects the whole input.
pub fn into_catalog(raw: Vec<EventRaw>) -> Result<Catalog> {
    let events = raw
        .into_iter()
        .enumerate()
        .map(|(index, e)| -> Result<Event> {
            let id = e
                .id
                .filter(|id| !id.is_empty())
                .ok_or(EventDbError::MissingId { index })?;
            let location = match e.location {
                Some(location) => location,
                None => return Err(EventDbError::MissingLocation { id }),
            };
            Ok(Event {
                id,
                location,
                summary: e.summary,
                description: e.description,
                html_link: e.html_link,
                start: e.start,
                end: e.end,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Catalog::new(events)
}
