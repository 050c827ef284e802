// crates/eventdb-core/src/model.rs
use crate::error::{EventDbError, Result};
use crate::filter::filter_by_city;
use crate::index::CityIndex;
use crate::traits::Located;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Start or end of an event, as the calendar feed reports it.
///
/// Both fields are kept as opaque strings; the core never interprets dates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// A single catalog entry.
///
/// Only `id` and `location` carry meaning for matching and filtering. The
/// remaining fields are passed through untouched for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub location: String,
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

impl Event {
    pub fn new(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            summary: None,
            description: None,
            html_link: None,
            start: None,
            end: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_start(mut self, date_time: impl Into<String>, time_zone: impl Into<String>) -> Self {
        self.start = Some(EventTime {
            date_time: Some(date_time.into()),
            time_zone: Some(time_zone.into()),
        });
        self
    }

    /// The title, or an empty string when the feed had none.
    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    pub fn starts_at(&self) -> Option<&str> {
        self.start.as_ref().and_then(|t| t.date_time.as_deref())
    }
}

impl Located for Event {
    #[inline]
    fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    fn location(&self) -> &str {
        &self.location
    }
}

/// Simple aggregate counts for a loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub events: usize,
    pub cities: usize,
}

/// A validated, fully materialized event catalog.
///
/// Every event has a non-empty id and ids are unique. Order is the order the
/// source delivered, and it is preserved by every operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Event>", into = "Vec<Event>")]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Validates `events` and wraps them.
    ///
    /// Fails fast on the first blank or duplicate id; nothing is kept from a
    /// rejected input.
    pub fn new(events: Vec<Event>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(events.len());
            for (index, event) in events.iter().enumerate() {
                if event.id.is_empty() {
                    return Err(EventDbError::MissingId { index });
                }
                if !seen.insert(event.id.as_str()) {
                    return Err(EventDbError::DuplicateId(event.id.clone()));
                }
            }
        }
        Ok(Self { events })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Builds the distinct-city index for this catalog.
    pub fn city_index(&self) -> CityIndex {
        CityIndex::build(&self.events)
    }

    /// Events in `selection`, or all events when nothing is selected.
    pub fn filter_by_city(&self, selection: Option<&str>) -> Vec<&Event> {
        filter_by_city(&self.events, selection)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            events: self.events.len(),
            cities: self.city_index().len(),
        }
    }
}

impl TryFrom<Vec<Event>> for Catalog {
    type Error = EventDbError;

    fn try_from(events: Vec<Event>) -> Result<Self> {
        Catalog::new(events)
    }
}

impl From<Catalog> for Vec<Event> {
    fn from(catalog: Catalog) -> Self {
        catalog.events
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
