// crates/eventdb-core/src/session.rs

//! # City Search Session
//!
//! The search box as an explicit state machine. The caller owns a
//! [`CitySearch`], feeds it keystrokes and clicks, and asks it what to render.
//! [`CityIndex`] and [`filter_by_city`] stay stateless; this type only
//! decides when and with what arguments they are called.

use crate::error::{EventDbError, Result};
use crate::filter::filter_by_city;
use crate::index::CityIndex;
use crate::traits::Located;
use serde::Serialize;
use std::fmt;

/// Label of the trailing "show everything" entry.
pub const ALL_CITIES_LABEL: &str = "See all cities";

/// Where the search box currently is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchState {
    /// Nothing typed yet. No suggestions, no selection.
    #[default]
    NoQuery,
    /// The user is typing; suggestions are shown.
    Typing { query: String },
    /// A city has been picked from the list.
    Selected { city: String },
}

/// One row of the rendered suggestion list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "city", rename_all = "snake_case")]
pub enum Suggestion<'a> {
    City(&'a str),
    /// Clears the selection and shows every event again.
    AllCities,
}

impl Suggestion<'_> {
    pub fn label(&self) -> &str {
        match self {
            Suggestion::City(city) => city,
            Suggestion::AllCities => ALL_CITIES_LABEL,
        }
    }
}

impl fmt::Display for Suggestion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search box state bound to one city index.
///
/// # Example
/// ```rust
/// use eventdb_core::{CityIndex, CitySearch, Event, Suggestion};
///
/// let events = vec![
///     Event::new("1", "Berlin, Germany"),
///     Event::new("2", "London, UK"),
///     Event::new("3", "Berlin, Germany"),
/// ];
/// let index = CityIndex::build(&events);
/// let mut search = CitySearch::new(&index);
///
/// search.type_query("Berl");
/// assert_eq!(
///     search.suggestions(),
///     [Suggestion::City("Berlin, Germany"), Suggestion::AllCities]
/// );
///
/// search.select(Suggestion::City("Berlin, Germany")).unwrap();
/// assert_eq!(search.text(), "Berlin, Germany");
/// assert_eq!(search.visible_events(&events).len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct CitySearch<'i> {
    index: &'i CityIndex,
    state: SearchState,
}

impl<'i> CitySearch<'i> {
    pub fn new(index: &'i CityIndex) -> Self {
        Self {
            index,
            state: SearchState::NoQuery,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn index(&self) -> &'i CityIndex {
        self.index
    }

    /// What the text box displays.
    pub fn text(&self) -> &str {
        match &self.state {
            SearchState::NoQuery => "",
            SearchState::Typing { query } => query,
            SearchState::Selected { city } => city,
        }
    }

    /// Replaces the text box contents.
    ///
    /// Any edit drops a previous selection; an empty box goes back to
    /// [`SearchState::NoQuery`].
    pub fn type_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.state = if query.is_empty() {
            SearchState::NoQuery
        } else {
            SearchState::Typing { query }
        };
    }

    /// The list to render under the text box.
    ///
    /// Empty unless the user is typing. While typing, the matching cities come
    /// first, followed by [`Suggestion::AllCities`].
    pub fn suggestions(&self) -> Vec<Suggestion<'i>> {
        match &self.state {
            SearchState::Typing { query } => self
                .index
                .matches(query)
                .map(Suggestion::City)
                .chain(std::iter::once(Suggestion::AllCities))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Commits a suggestion.
    ///
    /// A city must be present in the index; picking
    /// [`Suggestion::AllCities`] resets the box.
    pub fn select(&mut self, suggestion: Suggestion<'_>) -> Result<()> {
        match suggestion {
            Suggestion::City(city) => {
                if !self.index.contains(city) {
                    return Err(EventDbError::UnknownCity(city.to_owned()));
                }
                self.state = SearchState::Selected {
                    city: city.to_owned(),
                };
            }
            Suggestion::AllCities => self.state = SearchState::NoQuery,
        }
        Ok(())
    }

    pub fn selection(&self) -> Option<&str> {
        match &self.state {
            SearchState::Selected { city } => Some(city),
            _ => None,
        }
    }

    /// The event list to render for the current selection.
    pub fn visible_events<'a, E: Located>(&self, catalog: &'a [E]) -> Vec<&'a E> {
        filter_by_city(catalog, self.selection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Event;

    fn events() -> Vec<Event> {
        vec![
            Event::new("1", "London, UK"),
            Event::new("2", "Berlin, Germany"),
            Event::new("3", "Berlin, Germany"),
            Event::new("4", "Toronto, ON, Canada"),
        ]
    }

    #[test]
    fn starts_without_query_or_suggestions() {
        let index = CityIndex::build(&events());
        let search = CitySearch::new(&index);
        assert_eq!(search.state(), &SearchState::NoQuery);
        assert!(search.suggestions().is_empty());
        assert_eq!(search.selection(), None);
        assert_eq!(search.visible_events(&events()).len(), 4);
    }

    #[test]
    fn typing_shows_matches_then_all_cities() {
        let index = CityIndex::build(&events());
        let mut search = CitySearch::new(&index);
        search.type_query("o");
        assert_eq!(
            search.suggestions(),
            [
                Suggestion::City("London, UK"),
                Suggestion::City("Toronto, ON, Canada"),
                Suggestion::AllCities
            ]
        );
        search.type_query("Paris");
        assert_eq!(search.suggestions(), [Suggestion::AllCities]);
    }

    #[test]
    fn editing_after_selection_clears_it() {
        let events = events();
        let index = CityIndex::build(&events);
        let mut search = CitySearch::new(&index);
        search.type_query("Berlin");
        search.select(Suggestion::City("Berlin, Germany")).unwrap();
        assert_eq!(search.visible_events(&events).len(), 2);

        search.type_query("Berlin, G");
        assert_eq!(search.selection(), None);
        assert_eq!(search.visible_events(&events).len(), 4);
        assert_eq!(search.suggestions().len(), 2);

        search.type_query("");
        assert_eq!(search.state(), &SearchState::NoQuery);
    }

    #[test]
    fn all_cities_resets() {
        let index = CityIndex::build(&events());
        let mut search = CitySearch::new(&index);
        search.type_query("Lon");
        search.select(Suggestion::City("London, UK")).unwrap();
        search.select(Suggestion::AllCities).unwrap();
        assert_eq!(search.state(), &SearchState::NoQuery);
        assert_eq!(search.text(), "");
    }

    #[test]
    fn rejects_cities_outside_the_index() {
        let index = CityIndex::build(&events());
        let mut search = CitySearch::new(&index);
        search.type_query("Berlin");
        let err = search.select(Suggestion::City("Berlin")).unwrap_err();
        assert!(matches!(err, EventDbError::UnknownCity(c) if c == "Berlin"));
        assert_eq!(search.text(), "Berlin");
    }

    #[test]
    fn suggestion_labels() {
        assert_eq!(Suggestion::AllCities.to_string(), ALL_CITIES_LABEL);
        assert_eq!(Suggestion::City("London, UK").label(), "London, UK");
    }
}
