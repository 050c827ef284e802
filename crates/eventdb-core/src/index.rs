// crates/eventdb-core/src/index.rs

//! # City Index
//!
//! The distinct set of city names appearing in a catalog, in first-seen
//! order, plus substring lookup for suggestions.

use crate::traits::Located;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Ordered, duplicate-free list of the cities found in a catalog.
///
/// Built once per catalog load and read-only afterwards. Every entry is the
/// verbatim `location` of at least one event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityIndex {
    cities: Vec<String>,
}

impl CityIndex {
    /// Derives the index from a catalog.
    ///
    /// An empty catalog yields an empty index.
    ///
    /// # Example
    /// ```rust
    /// use eventdb_core::{CityIndex, Event};
    ///
    /// let events = vec![
    ///     Event::new("1", "London, UK"),
    ///     Event::new("2", "Berlin, Germany"),
    ///     Event::new("3", "London, UK"),
    /// ];
    /// let index = CityIndex::build(&events);
    /// assert_eq!(index.as_slice(), ["London, UK", "Berlin, Germany"]);
    /// ```
    pub fn build<E: Located>(catalog: &[E]) -> Self {
        let index = Self::from_locations(catalog.iter().map(Located::location));
        debug!(events = catalog.len(), cities = index.len(), "built city index");
        index
    }

    /// Same as [`CityIndex::build`] but from bare location strings.
    pub fn from_locations<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut cities = Vec::new();
        for loc in locations {
            let loc = loc.as_ref();
            if seen.insert(loc.to_owned()) {
                cities.push(loc.to_owned());
            }
        }
        Self { cities }
    }

    /// Cities containing `query` as a case-sensitive substring, in index order.
    ///
    /// An empty query matches everything. Whether suggestions are shown
    /// before the user types is up to the caller.
    ///
    /// # Example
    /// ```rust
    /// use eventdb_core::CityIndex;
    ///
    /// let index = CityIndex::from_locations(["Berlin, Germany", "Munich, Germany", "London, UK"]);
    /// assert_eq!(index.suggest("erlin"), ["Berlin, Germany"]);
    /// assert_eq!(index.suggest("Germany").len(), 2);
    /// assert!(index.suggest("berlin").is_empty());
    /// ```
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        self.matches(query).collect()
    }

    /// Lazy form of [`CityIndex::suggest`].
    pub fn matches<'a, 'q>(&'a self, query: &'q str) -> impl Iterator<Item = &'a str> + 'q
    where
        'a: 'q,
    {
        self.iter().filter(move |city| city.contains(query))
    }

    /// Exact membership test.
    pub fn contains(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl<'a> IntoIterator for &'a CityIndex {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}
