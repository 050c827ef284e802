// crates/eventdb-core/src/filter.rs
use crate::traits::Located;

/// Narrows a catalog to one city, or leaves it alone.
///
/// `EventFilter::all()` is the "nothing selected yet" state and lets every
/// event through in catalog order. `EventFilter::city(..)` keeps only events
/// whose location equals the city exactly; a partial query never matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventFilter<'s> {
    selection: Option<&'s str>,
}

impl<'s> EventFilter<'s> {
    pub const fn all() -> Self {
        Self { selection: None }
    }

    pub const fn city(city: &'s str) -> Self {
        Self {
            selection: Some(city),
        }
    }

    pub const fn from_selection(selection: Option<&'s str>) -> Self {
        Self { selection }
    }

    pub const fn selection(&self) -> Option<&'s str> {
        self.selection
    }

    #[inline]
    pub fn matches<E: Located>(&self, event: &E) -> bool {
        self.selection.is_none_or(|city| event.is_in(city))
    }

    /// Lazily yields the events that pass, in catalog order.
    pub fn iter<'a, E: Located>(&self, catalog: &'a [E]) -> impl Iterator<Item = &'a E> + 'a
    where
        's: 'a,
    {
        let filter = *self;
        catalog.iter().filter(move |e| filter.matches(*e))
    }

    pub fn apply<'a, E: Located>(&self, catalog: &'a [E]) -> Vec<&'a E>
    where
        's: 'a,
    {
        self.iter(catalog).collect()
    }
}

/// Events located in `selection`, or the whole catalog when it is `None`.
///
/// A selection that matches nothing gives an empty list.
///
/// # Example
/// ```rust
/// use eventdb_core::{filter_by_city, Event};
///
/// let events = vec![
///     Event::new("1", "Berlin, Germany"),
///     Event::new("2", "London, UK"),
/// ];
/// assert_eq!(filter_by_city(&events, None).len(), 2);
/// assert_eq!(filter_by_city(&events, Some("London, UK"))[0].id, "2");
/// assert!(filter_by_city(&events, Some("London")).is_empty());
/// ```
pub fn filter_by_city<'a, E: Located>(catalog: &'a [E], selection: Option<&str>) -> Vec<&'a E> {
    match selection {
        None => catalog.iter().collect(),
        Some(city) => catalog.iter().filter(|e| e.is_in(city)).collect(),
    }
}
