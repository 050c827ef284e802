//! Filtering the bundled 32-event catalog by city, end to end.

use eventdb_core::prelude::*;

const BERLIN: &str = "Berlin, Germany";

fn catalog() -> &'static Catalog {
    Catalog::sample().expect("bundled catalog parses")
}

#[test]
fn no_search_shows_all_upcoming_events() {
    let catalog = catalog();
    let index = catalog.city_index();
    let search = CitySearch::new(&index);

    assert_eq!(search.state(), &SearchState::NoQuery);
    assert!(search.suggestions().is_empty());
    assert_eq!(search.visible_events(catalog.events()).len(), 32);

    // Before typing, the raw index lookup still knows every city.
    assert_eq!(index.suggest(""), index.iter().collect::<Vec<_>>());
    assert_eq!(index.len(), 8);
}

#[test]
fn typing_berlin_suggests_one_city() {
    let index = catalog().city_index();
    assert_eq!(index.suggest("Berlin"), [BERLIN]);
}

#[test]
fn rendered_suggestion_list_has_city_and_see_all() {
    let index = catalog().city_index();
    let mut search = CitySearch::new(&index);
    search.type_query("Berlin");

    let suggestions = search.suggestions();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0], Suggestion::City(BERLIN));
    assert_eq!(suggestions[1].label(), ALL_CITIES_LABEL);
}

#[test]
fn selecting_berlin_lists_only_berlin_events() {
    let catalog = catalog();
    let index = catalog.city_index();
    let mut search = CitySearch::new(&index);
    search.type_query("Berlin");

    let first = search.suggestions()[0].clone();
    search.select(first).unwrap();
    assert_eq!(search.text(), BERLIN);

    let visible = search.visible_events(catalog.events());
    let expected: Vec<&Event> = catalog
        .events()
        .iter()
        .filter(|e| e.location == search.text())
        .collect();
    assert_eq!(visible, expected);
    assert_eq!(visible.len(), 2);
}

#[test]
fn see_all_cities_restores_full_list() {
    let catalog = catalog();
    let index = catalog.city_index();
    let mut search = CitySearch::new(&index);
    search.type_query("Berlin");
    search.select(Suggestion::City(BERLIN)).unwrap();
    search.type_query("Ber");
    search.select(Suggestion::AllCities).unwrap();

    assert_eq!(search.visible_events(catalog.events()).len(), 32);
}

#[test]
fn filter_berlin_returns_exactly_the_berlin_events() {
    let catalog = catalog();
    let berlin = catalog.filter_by_city(Some(BERLIN));
    let ids: Vec<&str> = berlin.iter().map(|e| e.id()).collect();
    assert_eq!(ids, ["evt04ber", "evt12ber"]);
}

#[test]
fn partial_query_is_not_a_selection() {
    assert!(catalog().filter_by_city(Some("Berlin")).is_empty());
}

#[test]
fn germany_matches_two_cities_in_first_seen_order() {
    let index = catalog().city_index();
    assert_eq!(index.suggest("Germany"), [BERLIN, "Munich, Germany"]);
}
