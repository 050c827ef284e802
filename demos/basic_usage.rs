//! Basic usage example for eventdb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled event catalog
//! - Build the city index and ask for suggestions
//! - Drive a city search box and filter events by the chosen city

use eventdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== eventdb-rs Basic Usage Example ===\n");

    let catalog = Catalog::sample()?;
    let stats = catalog.stats();
    println!("Loaded {} events in {} cities\n", stats.events, stats.cities);

    // Example 1: every known city
    println!("--- Example 1: Distinct cities ---");
    let index = catalog.city_index();
    for (i, city) in index.iter().enumerate() {
        println!("{}. {}", i + 1, city);
    }
    println!();

    // Example 2: substring suggestions
    println!("--- Example 2: Suggestions for \"erlin\" ---");
    for city in index.suggest("erlin") {
        println!("- {city}");
    }
    println!();

    // Example 3: the search box
    println!("--- Example 3: Typing and selecting ---");
    let mut search = CitySearch::new(&index);
    println!("Before typing: {} events visible", search.visible_events(catalog.events()).len());

    search.type_query("Berlin");
    for s in search.suggestions() {
        println!("  suggestion: {s}");
    }

    search.select(Suggestion::City("Berlin, Germany"))?;
    let visible = search.visible_events(catalog.events());
    println!("Selected {:?}: {} events", search.text(), visible.len());
    for e in visible {
        println!("  {} ({})", e.summary(), e.starts_at().unwrap_or("-"));
    }

    search.select(Suggestion::AllCities)?;
    println!(
        "After \"{}\": {} events visible",
        ALL_CITIES_LABEL,
        search.visible_events(catalog.events()).len()
    );

    println!("\n=== Example completed successfully ===");
    Ok(())
}
