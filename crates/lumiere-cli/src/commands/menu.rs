//! Menu card printing.

use anyhow::{anyhow, Result};
use colored::Colorize;
use strum::IntoEnumIterator;

use lumiere_core::menu::{Catalog, Category, CategoryFilter, MenuEntry, Mood};

/// Prints the card, optionally filtered to one section, mood, or the
/// featured subset. Filters are mutually exclusive (enforced by clap).
pub fn run(
    catalog: &Catalog,
    category: Option<String>,
    mood: Option<String>,
    featured: bool,
) -> Result<()> {
    let entries: Vec<MenuEntry> = if featured {
        catalog.featured()
    } else if let Some(mood) = mood {
        let mood: Mood = mood.parse().map_err(|_| {
            anyhow!("unknown mood '{mood}' (expected romantic, indulgent, light or adventurous)")
        })?;
        catalog.by_mood(mood)
    } else if let Some(category) = category {
        let filter: CategoryFilter = category.parse()?;
        catalog.by_category(filter)
    } else {
        catalog.by_category(CategoryFilter::All)
    };

    if entries.is_empty() {
        println!("{}", "Nothing on the card matches that filter.".yellow());
        return Ok(());
    }
    print_card(&entries);
    Ok(())
}

/// Prints entries grouped by section, in card order.
pub fn print_card(entries: &[MenuEntry]) {
    for category in Category::iter() {
        let section: Vec<&MenuEntry> = entries.iter().filter(|e| e.category == category).collect();
        if section.is_empty() {
            continue;
        }

        println!(
            "{}",
            category.to_string().to_uppercase().bright_magenta().bold()
        );
        for entry in section {
            let marker = if entry.featured { "* " } else { "  " };
            println!(
                "{}{} {}",
                marker,
                format!("{:<32}", entry.name).bold(),
                format!("{:>4}", entry.price)
            );
            println!("      {}", entry.description.bright_black());

            let mut tags: Vec<String> = entry.moods.iter().map(|m| m.to_string()).collect();
            tags.extend(entry.dietary.iter().cloned());
            println!("      {}", tags.join(", ").cyan());

            if let Some(pairing) = &entry.pairing {
                println!("      {}", format!("pairs with {pairing}").bright_black());
            }
        }
        println!();
    }
}
