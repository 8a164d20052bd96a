//! The static, in-memory menu catalog and its query operations.

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{LumiereError, Result};
use crate::menu::model::{Category, MenuEntry, Mood};

/// Category selector for [`Catalog::by_category`].
///
/// The storefront exposes an explicit "all" value alongside the concrete
/// sections, so the filter models it as its own variant rather than a magic
/// string at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every entry, unfiltered
    All,
    /// Entries in one section only
    Only(Category),
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = LumiereError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| {
                LumiereError::config(format!(
                    "unknown category '{s}' (expected all, appetizers, mains, desserts or chefs-selection)"
                ))
            })
    }
}

/// Read-only collection of menu entries, in card-definition order.
///
/// Built once at startup and immutable for the life of the process. Every
/// query preserves definition order; a miss is an empty result or `None`,
/// never an error.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<MenuEntry>,
}

impl Catalog {
    /// Builds a catalog, rejecting entry lists that violate the card's
    /// invariants: ids must be unique and every dish must carry at least
    /// one mood tag. Violations surface here, at load time; the concierge
    /// never sees an invalid card.
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(LumiereError::invalid_menu(format!(
                    "duplicate menu entry id '{}'",
                    entry.id
                )));
            }
            if entry.moods.is_empty() {
                return Err(LumiereError::invalid_menu(format!(
                    "menu entry '{}' has no mood tags",
                    entry.id
                )));
            }
        }
        tracing::debug!(entries = entries.len(), "catalog built");
        Ok(Self { entries })
    }

    /// All entries in card-definition order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Number of entries on the card.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the card is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up one entry by id.
    pub fn get(&self, id: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries matching the category filter, order preserved.
    pub fn by_category(&self, filter: CategoryFilter) -> Vec<MenuEntry> {
        match filter {
            CategoryFilter::All => self.entries.clone(),
            CategoryFilter::Only(category) => self
                .entries
                .iter()
                .filter(|e| e.category == category)
                .cloned()
                .collect(),
        }
    }

    /// Entries whose mood tags contain the given mood, order preserved.
    pub fn by_mood(&self, mood: Mood) -> Vec<MenuEntry> {
        self.entries
            .iter()
            .filter(|e| e.has_mood(mood))
            .cloned()
            .collect()
    }

    /// Entries flagged as featured, order preserved.
    pub fn featured(&self) -> Vec<MenuEntry> {
        self.entries
            .iter()
            .filter(|e| e.featured)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::preset::default_menu;

    fn catalog() -> Catalog {
        Catalog::new(default_menu()).unwrap()
    }

    fn minimal_entry(id: &str, moods: Vec<Mood>) -> MenuEntry {
        MenuEntry {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price: 10,
            category: Category::Mains,
            moods,
            dietary: vec![],
            pairing: None,
            featured: false,
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let entries = vec![
            minimal_entry("dish", vec![Mood::Light]),
            minimal_entry("dish", vec![Mood::Romantic]),
        ];
        let err = Catalog::new(entries).unwrap_err();
        assert!(err.is_invalid_menu(), "expected InvalidMenu, got {err}");
    }

    #[test]
    fn test_rejects_empty_moods() {
        let entries = vec![minimal_entry("dish", vec![])];
        assert!(Catalog::new(entries).is_err());
    }

    #[test]
    fn test_get_miss_is_none() {
        assert!(catalog().get("no-such-dish").is_none());
    }

    #[test]
    fn test_by_category_all_returns_everything() {
        let catalog = catalog();
        assert_eq!(
            catalog.by_category(CategoryFilter::All).len(),
            catalog.len()
        );
    }

    #[test]
    fn test_by_category_preserves_order() {
        let catalog = catalog();
        let mains = catalog.by_category(Category::Mains.into());
        let order_in_card: Vec<&str> = catalog
            .entries()
            .iter()
            .filter(|e| e.category == Category::Mains)
            .map(|e| e.id.as_str())
            .collect();
        let order_in_result: Vec<&str> = mains.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(order_in_result, order_in_card);
    }

    #[test]
    fn test_by_mood_filters_on_tag() {
        for entry in catalog().by_mood(Mood::Adventurous) {
            assert!(entry.has_mood(Mood::Adventurous));
        }
    }

    #[test]
    fn test_featured_subset() {
        let catalog = catalog();
        let featured = catalog.featured();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|e| e.featured));
        assert!(featured.len() < catalog.len());
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!(
            "all".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::All
        );
        assert_eq!(
            "desserts".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Desserts)
        );
        assert!("brunch".parse::<CategoryFilter>().is_err());
    }
}
