//! Menu domain model.
//!
//! Entries on the card are authored once, validated at load, and never
//! mutated afterwards. The spelling used in menu files and on the wire is
//! kebab-case (`chefs-selection`, `gluten-free`).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Sections of the menu card.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    Appetizers,
    Mains,
    Desserts,
    ChefsSelection,
}

/// Dining moods a dish can be tagged with.
///
/// Declaration order matters: it is the order in which the concierge tests
/// moods against an utterance, so the first declared mood wins a tie.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mood {
    Romantic,
    Indulgent,
    Light,
    Adventurous,
}

impl Mood {
    /// Phrases that signal this mood in free text, the mood's own name
    /// included. Matching is substring-based on the lower-cased utterance.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Mood::Romantic => &["romantic", "romance", "love", "partner"],
            Mood::Indulgent => &["indulgent", "indulge", "treat", "splurge"],
            Mood::Light => &["light", "fresh", "healthy"],
            Mood::Adventurous => &["adventurous", "adventure", "surprise", "new"],
        }
    }
}

/// A single dish on the card.
///
/// Immutable after the catalog is built. `id` is the stable key used for
/// lookups and transcript references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Unique, stable identifier
    pub id: String,
    /// Display name of the dish
    pub name: String,
    /// Display description
    pub description: String,
    /// Price in whole currency units, matching the storefront's display convention
    pub price: u32,
    /// Menu section this dish belongs to
    pub category: Category,
    /// Never empty; the first element doubles as the primary display mood
    pub moods: Vec<Mood>,
    /// Free-form dietary labels (e.g. "vegetarian", "gluten-free")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary: Vec<String>,
    /// Suggested beverage pairing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pairing: Option<String>,
    /// Promotional/highlighted status
    #[serde(default)]
    pub featured: bool,
}

impl MenuEntry {
    /// Whether this dish carries the given mood tag.
    pub fn has_mood(&self, mood: Mood) -> bool {
        self.moods.contains(&mood)
    }

    /// The primary display mood, i.e. the first declared mood tag.
    pub fn primary_mood(&self) -> Option<Mood> {
        self.moods.first().copied()
    }

    /// Whether this dish carries the given dietary label (case-insensitive).
    pub fn has_dietary(&self, label: &str) -> bool {
        self.dietary.iter().any(|d| d.eq_ignore_ascii_case(label))
    }
}
