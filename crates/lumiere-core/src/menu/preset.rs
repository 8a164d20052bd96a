//! The built-in menu card.
//!
//! Used when no menu file is present. Card order is significant: queries
//! preserve it, and the concierge's "first three" selections follow it.

use crate::menu::model::{Category, MenuEntry, Mood};

/// Returns the official built-in menu card.
pub fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            id: "seared-scallops".to_string(),
            name: "Seared Hokkaido Scallops".to_string(),
            description: "Cauliflower velouté, brown butter, chive oil".to_string(),
            price: 24,
            category: Category::Appetizers,
            moods: vec![Mood::Romantic, Mood::Light],
            dietary: vec!["gluten-free".to_string()],
            pairing: Some("Chablis premier cru".to_string()),
            featured: true,
        },
        MenuEntry {
            id: "burrata".to_string(),
            name: "Burrata with Heirloom Tomatoes".to_string(),
            description: "Basil oil, smoked sea salt, grilled sourdough".to_string(),
            price: 19,
            category: Category::Appetizers,
            moods: vec![Mood::Light],
            dietary: vec!["vegetarian".to_string()],
            pairing: None,
            featured: false,
        },
        MenuEntry {
            id: "tuna-tartare".to_string(),
            name: "Yellowfin Tuna Tartare".to_string(),
            description: "Yuzu kosho, avocado, crisp nori".to_string(),
            price: 22,
            category: Category::Appetizers,
            moods: vec![Mood::Adventurous, Mood::Light],
            dietary: vec!["gluten-free".to_string()],
            pairing: None,
            featured: false,
        },
        MenuEntry {
            id: "wild-mushroom-tart".to_string(),
            name: "Wild Mushroom Tart".to_string(),
            description: "Chanterelles, taleggio, thyme crust".to_string(),
            price: 18,
            category: Category::Appetizers,
            moods: vec![Mood::Indulgent],
            dietary: vec!["vegetarian".to_string()],
            pairing: None,
            featured: false,
        },
        MenuEntry {
            id: "wagyu-ribeye".to_string(),
            name: "A5 Wagyu Ribeye".to_string(),
            description: "Charred alliums, bone marrow jus, smoked salt".to_string(),
            price: 120,
            category: Category::Mains,
            moods: vec![Mood::Indulgent, Mood::Romantic],
            dietary: vec!["gluten-free".to_string()],
            pairing: Some("Aged Barolo".to_string()),
            featured: true,
        },
        MenuEntry {
            id: "butter-poached-lobster".to_string(),
            name: "Butter-Poached Lobster".to_string(),
            description: "Champagne beurre blanc, sea herbs, fingerlings".to_string(),
            price: 68,
            category: Category::Mains,
            moods: vec![Mood::Romantic, Mood::Indulgent],
            dietary: vec![],
            pairing: Some("White Burgundy".to_string()),
            featured: true,
        },
        MenuEntry {
            id: "saffron-risotto".to_string(),
            name: "Saffron Risotto".to_string(),
            description: "Carnaroli rice, aged parmesan, gold leaf".to_string(),
            price: 34,
            category: Category::Mains,
            moods: vec![Mood::Romantic, Mood::Light],
            dietary: vec!["vegetarian".to_string(), "gluten-free".to_string()],
            pairing: Some("Soave Classico".to_string()),
            featured: false,
        },
        MenuEntry {
            id: "miso-black-cod".to_string(),
            name: "Miso-Glazed Black Cod".to_string(),
            description: "Charred bok choy, dashi butter, pickled ginger".to_string(),
            price: 46,
            category: Category::Mains,
            moods: vec![Mood::Adventurous],
            dietary: vec![],
            pairing: None,
            featured: false,
        },
        MenuEntry {
            id: "five-spice-duck".to_string(),
            name: "Five-Spice Duck Breast".to_string(),
            description: "Plum reduction, confit leg croquette, chicories".to_string(),
            price: 52,
            category: Category::Mains,
            moods: vec![Mood::Adventurous, Mood::Indulgent],
            dietary: vec![],
            pairing: Some("Oregon Pinot Noir".to_string()),
            featured: false,
        },
        MenuEntry {
            id: "garden-wellington".to_string(),
            name: "Garden Wellington".to_string(),
            description: "Roasted root vegetables, lentils, watercress salad".to_string(),
            price: 38,
            category: Category::Mains,
            moods: vec![Mood::Light],
            dietary: vec!["vegetarian".to_string()],
            pairing: None,
            featured: false,
        },
        MenuEntry {
            id: "chocolate-souffle".to_string(),
            name: "Dark Chocolate Soufflé".to_string(),
            description: "Valrhona 70%, crème anglaise, cocoa nib brittle".to_string(),
            price: 16,
            category: Category::Desserts,
            moods: vec![Mood::Indulgent, Mood::Romantic],
            dietary: vec!["vegetarian".to_string()],
            pairing: Some("Tawny Port".to_string()),
            featured: true,
        },
        MenuEntry {
            id: "lemon-verbena-sorbet".to_string(),
            name: "Lemon Verbena Sorbet".to_string(),
            description: "Macerated berries, olive oil, flaky salt".to_string(),
            price: 12,
            category: Category::Desserts,
            moods: vec![Mood::Light],
            dietary: vec!["vegetarian".to_string(), "gluten-free".to_string()],
            pairing: None,
            featured: false,
        },
        MenuEntry {
            id: "creme-brulee".to_string(),
            name: "Vanilla Bean Crème Brûlée".to_string(),
            description: "Tahitian vanilla, burnt sugar, langue de chat".to_string(),
            price: 14,
            category: Category::Desserts,
            moods: vec![Mood::Romantic, Mood::Indulgent],
            dietary: vec!["vegetarian".to_string()],
            pairing: None,
            featured: false,
        },
        MenuEntry {
            id: "omakase-tasting".to_string(),
            name: "Chef's Omakase Tasting".to_string(),
            description: "Seven courses at the chef's whim, changes nightly".to_string(),
            price: 145,
            category: Category::ChefsSelection,
            moods: vec![Mood::Adventurous, Mood::Indulgent],
            dietary: vec![],
            pairing: Some("Sommelier's pairing flight".to_string()),
            featured: true,
        },
    ]
}
