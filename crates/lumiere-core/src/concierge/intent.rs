//! Utterance classification.
//!
//! An ordered cascade of keyword rules; the first rule whose predicate
//! matches decides the intent entirely. The ordering is the tie-break
//! policy: an utterance mentioning both a mood and a dietary preference
//! resolves as a mood request because moods are tested first.

use strum::IntoEnumIterator;

use crate::concierge::model::Occasion;
use crate::menu::Mood;

/// Greeting tokens, tested with `starts_with` on the trimmed, lower-cased
/// utterance.
pub const GREETING_TOKENS: &[&str] = &["hi", "hello", "hey", "good evening", "greetings"];

const PAIRING_KEYWORDS: &[&str] = &["pair", "wine", "drink"];
const RECOMMENDATION_KEYWORDS: &[&str] = &["recommend", "suggest", "what should"];
const PRICE_KEYWORDS: &[&str] = &["price", "budget", "expensive"];

/// Dietary preferences the concierge recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietaryNeed {
    Vegetarian,
    GlutenFree,
}

impl DietaryNeed {
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            DietaryNeed::Vegetarian => &["vegetarian", "vegan"],
            DietaryNeed::GlutenFree => &["gluten", "celiac"],
        }
    }

    /// The dietary label the recommendation filter matches against.
    pub fn label(&self) -> &'static str {
        match self {
            DietaryNeed::Vegetarian => "vegetarian",
            DietaryNeed::GlutenFree => "gluten-free",
        }
    }
}

/// Dishes the concierge keeps pairing wisdom for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingDish {
    Wagyu,
    Lobster,
    Risotto,
    Dessert,
}

impl PairingDish {
    fn keyword(&self) -> &'static str {
        match self {
            PairingDish::Wagyu => "wagyu",
            PairingDish::Lobster => "lobster",
            PairingDish::Risotto => "risotto",
            PairingDish::Dessert => "dessert",
        }
    }

    const ALL: [PairingDish; 4] = [
        PairingDish::Wagyu,
        PairingDish::Lobster,
        PairingDish::Risotto,
        PairingDish::Dessert,
    ];
}

/// Menu sections a guest can ask for by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRequest {
    Appetizers,
    Mains,
    Desserts,
}

impl SectionRequest {
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            SectionRequest::Appetizers => &["appetizer", "starter"],
            SectionRequest::Mains => &["main", "entrée", "entree"],
            SectionRequest::Desserts => &["dessert", "sweet"],
        }
    }

    const ALL: [SectionRequest; 3] = [
        SectionRequest::Appetizers,
        SectionRequest::Mains,
        SectionRequest::Desserts,
    ];
}

/// Outcome of classifying one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A leading greeting token
    Greeting,
    /// A mood keyword or synonym
    Mood(Mood),
    /// An occasion keyword or synonym
    Occasion(Occasion),
    /// A dietary preference
    Dietary(DietaryNeed),
    /// A pairing question, about a known dish or in general
    Pairing(Option<PairingDish>),
    /// A generic "what do you recommend" request
    Recommendation,
    /// A request for one menu section
    Section(SectionRequest),
    /// A price or budget question
    Price,
    /// Nothing matched
    Fallback,
}

/// Classifies an utterance against the ordered rule cascade.
///
/// Total: every input maps to an intent, with [`Intent::Fallback`] as the
/// guaranteed last resort. Pure, deterministic, no state.
pub fn classify(utterance: &str) -> Intent {
    let text = utterance.trim().to_lowercase();

    if GREETING_TOKENS.iter().any(|token| text.starts_with(token)) {
        return Intent::Greeting;
    }

    for mood in Mood::iter() {
        if mood.keywords().iter().any(|k| text.contains(k)) {
            return Intent::Mood(mood);
        }
    }

    for occasion in Occasion::iter() {
        if occasion.keywords().iter().any(|k| text.contains(k)) {
            return Intent::Occasion(occasion);
        }
    }

    for need in [DietaryNeed::Vegetarian, DietaryNeed::GlutenFree] {
        if need.keywords().iter().any(|k| text.contains(k)) {
            return Intent::Dietary(need);
        }
    }

    if PAIRING_KEYWORDS.iter().any(|k| text.contains(k)) {
        let dish = PairingDish::ALL
            .iter()
            .copied()
            .find(|d| text.contains(d.keyword()));
        return Intent::Pairing(dish);
    }

    if RECOMMENDATION_KEYWORDS.iter().any(|k| text.contains(k)) {
        return Intent::Recommendation;
    }

    for section in SectionRequest::ALL {
        if section.keywords().iter().any(|k| text.contains(k)) {
            return Intent::Section(section);
        }
    }

    if PRICE_KEYWORDS.iter().any(|k| text.contains(k)) {
        return Intent::Price;
    }

    Intent::Fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_anchored_at_start() {
        assert_eq!(classify("Good evening!"), Intent::Greeting);
        assert_eq!(classify("hey there"), Intent::Greeting);
        // A greeting token in the middle of the text does not anchor.
        assert_ne!(classify("I said hello to the chef"), Intent::Greeting);
    }

    #[test]
    fn test_mood_synonyms() {
        assert_eq!(classify("something romantic please"), Intent::Mood(Mood::Romantic));
        assert_eq!(classify("dinner with my partner"), Intent::Mood(Mood::Romantic));
        assert_eq!(classify("I want to splurge"), Intent::Mood(Mood::Indulgent));
        assert_eq!(classify("something fresh and simple"), Intent::Mood(Mood::Light));
        assert_eq!(classify("surprise me"), Intent::Mood(Mood::Adventurous));
    }

    #[test]
    fn test_mood_outranks_dietary() {
        // Both a mood and a dietary keyword present: mood wins because it
        // is tested first.
        assert_eq!(
            classify("romantic vegetarian options"),
            Intent::Mood(Mood::Romantic)
        );
    }

    #[test]
    fn test_occasions() {
        assert_eq!(
            classify("we are celebrating tonight"),
            Intent::Occasion(Occasion::Anniversary)
        );
        assert_eq!(
            classify("it's my birthday"),
            Intent::Occasion(Occasion::Birthday)
        );
        assert_eq!(
            classify("taking a client out"),
            Intent::Occasion(Occasion::Business)
        );
        assert_eq!(classify("first date tips"), Intent::Occasion(Occasion::Date));
    }

    #[test]
    fn test_dietary() {
        assert_eq!(
            classify("any vegan choices?"),
            Intent::Dietary(DietaryNeed::Vegetarian)
        );
        assert_eq!(
            classify("I'm celiac"),
            Intent::Dietary(DietaryNeed::GlutenFree)
        );
    }

    #[test]
    fn test_pairing_with_and_without_dish() {
        assert_eq!(
            classify("what wine goes with the wagyu?"),
            Intent::Pairing(Some(PairingDish::Wagyu))
        );
        assert_eq!(
            classify("can you pair the risotto"),
            Intent::Pairing(Some(PairingDish::Risotto))
        );
        assert_eq!(classify("what should I drink"), Intent::Pairing(None));
    }

    #[test]
    fn test_recommendation_keywords() {
        assert_eq!(classify("what do you recommend?"), Intent::Recommendation);
        assert_eq!(classify("any suggestions?"), Intent::Recommendation);
        assert_eq!(classify("what should I order"), Intent::Recommendation);
    }

    #[test]
    fn test_sections() {
        assert_eq!(
            classify("show me the starters"),
            Intent::Section(SectionRequest::Appetizers)
        );
        assert_eq!(
            classify("which entrées do you have"),
            Intent::Section(SectionRequest::Mains)
        );
        assert_eq!(
            classify("something sweet to finish"),
            Intent::Section(SectionRequest::Desserts)
        );
    }

    #[test]
    fn test_price() {
        assert_eq!(classify("is it expensive?"), Intent::Price);
    }

    #[test]
    fn test_whats_popular_falls_through() {
        // Contains "what" but not "what should"; no other table matches.
        assert_eq!(classify("what's popular tonight?"), Intent::Fallback);
    }

    #[test]
    fn test_fallback_guarantees_totality() {
        assert_eq!(classify(""), Intent::Fallback);
        assert_eq!(classify("qwertyuiop"), Intent::Fallback);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let utterance = "I want something romantic for our anniversary";
        assert_eq!(classify(utterance), classify(utterance));
    }
}
