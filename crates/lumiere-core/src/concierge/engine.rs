//! The concierge engine.
//!
//! Stateless request/response: one utterance plus a conversation context in,
//! one reply plus a bounded recommendation list out. Classification is an
//! ordered first-match-wins cascade (see [`crate::concierge::intent`]);
//! greeting selection is the single randomized path and is injected so tests
//! can pin it.

use rand::Rng;

use crate::concierge::intent::{classify, DietaryNeed, Intent, SectionRequest};
use crate::concierge::model::{ConciergeResponse, ConversationContext};
use crate::concierge::replies;
use crate::menu::{Catalog, Category, CategoryFilter, MenuEntry, Mood};

/// Cap applied to most recommendation branches. Some branches return
/// unbounded lists; the cap is decided per branch in `respond`.
pub const RECOMMENDATION_LIMIT: usize = 3;

/// Picks an index into the greeting pool.
pub trait GreetingSelector: Send + Sync {
    /// Returns an index in `0..pool_len`. `pool_len` is always non-zero.
    fn select(&self, pool_len: usize) -> usize;
}

/// Production selector: uniform draw from the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomGreetingSelector;

impl GreetingSelector for RandomGreetingSelector {
    fn select(&self, pool_len: usize) -> usize {
        rand::thread_rng().gen_range(0..pool_len)
    }
}

/// Deterministic selector for tests.
#[derive(Debug)]
pub struct FixedGreetingSelector(pub usize);

impl GreetingSelector for FixedGreetingSelector {
    fn select(&self, pool_len: usize) -> usize {
        self.0 % pool_len
    }
}

/// Rule-based conversational recommendation engine.
///
/// Owns the catalog it recommends from. Every call is independent; the
/// engine mutates nothing and, greeting selection aside, is a pure function
/// of the utterance text.
pub struct ConciergeEngine {
    catalog: Catalog,
    greeting_selector: Box<dyn GreetingSelector>,
}

impl ConciergeEngine {
    /// Creates an engine with the production greeting selector.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_selector(catalog, Box::new(RandomGreetingSelector))
    }

    /// Creates an engine with an explicit greeting selector.
    pub fn with_selector(catalog: Catalog, greeting_selector: Box<dyn GreetingSelector>) -> Self {
        Self {
            catalog,
            greeting_selector,
        }
    }

    /// The catalog this engine recommends from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A greeting to seed a fresh conversation, drawn from the same pool as
    /// greeting replies, independently randomized.
    pub fn initial_greeting(&self) -> String {
        self.pick_greeting()
    }

    /// Maps one utterance to a reply and recommendation list.
    ///
    /// Total: every input produces a response, with the fallback branch as
    /// the last resort. `context` is accepted per the engine contract but
    /// not consulted yet; no caller threads it between turns (see
    /// [`ConversationContext`]).
    pub fn respond(&self, utterance: &str, _context: &ConversationContext) -> ConciergeResponse {
        let intent = classify(utterance);
        tracing::debug!(?intent, "classified utterance");

        match intent {
            Intent::Greeting => ConciergeResponse::reply_only(self.pick_greeting()),

            Intent::Mood(mood) => ConciergeResponse::with_recommendations(
                replies::mood_reply(mood),
                take_first(self.catalog.by_mood(mood), RECOMMENDATION_LIMIT),
            ),

            // Occasion picks are dishes that are either romantic-tagged or
            // featured, first three in card order.
            Intent::Occasion(occasion) => {
                let picks = self
                    .catalog
                    .entries()
                    .iter()
                    .filter(|e| e.has_mood(Mood::Romantic) || e.featured)
                    .take(RECOMMENDATION_LIMIT)
                    .cloned()
                    .collect();
                ConciergeResponse::with_recommendations(replies::occasion_reply(occasion), picks)
            }

            // Vegetarian returns every match; gluten-free returns at most
            // three.
            Intent::Dietary(need) => {
                let matches: Vec<MenuEntry> = self
                    .catalog
                    .entries()
                    .iter()
                    .filter(|e| e.has_dietary(need.label()))
                    .cloned()
                    .collect();
                let picks = match need {
                    DietaryNeed::Vegetarian => matches,
                    DietaryNeed::GlutenFree => take_first(matches, RECOMMENDATION_LIMIT),
                };
                ConciergeResponse::with_recommendations(replies::dietary_reply(need), picks)
            }

            Intent::Pairing(Some(dish)) => {
                ConciergeResponse::reply_only(replies::pairing_wisdom(dish))
            }
            Intent::Pairing(None) => ConciergeResponse::reply_only(replies::PAIRING_GENERIC_REPLY),

            Intent::Recommendation => ConciergeResponse::with_recommendations(
                replies::RECOMMENDATION_REPLY,
                self.catalog.featured(),
            ),

            Intent::Section(section) => {
                let picks = match section {
                    SectionRequest::Appetizers => take_first(
                        self.catalog.by_category(CategoryFilter::Only(Category::Appetizers)),
                        RECOMMENDATION_LIMIT,
                    ),
                    SectionRequest::Mains => take_first(
                        self.catalog.by_category(CategoryFilter::Only(Category::Mains)),
                        RECOMMENDATION_LIMIT,
                    ),
                    // The dessert card is small; show all of it.
                    SectionRequest::Desserts => {
                        self.catalog.by_category(CategoryFilter::Only(Category::Desserts))
                    }
                };
                ConciergeResponse::with_recommendations(replies::section_reply(section), picks)
            }

            Intent::Price => ConciergeResponse::reply_only(replies::PRICE_REPLY),

            Intent::Fallback => ConciergeResponse::reply_only(replies::FALLBACK_REPLY),
        }
    }

    fn pick_greeting(&self) -> String {
        let index = self.greeting_selector.select(replies::GREETING_POOL.len());
        replies::GREETING_POOL[index].to_string()
    }
}

fn take_first(entries: Vec<MenuEntry>, limit: usize) -> Vec<MenuEntry> {
    entries.into_iter().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::default_menu;

    fn engine() -> ConciergeEngine {
        ConciergeEngine::new(Catalog::new(default_menu()).unwrap())
    }

    fn pinned_engine(index: usize) -> ConciergeEngine {
        ConciergeEngine::with_selector(
            Catalog::new(default_menu()).unwrap(),
            Box::new(FixedGreetingSelector(index)),
        )
    }

    fn respond(text: &str) -> ConciergeResponse {
        engine().respond(text, &ConversationContext::default())
    }

    #[test]
    fn test_greeting_reply_comes_from_pool_with_no_recommendations() {
        let response = respond("hello there");
        assert!(replies::GREETING_POOL.contains(&response.reply.as_str()));
        assert!(response.recommendations.is_empty());
    }

    #[test]
    fn test_pinned_selector_makes_greeting_deterministic() {
        let engine = pinned_engine(2);
        let context = ConversationContext::default();
        assert_eq!(engine.respond("hi", &context).reply, replies::GREETING_POOL[2]);
        assert_eq!(engine.initial_greeting(), replies::GREETING_POOL[2]);
    }

    #[test]
    fn test_mood_branch_caps_at_three_matching_entries() {
        let response = respond("somewhere romantic tonight");
        assert_eq!(response.reply, replies::mood_reply(Mood::Romantic));
        assert!(response.recommendations.len() <= RECOMMENDATION_LIMIT);
        assert!(!response.recommendations.is_empty());
        for entry in &response.recommendations {
            assert!(entry.has_mood(Mood::Romantic));
        }
    }

    #[test]
    fn test_mood_picks_follow_card_order() {
        let engine = engine();
        let expected: Vec<String> = engine
            .catalog()
            .by_mood(Mood::Romantic)
            .into_iter()
            .take(RECOMMENDATION_LIMIT)
            .map(|e| e.id)
            .collect();
        let response = engine.respond("something romantic", &ConversationContext::default());
        let got: Vec<String> = response.recommendations.into_iter().map(|e| e.id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_occasion_picks_are_romantic_or_featured() {
        let response = respond("I'm celebrating our anniversary tonight");
        assert_eq!(
            response.reply,
            replies::occasion_reply(crate::concierge::model::Occasion::Anniversary)
        );
        assert!(response.recommendations.len() <= RECOMMENDATION_LIMIT);
        for entry in &response.recommendations {
            assert!(entry.has_mood(Mood::Romantic) || entry.featured);
        }
    }

    #[test]
    fn test_vegetarian_branch_is_unbounded() {
        let engine = engine();
        let expected: Vec<String> = engine
            .catalog()
            .entries()
            .iter()
            .filter(|e| e.has_dietary("vegetarian"))
            .map(|e| e.id.clone())
            .collect();
        assert!(expected.len() > RECOMMENDATION_LIMIT, "preset too small for this test");

        let response = engine.respond("vegetarian options?", &ConversationContext::default());
        let got: Vec<String> = response.recommendations.into_iter().map(|e| e.id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_gluten_free_branch_is_capped() {
        let response = respond("do you do gluten free?");
        assert!(response.recommendations.len() <= RECOMMENDATION_LIMIT);
        assert!(!response.recommendations.is_empty());
        for entry in &response.recommendations {
            assert!(entry.has_dietary("gluten-free"));
        }
    }

    #[test]
    fn test_pairing_known_dish_has_no_recommendations() {
        let response = respond("which wine with the lobster?");
        assert_eq!(
            response.reply,
            replies::pairing_wisdom(crate::concierge::intent::PairingDish::Lobster)
        );
        assert!(response.recommendations.is_empty());
    }

    #[test]
    fn test_recommendation_branch_returns_all_featured() {
        let engine = engine();
        let response = engine.respond("what do you recommend?", &ConversationContext::default());
        assert_eq!(response.reply, replies::RECOMMENDATION_REPLY);
        let got: Vec<String> = response.recommendations.into_iter().map(|e| e.id).collect();
        let expected: Vec<String> = engine.catalog().featured().into_iter().map(|e| e.id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_dessert_section_is_unbounded() {
        let engine = engine();
        let all_desserts = engine
            .catalog()
            .by_category(CategoryFilter::Only(Category::Desserts));
        let response = engine.respond("something sweet?", &ConversationContext::default());
        assert_eq!(response.recommendations, all_desserts);
    }

    #[test]
    fn test_mains_section_is_capped() {
        let response = respond("what mains do you have?");
        assert_eq!(response.recommendations.len(), RECOMMENDATION_LIMIT);
        for entry in &response.recommendations {
            assert_eq!(entry.category, Category::Mains);
        }
    }

    #[test]
    fn test_price_and_fallback_have_no_recommendations() {
        let price = respond("how expensive is dinner?");
        assert_eq!(price.reply, replies::PRICE_REPLY);
        assert!(price.recommendations.is_empty());

        let fallback = respond("what's popular tonight?");
        assert_eq!(fallback.reply, replies::FALLBACK_REPLY);
        assert!(fallback.recommendations.is_empty());
    }

    #[test]
    fn test_non_greeting_responses_are_idempotent() {
        let engine = engine();
        let context = ConversationContext::default();
        let first = engine.respond("treat yourself dinner", &context);
        let second = engine.respond("treat yourself dinner", &context);
        assert_eq!(first.reply, second.reply);
        assert_eq!(first.recommendations, second.recommendations);
    }

    #[test]
    fn test_initial_greeting_covers_the_pool() {
        // Statistical coverage: with 200 draws from a 5-entry pool, missing
        // a greeting is vanishingly unlikely.
        let engine = engine();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(engine.initial_greeting());
        }
        assert_eq!(seen.len(), replies::GREETING_POOL.len());
    }
}
