//! Canned concierge reply text.

use crate::concierge::intent::{DietaryNeed, PairingDish, SectionRequest};
use crate::concierge::model::Occasion;
use crate::menu::Mood;

/// The pool greetings are drawn from, for both the initial greeting and
/// greeting utterances. Selection is the engine's only randomized path.
pub const GREETING_POOL: &[&str] = &[
    "Good evening, and welcome to Lumière. How may I make tonight special?",
    "Welcome back to Lumière. Tell me what you're in the mood for and I'll take it from there.",
    "Delighted to have you with us. Shall we find you something wonderful?",
    "Good evening! The kitchen is in fine form tonight. What sounds tempting?",
    "Welcome to Lumière. A mood, an occasion, a craving — give me any of them and I'll do the rest.",
];

pub const RECOMMENDATION_REPLY: &str =
    "With pleasure. These are the dishes the kitchen is proudest of tonight.";

pub const PAIRING_GENERIC_REPLY: &str =
    "Happily — tell me the dish and I'll suggest the glass. The wagyu, the lobster, the risotto and the desserts are my specialties.";

pub const PRICE_REPLY: &str =
    "Starters run 18 to 24, mains 34 to 120, and desserts 12 to 16. The chef's omakase tasting is 145 with an optional pairing flight.";

pub const FALLBACK_REPLY: &str =
    "I'd love to point you somewhere wonderful. Tell me the occasion, the mood you're after, or any dietary preference, and I'll curate from there.";

pub fn mood_reply(mood: Mood) -> &'static str {
    match mood {
        Mood::Romantic => {
            "For a romantic evening I'd steer you here — dishes made for sharing and lingering."
        }
        Mood::Indulgent => {
            "Feeling indulgent? Excellent. These are the richest things we do, no restraint whatsoever."
        }
        Mood::Light => {
            "Something bright and easy, then. These plates are fresh without being austere."
        }
        Mood::Adventurous => {
            "An adventurous palate — my favorite kind. These will take you somewhere new."
        }
    }
}

pub fn occasion_reply(occasion: Occasion) -> &'static str {
    match occasion {
        Occasion::Anniversary => {
            "An anniversary calls for something memorable. Congratulations — these are the dishes we reach for on nights like this."
        }
        Occasion::Birthday => {
            "Happy birthday! Let's make it festive — these are celebration plates through and through."
        }
        Occasion::Business => {
            "For a business dinner you want assured and unfussy. These impress without stealing the conversation."
        }
        Occasion::Date => {
            "A date — wonderful. These are elegant, easy to share, and kind to nerves."
        }
    }
}

pub fn dietary_reply(need: DietaryNeed) -> &'static str {
    match need {
        DietaryNeed::Vegetarian => {
            "Our kitchen takes vegetables seriously. Every one of these is fully vegetarian."
        }
        DietaryNeed::GlutenFree => {
            "Of course — these are prepared gluten-free, and the kitchen keeps them that way end to end."
        }
    }
}

pub fn pairing_wisdom(dish: PairingDish) -> &'static str {
    match dish {
        PairingDish::Wagyu => {
            "With the wagyu, an aged Barolo — enough tannin to stand up to the marbling, enough age to stay graceful."
        }
        PairingDish::Lobster => {
            "The lobster wants white Burgundy: richness to match the butter, acidity to cut it."
        }
        PairingDish::Risotto => {
            "For the risotto, a Soave Classico — saffron loves a wine that stays out of its way."
        }
        PairingDish::Dessert => {
            "With dessert, a tawny Port. It flatters chocolate and caramel alike and never argues."
        }
    }
}

pub fn section_reply(section: SectionRequest) -> &'static str {
    match section {
        SectionRequest::Appetizers => "To begin, these are the starters I'd point you to.",
        SectionRequest::Mains => "For the main event, here is where I'd look first.",
        SectionRequest::Desserts => "Save room — here is the whole dessert card.",
    }
}
