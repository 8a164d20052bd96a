//! Concierge domain: utterance classification, canned replies, and the
//! recommendation engine.

pub mod engine;
pub mod intent;
pub mod model;
pub mod replies;

pub use engine::{
    ConciergeEngine, FixedGreetingSelector, GreetingSelector, RandomGreetingSelector,
    RECOMMENDATION_LIMIT,
};
pub use intent::{classify, DietaryNeed, Intent, PairingDish, SectionRequest};
pub use model::{ConciergeResponse, ConversationContext, Occasion};
