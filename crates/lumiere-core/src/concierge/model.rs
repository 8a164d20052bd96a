//! Concierge request/response models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::menu::{MenuEntry, Mood};

/// Occasions the concierge recognizes.
///
/// Declaration order is the evaluation order of occasion detection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Occasion {
    Anniversary,
    Birthday,
    Business,
    Date,
}

impl Occasion {
    /// Phrases that signal this occasion, the occasion's own name included.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Occasion::Anniversary => &["anniversary", "celebrating"],
            Occasion::Birthday => &["birthday"],
            Occasion::Business => &["business", "client"],
            Occasion::Date => &["date"],
        }
    }
}

/// Per-session hint state the chat surface may hand to the concierge.
///
/// Accepted by [`crate::concierge::ConciergeEngine::respond`] but not
/// threaded between turns: every current caller passes a fresh default, so
/// each invocation starts from an empty context. Known limitation,
/// preserved as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Last mood the guest expressed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// Last dietary preference the guest expressed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary: Option<String>,
    /// Occasion the guest mentioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<Occasion>,
    /// Ids of entries already recommended this session
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_ids: Vec<String>,
}

/// One concierge turn: a reply and the dishes to present alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConciergeResponse {
    /// Natural-language reply text
    pub reply: String,
    /// Dishes to present, possibly empty; card order
    pub recommendations: Vec<MenuEntry>,
}

impl ConciergeResponse {
    /// A reply with no dishes attached.
    pub fn reply_only(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            recommendations: Vec::new(),
        }
    }

    /// A reply with a recommendation list.
    pub fn with_recommendations(reply: impl Into<String>, recommendations: Vec<MenuEntry>) -> Self {
        Self {
            reply: reply.into(),
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_occasion_evaluation_order() {
        let order: Vec<Occasion> = Occasion::iter().collect();
        assert_eq!(
            order,
            vec![
                Occasion::Anniversary,
                Occasion::Birthday,
                Occasion::Business,
                Occasion::Date
            ]
        );
    }

    #[test]
    fn test_default_context_is_empty() {
        let context = ConversationContext::default();
        assert!(context.mood.is_none());
        assert!(context.dietary.is_none());
        assert!(context.occasion.is_none());
        assert!(context.recommended_ids.is_empty());
    }

    #[test]
    fn test_reply_only_has_no_recommendations() {
        let response = ConciergeResponse::reply_only("Good evening");
        assert_eq!(response.reply, "Good evening");
        assert!(response.recommendations.is_empty());
    }
}
