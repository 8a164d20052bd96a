//! Lumière core: the menu catalog and the rule-based dining concierge.
//!
//! The catalog is a static, read-only collection of menu entries with
//! order-preserving query operations. The concierge maps free-text guest
//! utterances to a canned reply plus a short list of dishes, via an ordered
//! first-match-wins rule cascade. Neither component performs IO; loading a
//! catalog from disk lives in `lumiere-infrastructure`.

pub mod concierge;
pub mod error;
pub mod menu;

// Re-export common error type
pub use error::{LumiereError, Result};
