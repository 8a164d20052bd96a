//! Catalog loading trait.
//!
//! The trait lives in core; concrete sources (TOML files, the built-in
//! card) live in the infrastructure crate.

use crate::error::Result;
use crate::menu::catalog::Catalog;

/// A source the catalog can be loaded from, once, at startup.
pub trait MenuRepository {
    /// Loads and validates the full catalog.
    fn load(&self) -> Result<Catalog>;
}
