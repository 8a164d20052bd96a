//! Menu catalog domain: entry model, query operations, built-in card.

pub mod catalog;
pub mod model;
pub mod preset;
pub mod repository;

pub use catalog::{Catalog, CategoryFilter};
pub use model::{Category, MenuEntry, Mood};
pub use preset::default_menu;
pub use repository::MenuRepository;
