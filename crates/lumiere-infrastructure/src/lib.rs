//! Infrastructure for Lumière: concrete catalog sources.

pub mod toml_menu_repository;

pub use toml_menu_repository::TomlMenuRepository;
