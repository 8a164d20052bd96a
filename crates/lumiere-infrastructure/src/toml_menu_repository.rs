//! TOML-based MenuRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use lumiere_core::error::{LumiereError, Result};
use lumiere_core::menu::{default_menu, Catalog, MenuEntry, MenuRepository};

/// On-disk shape of a menu file: a sequence of `[[entry]]` tables.
#[derive(Debug, Deserialize)]
struct MenuFile {
    #[serde(rename = "entry", default)]
    entries: Vec<MenuEntry>,
}

/// Loads the catalog from a TOML menu file, falling back to the built-in
/// card when no file exists at the configured path.
///
/// The file is read once per `load`; the resulting catalog is immutable.
/// Invalid files (unparseable TOML, unknown category or mood spellings,
/// duplicate ids, entries without moods) are rejected with an error, never
/// silently patched.
pub struct TomlMenuRepository {
    path: PathBuf,
}

impl TomlMenuRepository {
    /// Creates a repository reading from the given path.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a repository at the default location (`~/.lumiere/menu.toml`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| LumiereError::config("could not determine home directory"))?;
        Ok(Self::with_path(home_dir.join(".lumiere").join("menu.toml")))
    }

    /// The path this repository reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MenuRepository for TomlMenuRepository {
    fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no menu file, using built-in card");
            return Catalog::new(default_menu());
        }

        let raw = fs::read_to_string(&self.path)?;
        let file: MenuFile = toml::from_str(&raw)?;
        if file.entries.is_empty() {
            return Err(LumiereError::config(format!(
                "menu file '{}' defines no entries",
                self.path.display()
            )));
        }
        tracing::info!(
            path = %self.path.display(),
            entries = file.entries.len(),
            "loaded menu file"
        );
        Catalog::new(file.entries)
    }
}
