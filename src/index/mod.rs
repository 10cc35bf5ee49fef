//! Persisted index of installed mods.
//!
//! The index is an explicit store: load it once, hand it to the resolver,
//! save it when done. It records, for every resolved mod, the loader it was
//! resolved for, its name and the file that was selected.
//!
//! # Examples
//!
//! ```rust,no_run
//! use modfetch::index::ModIndex;
//!
//! # fn example() -> Result<(), modfetch::Error> {
//! let mut index = ModIndex::load("mods/index.json")?;
//! println!("{}", index.render());
//! index.save("mods/index.json")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::report::{new_table, release_date};
use crate::schema::{File, Mod, ModId, ModLoader};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Marker shown for an indexed mod without a name.
pub const MOD_NOT_FOUND: &str = "⛔Mod Not Found⛔";
/// Marker shown for an indexed mod without a recorded file.
pub const RELEASE_NOT_FOUND: &str = "⛔Release Not Found⛔";

/// File recorded for an indexed mod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedFile {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl From<&File> for IndexedFile {
    fn from(file: &File) -> Self {
        Self {
            name: file.file_name.clone(),
            url: file.url().unwrap_or_default().to_string(),
            md5: file.md5().map(str::to_string),
            date: file.file_date,
        }
    }
}

/// One mod of the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedMod {
    pub mod_loader: ModLoader,
    pub name: String,
    pub is_dependency: bool,
    pub file: IndexedFile,
}

/// Store of the mods resolved for one game version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModIndex {
    #[serde(default)]
    pub game_version: String,
    #[serde(default)]
    pub mods: BTreeMap<ModId, IndexedMod>,
}

impl ModIndex {
    pub fn new(game_version: impl Into<String>) -> Self {
        Self {
            game_version: game_version.into(),
            mods: BTreeMap::new(),
        }
    }

    /// Load the index at `path`; a missing file yields an empty index.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No index at {:?}, starting empty", path);
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the index to `path` as pretty JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        debug!("Saved {} mods to {:?}", self.mods.len(), path);
        Ok(())
    }

    /// Record the file resolved for a mod, replacing any previous entry.
    pub fn record(&mut self, mod_loader: ModLoader, info: &Mod, file: &File, is_dependency: bool) {
        let id = if info.id == ModId::default() {
            file.mod_id
        } else {
            info.id
        };
        // A mod once requested directly stays direct.
        let is_dependency = is_dependency && self.mods.get(&id).map_or(true, |m| m.is_dependency);
        self.mods.insert(
            id,
            IndexedMod {
                mod_loader,
                name: info.name.clone(),
                is_dependency,
                file: IndexedFile::from(file),
            },
        );
    }

    pub fn get(&self, id: ModId) -> Option<&IndexedMod> {
        self.mods.get(&id)
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    /// Render the index as a table sorted by name, then ID.
    pub fn render(&self) -> String {
        let mut entries: Vec<_> = self.mods.iter().collect();
        entries.sort_by(|(a_id, a), (b_id, b)| a.name.cmp(&b.name).then(a_id.cmp(b_id)));

        let mut table = new_table(&["#", "ModID", "Name", "Latest Release Date", "Indirect"]);
        for (index, (id, m)) in entries.into_iter().enumerate() {
            let (name, date) = if m.name.is_empty() {
                (MOD_NOT_FOUND.to_string(), MOD_NOT_FOUND.to_string())
            } else if m.file.name.is_empty() {
                (m.name.clone(), RELEASE_NOT_FOUND.to_string())
            } else {
                let file = File {
                    file_date: m.file.date,
                    ..File::default()
                };
                (m.name.clone(), release_date(&file))
            };
            table.add_row(vec![
                (index + 1).to_string(),
                id.to_string(),
                name,
                date,
                m.is_dependency.to_string(),
            ]);
        }
        table.to_string()
    }
}
