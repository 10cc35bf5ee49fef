//! Mod identifiers and metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a mod in the remote catalog.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ModId(pub u32);

impl fmt::Display for ModId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ModId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Descriptive record of a mod, fetched independently of its files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mod {
    pub id: ModId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub download_count: f64,
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
}

impl Mod {
    /// Placeholder record carrying only the ID, used when the fetch failed.
    pub fn placeholder(id: ModId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}
