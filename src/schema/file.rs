//! File records and dependency edges.

use super::mod_info::ModId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a file relates to one of its dependencies, as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum RelationType {
    EmbeddedLibrary,
    OptionalDependency,
    RequiredDependency,
    Tool,
    Incompatible,
    Include,
    Unknown(u8),
}

/// Relation kinds that matter for dependency extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Required,
    Optional,
    Other,
}

impl RelationType {
    /// Collapse the catalog relation into a [`DependencyKind`].
    pub fn kind(self) -> DependencyKind {
        match self {
            RelationType::RequiredDependency => DependencyKind::Required,
            RelationType::OptionalDependency => DependencyKind::Optional,
            _ => DependencyKind::Other,
        }
    }
}

impl From<u8> for RelationType {
    fn from(code: u8) -> Self {
        match code {
            1 => RelationType::EmbeddedLibrary,
            2 => RelationType::OptionalDependency,
            3 => RelationType::RequiredDependency,
            4 => RelationType::Tool,
            5 => RelationType::Incompatible,
            6 => RelationType::Include,
            other => RelationType::Unknown(other),
        }
    }
}

impl From<RelationType> for u8 {
    fn from(relation: RelationType) -> Self {
        match relation {
            RelationType::EmbeddedLibrary => 1,
            RelationType::OptionalDependency => 2,
            RelationType::RequiredDependency => 3,
            RelationType::Tool => 4,
            RelationType::Incompatible => 5,
            RelationType::Include => 6,
            RelationType::Unknown(code) => code,
        }
    }
}

/// A dependency edge from a file to another mod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDependency {
    pub mod_id: ModId,
    pub relation_type: RelationType,
}

impl FileDependency {
    pub fn new(mod_id: ModId, relation_type: RelationType) -> Self {
        Self {
            mod_id,
            relation_type,
        }
    }
}

/// Hash algorithms listed by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum HashAlgo {
    Sha1,
    Md5,
    Unknown(u8),
}

impl From<u8> for HashAlgo {
    fn from(code: u8) -> Self {
        match code {
            1 => HashAlgo::Sha1,
            2 => HashAlgo::Md5,
            other => HashAlgo::Unknown(other),
        }
    }
}

impl From<HashAlgo> for u8 {
    fn from(algo: HashAlgo) -> Self {
        match algo {
            HashAlgo::Sha1 => 1,
            HashAlgo::Md5 => 2,
            HashAlgo::Unknown(code) => code,
        }
    }
}

/// A content hash of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHash {
    pub value: String,
    pub algo: HashAlgo,
}

/// The file selected for a mod under a game version and mod loader filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(default)]
    pub id: u32,
    pub mod_id: ModId,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_date: Option<DateTime<Utc>>,
    /// Null when the author disabled third-party distribution.
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub hashes: Vec<FileHash>,
    #[serde(default)]
    pub dependencies: Vec<FileDependency>,
    #[serde(default)]
    pub game_versions: Vec<String>,
}

impl File {
    /// Placeholder record carrying only the owning mod ID.
    pub fn placeholder(mod_id: ModId) -> Self {
        Self {
            mod_id,
            ..Self::default()
        }
    }

    /// MD5 checksum of the file, if the catalog lists one.
    pub fn md5(&self) -> Option<&str> {
        self.hashes
            .iter()
            .find(|h| h.algo == HashAlgo::Md5)
            .map(|h| h.value.as_str())
    }

    /// Download URL, treating an empty string like a missing one.
    pub fn url(&self) -> Option<&str> {
        self.download_url.as_deref().filter(|u| !u.is_empty())
    }

    /// Return `true` when the file has both a download URL and a file name.
    pub fn is_downloadable(&self) -> bool {
        self.url().is_some() && !self.file_name.is_empty()
    }
}
