//! Remote catalog client.
//!
//! The resolver only depends on the [`CatalogClient`] trait, so any catalog
//! (or a test double) can stand behind it. [`CurseForgeClient`] is the
//! implementation talking to the CurseForge REST API.
//!
//! # Examples
//!
//! ```rust,no_run
//! use modfetch::client::{CatalogClient, CurseForgeClient, CurseForgeConfig, FileQuery};
//! use modfetch::schema::{ModId, ModLoader};
//!
//! # async fn example() -> Result<(), modfetch::Error> {
//! let client = CurseForgeClient::new(CurseForgeConfig::from_env()?)?;
//! let query = FileQuery::latest("1.20.1", ModLoader::Fabric);
//! let files = client.get_files(ModId(306612), &query).await?;
//! # Ok(())
//! # }
//! ```

pub mod curseforge;

pub use curseforge::{CurseForgeClient, CurseForgeConfig};

use crate::error::Result;
use crate::schema::{File, Mod, ModId, ModLoader};

use async_trait::async_trait;

/// Filter used when listing the files of a mod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileQuery {
    /// Game version, empty for any.
    pub game_version: String,
    pub mod_loader: ModLoader,
    /// Index of the first result.
    pub index: u32,
    pub page_size: u32,
}

impl FileQuery {
    /// Query selecting only the most recent matching file.
    pub fn latest(game_version: impl Into<String>, mod_loader: ModLoader) -> Self {
        Self {
            game_version: game_version.into(),
            mod_loader,
            index: 0,
            page_size: 1,
        }
    }
}

/// Read access to a remote mod catalog.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the metadata of a mod.
    async fn get_mod(&self, id: ModId) -> Result<Mod>;

    /// List the files of a mod matching `query`, most recent first.
    async fn get_files(&self, id: ModId, query: &FileQuery) -> Result<Vec<File>>;
}

#[async_trait]
impl<C: CatalogClient + ?Sized> CatalogClient for std::sync::Arc<C> {
    async fn get_mod(&self, id: ModId) -> Result<Mod> {
        (**self).get_mod(id).await
    }

    async fn get_files(&self, id: ModId, query: &FileQuery) -> Result<Vec<File>> {
        (**self).get_files(id, query).await
    }
}
