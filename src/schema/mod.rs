//! Catalog data model.
//!
//! This module contains the records exchanged with the remote mod catalog:
//! mod identifiers, mod loaders, mod metadata and the files selected for a
//! given game version and mod loader, together with their dependency edges.
//!
//! # Overview
//!
//! - `mod_info` - [`ModId`] and the [`Mod`] metadata record
//! - `loader` - the [`ModLoader`] selector
//! - `file` - [`File`] records, their hashes and [`FileDependency`] edges
//! - `response` - the API envelopes ([`ApiResponse`], [`Pagination`])
//!
//! # Examples
//!
//! ```rust
//! use modfetch::schema::{DependencyKind, ModLoader, RelationType};
//!
//! let loader: ModLoader = "fabric".parse()?;
//! assert_eq!(loader, ModLoader::Fabric);
//! assert_eq!(RelationType::RequiredDependency.kind(), DependencyKind::Required);
//! # Ok::<(), modfetch::Error>(())
//! ```

pub mod file;
pub mod loader;
pub mod mod_info;
pub mod response;

pub use file::{DependencyKind, File, FileDependency, FileHash, HashAlgo, RelationType};
pub use loader::ModLoader;
pub use mod_info::{Mod, ModId};
pub use response::{ApiResponse, Pagination};
