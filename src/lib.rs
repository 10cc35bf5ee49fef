//! Modfetch resolves game mods and their dependencies against a mod catalog
//! and downloads the latest matching file of each of them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use modfetch::client::{CurseForgeClient, CurseForgeConfig};
//! use modfetch::{DownloaderBuilder, ModId, ModIndex, ResolverBuilder, TermPrompt};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), modfetch::Error> {
//! let client = CurseForgeClient::new(CurseForgeConfig::from_env()?)?;
//! let resolver = ResolverBuilder::new().game_version("1.20.1").build(client);
//! let downloader = DownloaderBuilder::new().directory("mods".into()).build();
//!
//! let mut index = ModIndex::load("mods/index.json")?;
//! resolver
//!     .add("fabric", &[ModId(306612)], &mut index, &TermPrompt::default(), &downloader)
//!     .await?;
//! index.save("mods/index.json")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`schema`] - Catalog records: mods, files, dependencies and mod loaders
//! - [`client`] - The `CatalogClient` seam and its CurseForge implementation
//! - [`fetch`] - Concurrent fan-out fetching with per-item results
//! - [`graph`] - Dependency graph and its topological ordering
//! - [`plan`] - Merging of resolved files into a download plan
//! - [`resolver`] - The `Resolver` running the whole resolution
//! - [`report`] - Tabular rendering of a resolution
//! - [`index`] - The persisted index of resolved mods
//! - [`confirm`] - Download confirmation prompt
//! - [`download`] - The `Download` struct, summaries and hash verification
//! - [`downloader`] - The `Downloader` and `DownloaderBuilder` for fetching files
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client functionality
//! - [`progress`] - Progress bar styling and display management

pub mod client;
pub mod confirm;
pub mod download;
pub mod downloader;
pub mod error;
pub mod fetch;
pub mod graph;
pub mod http;
pub mod index;
pub mod plan;
pub mod progress;
pub mod report;
pub mod resolver;
pub mod schema;

pub use client::{CatalogClient, FileQuery};
pub use confirm::{Confirm, TermPrompt};
pub use download::hash::{detect_hash_type, verify_hash, HashType};
pub use download::{Download, Status, Summary};
pub use downloader::{Downloader, DownloaderBuilder, PlanDownloader};
pub use error::{Error, Result};
pub use fetch::{FetchMap, Fetched};
pub use graph::{extract_dependency_ids, DepGraph};
pub use http::{create_http_client, HttpClientConfig};
pub use index::ModIndex;
pub use plan::{merge_files, DownloadPlan};
pub use progress::{ProgressBarOpts, StyleOptions};
pub use resolver::{AddSummary, Resolution, Resolver, ResolverBuilder};
pub use schema::{File, Mod, ModId, ModLoader};
