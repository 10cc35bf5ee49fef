//! Resolution of requested mods into a download plan.
//!
//! A [`Resolver`] runs the resolution stages strictly one after the other;
//! only the fetches inside a stage run concurrently:
//!
//! 1. parse the mod loader selector (fails fast on unknown loaders)
//! 2. fetch the latest matching file of every requested mod
//! 3. extract and order the dependency IDs of those files
//! 4. fetch the latest matching file of every new dependency
//! 5. fetch the metadata of every direct and dependency mod
//! 6. render the report
//! 7. once confirmed, record the mods in the index and download the plan
//!
//! - `resolver` - the [`Resolver`] and its [`Resolution`]/[`AddSummary`] results
//! - `builder` - [`ResolverBuilder`]
//! - `config` - [`ResolverConfig`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use modfetch::client::{CurseForgeClient, CurseForgeConfig};
//! use modfetch::confirm::TermPrompt;
//! use modfetch::index::ModIndex;
//! use modfetch::resolver::ResolverBuilder;
//! use modfetch::schema::ModId;
//! use modfetch::DownloaderBuilder;
//!
//! # async fn example() -> Result<(), modfetch::Error> {
//! let client = CurseForgeClient::new(CurseForgeConfig::from_env()?)?;
//! let resolver = ResolverBuilder::new()
//!     .game_version("1.20.1")
//!     .include_optional(false)
//!     .build(client);
//!
//! let mut index = ModIndex::load("mods/index.json")?;
//! let downloader = DownloaderBuilder::new().directory("mods".into()).build();
//! let summary = resolver
//!     .add("fabric", &[ModId(306612)], &mut index, &TermPrompt::default(), &downloader)
//!     .await?;
//! println!("({}/{}) mod downloaded", summary.downloaded, summary.total);
//! index.save("mods/index.json")?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod resolver;

pub use builder::ResolverBuilder;
pub use config::ResolverConfig;
pub use resolver::{AddSummary, Resolution, Resolver};
