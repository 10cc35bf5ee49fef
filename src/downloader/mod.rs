//! Byte downloader consuming a download plan.
//!
//! The [`Downloader`] fetches every [`Download`](crate::Download) of a plan
//! concurrently, skips files already present with a matching checksum and
//! verifies the checksum of every file it writes.
//!
//! - `downloader` - core Downloader struct and the fetch logic
//! - `builder` - [`DownloaderBuilder`]
//! - `config` - configuration structures and callback types
//!
//! # Examples
//!
//! ```rust
//! use modfetch::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//!
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("./mods"))
//!     .concurrent_downloads(5)
//!     .retries(3)
//!     .on_complete(|summary| {
//!         println!("Finished: {}", summary.download().filename);
//!     })
//!     .build();
//! ```

pub mod builder;
pub mod config;
pub mod downloader;

pub use builder::DownloaderBuilder;
pub use config::{DownloadCallback, DownloaderConfig};
pub use downloader::Downloader;

use crate::error::Result;
use crate::plan::DownloadPlan;

use async_trait::async_trait;

/// Anything able to carry out a [`DownloadPlan`].
#[async_trait]
pub trait PlanDownloader: Send + Sync {
    /// Download every task of the plan and return how many files are on
    /// disk with the expected content afterwards.
    ///
    /// Individual file failures are not errors; only a failure preventing
    /// the whole plan from running is.
    async fn download_plan(&self, plan: &DownloadPlan) -> Result<usize>;
}
