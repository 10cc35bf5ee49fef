//! Concurrent per-item fetching with isolated failures.
//!
//! Every item of a batch is fetched by its own future; all of them are
//! driven concurrently and the caller only gets the result map back once
//! every fetch has finished. A failing fetch is recorded in its own slot as
//! [`Fetched::Err`] with a placeholder value and never affects its siblings.
//!
//! # Overview
//!
//! - `result` - the [`Fetched`] container and the [`Placeholder`] trait
//! - `fetcher` - [`fetch_all`] and the two concrete batches, [`fetch_mods`]
//!   and [`fetch_latest_files`]
//!
//! # Examples
//!
//! ```rust
//! use modfetch::fetch::{fetch_all, Fetched};
//! use modfetch::schema::{Mod, ModId};
//! use modfetch::Error;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let batch = fetch_all([ModId(1), ModId(2)], 0, |id| async move {
//!     if id == ModId(2) {
//!         Err(Error::Internal("boom".into()))
//!     } else {
//!         Ok(Mod::placeholder(id))
//!     }
//! })
//! .await;
//!
//! assert_eq!(batch.results.len(), 2);
//! assert_eq!(batch.succeeded, 1);
//! assert!(matches!(batch.results[&ModId(2)], Fetched::Err { .. }));
//! # }
//! ```

pub mod fetcher;
pub mod result;

pub use fetcher::{fetch_all, fetch_latest_files, fetch_mods, FetchBatch};
pub use result::{FetchMap, Fetched, Placeholder};
