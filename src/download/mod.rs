//! Download tasks, their outcomes and checksum verification.
//!
//! A [`Download`] is one entry of a download plan: where to fetch the file,
//! the name to store it under and its expected checksum. The
//! [`Downloader`](crate::Downloader) reports one [`Summary`] per download.
//!
//! # Overview
//!
//! - [`download`] - the [`Download`] task
//! - [`summary`] - per-download [`Status`] and [`Summary`]
//! - [`hash`] - checksum detection and verification of local files
//!
//! # Examples
//!
//! ```rust
//! use modfetch::download::Download;
//!
//! let download = Download::try_from("https://edge.forgecdn.net/files/1/2/jei.jar")?;
//! assert_eq!(download.filename, "jei.jar");
//! # Ok::<(), modfetch::Error>(())
//! ```

pub mod download;
pub mod hash;
pub mod summary;

pub use download::Download;
pub use hash::{detect_hash_type, verify_hash, HashType};
pub use summary::{Status, Summary};
