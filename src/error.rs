//! Error handling for the modfetch library.
//!
//! This module provides centralized error handling for mod resolution and
//! download operations. Errors fall into two groups:
//!
//! - **Per-item errors** ([`Error::NoMatchingFile`], [`Error::Remote`],
//!   [`Error::Reqwest`], [`Error::Middleware`]) are captured in the
//!   [`Fetched`](crate::fetch::Fetched) slot of the item that produced them
//!   and never abort a batch.
//! - **Function-level errors** (an invalid mod loader, index I/O, a hard
//!   downloader failure) are returned to the caller.

use crate::schema::{ModId, ModLoader};

use std::io;
use thiserror::Error;

/// Errors that can happen when using modfetch.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The mod loader selector could not be parsed.
    ///
    /// This is the only input error and it is raised before any fetch starts.
    #[error("Invalid mod loader {0:?}")]
    InvalidModLoader(String),

    /// The index was built for another game version than the one requested.
    #[error("index is for game version {index}, not {requested}")]
    GameVersionMismatch { index: String, requested: String },

    /// No file of the mod matches the game version and mod loader filter.
    #[error("mod {id} has no files for game version {game_version} and mod loader {mod_loader}")]
    NoMatchingFile {
        id: ModId,
        game_version: String,
        mod_loader: ModLoader,
    },

    /// The catalog answered with a non-success status.
    #[error("remote catalog returned {status} for mod {id}: {message}")]
    Remote {
        id: ModId,
        status: u16,
        message: String,
    },

    /// The dependency graph contains a cycle.
    ///
    /// The payload is the cycle path, starting and ending on the same ID.
    #[error("dependency cycle detected: {}", format_cycle(.0))]
    CycleDetected(Vec<ModId>),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The byte downloader failed as a whole.
    #[error("Download error: {0}")]
    Download(String),

    /// I/O Error.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// The mod index could not be (de)serialized.
    #[error("Index error")]
    Index {
        #[from]
        source: serde_json::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error from the HTTP middleware stack.
    #[error("Middleware Error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

impl Error {
    /// Return `true` for errors recorded in a single item's fetch slot.
    pub fn is_per_item(&self) -> bool {
        matches!(
            self,
            Error::NoMatchingFile { .. }
                | Error::Remote { .. }
                | Error::Reqwest { .. }
                | Error::Middleware { .. }
        )
    }
}

fn format_cycle(path: &[ModId]) -> String {
    path.iter()
        .map(ModId::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Result type alias for operations that can fail with a modfetch error.
pub type Result<T> = std::result::Result<T, Error>;
