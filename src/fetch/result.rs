//! Per-item fetch outcome.

use crate::error::Error;
use crate::schema::{File, Mod, ModId};

use std::collections::BTreeMap;

/// Values that can stand in for a failed fetch.
pub trait Placeholder {
    /// Best-effort value carrying only the item ID.
    fn placeholder(id: ModId) -> Self;
}

impl Placeholder for Mod {
    fn placeholder(id: ModId) -> Self {
        Mod::placeholder(id)
    }
}

impl Placeholder for File {
    fn placeholder(id: ModId) -> Self {
        File::placeholder(id)
    }
}

/// Outcome of fetching one item.
///
/// A failed fetch still carries a placeholder value so consumers can read
/// the item without checking for absence first.
#[derive(Debug)]
pub enum Fetched<T> {
    Ok(T),
    Err { error: Error, placeholder: T },
}

/// Outcomes of a batch, keyed by item ID.
pub type FetchMap<T> = BTreeMap<ModId, Fetched<T>>;

impl<T> Fetched<T> {
    /// Wrap a fetch result, substituting a placeholder on error.
    pub fn from_result(id: ModId, result: crate::Result<T>) -> Self
    where
        T: Placeholder,
    {
        match result {
            Ok(value) => Fetched::Ok(value),
            Err(error) => Fetched::Err {
                error,
                placeholder: T::placeholder(id),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Fetched::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The fetched value, or the placeholder on error.
    pub fn value(&self) -> &T {
        match self {
            Fetched::Ok(value) => value,
            Fetched::Err { placeholder, .. } => placeholder,
        }
    }

    /// The fetched value, `None` on error.
    pub fn ok(&self) -> Option<&T> {
        match self {
            Fetched::Ok(value) => Some(value),
            Fetched::Err { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Fetched::Ok(_) => None,
            Fetched::Err { error, .. } => Some(error),
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Fetched::Ok(value) => value,
            Fetched::Err { placeholder, .. } => placeholder,
        }
    }
}
