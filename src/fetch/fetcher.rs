//! Fan-out fetching over a set of item IDs.

use super::result::{FetchMap, Fetched, Placeholder};
use crate::client::{CatalogClient, FileQuery};
use crate::error::{Error, Result};
use crate::schema::{File, Mod, ModId, ModLoader};

use futures::stream::{self, StreamExt};
use std::collections::BTreeSet;
use std::future::Future;
use tracing::{debug, error, warn};

/// Outcomes of a fetch batch together with the number of successes.
#[derive(Debug)]
pub struct FetchBatch<T> {
    /// Exactly one entry per distinct requested ID.
    pub results: FetchMap<T>,
    /// Number of entries holding [`Fetched::Ok`].
    pub succeeded: usize,
}

impl<T> Default for FetchBatch<T> {
    fn default() -> Self {
        Self {
            results: FetchMap::new(),
            succeeded: 0,
        }
    }
}

/// Fetch every ID with `fetch_one` and wait for all of them.
///
/// Duplicate IDs are fetched once. `concurrency` caps the number of
/// fetches in flight; `0` runs all of them at once.
pub async fn fetch_all<I, T, F, Fut>(ids: I, concurrency: usize, fetch_one: F) -> FetchBatch<T>
where
    I: IntoIterator<Item = ModId>,
    T: Placeholder,
    F: Fn(ModId) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let ids: BTreeSet<ModId> = ids.into_iter().collect();
    if ids.is_empty() {
        return FetchBatch::default();
    }

    let limit = match concurrency {
        0 => ids.len(),
        n => n,
    };
    debug!("Fetching {} items ({} in flight)", ids.len(), limit);

    let results: FetchMap<T> = stream::iter(ids)
        .map(|id| {
            let fut = fetch_one(id);
            async move { (id, fut.await) }
        })
        .buffer_unordered(limit)
        .map(|(id, res)| {
            match res {
                Err(ref e) if e.is_per_item() => warn!(%id, error = %e, "fetch failed"),
                Err(ref e) => error!(%id, error = %e, "fetch failed unexpectedly"),
                Ok(_) => {}
            }
            (id, Fetched::from_result(id, res))
        })
        .collect()
        .await;

    let succeeded = results.values().filter(|r| r.is_ok()).count();
    FetchBatch { results, succeeded }
}

/// Fetch the metadata of every mod.
pub async fn fetch_mods<C, I>(client: &C, ids: I, concurrency: usize) -> FetchBatch<Mod>
where
    C: CatalogClient + ?Sized,
    I: IntoIterator<Item = ModId>,
{
    fetch_all(ids, concurrency, |id| client.get_mod(id)).await
}

/// Fetch the most recent file of every mod matching the game version and loader.
///
/// A mod without any matching file is recorded as [`Error::NoMatchingFile`].
pub async fn fetch_latest_files<C, I>(
    client: &C,
    game_version: &str,
    mod_loader: ModLoader,
    ids: I,
    concurrency: usize,
) -> FetchBatch<File>
where
    C: CatalogClient + ?Sized,
    I: IntoIterator<Item = ModId>,
{
    let query = FileQuery::latest(game_version, mod_loader);
    let query = &query;
    fetch_all(ids, concurrency, |id| async move {
        let files = client.get_files(id, query).await?;
        files.into_iter().next().ok_or_else(|| Error::NoMatchingFile {
            id,
            game_version: query.game_version.clone(),
            mod_loader: query.mod_loader,
        })
    })
    .await
}
