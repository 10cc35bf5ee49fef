//! The resolver and the results of a resolution.

use super::config::ResolverConfig;
use crate::client::CatalogClient;
use crate::confirm::Confirm;
use crate::downloader::PlanDownloader;
use crate::error::{Error, Result};
use crate::fetch::{fetch_latest_files, fetch_mods, FetchMap, Fetched};
use crate::graph::extract_dependency_ids;
use crate::index::ModIndex;
use crate::plan::{merge_files, DownloadPlan};
use crate::progress::StageSpinner;
use crate::report::render_mod_table;
use crate::schema::{File, Mod, ModId, ModLoader};

use std::collections::BTreeSet;
use tracing::{debug, info};

/// Resolves requested mods and their dependencies against a catalog.
#[derive(Debug, Clone)]
pub struct Resolver<C> {
    client: C,
    config: ResolverConfig,
}

/// Everything learned about a set of requested mods.
#[derive(Debug)]
pub struct Resolution {
    pub mod_loader: ModLoader,
    /// Latest file of every requested mod.
    pub direct: FetchMap<File>,
    /// Latest file of every dependency that was not requested directly.
    pub dependencies: FetchMap<File>,
    /// Metadata of every direct and dependency mod.
    pub mods: FetchMap<Mod>,
    /// Number of mods whose metadata was fetched.
    pub found: usize,
}

impl Resolution {
    /// IDs of every direct and dependency mod, ascending.
    pub fn all_ids(&self) -> BTreeSet<ModId> {
        self.direct
            .keys()
            .chain(self.dependencies.keys())
            .copied()
            .collect()
    }

    /// Number of distinct direct and dependency mods.
    pub fn total(&self) -> usize {
        self.all_ids().len()
    }

    /// Table of every mod with its latest release date.
    pub fn render(&self) -> String {
        render_mod_table(&self.mods, &self.direct, &self.dependencies)
    }

    /// Direct and dependency files in one map, direct entries first.
    pub fn into_merged_files(self) -> FetchMap<File> {
        merge_files(self.direct, self.dependencies)
    }
}

/// Outcome of [`Resolver::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddSummary {
    /// Files the downloader reported as done.
    pub downloaded: usize,
    /// Distinct direct and dependency mods.
    pub total: usize,
    /// Download tasks handed to the downloader.
    pub planned: usize,
    /// Whether the download was confirmed.
    pub confirmed: bool,
    /// The rendered resolution report.
    pub report: String,
}

impl<C: CatalogClient> Resolver<C> {
    pub(crate) fn new(client: C, config: ResolverConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the requested mods without touching the disk.
    ///
    /// Fails only when `mod_loader` cannot be parsed, before anything is
    /// fetched. Every other failure is recorded in its item's slot.
    pub async fn resolve(&self, mod_loader: &str, ids: &[ModId]) -> Result<Resolution> {
        self.resolve_for(mod_loader, &self.config.game_version, ids)
            .await
    }

    async fn resolve_for(
        &self,
        mod_loader: &str,
        game_version: &str,
        ids: &[ModId],
    ) -> Result<Resolution> {
        let mod_loader: ModLoader = mod_loader.parse()?;
        let concurrency = self.config.concurrent_fetches;
        info!(
            "Resolving {} mods for {} {}",
            ids.len(),
            mod_loader,
            game_version
        );

        let spinner = StageSpinner::start(&self.config.stage_style, "Resolving dependencies");
        let direct = fetch_latest_files(
            &self.client,
            game_version,
            mod_loader,
            ids.iter().copied(),
            concurrency,
        )
        .await
        .results;

        let dependency_ids: Vec<ModId> =
            extract_dependency_ids(self.config.include_optional, &direct)
                .into_iter()
                .filter(|id| !direct.contains_key(id))
                .collect();
        debug!("Found {} dependencies", dependency_ids.len());
        spinner.set_message(format!("Resolving {} dependencies", dependency_ids.len()));

        let dependencies = fetch_latest_files(
            &self.client,
            game_version,
            mod_loader,
            dependency_ids,
            concurrency,
        )
        .await
        .results;
        spinner.finish("Resolved dependencies");

        let spinner = StageSpinner::start(&self.config.stage_style, "Fetching mods info");
        let all_ids = direct.keys().chain(dependencies.keys()).copied();
        let mods = fetch_mods(&self.client, all_ids, concurrency).await;
        spinner.finish("Fetched mods info");

        Ok(Resolution {
            mod_loader,
            direct,
            dependencies,
            mods: mods.results,
            found: mods.succeeded,
        })
    }

    /// Resolve, report, confirm, index and download the requested mods.
    ///
    /// Nothing is recorded nor downloaded when no metadata could be fetched
    /// or the download is not confirmed. Fails with
    /// [`Error::GameVersionMismatch`] before fetching anything when the index
    /// was built for another game version.
    pub async fn add<D>(
        &self,
        mod_loader: &str,
        ids: &[ModId],
        index: &mut ModIndex,
        confirm: &dyn Confirm,
        downloader: &D,
    ) -> Result<AddSummary>
    where
        D: PlanDownloader + ?Sized,
    {
        let requested = &self.config.game_version;
        if !index.game_version.is_empty()
            && !requested.is_empty()
            && index.game_version != *requested
        {
            return Err(Error::GameVersionMismatch {
                index: index.game_version.clone(),
                requested: requested.clone(),
            });
        }
        if index.game_version.is_empty() {
            index.game_version = requested.clone();
        }
        let game_version = index.game_version.clone();

        let resolution = self.resolve_for(mod_loader, &game_version, ids).await?;
        let report = resolution.render();
        if self.config.show_report {
            println!("{}", report);
        }

        let mut summary = AddSummary {
            total: resolution.total(),
            report,
            ..AddSummary::default()
        };

        if resolution.found == 0 {
            info!("No mods found, nothing to download");
            return Ok(summary);
        }
        if !confirm.confirm(self.config.auto_confirm) {
            info!("Download declined");
            return Ok(summary);
        }
        summary.confirmed = true;

        let Resolution {
            mod_loader,
            direct,
            dependencies,
            mods,
            ..
        } = resolution;
        let direct_ids: BTreeSet<ModId> = direct.keys().copied().collect();
        let files = merge_files(direct, dependencies);

        for (id, fetched) in &files {
            if let Fetched::Ok(file) = fetched {
                let placeholder;
                let info = match mods.get(id) {
                    Some(info) => info.value(),
                    None => {
                        placeholder = Mod::placeholder(*id);
                        &placeholder
                    }
                };
                index.record(mod_loader, info, file, !direct_ids.contains(id));
            }
        }

        let plan = DownloadPlan::build(&files);
        summary.planned = plan.len();
        summary.downloaded = downloader.download_plan(&plan).await?;
        info!("({}/{}) mod downloaded", summary.downloaded, summary.total);
        Ok(summary)
    }
}
