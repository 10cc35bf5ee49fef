//! Download plan building.
//!
//! Direct and dependency file results are merged (direct entries win) and
//! every successfully fetched file with a download URL and a file name
//! becomes a [`Download`] task.
//!
//! # Examples
//!
//! ```rust
//! use modfetch::fetch::{FetchMap, Fetched};
//! use modfetch::plan::DownloadPlan;
//! use modfetch::schema::{File, ModId};
//!
//! let mut files = FetchMap::new();
//! files.insert(
//!     ModId(10),
//!     Fetched::Ok(File {
//!         mod_id: ModId(10),
//!         file_name: "jei.jar".into(),
//!         download_url: Some("https://edge.forgecdn.net/files/1/2/jei.jar".into()),
//!         ..File::default()
//!     }),
//! );
//! files.insert(ModId(20), Fetched::Ok(File::placeholder(ModId(20))));
//!
//! let plan = DownloadPlan::build(&files);
//! assert_eq!(plan.len(), 1);
//! ```

use crate::download::Download;
use crate::error::Error;
use crate::fetch::FetchMap;
use crate::schema::{File, ModId};

use reqwest::Url;
use std::path::{Component, Path};
use tracing::warn;

/// Merge dependency results into the direct ones; direct entries win.
pub fn merge_files(mut direct: FetchMap<File>, dependencies: FetchMap<File>) -> FetchMap<File> {
    for (id, fetched) in dependencies {
        direct.entry(id).or_insert(fetched);
    }
    direct
}

/// Flat list of files to download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadPlan {
    tasks: Vec<Download>,
}

impl DownloadPlan {
    /// Build the plan from merged file results.
    ///
    /// Failed fetches and files lacking a URL or a name are left out.
    pub fn build(files: &FetchMap<File>) -> Self {
        let tasks = files
            .iter()
            .filter_map(|(id, fetched)| fetched.ok().and_then(|file| to_download(*id, file)))
            .collect();
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Download] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// A single normal path component, so joining it stays inside the target directory.
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn to_download(id: ModId, file: &File) -> Option<Download> {
    if !file.is_downloadable() {
        return None;
    }
    if !is_plain_file_name(&file.file_name) {
        warn!(%id, file = %file.file_name, "skipping file with unsafe name");
        return None;
    }
    let raw = file.url()?;
    match Url::parse(raw) {
        Ok(url) => Some(Download::new_with_hash(
            &url,
            &file.file_name,
            file.md5().map(str::to_string),
        )),
        Err(e) => {
            let err = Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", raw, e));
            warn!(%id, error = %err, "skipping file");
            None
        }
    }
}
