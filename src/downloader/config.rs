//! Configuration structures and defaults for the downloader.

use crate::download::Summary;
use crate::StyleOptions;

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::path::PathBuf;
use std::sync::Arc;

/// Callback type for download completion events
pub type DownloadCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory where to store the downloaded files.
    pub directory: PathBuf,
    /// Number of retries of transient transport failures.
    pub retries: u32,
    /// Number of maximum concurrent downloads.
    pub concurrent_downloads: usize,
    pub style_options: StyleOptions,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    pub proxy: Option<reqwest::Proxy>,
    /// Called when each download completes, and when an existing file with a
    /// wrong checksum is about to be replaced.
    pub on_complete: Option<Arc<DownloadCallback>>,
    /// Download even when a verified file already exists.
    pub overwrite: bool,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("retries", &self.retries)
            .field("concurrent_downloads", &self.concurrent_downloads)
            .field("style_options", &self.style_options)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .field("overwrite", &self.overwrite)
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            retries: 3,
            concurrent_downloads: 32,
            style_options: StyleOptions::default(),
            headers: None,
            proxy: None,
            on_complete: None,
            overwrite: false,
        }
    }
}
