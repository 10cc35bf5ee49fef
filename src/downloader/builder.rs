//! Builder for [`Downloader`] instances.

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::download::Summary;
use crate::StyleOptions;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::{path::PathBuf, sync::Arc};

/// A builder used to create a [`Downloader`].
///
/// ```rust
/// use modfetch::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().retries(5).directory("mods".into()).build();
/// ```
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        DownloaderBuilder::default().style_options(StyleOptions::hidden())
    }

    /// Sets the directory where to store the downloads.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the number of retries of transient transport failures.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Set the number of concurrent downloads.
    pub fn concurrent_downloads(mut self, concurrent_downloads: usize) -> Self {
        self.config.concurrent_downloads = concurrent_downloads;
        self
    }

    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set callback for when each download completes.
    ///
    /// The callback is called as soon as a download finishes, regardless of
    /// whether other downloads are still in progress.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Set whether to overwrite existing files.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.config.overwrite = overwrite;
        self
    }

    /// Add HTTP headers, merged with the ones already set.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.config
            .headers
            .get_or_insert_with(HeaderMap::new)
            .extend(headers);
        self
    }

    /// Add a single HTTP header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.config
            .headers
            .get_or_insert_with(HeaderMap::new)
            .insert(name, value);
        self
    }

    /// Create the [`Downloader`] with the specified options.
    pub fn build(self) -> Downloader {
        Downloader::new(self.config)
    }
}
