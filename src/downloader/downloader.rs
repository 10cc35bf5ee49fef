//! Core downloader implementation with fetch logic.

use super::config::DownloaderConfig;
use super::PlanDownloader;
use crate::download::{Download, Status, Summary};
use crate::error::{Error, Result};
use crate::http::{create_http_client, HttpClientConfig};
use crate::plan::DownloadPlan;
use crate::progress::{ProgressDisplay, StyleOptions};

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::header::HeaderMap;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};
use tracing::{debug, warn};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// use modfetch::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl fmt::Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    pub fn concurrent_downloads(&self) -> usize {
        self.config.concurrent_downloads
    }

    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    pub fn style_options(&self) -> &StyleOptions {
        &self.config.style_options
    }

    pub fn overwrite(&self) -> bool {
        self.config.overwrite
    }

    /// Number of summaries whose file ended up on disk and verified.
    pub fn success_count(summaries: &[Summary]) -> usize {
        summaries.iter().filter(|s| s.is_complete()).count()
    }

    /// Starts the downloads.
    ///
    /// Fails only when the HTTP client cannot be set up; per-file failures
    /// are reported in the returned summaries.
    pub async fn download(&self, downloads: &[Download]) -> Result<Vec<Summary>> {
        if downloads.is_empty() {
            return Ok(Vec::new());
        }

        let client = create_http_client(HttpClientConfig {
            retries: self.config.retries,
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
            timeout: None,
        })
        .map_err(|e| Error::Download(format!("cannot create HTTP client: {}", e)))?;

        let progress_display =
            ProgressDisplay::new(self.config.style_options.clone(), downloads.len());

        let fetches: Vec<_> = downloads
            .iter()
            .map(|d| self.fetch(&client, d, &progress_display))
            .collect();
        let summaries = stream::iter(fetches)
            .buffer_unordered(self.config.concurrent_downloads.max(1))
            .collect::<Vec<_>>()
            .await;

        progress_display.finish();
        Ok(summaries)
    }

    fn notify(&self, summary: &Summary) {
        if let Some(ref callback) = self.config.on_complete {
            callback(summary);
        }
    }

    /// Fetches one file, writes it to disk and verifies it.
    async fn fetch(
        &self,
        client: &ClientWithMiddleware,
        download: &Download,
        progress_display: &ProgressDisplay,
    ) -> Summary {
        let output = self.config.directory.join(&download.filename);
        let summary = Summary::new(download.clone(), 0);

        if !self.config.overwrite && output.exists() {
            match download.verify_hash(&output) {
                Ok(true) => {
                    let size = fs::metadata(&output).await.map(|m| m.len()).unwrap_or(0);
                    let summary = summary
                        .with_size(size)
                        .skip("File exists with matching hash");
                    progress_display.increment_main();
                    self.notify(&summary);
                    return summary;
                }
                Ok(false) => {
                    self.notify(
                        &summary
                            .clone()
                            .hash_mismatch("Hash mismatch, redownloading file"),
                    );
                    if let Err(e) = fs::remove_file(&output).await {
                        let summary =
                            summary.fail(format!("Failed to remove file with wrong hash: {}", e));
                        self.notify(&summary);
                        return summary;
                    }
                }
                Err(e) => debug!("Cannot verify {:?}, redownloading: {}", output, e),
            }
        }

        let summary = match self.write_file(client, download, &output, progress_display).await {
            Ok(size) => summary.with_size(size).with_status(Status::Success),
            Err(e) => {
                warn!(file = %download.filename, error = %e, "download failed");
                // Drop partial content so the next run starts clean.
                let _ = fs::remove_file(&output).await;
                summary.fail(e)
            }
        };

        let written = *summary.status() == Status::Success;
        let summary = match (written, download.hash.as_deref()) {
            (true, Some(expected)) => match download.verify_hash(&output) {
                Ok(true) => summary,
                Ok(false) => summary.hash_mismatch(format!("expected checksum {}", expected)),
                Err(e) => summary.fail(e),
            },
            _ => summary,
        };

        self.notify(&summary);
        summary
    }

    async fn write_file(
        &self,
        client: &ClientWithMiddleware,
        download: &Download,
        output: &Path,
        progress_display: &ProgressDisplay,
    ) -> Result<u64> {
        debug!("Fetching {}", &download.url);
        let res = client
            .get(download.url.as_str())
            .send()
            .await?
            .error_for_status()?;

        let pb = progress_display.create_child_progress(res.content_length().unwrap_or(0));

        if let Some(output_dir) = output.parent() {
            debug!("Creating destination directory {:?}", output_dir);
            fs::create_dir_all(output_dir).await?;
        }

        debug!("Creating destination file {:?}", output);
        let mut file = fs::File::create(output).await?;
        let mut written: u64 = 0;

        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = item?;
            let chunk_size = chunk.len() as u64;
            file.write_all_buf(&mut chunk).await?;
            written += chunk_size;
            pb.inc(chunk_size);
        }
        file.flush().await?;

        progress_display.finish_child(pb);
        progress_display.increment_main();
        Ok(written)
    }
}

#[async_trait]
impl PlanDownloader for Downloader {
    async fn download_plan(&self, plan: &DownloadPlan) -> Result<usize> {
        let summaries = self.download(plan.tasks()).await?;
        Ok(Downloader::success_count(&summaries))
    }
}
