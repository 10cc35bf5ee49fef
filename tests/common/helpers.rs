use async_trait::async_trait;
use modfetch::client::{CatalogClient, FileQuery};
use modfetch::progress::{ProgressBarOpts, StyleOptions};
use modfetch::schema::{FileDependency, FileHash, HashAlgo, RelationType};
use modfetch::{DownloadPlan, Error, File, Mod, ModId, PlanDownloader, Result};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

pub const TEST_USER_AGENT: &str = "modfetch-test-agent";
pub const TEST_API_KEY: &str = "test-api-key";

/// MD5 of an empty file.
pub const TEST_MD5_EMPTY: &str = "d41d8cd98f00b204e9800998ecf8427e";
/// MD5 of `Hello, World!`.
pub const TEST_MD5_HELLO: &str = "65a8e27d8879283831b664bd8b7f0ad4";

static TRACING: Once = Once::new();

/// Installs a test subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

pub fn create_hello_world_content() -> Vec<u8> {
    b"Hello, World!".to_vec()
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

// === Catalog Record Helpers ===

/// A downloadable file of `id` without dependencies.
pub fn create_test_file(id: u32) -> File {
    File {
        id: id * 1000,
        mod_id: ModId(id),
        display_name: format!("Mod {} 1.0.0", id),
        file_name: format!("mod-{}.jar", id),
        download_url: Some(format!("https://edge.example.com/files/{}/mod-{}.jar", id, id)),
        game_versions: vec!["1.20.1".to_string()],
        ..File::default()
    }
}

/// A downloadable file of `id` depending on `deps`.
pub fn create_test_file_with_deps(id: u32, deps: &[(u32, RelationType)]) -> File {
    File {
        dependencies: deps
            .iter()
            .map(|(dep, relation)| FileDependency::new(ModId(*dep), *relation))
            .collect(),
        ..create_test_file(id)
    }
}

/// A file of `id` served from `base` with an MD5 checksum.
pub fn create_served_file(base: &str, id: u32, md5: &str) -> File {
    File {
        download_url: Some(format!("{}/files/mod-{}.jar", base, id)),
        hashes: vec![FileHash {
            value: md5.to_string(),
            algo: HashAlgo::Md5,
        }],
        ..create_test_file(id)
    }
}

pub fn create_test_mod(id: u32) -> Mod {
    Mod {
        id: ModId(id),
        name: format!("Mod {}", id),
        slug: format!("mod-{}", id),
        ..Mod::default()
    }
}

pub fn ids(ids: &[u32]) -> Vec<ModId> {
    ids.iter().copied().map(ModId).collect()
}

// === Catalog Double ===

/// In-memory catalog with call counters and injectable failures.
#[derive(Default)]
pub struct MockCatalog {
    mods: HashMap<ModId, Mod>,
    files: HashMap<ModId, Vec<File>>,
    failing: HashMap<ModId, u16>,
    pub mod_calls: AtomicUsize,
    pub file_calls: AtomicUsize,
    pub queries: Mutex<Vec<FileQuery>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a mod whose latest file is `file`.
    pub fn with_file(mut self, file: File) -> Self {
        let id = file.mod_id;
        self.mods.entry(id).or_insert_with(|| create_test_mod(id.0));
        self.files.insert(id, vec![file]);
        self
    }

    /// Registers a mod without any matching file.
    pub fn without_files(mut self, id: u32) -> Self {
        self.mods.insert(ModId(id), create_test_mod(id));
        self.files.insert(ModId(id), Vec::new());
        self
    }

    /// Makes every request about `id` fail with `status`.
    pub fn failing(mut self, id: u32, status: u16) -> Self {
        self.failing.insert(ModId(id), status);
        self
    }

    pub fn calls(&self) -> usize {
        self.mod_calls.load(Ordering::SeqCst) + self.file_calls.load(Ordering::SeqCst)
    }

    fn check(&self, id: ModId) -> Result<()> {
        match self.failing.get(&id) {
            Some(status) => Err(Error::Remote {
                id,
                status: *status,
                message: "injected failure".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn not_found(id: ModId) -> Error {
        Error::Remote {
            id,
            status: 404,
            message: "not found".to_string(),
        }
    }
}

#[async_trait]
impl CatalogClient for MockCatalog {
    async fn get_mod(&self, id: ModId) -> Result<Mod> {
        self.mod_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.check(id)?;
        self.mods.get(&id).cloned().ok_or_else(|| Self::not_found(id))
    }

    async fn get_files(&self, id: ModId, query: &FileQuery) -> Result<Vec<File>> {
        self.file_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());
        tokio::task::yield_now().await;
        self.check(id)?;
        self.files.get(&id).cloned().ok_or_else(|| Self::not_found(id))
    }
}

// === Downloader Double ===

/// Records every plan instead of downloading it.
#[derive(Default)]
pub struct MockDownloader {
    pub plans: Mutex<Vec<DownloadPlan>>,
}

impl MockDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// File names of the last plan.
    pub fn last_filenames(&self) -> Vec<String> {
        self.plans
            .lock()
            .unwrap()
            .last()
            .map(|plan| plan.tasks().iter().map(|d| d.filename.clone()).collect())
            .unwrap_or_default()
    }

    pub fn plan_count(&self) -> usize {
        self.plans.lock().unwrap().len()
    }
}

#[async_trait]
impl PlanDownloader for MockDownloader {
    async fn download_plan(&self, plan: &DownloadPlan) -> Result<usize> {
        self.plans.lock().unwrap().push(plan.clone());
        Ok(plan.len())
    }
}

/// Confirmation double counting how often it is asked.
#[derive(Default)]
pub struct CountingPrompt {
    pub answer: bool,
    pub asked: AtomicUsize,
}

impl CountingPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl modfetch::Confirm for CountingPrompt {
    fn confirm(&self, auto_confirm: bool) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        auto_confirm || self.answer
    }
}

// === HTTP Configuration Helpers ===

/// Creates test headers with common user agent
pub fn create_test_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(TEST_USER_AGENT));
    headers
}

// === Progress Bar Helpers ===

pub fn create_test_progress_opts() -> ProgressBarOpts {
    ProgressBarOpts::new(None, None, true, false)
}

pub fn create_custom_progress_opts(template: &str, chars: &str) -> ProgressBarOpts {
    ProgressBarOpts::new(
        Some(template.to_string()),
        Some(chars.to_string()),
        true,
        false,
    )
}

pub fn create_test_style_options() -> StyleOptions {
    StyleOptions::new(create_test_progress_opts(), ProgressBarOpts::with_pip_style())
}

/// Asserts that progress bar options are configured correctly
pub fn assert_progress_opts_enabled(opts: &ProgressBarOpts) {
    let pb = opts.to_progress_bar(100);
    assert!(!pb.is_hidden(), "Progress bar should be enabled");
}

/// Asserts that progress bar options are disabled
pub fn assert_progress_opts_disabled(opts: &ProgressBarOpts) {
    let pb = opts.to_progress_bar(100);
    assert!(pb.is_hidden(), "Progress bar should be disabled");
}
