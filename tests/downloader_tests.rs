//! Tests for the downloader module functionality.
//!
//! This file contains all tests for the downloader module, including tests for:
//! - DownloaderBuilder pattern
//! - Downloads against a mock HTTP server
//! - Checksum verification of existing and downloaded files
//! - Download plans built from resolved files

use modfetch::downloader::DownloaderBuilder;
use modfetch::fetch::{FetchMap, Fetched};
use modfetch::{Download, DownloadPlan, Downloader, ModId, PlanDownloader, Status};

use reqwest::header::{HeaderValue, USER_AGENT};
use std::fs;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::helpers::*;

async fn serve_hello(server: &MockServer, file: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/files/{}", file)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(create_hello_world_content()))
        .mount(server)
        .await;
}

fn hello_download(server: &MockServer, file: &str, hash: Option<&str>) -> Download {
    let url = format!("{}/files/{}", server.uri(), file);
    let mut download = Download::try_from(url.as_str()).expect("Failed to create download");
    download.hash = hash.map(str::to_string);
    download
}

#[test]
fn test_builder_defaults() {
    let downloader = DownloaderBuilder::new().build();

    assert_eq!(downloader.retries(), 3);
    assert_eq!(downloader.concurrent_downloads(), 32);
    assert!(!downloader.overwrite());
    assert!(downloader.headers().is_none());
    assert!(downloader.style_options().is_enabled());
}

#[test]
fn test_builder_configuration() {
    let temp_dir = create_temp_dir();
    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .retries(5)
        .concurrent_downloads(10)
        .overwrite(true)
        .build();

    assert_eq!(downloader.directory(), temp_dir.path());
    assert_eq!(downloader.retries(), 5);
    assert_eq!(downloader.concurrent_downloads(), 10);
    assert!(downloader.overwrite());
    assert!(!downloader.style_options().is_enabled());
}

#[test]
fn test_builder_headers() {
    let downloader = DownloaderBuilder::new()
        .headers(create_test_headers())
        .build();

    assert_eq!(
        downloader.headers().unwrap().get(USER_AGENT),
        Some(&HeaderValue::from_static(TEST_USER_AGENT))
    );
}

#[test]
fn test_builder_single_header() {
    let downloader = DownloaderBuilder::new()
        .header(USER_AGENT, HeaderValue::from_static("single-test-agent"))
        .build();

    assert_eq!(
        downloader.headers().unwrap().get(USER_AGENT),
        Some(&HeaderValue::from_static("single-test-agent"))
    );
}

#[test]
fn test_downloader_debug() {
    let downloader = DownloaderBuilder::new().build();
    let debug_str = format!("{:?}", downloader);

    assert!(debug_str.contains("Downloader"));
    assert!(debug_str.contains("concurrent_downloads"));
}

#[tokio::test]
async fn test_empty_download_list() {
    let downloader = DownloaderBuilder::hidden().build();
    let summaries = downloader.download(&[]).await.unwrap();
    assert!(summaries.is_empty());
}

#[tokio::test]
async fn test_download_writes_file() {
    init_tracing();
    let server = MockServer::start().await;
    serve_hello(&server, "mod-10.jar").await;
    let temp_dir = create_temp_dir();

    let statuses = Arc::new(Mutex::new(Vec::new()));
    let seen = statuses.clone();
    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .on_complete(move |summary| seen.lock().unwrap().push(summary.status().clone()))
        .build();

    let download = hello_download(&server, "mod-10.jar", Some(TEST_MD5_HELLO));
    let summaries = downloader.download(&[download]).await.unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].status(), &Status::Success);
    assert_eq!(summaries[0].size(), 13);
    let output = temp_dir.path().join("mod-10.jar");
    assert_file_exists(&output);
    assert_eq!(fs::read(&output).unwrap(), create_hello_world_content());
    assert_eq!(*statuses.lock().unwrap(), vec![Status::Success]);
}

#[tokio::test]
async fn test_existing_file_with_matching_hash_is_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let temp_dir = create_temp_dir();
    create_temp_file(temp_dir.path(), "mod-10.jar", &create_hello_world_content());

    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .build();
    let download = hello_download(&server, "mod-10.jar", Some(TEST_MD5_HELLO));
    let summaries = downloader.download(&[download]).await.unwrap();

    assert!(matches!(summaries[0].status(), Status::Skipped(_)));
    assert!(summaries[0].is_complete());
    assert_eq!(Downloader::success_count(&summaries), 1);
}

#[tokio::test]
async fn test_existing_file_with_wrong_hash_is_replaced() {
    let server = MockServer::start().await;
    serve_hello(&server, "mod-10.jar").await;
    let temp_dir = create_temp_dir();
    let output = create_temp_file(temp_dir.path(), "mod-10.jar", b"stale content");

    let statuses = Arc::new(Mutex::new(Vec::new()));
    let seen = statuses.clone();
    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .on_complete(move |summary| seen.lock().unwrap().push(summary.status().clone()))
        .build();
    let download = hello_download(&server, "mod-10.jar", Some(TEST_MD5_HELLO));
    let summaries = downloader.download(&[download]).await.unwrap();

    assert_eq!(summaries[0].status(), &Status::Success);
    assert_eq!(fs::read(&output).unwrap(), create_hello_world_content());
    let statuses = statuses.lock().unwrap();
    assert_eq!(statuses.len(), 2);
    assert!(matches!(statuses[0], Status::HashMismatch(_)));
    assert_eq!(statuses[1], Status::Success);
}

#[tokio::test]
async fn test_downloaded_file_with_wrong_hash() {
    let server = MockServer::start().await;
    serve_hello(&server, "mod-10.jar").await;
    let temp_dir = create_temp_dir();

    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .build();
    let download = hello_download(&server, "mod-10.jar", Some(TEST_MD5_EMPTY));
    let summaries = downloader.download(&[download]).await.unwrap();

    assert!(matches!(summaries[0].status(), Status::HashMismatch(_)));
    assert!(!summaries[0].is_complete());
}

#[tokio::test]
async fn test_failed_download_removes_partial_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/missing.jar"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let temp_dir = create_temp_dir();

    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .retries(0)
        .build();
    let download = hello_download(&server, "missing.jar", None);
    let summaries = downloader.download(&[download]).await.unwrap();

    assert!(matches!(summaries[0].status(), Status::Fail(_)));
    assert!(!temp_dir.path().join("missing.jar").exists());
}

#[tokio::test]
async fn test_download_plan_counts_successes() {
    let server = MockServer::start().await;
    serve_hello(&server, "mod-10.jar").await;
    serve_hello(&server, "mod-20.jar").await;
    let temp_dir = create_temp_dir();

    let mut files = FetchMap::new();
    files.insert(
        ModId(10),
        Fetched::Ok(create_served_file(&server.uri(), 10, TEST_MD5_HELLO)),
    );
    files.insert(
        ModId(20),
        Fetched::Ok(create_served_file(&server.uri(), 20, TEST_MD5_EMPTY)),
    );
    let plan = DownloadPlan::build(&files);
    assert_eq!(plan.len(), 2);

    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .concurrent_downloads(1)
        .build();
    let downloaded = downloader.download_plan(&plan).await.unwrap();

    // mod-20 is served with another checksum than the one listed.
    assert_eq!(downloaded, 1);
}
