//! HTTP module containing HTTP client functionality.
//!
//! Both the catalog client and the byte downloader talk HTTP through the
//! same middleware stack: request tracing and exponential-backoff retry of
//! transient transport failures.
//!
//! # Examples
//!
//! ```rust
//! use modfetch::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "MyLauncher/1.0".parse()?);
//!
//! let config = HttpClientConfig {
//!     retries: 5,
//!     headers: Some(headers),
//!     ..HttpClientConfig::default()
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
