//! CurseForge REST API client.

use super::{CatalogClient, FileQuery};
use crate::error::{Error, Result};
use crate::http::{create_http_client, HttpClientConfig};
use crate::schema::{ApiResponse, File, Mod, ModId};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "CURSEFORGE_API_KEY";
/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "CURSEFORGE_API_URL";
/// Public CurseForge API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.curseforge.com";

/// Configuration of the CurseForge client.
#[derive(Clone)]
pub struct CurseForgeConfig {
    pub api_key: String,
    pub base_url: String,
    pub http: HttpClientConfig,
}

impl std::fmt::Debug for CurseForgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurseForgeConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("http", &self.http)
            .finish()
    }
}

impl CurseForgeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: HttpClientConfig::default(),
        }
    }

    /// Read the API key and optional base URL from the environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Internal(format!("{} is not set", API_KEY_ENV)))?;
        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.base_url = url;
        }
        Ok(config)
    }

    /// Point the client at another endpoint.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// [`CatalogClient`] backed by the CurseForge REST API.
#[derive(Clone, Debug)]
pub struct CurseForgeClient {
    client: ClientWithMiddleware,
    base_url: Url,
}

impl CurseForgeClient {
    pub fn new(config: CurseForgeConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::InvalidUrl(format!(
                "The url \"{}\" cannot be parsed: {}",
                config.base_url, e
            ))
        })?;

        let mut headers = config.http.headers.clone().unwrap_or_default();
        let key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| Error::Internal(format!("invalid API key header: {}", e)))?;
        headers.insert("x-api-key", key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = create_http_client(HttpClientConfig {
            headers: Some(headers),
            ..config.http
        })?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, id: ModId, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let res = self.client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            let message = res.text().await.unwrap_or_default();
            return Err(Error::Remote {
                id,
                status: status.as_u16(),
                message,
            });
        }
        Ok(res.json::<T>().await?)
    }
}

fn query_pairs(query: &FileQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::with_capacity(4);
    if !query.game_version.is_empty() {
        pairs.push(("gameVersion", query.game_version.clone()));
    }
    pairs.push(("modLoaderType", query.mod_loader.code().to_string()));
    pairs.push(("index", query.index.to_string()));
    pairs.push(("pageSize", query.page_size.to_string()));
    pairs
}

#[async_trait]
impl CatalogClient for CurseForgeClient {
    async fn get_mod(&self, id: ModId) -> Result<Mod> {
        let url = self.endpoint(&format!("/v1/mods/{}", id))?;
        let resp: ApiResponse<Mod> = self.get_json(id, url).await?;
        Ok(resp.data)
    }

    async fn get_files(&self, id: ModId, query: &FileQuery) -> Result<Vec<File>> {
        let mut url = self.endpoint(&format!("/v1/mods/{}/files", id))?;
        url.query_pairs_mut().extend_pairs(query_pairs(query));
        let resp: ApiResponse<Vec<File>> = self.get_json(id, url).await?;
        Ok(resp.data)
    }
}
