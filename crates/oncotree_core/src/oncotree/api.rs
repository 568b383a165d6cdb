//! Async HTTP client for the OncoTree API.

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{TumorType, VersionInfo};

/// Public OncoTree API endpoint.
pub const DEFAULT_API_URL: &str = "http://oncotree.mskcc.org/api";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Result type for API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Client bound to one OncoTree API base URL.
#[derive(Debug, Clone)]
pub struct OncoTreeClient {
    base_url: String,
    http: reqwest::Client,
}

impl OncoTreeClient {
    /// Create a client; a trailing `/` on `base_url` is ignored.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the versions listing.
    pub fn versions_endpoint(&self) -> String {
        format!("{}/versions", self.base_url)
    }

    /// URL of the tumor types for one version.
    pub fn tumor_types_endpoint(&self, version: &str) -> String {
        format!("{}/tumorTypes?version={}", self.base_url, version)
    }

    /// All releases, newest first.
    pub async fn versions(&self) -> ApiResult<Vec<VersionInfo>> {
        let mut versions: Vec<VersionInfo> = self.get_json(&self.versions_endpoint()).await?;
        sort_versions(&mut versions);
        tracing::debug!("{} versions available", versions.len());
        Ok(versions)
    }

    /// Tumor types of one release, in API order.
    pub async fn tumor_types(&self, version: &str) -> ApiResult<Vec<TumorType>> {
        let url = self.tumor_types_endpoint(version);
        let tumors: Vec<TumorType> = self.get_json(&url).await?;
        tracing::debug!("{} tumor types in {}", tumors.len(), version);
        Ok(tumors)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::Request {
            url: url.to_string(),
            source: e,
        })
    }
}

/// Sort releases by date, newest first. Releases sharing a date keep
/// their API order.
pub fn sort_versions(versions: &mut [VersionInfo]) {
    versions.sort_by(|a, b| b.release_date.cmp(&a.release_date));
}

/// Release date of `api_identifier`, if listed.
pub fn release_date_for<'a>(versions: &'a [VersionInfo], api_identifier: &str) -> Option<&'a str> {
    versions
        .iter()
        .find(|v| v.api_identifier == api_identifier)
        .map(|v| v.release_date.as_str())
}
