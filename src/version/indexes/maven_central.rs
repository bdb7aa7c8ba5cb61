//! Maven Central search API implementation

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::IndexConfig;
use crate::version::error::{FetchError, IndexError, ParseError};
use crate::version::index::IndexClient;
use crate::version::types::{ArtifactCoordinate, VersionIdentifier};

/// Path of the Solr select endpoint below the base URL
const SEARCH_PATH: &str = "/solrsearch/select";

/// Response from the Maven Central search API
#[derive(Debug, Deserialize)]
struct SearchResponse {
    response: SearchResult,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    docs: Vec<SearchDoc>,
}

/// A single GAV document; only the version is needed
#[derive(Debug, Deserialize)]
struct SearchDoc {
    v: String,
}

/// Index implementation for the Maven Central search API
pub struct MavenCentralIndex {
    client: Client,
    base_url: String,
    rows: u32,
}

impl MavenCentralIndex {
    pub fn new(config: &IndexConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("wicket-versions")
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::Network)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rows: config.rows,
        })
    }

    fn search_url(&self, coordinate: &ArtifactCoordinate) -> Result<Url, IndexError> {
        let query = format!(
            "g:{} AND a:{}",
            coordinate.group_id, coordinate.artifact_id
        );
        let rows = self.rows.to_string();

        Url::parse_with_params(
            &format!("{}{}", self.base_url, SEARCH_PATH),
            &[
                ("q", query.as_str()),
                ("core", "gav"),
                ("rows", rows.as_str()),
                ("wt", "json"),
            ],
        )
        .map_err(|e| {
            warn!("Invalid index URL {}: {}", self.base_url, e);
            IndexError::Fetch(FetchError::InvalidUrl(e.to_string()))
        })
    }

    /// Parses a search response body, failing on the first bad entry
    fn parse_versions(body: &[u8]) -> Result<Vec<VersionIdentifier>, IndexError> {
        let search: SearchResponse = serde_json::from_slice(body)
            .map_err(ParseError::from)
            .inspect_err(|e| warn!("Failed to parse search response: {}", e))?;

        let versions = search
            .response
            .docs
            .into_iter()
            .map(|doc| VersionIdentifier::parse(doc.v))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| warn!("Index returned an invalid version: {}", e))?;

        Ok(versions)
    }
}

#[async_trait]
impl IndexClient for MavenCentralIndex {
    async fn fetch_versions(
        &self,
        coordinate: &ArtifactCoordinate,
    ) -> Result<Vec<VersionIdentifier>, IndexError> {
        let url = self.search_url(coordinate)?;
        debug!("Fetching versions of {}: {}", coordinate, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();

        if !status.is_success() {
            warn!("Maven Central returned status {} for {}", status, coordinate);
            return Err(FetchError::Status(status).into());
        }

        let body = response.bytes().await.map_err(FetchError::from)?;
        if body.is_empty() {
            warn!("Maven Central returned an empty body for {}", coordinate);
            return Err(FetchError::EmptyBody(status).into());
        }

        let versions = Self::parse_versions(&body)?;

        debug!("Found {} versions for {}", versions.len(), coordinate);

        Ok(versions)
    }
}
