//! Index trait for fetching published versions of an artifact

#[cfg(test)]
use mockall::automock;

use crate::version::error::IndexError;
use crate::version::types::{ArtifactCoordinate, VersionIdentifier};

/// Trait for fetching the published versions of an artifact from a package index
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait IndexClient: Send + Sync {
    /// Fetches all published versions of an artifact
    ///
    /// # Returns
    /// * `Ok(Vec<VersionIdentifier>)` - Versions in the order the index returned them
    /// * `Err(IndexError)` - If the request, the response body or any version is invalid
    async fn fetch_versions(
        &self,
        coordinate: &ArtifactCoordinate,
    ) -> Result<Vec<VersionIdentifier>, IndexError>;
}
