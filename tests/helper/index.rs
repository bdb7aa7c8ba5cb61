//! Index test utilities

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use wicket_versions::version::error::{FetchError, IndexError};
use wicket_versions::version::index::IndexClient;
use wicket_versions::version::types::{ArtifactCoordinate, VersionIdentifier};

/// In-memory index that counts fetches and can simulate latency or failure
pub struct FakeIndex {
    versions: Vec<String>,
    delay: Duration,
    failure: Option<StatusCode>,
    calls: Arc<AtomicUsize>,
}

impl FakeIndex {
    pub fn new(versions: &[&str]) -> Self {
        Self {
            versions: versions.iter().map(|v| v.to_string()).collect(),
            delay: Duration::ZERO,
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing_with(mut self, status: StatusCode) -> Self {
        self.failure = Some(status);
        self
    }

    /// Handle to the number of fetches started, usable after the index is moved
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl IndexClient for FakeIndex {
    async fn fetch_versions(
        &self,
        _coordinate: &ArtifactCoordinate,
    ) -> Result<Vec<VersionIdentifier>, IndexError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(status) = self.failure {
            return Err(FetchError::Status(status).into());
        }

        Ok(self
            .versions
            .iter()
            .map(|v| VersionIdentifier::parse(v.as_str()))
            .collect::<Result<Vec<_>, _>>()?)
    }
}
