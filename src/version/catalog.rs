//! Cached, ordered view of an artifact's published versions

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::config::CacheConfig;
use crate::version::error::CatalogError;
use crate::version::index::IndexClient;
use crate::version::types::{ArtifactCoordinate, OrderedVersions};

struct CacheEntry {
    versions: OrderedVersions,
    stored_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

/// Ordered version list of one artifact, cached for a time-to-live
///
/// Warm reads only take a shared lock. Refills are serialized by a separate
/// async mutex so that at most one fetch is in flight; callers that queued
/// behind it re-check the cache before fetching themselves.
pub struct VersionCatalog<C: IndexClient> {
    client: C,
    coordinate: ArtifactCoordinate,
    ttl: Duration,
    serve_stale_on_error: bool,
    entry: RwLock<Option<CacheEntry>>,
    refill: Mutex<()>,
}

impl<C: IndexClient> VersionCatalog<C> {
    pub fn new(client: C, coordinate: ArtifactCoordinate, config: &CacheConfig) -> Self {
        Self {
            client,
            coordinate,
            ttl: config.ttl_duration(),
            serve_stale_on_error: config.serve_stale_on_error,
            entry: RwLock::new(None),
            refill: Mutex::new(()),
        }
    }

    pub fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    fn read_entry(&self) -> Result<RwLockReadGuard<'_, Option<CacheEntry>>, CatalogError> {
        self.entry.read().map_err(|_| CatalogError::LockPoisoned)
    }

    fn write_entry(&self) -> Result<RwLockWriteGuard<'_, Option<CacheEntry>>, CatalogError> {
        self.entry.write().map_err(|_| CatalogError::LockPoisoned)
    }

    fn fresh_versions(&self) -> Result<Option<OrderedVersions>, CatalogError> {
        Ok(self
            .read_entry()?
            .as_ref()
            .filter(|entry| entry.is_fresh(self.ttl))
            .map(|entry| entry.versions.clone()))
    }

    fn stale_versions(&self) -> Result<Option<OrderedVersions>, CatalogError> {
        Ok(self
            .read_entry()?
            .as_ref()
            .map(|entry| entry.versions.clone()))
    }

    /// Returns the versions newest first, fetching them when the cache is
    /// empty or expired
    ///
    /// Fetch and parse failures are returned unchanged and leave any
    /// previous entry untouched.
    pub async fn get_versions(&self) -> Result<OrderedVersions, CatalogError> {
        if let Some(versions) = self.fresh_versions()? {
            debug!("Cache hit for {}", self.coordinate);
            return Ok(versions);
        }

        let _refill = self.refill.lock().await;

        // Refilled by the caller that held the lock before us
        if let Some(versions) = self.fresh_versions()? {
            debug!("Cache refilled concurrently for {}", self.coordinate);
            return Ok(versions);
        }

        info!("Fetching versions for {}", self.coordinate);

        match self.client.fetch_versions(&self.coordinate).await {
            Ok(versions) => {
                let versions = OrderedVersions::sort(versions);
                *self.write_entry()? = Some(CacheEntry {
                    versions: versions.clone(),
                    stored_at: Instant::now(),
                });
                info!(
                    "Cached {} versions for {}",
                    versions.len(),
                    self.coordinate
                );
                Ok(versions)
            }
            Err(e) => {
                error!("Failed to fetch versions for {}: {}", self.coordinate, e);

                if self.serve_stale_on_error {
                    if let Some(stale) = self.stale_versions()? {
                        warn!(
                            "Serving {} stale versions for {}",
                            stale.len(),
                            self.coordinate
                        );
                        return Ok(stale);
                    }
                }

                Err(e.into())
            }
        }
    }

    /// Drops the cached entry so the next read fetches again
    pub fn invalidate(&self) -> Result<(), CatalogError> {
        debug!("Invalidating cached versions for {}", self.coordinate);
        *self.write_entry()? = None;
        Ok(())
    }
}
