//! Version layer: fetching, ordering and caching published releases
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Index    │────▶│   Catalog   │────▶│   choice    │
//! │   (fetch)   │     │   (cache)   │     │  (grouping) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Indexes   │     │   Compare   │
//! │(maven, ...) │     │(version cmp)│
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: TTL cache with single-flight refill
//! - [`compare`]: Release ordering with pre-release qualifiers
//! - [`index`]: Index trait for fetching versions from remote sources
//! - [`indexes`]: Concrete index implementations (Maven Central)
//! - [`error`]: Error types for fetch, parse and catalog operations
//! - [`types`]: `VersionIdentifier`, `OrderedVersions` and `ArtifactCoordinate`

pub mod catalog;
pub mod compare;
pub mod error;
pub mod index;
pub mod indexes;
pub mod types;
