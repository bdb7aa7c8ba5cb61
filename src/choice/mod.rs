//! Presentation of the version catalog as grouped choices
//!
//! # Modules
//!
//! - [`group`]: Single-pass grouping of sorted versions by major version
//! - [`render`]: `<select>` markup and plain-text rendering

pub mod group;
pub mod render;

use tracing::warn;

use crate::version::error::CatalogError;
use crate::version::types::OrderedVersions;

pub use group::{VersionGroup, group_by_major};
pub use render::{render_select, render_text};

/// Grouped versions ready for a selection control
///
/// An unavailable catalog becomes an empty list with an error message so the
/// caller can still render something.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedChoices {
    pub groups: Vec<VersionGroup>,
    pub error: Option<String>,
}

impl GroupedChoices {
    pub fn from_versions(versions: &OrderedVersions) -> Self {
        Self {
            groups: group_by_major(versions),
            error: None,
        }
    }

    pub fn from_result(result: Result<OrderedVersions, CatalogError>) -> Self {
        match result {
            Ok(versions) => Self::from_versions(&versions),
            Err(e) => {
                warn!("Version list unavailable: {}", e);
                Self {
                    groups: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
