//! Shared test utilities

#![allow(dead_code, unused_imports)]

pub mod index;

pub use index::FakeIndex;

use wicket_versions::version::types::OrderedVersions;

/// Raw strings of an ordered list, for concise assertions
pub fn raw_versions(versions: &OrderedVersions) -> Vec<String> {
    versions.iter().map(|v| v.to_string()).collect()
}
