use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::version::compare::newest_first;
use crate::version::error::MalformedVersionError;

/// Default group id queried on the index
pub const DEFAULT_GROUP_ID: &str = "org.apache.wicket";

/// Default artifact id queried on the index
pub const DEFAULT_ARTIFACT_ID: &str = "wicket-core";

/// Maven coordinate of the artifact whose releases are listed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    pub group_id: String,
    pub artifact_id: String,
}

impl ArtifactCoordinate {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }
}

impl Default for ArtifactCoordinate {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_ID, DEFAULT_ARTIFACT_ID)
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// A published release identifier as returned by the index
///
/// The raw string is kept as-is; only the major segment is parsed, at
/// construction time, so that grouping never sees an unparseable major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionIdentifier {
    raw: String,
    major: u32,
}

impl VersionIdentifier {
    /// Parses the major segment (everything before the first `.`)
    ///
    /// # Examples
    /// - "10.1.0" -> major 10
    /// - "9.0.0-M1" -> major 9
    /// - "x.y.z" -> MalformedVersionError
    pub fn parse(raw: impl Into<String>) -> Result<Self, MalformedVersionError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(MalformedVersionError {
                raw,
                reason: "version is empty".to_string(),
            });
        }

        let major_str = raw.split('.').next().unwrap_or_default();
        let major = major_str
            .parse::<u32>()
            .map_err(|e| MalformedVersionError {
                reason: format!("major segment '{}' is not an integer: {}", major_str, e),
                raw: raw.clone(),
            })?;

        Ok(Self { raw, major })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for VersionIdentifier {
    type Err = MalformedVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for VersionIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Versions sorted newest first
///
/// Only constructible through [`OrderedVersions::sort`], so a value of this
/// type always satisfies the ordering that grouping relies on. Clones share
/// the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedVersions(Arc<[VersionIdentifier]>);

impl OrderedVersions {
    /// Stable sort, newest first. Equal-ranking versions keep their input order.
    pub fn sort(mut versions: Vec<VersionIdentifier>) -> Self {
        versions.sort_by(|a, b| newest_first(a.as_str(), b.as_str()));
        Self(versions.into())
    }
}

impl Deref for OrderedVersions {
    type Target = [VersionIdentifier];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Serialize for OrderedVersions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}
