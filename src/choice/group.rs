use crate::version::types::VersionIdentifier;

/// Consecutive versions sharing a major version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionGroup {
    pub major: u32,
    pub versions: Vec<VersionIdentifier>,
}

impl VersionGroup {
    /// Display label, e.g. "9.x"
    pub fn label(&self) -> String {
        format!("{}.x", self.major)
    }
}

/// Group versions by major version in a single pass
///
/// A new group starts whenever the major differs from the previous item's.
/// The input must already be sorted (see
/// [`OrderedVersions`](crate::version::types::OrderedVersions)); an unsorted
/// list yields one group per run of equal majors, not one per major.
pub fn group_by_major(versions: &[VersionIdentifier]) -> Vec<VersionGroup> {
    let mut groups: Vec<VersionGroup> = Vec::new();

    for version in versions {
        match groups.last_mut() {
            Some(group) if group.major == version.major() => group.versions.push(version.clone()),
            _ => groups.push(VersionGroup {
                major: version.major(),
                versions: vec![version.clone()],
            }),
        }
    }

    groups
}
