//! Index implementations for fetching artifact versions

pub mod maven_central;

pub use maven_central::MavenCentralIndex;
