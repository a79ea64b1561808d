//! Domain logic - version strings and the segments they are bumped along

pub mod segment;
pub mod version_string;

pub use segment::VersionSegment;
pub use version_string::VersionString;
