use thiserror::Error;

/// Unified error type for versioner operations
///
/// Parsing and bumping a version string never fail; these variants only
/// come from the configuration and segment-name surfaces.
#[derive(Error, Debug)]
pub enum VersionerError {
    #[error("Unknown version segment: {0}")]
    Segment(String),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in versioner
pub type Result<T> = std::result::Result<T, VersionerError>;

impl VersionerError {
    /// Create a segment error for an unrecognised axis name
    pub fn segment(name: impl Into<String>) -> Self {
        VersionerError::Segment(name.into())
    }
}
