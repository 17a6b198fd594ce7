use chrono::{DateTime, Utc};

/// Metadata returned by a head request against the object store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata {
    /// size of the object body in bytes
    pub content_length: u64,
    pub content_type: String,
    pub last_modified: DateTime<Utc>,
}
