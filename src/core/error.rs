//! Errors raised while reading submission payloads.

use thiserror::Error;

use crate::domain::ContentCategory;

/// A payload that cannot be turned into talks
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Malformed {category} submissions page: {source}")]
    MalformedPage {
        category: ContentCategory,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed {category} submission at index {index}: {source}")]
    MalformedSubmission {
        category: ContentCategory,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
