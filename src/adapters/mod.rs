//! Adapter interfaces for external systems.
//!
//! A `SubmissionSource` hands back the raw body of one submissions page per
//! category. The pretalx HTTP client is the production source; tests plug
//! in canned payloads.

pub mod pretalx;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::ContentCategory;

pub use pretalx::{Credentials, PretalxClient};

/// Trait for anything that can return a submissions page
#[async_trait]
pub trait SubmissionSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Fetch the raw response body for a category
    async fn fetch(&self, category: ContentCategory) -> Result<String>;
}
