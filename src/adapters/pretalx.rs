//! pretalx REST API client.
//!
//! Issues one `GET` per category against the submissions endpoint, asking
//! for confirmed submissions of the category's submission type. Only the
//! first page is requested.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::{debug, warn};

use super::SubmissionSource;
use crate::domain::ContentCategory;

/// Maximum number of results requested per category
pub const PAGE_LIMIT: u32 = 100;

/// Submission state filter
pub const CONFIRMED_STATE: &str = "confirmed";

/// API credentials, read from the `.env` file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Value sent verbatim as the `Authorization` header
    pub token: String,
    /// Submissions endpoint URL
    pub api_url: String,
}

/// pretalx API client
pub struct PretalxClient {
    credentials: Credentials,
    client: reqwest::Client,
}

impl PretalxClient {
    /// Create a new client
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client around a preconfigured HTTP client
    pub fn with_client(credentials: Credentials, client: reqwest::Client) -> Self {
        Self { credentials, client }
    }

    /// Build the submissions URL for a category
    fn submissions_url(&self, category: ContentCategory) -> String {
        format!(
            "{}?state={}&submission_type={}&limit={}",
            self.credentials.api_url,
            CONFIRMED_STATE,
            category.submission_type(),
            PAGE_LIMIT
        )
    }

    /// Fetch the raw submissions page for a category.
    ///
    /// The HTTP status is not checked: an error body is handed back like any
    /// other and fails later when it does not parse as a submissions page.
    pub async fn fetch_submissions(&self, category: ContentCategory) -> Result<String> {
        let url = self.submissions_url(category);
        debug!(%category, %url, "Fetching submissions");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.credentials.token.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {} from {}", category, url))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%category, %status, "pretalx returned a non-success status");
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read {} response body", category))
    }
}

#[async_trait]
impl SubmissionSource for PretalxClient {
    fn name(&self) -> &str {
        "pretalx"
    }

    async fn fetch(&self, category: ContentCategory) -> Result<String> {
        self.fetch_submissions(category).await
    }
}
