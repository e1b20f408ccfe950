//! Content generation run.
//!
//! Fetches each requested category in turn, normalizes every submission on
//! the page and writes one page per submission. Each record is decoded right
//! before it is written, so the first bad record aborts the run with the
//! pages of the records before it already on disk.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, instrument};

use crate::adapters::SubmissionSource;
use crate::domain::{ContentCategory, NormalizedTalk, RawSubmission, SubmissionPage};

use super::error::ContentError;
use super::writer::ContentWriter;

/// Files written for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub category: ContentCategory,
    pub files: Vec<PathBuf>,
}

/// Outcome of a full run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub categories: Vec<CategoryReport>,
}

impl RunSummary {
    /// Total number of pages written
    pub fn total_files(&self) -> usize {
        self.categories.iter().map(|c| c.files.len()).sum()
    }
}

/// Parse a raw submissions page for a category
pub fn parse_page(category: ContentCategory, body: &str) -> Result<SubmissionPage, ContentError> {
    serde_json::from_str(body).map_err(|source| ContentError::MalformedPage { category, source })
}

/// Decode one record of a page
pub fn parse_submission(
    category: ContentCategory,
    index: usize,
    record: serde_json::Value,
) -> Result<RawSubmission, ContentError> {
    serde_json::from_value(record).map_err(|source| ContentError::MalformedSubmission {
        category,
        index,
        source,
    })
}

/// Drives fetching and writing
pub struct ContentGenerator<S> {
    source: S,
    writer: ContentWriter,
}

impl<S: SubmissionSource> ContentGenerator<S> {
    pub fn new(source: S, writer: ContentWriter) -> Self {
        Self { source, writer }
    }

    /// Process the given categories in order
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn run(&self, categories: &[ContentCategory]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for &category in categories {
            let files = self.generate_category(category).await?;
            summary.categories.push(CategoryReport { category, files });
        }

        info!(files = summary.total_files(), "Content generation finished");
        Ok(summary)
    }

    /// Fetch one category and write a page per submission
    pub async fn generate_category(&self, category: ContentCategory) -> Result<Vec<PathBuf>> {
        let body = self.source.fetch(category).await?;
        let page = parse_page(category, &body)?;
        info!(%category, submissions = page.results.len(), "Fetched submissions");

        let mut files = Vec::with_capacity(page.results.len());
        for (index, record) in page.results.into_iter().enumerate() {
            let talk = NormalizedTalk::from(parse_submission(category, index, record)?);
            files.push(self.writer.write_talk(category, &talk).await?);
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_error_names_category() {
        let err = parse_page(ContentCategory::Tutoriais, "<html>502</html>").unwrap_err();
        assert!(err.to_string().starts_with("Malformed tutoriais submissions page"));
    }

    #[test]
    fn test_parse_submission_error_names_index() {
        let err = parse_submission(
            ContentCategory::Palestras,
            3,
            serde_json::json!({"abstract": "x", "track": null, "speakers": []}),
        )
        .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Malformed palestras submission at index 3"));
    }

    #[test]
    fn test_summary_total() {
        let summary = RunSummary {
            categories: vec![
                CategoryReport {
                    category: ContentCategory::Palestras,
                    files: vec![PathBuf::from("a.md"), PathBuf::from("b.md")],
                },
                CategoryReport {
                    category: ContentCategory::Tutoriais,
                    files: vec![PathBuf::from("c.md")],
                },
            ],
        };
        assert_eq!(summary.total_files(), 3);
    }
}
