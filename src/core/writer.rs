//! Page files on disk.
//!
//! Pages live at `<content_dir>/<category>/<slug>.md`. Existing files are
//! overwritten without warning.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tracing::debug;

use crate::domain::{ContentCategory, NormalizedTalk};
use crate::render::{render_document, slugify};

/// Writes rendered talks under a content directory
#[derive(Debug, Clone)]
pub struct ContentWriter {
    content_dir: PathBuf,
    date: String,
}

impl ContentWriter {
    /// Create a writer rooted at `content_dir`, stamping `date` on every page
    pub fn new(content_dir: impl Into<PathBuf>, date: impl Into<String>) -> Self {
        Self {
            content_dir: content_dir.into(),
            date: date.into(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Directory for a category's pages
    pub fn category_dir(&self, category: ContentCategory) -> PathBuf {
        self.content_dir.join(category.dir_name())
    }

    /// Ensure the category directory exists
    pub async fn ensure_dir(&self, category: ContentCategory) -> Result<PathBuf> {
        let dir = self.category_dir(category);
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create content directory: {}", dir.display()))?;
        Ok(dir)
    }

    /// Render and write one talk, returning the file path
    pub async fn write_talk(&self, category: ContentCategory, talk: &NormalizedTalk) -> Result<PathBuf> {
        let dir = self.ensure_dir(category).await?;

        let file_name = slugify(&talk.title);
        let path = dir.join(format!("{}.md", file_name));
        let document = render_document(talk, &self.date);

        fs::write(&path, document)
            .await
            .with_context(|| format!("Failed to write page: {}", path.display()))?;

        debug!(path = %path.display(), "Page written");
        println!("File created:{}", file_name);

        Ok(path)
    }
}
