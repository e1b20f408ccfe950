//! Content categories published on the site.
//!
//! Each category is bound to a pretalx submission type and to the
//! subdirectory of `content/` its pages are written to.

/// Kind of confirmed submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCategory {
    /// Talks (`palestras`)
    Palestras,

    /// Short tutorials (`tutoriais`)
    Tutoriais,
}

impl ContentCategory {
    /// Every category, in the order a full run processes them
    pub const ALL: [ContentCategory; 2] = [ContentCategory::Palestras, ContentCategory::Tutoriais];

    /// Submission type identifier used by the pretalx API filter
    pub fn submission_type(self) -> u32 {
        match self {
            ContentCategory::Palestras => 2858,
            ContentCategory::Tutoriais => 2860,
        }
    }

    /// Output subdirectory name under the content directory
    pub fn dir_name(self) -> &'static str {
        match self {
            ContentCategory::Palestras => "palestras",
            ContentCategory::Tutoriais => "tutoriais",
        }
    }
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl std::str::FromStr for ContentCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "palestras" | "palestra" | "talks" | "talk" => Ok(ContentCategory::Palestras),
            "tutoriais" | "tutorial" | "tutorials" => Ok(ContentCategory::Tutoriais),
            _ => anyhow::bail!("Unknown content category: {}", s),
        }
    }
}
