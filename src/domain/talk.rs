//! Normalized talk records.
//!
//! A `NormalizedTalk` holds only what the site renders. Nullable speaker
//! fields collapse to empty strings here so the writer never has to
//! think about them.

use serde_json::Value;

use super::submission::{RawSpeaker, RawSubmission};

/// A speaker with every field present
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speaker {
    pub name: String,
    pub biography: String,
    pub avatar: String,
}

impl From<RawSpeaker> for Speaker {
    fn from(raw: RawSpeaker) -> Self {
        Self {
            name: raw.name.unwrap_or_default(),
            biography: raw.biography.unwrap_or_default(),
            avatar: raw.avatar.unwrap_or_default(),
        }
    }
}

/// A talk ready to be written as a page
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTalk {
    pub title: String,
    pub abstract_text: String,
    pub track: Value,
    pub duration: Option<i64>,
    /// Speakers in API order
    pub speakers: Vec<Speaker>,
}

impl From<RawSubmission> for NormalizedTalk {
    fn from(raw: RawSubmission) -> Self {
        Self {
            title: raw.title,
            abstract_text: raw.abstract_text,
            track: raw.track,
            duration: raw.duration,
            speakers: raw.speakers.into_iter().map(Speaker::from).collect(),
        }
    }
}

impl NormalizedTalk {
    /// Speaker names in order
    pub fn speaker_names(&self) -> impl Iterator<Item = &str> {
        self.speakers.iter().map(|s| s.name.as_str())
    }

    /// Speaker biographies in order
    pub fn speaker_biographies(&self) -> impl Iterator<Item = &str> {
        self.speakers.iter().map(|s| s.biography.as_str())
    }

    /// Speaker avatar URLs in order
    pub fn speaker_avatars(&self) -> impl Iterator<Item = &str> {
        self.speakers.iter().map(|s| s.avatar.as_str())
    }
}
