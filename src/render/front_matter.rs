//! Page document rendering.
//!
//! A page is a front-matter block followed by the abstract in Markdown:
//!
//! ```text
//! ---
//! Title: <title>
//! Date: <date>
//! Description: <abstract, \r\n -> <br/>>
//! Slug: <slug>
//! Duration: <minutes>
//! Speakers: <names joined by |>
//! Speakers_biography: <biographies joined by |>
//! Speakers_avatar: <avatar URLs joined by |>
//!
//! ---
//!
//! <abstract as Markdown>
//! ```

use crate::domain::NormalizedTalk;

use super::markdown::{html_to_markdown, line_breaks_to_br, normalize_blank_lines};
use super::slug::slugify;

/// Separator between per-speaker values
pub const SPEAKER_SEPARATOR: &str = "|";

/// Date written into every page unless configured otherwise
pub const DEFAULT_DATE: &str = "2023-12-03 10:20";

/// Front-matter fields of one page, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub description: String,
    pub slug: String,
    pub duration: String,
    pub speakers: String,
    pub speakers_biography: String,
    pub speakers_avatar: String,
}

impl FrontMatter {
    /// Build the front matter for a talk
    pub fn from_talk(talk: &NormalizedTalk, date: &str) -> Self {
        Self {
            title: talk.title.clone(),
            date: date.to_string(),
            description: line_breaks_to_br(&talk.abstract_text),
            slug: slugify(&talk.title),
            duration: duration_text(talk.duration),
            speakers: join(talk.speaker_names()),
            speakers_biography: join(talk.speaker_biographies().map(line_breaks_to_br)),
            speakers_avatar: join(talk.speaker_avatars()),
        }
    }

    /// Render the delimited block, including the trailing blank line and
    /// closing delimiter
    pub fn render(&self) -> String {
        format!(
            "---\n\
             Title: {}\n\
             Date: {}\n\
             Description: {}\n\
             Slug: {}\n\
             Duration: {}\n\
             Speakers: {}\n\
             Speakers_biography: {}\n\
             Speakers_avatar: {}\n\
             \n\
             ---\n",
            self.title,
            self.date,
            self.description,
            self.slug,
            self.duration,
            self.speakers,
            self.speakers_biography,
            self.speakers_avatar,
        )
    }
}

/// Unscheduled submissions carry a `null` duration, written as `None`
fn duration_text(duration: Option<i64>) -> String {
    match duration {
        Some(minutes) => minutes.to_string(),
        None => "None".to_string(),
    }
}

fn join<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(SPEAKER_SEPARATOR)
}

/// Render the full page for a talk
pub fn render_document(talk: &NormalizedTalk, date: &str) -> String {
    let front_matter = FrontMatter::from_talk(talk, date).render();
    let body = html_to_markdown(&talk.abstract_text);

    normalize_blank_lines(&format!("{}\n{}", front_matter, body))
}
