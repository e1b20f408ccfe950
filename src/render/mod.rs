//! Rendering of talks into site pages.
//!
//! - `slug`: Title to filename/URL slug
//! - `markdown`: HTML abstract to Markdown, line-break flattening
//! - `front_matter`: Front-matter block and full page document

pub mod front_matter;
pub mod markdown;
pub mod slug;

pub use front_matter::{render_document, FrontMatter, DEFAULT_DATE, SPEAKER_SEPARATOR};
pub use markdown::{html_to_markdown, line_breaks_to_br};
pub use slug::slugify;
