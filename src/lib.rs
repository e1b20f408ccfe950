//! pretalx-md - Markdown pages for confirmed pretalx submissions
//!
//! Fetches confirmed talks and short tutorials from the pretalx API and
//! writes one Markdown page per submission, with speaker metadata in the
//! front matter, for a static site generator to pick up.
//!
//! # Architecture
//!
//! Data flows one way:
//! - credentials (`.env`) -> API client -> raw JSON page
//! - raw submission -> normalized talk -> rendered page on disk
//!
//! # Modules
//!
//! - `adapters`: External system integrations (pretalx)
//! - `core`: Generation loop and page writer
//! - `domain`: Data structures (Category, Submission, Talk)
//! - `render`: Slug, Markdown and front-matter rendering
//! - `config`: Credentials and settings resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Generate content/palestras/*.md and content/tutoriais/*.md
//! pretalx-md
//!
//! # Only tutorials
//! pretalx-md generate --category tutoriais
//!
//! # Preview a slug
//! pretalx-md slug "Rust 1.75: o que há de novo?"
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;

// Re-export main types at crate root for convenience
pub use crate::adapters::{Credentials, PretalxClient, SubmissionSource};
pub use crate::config::{load_config, ResolvedConfig};
pub use crate::core::{ContentGenerator, ContentWriter, RunSummary};
pub use crate::domain::{ContentCategory, NormalizedTalk, RawSubmission, Speaker};
pub use crate::render::{render_document, slugify};
