//! Core generation logic.
//!
//! This module contains:
//! - ContentWriter: Page files on disk
//! - ContentGenerator: Fetch, normalize and write loop
//! - ContentError: Payload parsing failures

pub mod error;
pub mod generator;
pub mod writer;

// Re-export commonly used types
pub use error::ContentError;
pub use generator::{parse_page, parse_submission, CategoryReport, ContentGenerator, RunSummary};
pub use writer::ContentWriter;
