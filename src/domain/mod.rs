//! Domain types for the content generator.
//!
//! This module contains the data structures:
//! - Category: Talks vs. short tutorials
//! - Submission: Raw pretalx records
//! - Talk: Normalized records ready to render

pub mod category;
pub mod submission;
pub mod talk;

// Re-export commonly used types
pub use category::ContentCategory;
pub use submission::{RawSpeaker, RawSubmission, SubmissionPage};
pub use talk::{NormalizedTalk, Speaker};
