//! Raw submission records as returned by the pretalx API.
//!
//! Only the fields the site needs are modeled; anything else in the
//! payload is ignored. Speaker fields are nullable upstream.
//!
//! A page keeps its results as raw JSON so each record is checked only
//! when it is about to be written.

use serde::Deserialize;
use serde_json::Value;

/// One page of `GET /submissions/` results
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionPage {
    /// Submissions on this page (at most the requested limit)
    pub results: Vec<Value>,
}

/// A submission record
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubmission {
    pub title: String,

    /// Abstract, may contain HTML and `\r\n` line breaks
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// Track, passed through untouched
    pub track: Value,

    /// Slot length in minutes, `null` for unscheduled submissions
    pub duration: Option<i64>,

    pub speakers: Vec<RawSpeaker>,
}

/// A speaker attached to a submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSpeaker {
    pub name: Option<String>,
    pub biography: Option<String>,
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submission_with_null_speaker_fields() {
        let json = r#"{
            "code": "ABC123",
            "title": "Hello",
            "abstract": "Text",
            "track": {"en": "Web"},
            "duration": 45,
            "speakers": [{"code": "X", "name": "Ann", "biography": null}]
        }"#;

        let submission: RawSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.title, "Hello");
        assert_eq!(submission.abstract_text, "Text");
        assert_eq!(submission.duration, Some(45));
        assert_eq!(submission.speakers.len(), 1);
        assert_eq!(submission.speakers[0].name.as_deref(), Some("Ann"));
        assert!(submission.speakers[0].biography.is_none());
        assert!(submission.speakers[0].avatar.is_none());
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let json = r#"{"abstract": "x", "track": null, "duration": 30, "speakers": []}"#;
        assert!(serde_json::from_str::<RawSubmission>(json).is_err());
    }

    #[test]
    fn test_page_requires_results() {
        assert!(serde_json::from_str::<SubmissionPage>(r#"{"detail": "Invalid token."}"#).is_err());

        let page: SubmissionPage =
            serde_json::from_str(r#"{"count": 0, "next": null, "results": []}"#).unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_page_defers_record_checks() {
        let page: SubmissionPage =
            serde_json::from_str(r#"{"results": [{"title": "Ok"}, {"abstract": "no title"}]}"#)
                .unwrap();
        assert_eq!(page.results.len(), 2);
        assert!(serde_json::from_value::<RawSubmission>(page.results[1].clone()).is_err());
    }
}
