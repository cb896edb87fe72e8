use lazy_static::lazy_static;
use regex::Regex;

use super::ValidationResult;

pub const MAX_SCORE: u32 = 100;
const MAX_NOTES_LEN: usize = 2000;

lazy_static! {
    static ref CONTENT_URL_RE: Regex =
        Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("content url regex");
}

pub struct SubmissionValidator;

impl SubmissionValidator {
    pub fn validate_create(creator: &str, content_url: &str, notes: Option<&str>) -> ValidationResult {
        let mut result = ValidationResult::new();

        if creator.trim().is_empty() {
            result.error("Creator cannot be empty");
        }

        if !CONTENT_URL_RE.is_match(content_url.trim()) {
            result.error(format!("Content url '{content_url}' is not a valid http(s) url"));
        }

        if let Some(notes) = notes {
            if notes.len() > MAX_NOTES_LEN {
                result.error(format!("Notes exceed {MAX_NOTES_LEN} characters"));
            }
        }

        result
    }

    pub fn validate_score(score: u32) -> ValidationResult {
        let mut result = ValidationResult::new();
        if score > MAX_SCORE {
            result.error(format!("Score {score} exceeds maximum of {MAX_SCORE}"));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission_passes() {
        let result = SubmissionValidator::validate_create(
            "creator1",
            "https://github.com/creator1/work",
            Some("first pass"),
        );
        assert!(result.valid);
    }

    #[test]
    fn test_bad_url_rejected() {
        for url in ["", "ftp://files.example.com", "not a url", "https://"] {
            let result = SubmissionValidator::validate_create("creator1", url, None);
            assert!(!result.valid, "expected '{url}' to be rejected");
        }
    }

    #[test]
    fn test_empty_creator_rejected() {
        let result =
            SubmissionValidator::validate_create("", "https://example.com/work", None);
        assert!(!result.valid);
    }

    #[test]
    fn test_long_notes_rejected() {
        let notes = "x".repeat(MAX_NOTES_LEN + 1);
        let result = SubmissionValidator::validate_create(
            "creator1",
            "https://example.com/work",
            Some(&notes),
        );
        assert!(!result.valid);
    }

    #[test]
    fn test_score_bounds() {
        assert!(SubmissionValidator::validate_score(0).valid);
        assert!(SubmissionValidator::validate_score(MAX_SCORE).valid);
        assert!(!SubmissionValidator::validate_score(MAX_SCORE + 1).valid);
    }
}
