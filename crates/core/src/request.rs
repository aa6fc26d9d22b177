//! Construction and validation of a single generation request.

use crate::error::CoreError;
use crate::sanitize;

/// A validated, immutable generation request.
///
/// Built once from raw form fields at request time; lives only for the
/// duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Module name (free text).
    pub module: String,
    /// Subject description (free text, may be empty).
    pub description: String,
    /// Ordered subject list parsed from a comma-separated field. Empty
    /// pieces are retained (see [`sanitize::parse_subjects`]).
    pub subjects: Vec<String>,
    /// Requested question count, coerced and capped at the configured
    /// maximum. Zero means "no questions requested" and is not an error.
    pub num_questions: u32,
}

impl GenerationRequest {
    /// Build a request from raw form fields.
    ///
    /// `module` must be non-empty after trimming and `subjects` must
    /// contain at least one non-empty piece; everything else is coerced
    /// silently. `max_questions` is the configured upper bound on the
    /// requested count (the form's suggested 1-50 range, enforced
    /// server-side on the upper end only).
    pub fn from_fields(
        module: &str,
        description: &str,
        subjects: &str,
        count: &str,
        max_questions: u32,
    ) -> Result<Self, CoreError> {
        let module = module.trim().to_string();
        if module.is_empty() {
            return Err(CoreError::Validation("Module must not be empty".into()));
        }

        let subjects = sanitize::parse_subjects(subjects);
        if subjects.iter().all(|s| s.is_empty()) {
            return Err(CoreError::Validation(
                "At least one subject is required".into(),
            ));
        }

        let num_questions = sanitize::parse_count(count).min(max_questions);

        Ok(Self {
            module,
            description: description.to_string(),
            subjects,
            num_questions,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_typical_fields() {
        let req =
            GenerationRequest::from_fields("Mobile App Development", "", "Flutter, React", "10", 50)
                .expect("valid request");
        assert_eq!(req.module, "Mobile App Development");
        assert_eq!(req.description, "");
        assert_eq!(req.subjects, vec!["Flutter", "React"]);
        assert_eq!(req.num_questions, 10);
    }

    #[test]
    fn empty_module_is_rejected() {
        let err = GenerationRequest::from_fields("  ", "", "Flutter", "10", 50).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn blank_subjects_are_rejected() {
        let err = GenerationRequest::from_fields("Networks", "", " , ,", "10", 50).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn empty_subject_pieces_survive_alongside_real_ones() {
        let req = GenerationRequest::from_fields("Networks", "", "TCP,,UDP", "5", 50)
            .expect("valid request");
        assert_eq!(req.subjects, vec!["TCP", "", "UDP"]);
    }

    #[test]
    fn count_is_coerced_not_rejected() {
        let req = GenerationRequest::from_fields("Networks", "", "TCP", "abc", 50)
            .expect("valid request");
        assert_eq!(req.num_questions, 0);
    }

    #[test]
    fn count_is_capped_at_configured_maximum() {
        let req = GenerationRequest::from_fields("Networks", "", "TCP", "5000", 50)
            .expect("valid request");
        assert_eq!(req.num_questions, 50);
    }
}
