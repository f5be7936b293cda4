use once_cell::sync::Lazy;
use regex::Regex;

use super::{Field, Violation, ViolationKind};
use crate::storage::types::SurveyRecord;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Basic address check: dotted local part, `@`, dotted host labels.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }
    match email.split_once('@') {
        Some((local, _)) if !local.is_empty() && local.len() <= MAX_LOCAL_PART_LEN => {
            EMAIL.is_match(email)
        }
        _ => false,
    }
}

/// Checks every field and returns all violations, in form order.
///
/// A string counts as present when it is non-empty; whitespace is not
/// trimmed. An empty email is reported as missing only.
pub fn validate(values: &SurveyRecord) -> Vec<Violation> {
    let mut violations = Vec::new();
    for field in Field::ALL {
        let missing = match field {
            Field::Faculty => values.faculty.is_empty(),
            Field::Group => values.group.is_empty(),
            Field::Subjects => values.subjects.is_empty(),
            Field::AverageGrade => values.average_grade.is_empty(),
            Field::InterviewTime => values.interview_time.is_empty(),
            Field::FavoriteColor => values.favorite_color.is_empty(),
            Field::Email => values.email.is_empty(),
            Field::Comments => values.comments.is_empty(),
            // always hold a value
            Field::Stream | Field::Technologies => false,
        };
        if missing {
            violations.push(Violation { field, kind: ViolationKind::Missing });
        } else if field == Field::Email && !is_valid_email(&values.email) {
            violations.push(Violation { field, kind: ViolationKind::MalformedEmail });
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> SurveyRecord {
        SurveyRecord {
            faculty: "faculty1".into(),
            stream: 2,
            group: "KP-21".into(),
            subjects: vec!["math".into()],
            average_grade: "4.5".into(),
            technologies: vec![true, false, true],
            interview_time: "10:30".into(),
            favorite_color: "#00ff00".into(),
            email: "student@uni.edu".into(),
            comments: "none".into(),
        }
    }

    #[test]
    fn test_complete_record_has_no_violations() {
        assert!(validate(&complete()).is_empty());
    }

    #[test]
    fn test_blank_record_reports_every_required_field() {
        let fields: Vec<Field> =
            validate(&SurveyRecord::blank("faculty1")).iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Group,
                Field::Subjects,
                Field::AverageGrade,
                Field::InterviewTime,
                Field::FavoriteColor,
                Field::Email,
                Field::Comments,
            ]
        );
    }

    #[test]
    fn test_bad_email_is_malformed_not_missing() {
        let mut values = complete();
        values.email = "not-an-email".into();
        assert_eq!(
            validate(&values),
            vec![Violation { field: Field::Email, kind: ViolationKind::MalformedEmail }]
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut values = complete();
        values.comments = " ".into();
        assert!(validate(&values).is_empty());
    }

    #[test]
    fn test_email_pattern() {
        for ok in ["a@b", "first.last@example.com", "x+tag@sub.domain.org", "o'neil@host-1.io"] {
            assert!(is_valid_email(ok), "{} should be accepted", ok);
        }
        for bad in [
            "",
            "@example.com",
            "user@",
            "user@@example.com",
            "user@-host.com",
            "user@host-.com",
            "first..last@example.com",
            ".user@example.com",
            "user name@example.com",
            "user@exa_mple.com",
        ] {
            assert!(!is_valid_email(bad), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_email_length_limits() {
        let local = "a".repeat(65);
        assert!(!is_valid_email(&format!("{}@example.com", local)));
        assert!(is_valid_email(&format!("{}@example.com", "a".repeat(64))));
        let host = vec!["a".repeat(60); 5].join(".");
        assert!(!is_valid_email(&format!("user@{}", host)));
    }
}
