//! Filters over the stored survey records.
//!
//! Every filter works on a full `RecordStore::read_all()`; nothing is indexed
//! or cached. Results keep storage order.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::storage::record_store::RecordStore;
use crate::storage::types::SurveyRecord;

// Longest leading number, the way a lenient float parser reads user input.
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("leading number pattern is valid")
});

#[derive(Debug, Clone, PartialEq)]
pub enum RecordFilter {
    /// Exact match on the faculty identifier.
    Faculty(String),
    /// Every technology flag set. A record with no flags at all matches.
    FullTechnologyExperience,
    /// Parsed average grade at or above the threshold.
    MinGrade(f64),
}

impl RecordFilter {
    pub fn matches(&self, record: &SurveyRecord) -> bool {
        match self {
            RecordFilter::Faculty(faculty) => &record.faculty == faculty,
            RecordFilter::FullTechnologyExperience => record.technologies.iter().all(|t| *t),
            RecordFilter::MinGrade(min) => {
                parse_grade(&record.average_grade).is_some_and(|grade| grade >= *min)
            }
        }
    }

    pub fn apply<'a>(&self, records: &'a [SurveyRecord]) -> Vec<&'a SurveyRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Reads the store and returns the matching emails joined by `", "`.
    pub fn emails(&self, store: &RecordStore) -> String {
        let records = store.read_all();
        join_emails(&self.apply(&records))
    }
}

/// Build a `RecordFilter` that matches records by exact faculty.
pub fn by_faculty<S: Into<String>>(faculty: S) -> RecordFilter {
    RecordFilter::Faculty(faculty.into())
}

pub fn join_emails(records: &[&SurveyRecord]) -> String {
    records.iter().map(|r| r.email.as_str()).collect::<Vec<_>>().join(", ")
}

/// Parses the numeric prefix of a stored grade.
///
/// Leading whitespace (byte order marks included) is skipped and trailing
/// garbage ignored, so `"4abc"` reads as 4. Returns `None` when no number
/// starts the string.
pub fn parse_grade(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let m = LEADING_NUMBER.find(trimmed)?;
    m.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::MemoryStorage;
    use std::sync::Arc;

    fn record(email: &str, faculty: &str, grade: &str, technologies: Vec<bool>) -> SurveyRecord {
        SurveyRecord {
            email: email.into(),
            faculty: faculty.into(),
            average_grade: grade.into(),
            technologies,
            ..SurveyRecord::blank("faculty1")
        }
    }

    #[test]
    fn test_faculty_filter_keeps_storage_order() {
        let store = RecordStore::new(Arc::new(MemoryStorage::new()));
        for r in [
            record("a@x.io", "faculty1", "5", vec![]),
            record("b@x.io", "faculty2", "5", vec![]),
            record("c@x.io", "faculty1", "5", vec![]),
        ] {
            store.append(&r).unwrap();
        }
        assert_eq!(by_faculty("faculty1").emails(&store), "a@x.io, c@x.io");
        assert_eq!(by_faculty("faculty2").emails(&store), "b@x.io");
        assert_eq!(by_faculty("faculty3").emails(&store), "");
    }

    #[test]
    fn test_faculty_match_is_exact() {
        let r = record("a@x.io", "Faculty1", "", vec![]);
        assert!(!by_faculty("faculty1").matches(&r));
        assert!(!by_faculty("Faculty").matches(&r));
    }

    #[test]
    fn test_full_technology_experience() {
        let filter = RecordFilter::FullTechnologyExperience;
        assert!(filter.matches(&record("a@x.io", "f", "", vec![])));
        assert!(filter.matches(&record("a@x.io", "f", "", vec![true, true, true])));
        assert!(!filter.matches(&record("a@x.io", "f", "", vec![true, false])));
        assert!(!filter.matches(&record("a@x.io", "f", "", vec![false, false, false])));
    }

    #[test]
    fn test_min_grade() {
        let r = record("a@x.io", "f", "3.5", vec![]);
        assert!(RecordFilter::MinGrade(3.0).matches(&r));
        assert!(RecordFilter::MinGrade(3.5).matches(&r));
        assert!(!RecordFilter::MinGrade(4.0).matches(&r));

        let junk = record("b@x.io", "f", "abc", vec![]);
        for min in [f64::NEG_INFINITY, -100.0, 0.0, 3.0] {
            assert!(!RecordFilter::MinGrade(min).matches(&junk));
        }
        assert!(!RecordFilter::MinGrade(0.0).matches(&record("c@x.io", "f", "", vec![])));
    }

    #[test]
    fn test_parse_grade_reads_leading_number() {
        assert_eq!(parse_grade("3.5"), Some(3.5));
        assert_eq!(parse_grade("  4"), Some(4.0));
        assert_eq!(parse_grade("4abc"), Some(4.0));
        assert_eq!(parse_grade("3,5"), Some(3.0));
        assert_eq!(parse_grade(".5"), Some(0.5));
        assert_eq!(parse_grade("-2e1x"), Some(-20.0));
        assert_eq!(parse_grade("1e"), Some(1.0));
        assert_eq!(parse_grade("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_grade("abc"), None);
        assert_eq!(parse_grade(""), None);
        assert_eq!(parse_grade("."), None);
        assert_eq!(parse_grade("NaN"), None);
        assert_eq!(parse_grade("\u{feff}3"), Some(3.0));
        assert_eq!(parse_grade("\u{feff} 4.5"), Some(4.5));
        assert_eq!(parse_grade("+.5"), Some(0.5));
        assert_eq!(parse_grade("1.e2"), Some(100.0));
        assert_eq!(parse_grade("0x10"), Some(0.0));
        assert_eq!(parse_grade("3.5.6"), Some(3.5));
    }

    #[test]
    fn test_join_emails() {
        let a = record("a@x.io", "f", "", vec![]);
        let b = record("b@x.io", "f", "", vec![]);
        assert_eq!(join_emails(&[&a, &b]), "a@x.io, b@x.io");
        assert_eq!(join_emails(&[]), "");
    }
}
