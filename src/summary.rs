//! Summary board
//!
//! The three derived views of the stored responses, each rendered into a
//! named text region. A board only holds the regions it was built with;
//! updates aimed at any other region are dropped.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::storage::record_filter::RecordFilter;
use crate::storage::record_store::RecordStore;

/// A named display region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Region {
    FilteredByFaculty,
    FilteredByTechnologyExperience,
    FilteredByAverageGrade,
}

impl Region {
    pub const ALL: [Region; 3] = [
        Region::FilteredByFaculty,
        Region::FilteredByTechnologyExperience,
        Region::FilteredByAverageGrade,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Region::FilteredByFaculty => "filteredByFaculty",
            Region::FilteredByTechnologyExperience => "filteredByTechnologyExperience",
            Region::FilteredByAverageGrade => "filteredByAverageGrade",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Inputs of the faculty and grade views.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCriteria {
    pub faculty: String,
    pub min_grade: f64,
}

impl Default for SummaryCriteria {
    fn default() -> Self {
        Self { faculty: "faculty1".to_string(), min_grade: 3.0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryBoard {
    regions: BTreeMap<Region, String>,
}

impl SummaryBoard {
    /// A board with all three regions present.
    pub fn new() -> Self {
        Self::with_regions(Region::ALL)
    }

    pub fn with_regions<I: IntoIterator<Item = Region>>(regions: I) -> Self {
        Self { regions: regions.into_iter().map(|r| (r, String::new())).collect() }
    }

    /// Replaces the text of `region`; no-op when the board lacks it.
    pub fn set_text(&mut self, region: Region, text: String) {
        match self.regions.get_mut(&region) {
            Some(slot) => *slot = text,
            None => debug!("Region {} not on the board, skipping", region),
        }
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    pub fn regions(&self) -> impl Iterator<Item = (Region, &str)> {
        self.regions.iter().map(|(r, t)| (*r, t.as_str()))
    }
}

/// Recomputes every view from `store` and writes it into `board`.
///
/// Each view does its own full read of the store.
pub fn refresh_summary(store: &RecordStore, criteria: &SummaryCriteria, board: &mut SummaryBoard) {
    let views = [
        (Region::FilteredByFaculty, RecordFilter::Faculty(criteria.faculty.clone())),
        (Region::FilteredByTechnologyExperience, RecordFilter::FullTechnologyExperience),
        (Region::FilteredByAverageGrade, RecordFilter::MinGrade(criteria.min_grade)),
    ];
    for (region, filter) in views {
        if board.text(region).is_none() {
            continue;
        }
        board.set_text(region, filter.emails(store));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::MemoryStorage;
    use crate::storage::types::SurveyRecord;
    use std::sync::Arc;

    fn seeded_store() -> RecordStore {
        let store = RecordStore::new(Arc::new(MemoryStorage::new()));
        let rows = [
            ("a@x.io", "faculty1", "3.5", vec![true, true, true]),
            ("b@x.io", "faculty2", "abc", vec![true, false, true]),
            ("c@x.io", "faculty1", "2.9", vec![]),
            ("d@x.io", "faculty3", "5", vec![false, false, false]),
        ];
        for (email, faculty, grade, technologies) in rows {
            store
                .append(&SurveyRecord {
                    email: email.into(),
                    faculty: faculty.into(),
                    average_grade: grade.into(),
                    technologies,
                    ..SurveyRecord::blank("faculty1")
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_refresh_fills_all_regions() {
        let store = seeded_store();
        let mut board = SummaryBoard::new();
        refresh_summary(&store, &SummaryCriteria::default(), &mut board);
        assert_eq!(board.text(Region::FilteredByFaculty), Some("a@x.io, c@x.io"));
        assert_eq!(board.text(Region::FilteredByTechnologyExperience), Some("a@x.io, c@x.io"));
        assert_eq!(board.text(Region::FilteredByAverageGrade), Some("a@x.io, d@x.io"));
    }

    #[test]
    fn test_custom_criteria() {
        let store = seeded_store();
        let mut board = SummaryBoard::new();
        let criteria = SummaryCriteria { faculty: "faculty3".into(), min_grade: 4.0 };
        refresh_summary(&store, &criteria, &mut board);
        assert_eq!(board.text(Region::FilteredByFaculty), Some("d@x.io"));
        assert_eq!(board.text(Region::FilteredByAverageGrade), Some("d@x.io"));
    }

    #[test]
    fn test_absent_regions_are_skipped() {
        let store = seeded_store();
        let mut board = SummaryBoard::with_regions([Region::FilteredByAverageGrade]);
        refresh_summary(&store, &SummaryCriteria::default(), &mut board);
        assert_eq!(board.text(Region::FilteredByFaculty), None);
        assert_eq!(board.text(Region::FilteredByAverageGrade), Some("a@x.io, d@x.io"));
        board.set_text(Region::FilteredByFaculty, "ignored".into());
        assert_eq!(board.regions().count(), 1);
    }

    #[test]
    fn test_refresh_after_clear_empties_regions() {
        let store = seeded_store();
        let mut board = SummaryBoard::new();
        refresh_summary(&store, &SummaryCriteria::default(), &mut board);
        store.clear().unwrap();
        refresh_summary(&store, &SummaryCriteria::default(), &mut board);
        assert!(board.regions().all(|(_, text)| text.is_empty()));
    }

    #[test]
    fn test_region_ids_parse() {
        for region in Region::ALL {
            assert_eq!(region.id().parse::<Region>(), Ok(region));
        }
        assert!("filteredByColor".parse::<Region>().is_err());
    }
}
