use serde::{Deserialize, Serialize};

/// Key under which the submitted records live in the key-value store.
pub const SURVEY_DATA_KEY: &str = "surveyData";

/// Technologies the form asks about. `SurveyRecord::technologies` is positional
/// over this list.
pub const TECHNOLOGIES: [&str; 3] = ["React.js", "TypeScript", "Redux"];

/// One submitted survey response.
///
/// Serialized with camelCase field names. Missing fields deserialize to their
/// empty value so that a hand-edited slot still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyRecord {
    pub faculty: String,
    pub stream: u32,
    pub group: String,
    pub subjects: Vec<String>,
    /// Kept exactly as entered; parsed only when filtering.
    pub average_grade: String,
    pub technologies: Vec<bool>,
    pub interview_time: String,
    pub favorite_color: String,
    pub email: String,
    pub comments: String,
}

impl SurveyRecord {
    /// Blank answer set with the given faculty preselected, stream 1 and every
    /// technology unchecked.
    pub fn blank<S: Into<String>>(faculty: S) -> Self {
        Self {
            faculty: faculty.into(),
            stream: 1,
            group: String::new(),
            subjects: Vec::new(),
            average_grade: String::new(),
            technologies: vec![false; TECHNOLOGIES.len()],
            interview_time: String::new(),
            favorite_color: String::new(),
            email: String::new(),
            comments: String::new(),
        }
    }
}
