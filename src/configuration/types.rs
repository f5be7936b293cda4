use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Sqlite,
    Memory,
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory holding the store. Unset means SURVEY_STORE_PATH or the
    /// working directory.
    pub path: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Faculty options; the first one is preselected on a fresh form.
    pub faculties: Vec<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            faculties: vec!["faculty1".to_string(), "faculty2".to_string(), "faculty3".to_string()],
        }
    }
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryConfig {
    pub faculty: String,
    pub min_grade: f64,
    /// Region ids shown by `summary`; anything not listed is skipped.
    pub regions: Vec<String>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            faculty: "faculty1".to_string(),
            min_grade: 3.0,
            regions: vec![
                "filteredByFaculty".to_string(),
                "filteredByTechnologyExperience".to_string(),
                "filteredByAverageGrade".to_string(),
            ],
        }
    }
}
