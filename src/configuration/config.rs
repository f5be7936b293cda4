use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use super::types::*;
use crate::error_handling::types::ConfigError;
use crate::summary::{Region, SummaryCriteria};

/// Application configuration.
///
/// Loaded from an optional TOML file; every section and key may be omitted
/// and falls back to its default. Command-line flags are applied on top by
/// the binary.
///
/// ```toml
/// [storage]
/// backend = "sqlite"        # file | sqlite | memory
/// path = "/var/lib/survey"
///
/// [form]
/// faculties = ["faculty1", "faculty2"]
///
/// [summary]
/// faculty = "faculty1"
/// min_grade = 3.0
/// regions = ["filteredByFaculty", "filteredByAverageGrade"]
/// ```
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage: StorageConfig,
    pub form: FormConfig,
    pub summary: SummaryConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!("Reading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::TomlError(e.to_string()))?;
        config.validate()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.form.faculties.is_empty() {
            return Err(ConfigError::FacultiesEmpty(
                "at least one faculty option is required".to_string(),
            ));
        }
        if self.form.faculties.iter().any(|f| f.is_empty()) {
            return Err(ConfigError::FacultiesEmpty("faculty options cannot be empty".to_string()));
        }
        if !self.summary.min_grade.is_finite() {
            return Err(ConfigError::NotInRange(format!(
                "summary.min_grade must be a finite number, got {}",
                self.summary.min_grade
            )));
        }
        self.regions()?;
        Ok(())
    }

    /// The faculty preselected on a fresh form.
    pub fn default_faculty(&self) -> &str {
        self.form.faculties.first().map(String::as_str).unwrap_or("faculty1")
    }

    pub fn regions(&self) -> Result<Vec<Region>, ConfigError> {
        self.summary
            .regions
            .iter()
            .map(|id| id.parse::<Region>().map_err(ConfigError::UnknownRegion))
            .collect()
    }

    pub fn criteria(&self) -> SummaryCriteria {
        SummaryCriteria {
            faculty: self.summary.faculty.clone(),
            min_grade: self.summary.min_grade,
        }
    }
}
