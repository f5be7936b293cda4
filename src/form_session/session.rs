use log::{debug, info};

use super::validation::validate;
use crate::error_handling::types::FormError;
use crate::storage::record_store::RecordStore;
use crate::storage::types::{SurveyRecord, TECHNOLOGIES};

/// The in-progress answer set of one survey form.
///
/// Values are edited through the setters and checked as a batch on
/// [`submit`](FormSession::submit). A successful submit stores the record and
/// puts every field back to its default; a failed one leaves the values as
/// entered.
#[derive(Debug, Clone)]
pub struct FormSession {
    values: SurveyRecord,
    defaults: SurveyRecord,
}

impl FormSession {
    /// Creates a session whose faculty field defaults to `default_faculty`.
    pub fn new<S: Into<String>>(default_faculty: S) -> Self {
        let defaults = SurveyRecord::blank(default_faculty);
        Self { values: defaults.clone(), defaults }
    }

    pub fn values(&self) -> &SurveyRecord {
        &self.values
    }

    pub fn defaults(&self) -> &SurveyRecord {
        &self.defaults
    }

    pub fn set_faculty<S: Into<String>>(&mut self, faculty: S) {
        self.values.faculty = faculty.into();
    }

    pub fn set_stream(&mut self, stream: u32) {
        self.values.stream = stream;
    }

    pub fn set_group<S: Into<String>>(&mut self, group: S) {
        self.values.group = group.into();
    }

    /// Adds a subject unless it is already selected.
    pub fn add_subject<S: Into<String>>(&mut self, subject: S) {
        let subject = subject.into();
        if !self.values.subjects.contains(&subject) {
            self.values.subjects.push(subject);
        }
    }

    pub fn remove_subject(&mut self, subject: &str) {
        self.values.subjects.retain(|s| s != subject);
    }

    /// Replaces the selection, dropping duplicates.
    pub fn set_subjects<I, S>(&mut self, subjects: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.subjects.clear();
        for subject in subjects {
            self.add_subject(subject);
        }
    }

    pub fn set_average_grade<S: Into<String>>(&mut self, grade: S) {
        self.values.average_grade = grade.into();
    }

    /// Sets the flag for one of [`TECHNOLOGIES`], matched case-insensitively.
    pub fn set_technology(&mut self, name: &str, known: bool) -> Result<(), FormError> {
        let index = TECHNOLOGIES
            .iter()
            .position(|t| t.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| FormError::UnknownTechnology(name.to_string()))?;
        self.values.technologies[index] = known;
        Ok(())
    }

    pub fn set_interview_time<S: Into<String>>(&mut self, time: S) {
        self.values.interview_time = time.into();
    }

    pub fn set_favorite_color<S: Into<String>>(&mut self, color: S) {
        self.values.favorite_color = color.into();
    }

    pub fn set_email<S: Into<String>>(&mut self, email: S) {
        self.values.email = email.into();
    }

    pub fn set_comments<S: Into<String>>(&mut self, comments: S) {
        self.values.comments = comments.into();
    }

    /// Runs every check without touching storage.
    pub fn validate(&self) -> Result<(), FormError> {
        let violations = validate(&self.values);
        if violations.is_empty() {
            return Ok(());
        }
        for v in &violations {
            debug!("Form check failed: {}", v);
        }
        Err(FormError::Invalid(violations))
    }

    /// Validates, appends the finished record to `store`, then resets.
    ///
    /// Returns the stored record. On any error nothing is reset.
    pub fn submit(&mut self, store: &RecordStore) -> Result<SurveyRecord, FormError> {
        self.validate()?;
        let record = self.values.clone();
        store.append(&record)?;
        info!("Survey response submitted for {}", record.email);
        self.reset();
        Ok(record)
    }

    /// Puts every field back to its default value.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
    }
}
