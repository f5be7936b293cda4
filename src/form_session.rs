//! Survey form core module.
//!
//! This module provides the form fields, the validation outcome types and the
//! submodules that fill in, check and submit a survey response.

use std::fmt;

/// Submodule for the interactive line prompt.
pub mod prompt;
/// Submodule for the in-progress answer set and its submit/reset cycle.
pub mod session;
/// Submodule for required-field and email checks.
pub mod validation;

pub use session::FormSession;

/// A field of the survey form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Faculty,
    Stream,
    Group,
    Subjects,
    AverageGrade,
    Technologies,
    InterviewTime,
    FavoriteColor,
    Email,
    Comments,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Faculty,
        Field::Stream,
        Field::Group,
        Field::Subjects,
        Field::AverageGrade,
        Field::Technologies,
        Field::InterviewTime,
        Field::FavoriteColor,
        Field::Email,
        Field::Comments,
    ];

    /// Name used in the stored JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Faculty => "faculty",
            Field::Stream => "stream",
            Field::Group => "group",
            Field::Subjects => "subjects",
            Field::AverageGrade => "averageGrade",
            Field::Technologies => "technologies",
            Field::InterviewTime => "interviewTime",
            Field::FavoriteColor => "favoriteColor",
            Field::Email => "email",
            Field::Comments => "comments",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Missing,
    MalformedEmail,
}

/// One failed check on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Missing => write!(f, "{} is required", self.field),
            ViolationKind::MalformedEmail => write!(f, "{} is not a valid address", self.field),
        }
    }
}
