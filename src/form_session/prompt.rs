//! Line-based interactive front end for a [`FormSession`].
//!
//! Each field is asked in form order with its current value in brackets; an
//! empty answer keeps that value. After a rejected submit the same values are
//! offered again, after an accepted one the form starts over from defaults.

use std::io::{BufRead, Write};

use log::debug;

use super::session::FormSession;
use crate::error_handling::types::FormError;
use crate::storage::record_store::RecordStore;
use crate::storage::types::TECHNOLOGIES;

pub const SAVED_MESSAGE: &str = "Data saved successfully!";

pub struct Prompt<R, W> {
    input: R,
    output: W,
    faculties: Vec<String>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, faculties: Vec::new() }
    }

    /// Offers these faculties as the choices for the faculty field. With no
    /// choices any answer is taken as is.
    pub fn with_faculties(mut self, faculties: Vec<String>) -> Self {
        self.faculties = faculties;
        self
    }

    /// Runs the form until the input ends or the user declines another
    /// response. Returns how many responses were stored.
    pub fn run(&mut self, form: &mut FormSession, store: &RecordStore) -> Result<usize, FormError> {
        let mut submitted = 0;
        loop {
            if !self.fill(form)? {
                return Ok(submitted);
            }
            match form.submit(store) {
                Ok(_) => {
                    submitted += 1;
                    writeln!(self.output, "{}", SAVED_MESSAGE)?;
                    match self.ask("Submit another response? [y/N]")? {
                        Some(answer) if is_yes(&answer) => continue,
                        _ => return Ok(submitted),
                    }
                }
                Err(e @ FormError::Invalid(_)) => {
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Asks every field once. Returns `false` if the input ended first.
    fn fill(&mut self, form: &mut FormSession) -> Result<bool, FormError> {
        let v = form.values().clone();

        let Some(faculty) = self.ask_faculty(&v.faculty)? else { return Ok(false) };
        form.set_faculty(faculty);

        let Some(stream) = self.ask_stream(v.stream)? else { return Ok(false) };
        form.set_stream(stream);

        let Some(group) = self.ask_text("Group", &v.group)? else { return Ok(false) };
        form.set_group(group);

        let Some(subjects) = self.ask_text("Subjects (comma separated)", &v.subjects.join(", "))?
        else {
            return Ok(false);
        };
        form.set_subjects(subjects.split(',').map(str::trim).filter(|s| !s.is_empty()));

        let Some(grade) = self.ask_text("Average grade", &v.average_grade)? else { return Ok(false) };
        form.set_average_grade(grade);

        for (name, known) in TECHNOLOGIES.iter().zip(v.technologies.iter()) {
            let current = if *known { "y" } else { "n" };
            let Some(answer) = self.ask_text(&format!("Experienced with {} (y/n)", name), current)?
            else {
                return Ok(false);
            };
            form.set_technology(name, is_yes(&answer))?;
        }

        let Some(time) = self.ask_text("Interview time", &v.interview_time)? else { return Ok(false) };
        form.set_interview_time(time);

        let Some(color) = self.ask_text("Favorite color", &v.favorite_color)? else { return Ok(false) };
        form.set_favorite_color(color);

        let Some(email) = self.ask_text("Email", &v.email)? else { return Ok(false) };
        form.set_email(email);

        let Some(comments) = self.ask_text("Comments", &v.comments)? else { return Ok(false) };
        form.set_comments(comments);

        Ok(true)
    }

    fn ask_faculty(&mut self, current: &str) -> Result<Option<String>, FormError> {
        if self.faculties.is_empty() {
            return self.ask_text("Faculty", current);
        }
        let label = format!("Faculty ({})", self.faculties.join(", "));
        loop {
            let Some(answer) = self.ask_text(&label, current)? else {
                return Ok(None);
            };
            if self.faculties.iter().any(|f| *f == answer) {
                return Ok(Some(answer));
            }
            writeln!(self.output, "Choose one of: {}", self.faculties.join(", "))?;
        }
    }

    fn ask_stream(&mut self, current: u32) -> Result<Option<u32>, FormError> {
        loop {
            let Some(answer) = self.ask_text("Stream", &current.to_string())? else {
                return Ok(None);
            };
            match answer.trim().parse::<u32>() {
                Ok(stream) => return Ok(Some(stream)),
                Err(_) => writeln!(self.output, "Stream must be a whole number")?,
            }
        }
    }

    fn ask_text(&mut self, label: &str, current: &str) -> Result<Option<String>, FormError> {
        let answer = self.ask(&format!("{} [{}]", label, current))?;
        Ok(answer.map(|a| if a.is_empty() { current.to_string() } else { a }))
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>, FormError> {
        write!(self.output, "{}: ", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed while asking {:?}", question);
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::MemoryStorage;
    use std::io::Cursor;
    use std::sync::Arc;

    const FULL_ANSWERS: &str = "faculty2\n2\nKP-21\nmath, art\n4.5\ny\nn\ny\n10:00\nblue\nme@uni.edu\nhi\n";

    fn run(input: &str) -> (usize, Vec<crate::storage::types::SurveyRecord>, String, FormSession) {
        let store = RecordStore::new(Arc::new(MemoryStorage::new()));
        let mut form = FormSession::new("faculty1");
        let mut out = Vec::new();
        let n = Prompt::new(Cursor::new(input.to_string()), &mut out)
            .run(&mut form, &store)
            .unwrap();
        (n, store.read_all(), String::from_utf8(out).unwrap(), form)
    }

    #[test]
    fn test_one_complete_response() {
        let (n, records, out, form) = run(&format!("{}n\n", FULL_ANSWERS));
        assert_eq!(n, 1);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.faculty, "faculty2");
        assert_eq!(r.stream, 2);
        assert_eq!(r.subjects, vec!["math", "art"]);
        assert_eq!(r.technologies, vec![true, false, true]);
        assert_eq!(r.email, "me@uni.edu");
        assert!(out.contains(SAVED_MESSAGE));
        assert_eq!(form.values(), form.defaults());
    }

    #[test]
    fn test_rejected_submit_keeps_values_for_the_retry() {
        // first pass leaves the email empty, second pass only fills it in
        let first = FULL_ANSWERS.replace("me@uni.edu\n", "\n");
        let retry = "\n\n\n\n\n\n\n\n\n\nlate@uni.edu\n\n";
        let (n, records, out, _) = run(&format!("{}{}n\n", first, retry));
        assert!(out.contains("All fields are mandatory"));
        assert_eq!(n, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "late@uni.edu");
        assert_eq!(records[0].group, "KP-21");
    }

    #[test]
    fn test_bad_stream_is_asked_again() {
        let answers = FULL_ANSWERS.replacen("\n2\n", "\nsecond\n2\n", 1);
        let (_, records, out, _) = run(&format!("{}n\n", answers));
        assert!(out.contains("Stream must be a whole number"));
        assert_eq!(records[0].stream, 2);
    }

    #[test]
    fn test_two_responses_in_a_row() {
        let (n, records, _, _) = run(&format!("{}y\n{}", FULL_ANSWERS, FULL_ANSWERS));
        assert_eq!(n, 2);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_input_closed_mid_form_stores_nothing() {
        let (n, records, _, _) = run("faculty2\n2\n");
        assert_eq!(n, 0);
        assert!(records.is_empty());
    }

    #[test]
    fn test_faculty_choices_are_shown_and_enforced() {
        let store = RecordStore::new(Arc::new(MemoryStorage::new()));
        let mut form = FormSession::new("engineering");
        let mut out = Vec::new();
        let answers = FULL_ANSWERS.replacen("faculty2\n", "physics\narts\n", 1);
        let n = Prompt::new(Cursor::new(format!("{}n\n", answers)), &mut out)
            .with_faculties(vec!["engineering".into(), "arts".into()])
            .run(&mut form, &store)
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(n, 1);
        assert!(out.contains("Faculty (engineering, arts) [engineering]: "));
        assert!(out.contains("Choose one of: engineering, arts"));
        assert_eq!(store.read_all()[0].faculty, "arts");
    }
}
