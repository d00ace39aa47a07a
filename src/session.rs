//! # Session Controller
//!
//! Mediates every state transition of a single grading session:
//!
//! ```text
//! NoSemesterSelected --select_semester--> Grading --compute--> ResultsShown
//!         ^                               |    ^                    |
//!         |                               +----+ select_semester    |
//!         +---------------------------- reset ----------------------+
//! ```
//!
//! Each operation runs to completion before the next one. A failed operation
//! leaves the session exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculator::weighted_gpa;
use crate::catalog::{Catalog, Course, SemesterSummary};
use crate::config::GpaConfig;
use crate::grade::GradeLetter;
use crate::traits::CalculateGpa;
use crate::types::{GpaError, GpaResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    NoSemesterSelected,
    Grading,
    ResultsShown,
}

/// One student's working state over an immutable catalog.
#[derive(Debug, Clone)]
pub struct GpaSession<'c> {
    catalog: &'c Catalog,
    config: GpaConfig,
    selected_semester: Option<String>,
    courses: Vec<Course>,
    results_visible: bool,
}

impl<'c> GpaSession<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            config: GpaConfig::default(),
            selected_semester: None,
            courses: Vec::new(),
            results_visible: false,
        }
    }

    /// Session over the built-in curriculum.
    pub fn builtin() -> GpaSession<'static> {
        GpaSession::new(Catalog::builtin())
    }

    pub fn with_config(mut self, config: GpaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn config(&self) -> &GpaConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        match (&self.selected_semester, self.results_visible) {
            (None, _) => SessionState::NoSemesterSelected,
            (Some(_), false) => SessionState::Grading,
            (Some(_), true) => SessionState::ResultsShown,
        }
    }

    pub fn selected_semester(&self) -> Option<&str> {
        self.selected_semester.as_deref()
    }

    /// Label of the selected semester, e.g. "Semester 1".
    pub fn selected_label(&self) -> Option<&str> {
        let key = self.selected_semester.as_deref()?;
        self.catalog.semester(key).map(|s| s.label.as_str())
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn list_semesters(&self) -> Vec<SemesterSummary> {
        self.catalog.list_semesters()
    }

    /// Replaces the working course list with a fresh copy of `key`'s courses.
    ///
    /// Allowed from any state. Results are hidden again.
    pub fn select_semester(&mut self, key: &str) -> Result<&[Course], GpaError> {
        let courses = self.catalog.get_courses(key).inspect_err(|_| {
            warn!(semester = key, "Rejected unknown semester");
        })?;

        debug!(semester = key, courses = courses.len(), "Semester selected");
        self.selected_semester = Some(key.trim().to_string());
        self.courses = courses;
        self.results_visible = false;
        Ok(&self.courses)
    }

    /// Sets the grade of `courses[index]` from a letter symbol.
    ///
    /// The letter is validated before anything changes.
    pub fn set_grade(&mut self, index: usize, letter: &str) -> Result<(), GpaError> {
        let grade = GradeLetter::parse(letter).inspect_err(|_| {
            warn!(index, letter, "Rejected invalid grade");
        })?;
        self.set_grade_letter(index, grade)
    }

    pub fn set_grade_letter(&mut self, index: usize, grade: GradeLetter) -> Result<(), GpaError> {
        self.update_grade(index, Some(grade))
    }

    /// Removes the grade again, e.g. to leave an optional course blank.
    pub fn clear_grade(&mut self, index: usize) -> Result<(), GpaError> {
        self.update_grade(index, None)
    }

    fn update_grade(&mut self, index: usize, grade: Option<GradeLetter>) -> Result<(), GpaError> {
        let len = self.courses.len();
        let course = self
            .courses
            .get_mut(index)
            .ok_or(GpaError::IndexOutOfRange { index, len })?;

        course.grade = grade;
        debug!(code = %course.code, grade = ?grade, "Grade updated");
        // Results no longer match the grades on screen.
        self.results_visible = false;
        Ok(())
    }

    /// Index of the course whose code matches, ignoring whitespace and case.
    pub fn find_course(&self, code: &str) -> Option<usize> {
        let wanted = normalize_code(code);
        self.courses
            .iter()
            .position(|c| normalize_code(&c.code) == wanted)
    }

    /// Codes of required courses that still have no grade.
    pub fn missing_grades(&self) -> Vec<String> {
        self.courses
            .iter()
            .filter(|c| c.required && !c.is_graded())
            .map(|c| c.code.clone())
            .collect()
    }

    /// True once a semester is selected and every required course is graded.
    pub fn can_compute(&self) -> bool {
        self.selected_semester.is_some()
            && self.courses.iter().all(|c| !c.required || c.is_graded())
    }

    /// Computes the GPA and shows results.
    pub fn compute(&mut self) -> Result<GpaResult, GpaError> {
        let result = self.calculate_gpa(&self.config)?;
        self.results_visible = true;
        info!(
            semester = self.selected_semester.as_deref().unwrap_or_default(),
            gpa = %result.format_gpa(),
            graded = result.graded_count(),
            "GPA computed"
        );
        Ok(result)
    }

    /// Back to the initial state.
    pub fn reset(&mut self) {
        debug!("Session reset");
        self.selected_semester = None;
        self.courses.clear();
        self.results_visible = false;
    }
}

impl CalculateGpa for GpaSession<'_> {
    /// Gated: fails unless [`GpaSession::can_compute`] holds. Does not change
    /// the session's state.
    fn calculate_gpa(&self, config: &GpaConfig) -> Result<GpaResult, GpaError> {
        if self.selected_semester.is_none() {
            return Err(GpaError::NoSemesterSelected);
        }
        let missing = self.missing_grades();
        if !missing.is_empty() {
            return Err(GpaError::IncompleteGrading { missing });
        }

        let result = weighted_gpa(&self.courses, config)?;
        Ok(match self.get_label() {
            Some(label) => result.with_label(label),
            None => result,
        })
    }

    fn get_label(&self) -> Option<String> {
        self.selected_label().map(str::to_string)
    }
}

fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}
