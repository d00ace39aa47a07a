//! # Curriculum Catalog
//!
//! The catalog is read-only configuration: a program title and an ordered list
//! of semesters, each an ordered list of ungraded course templates. Consumers
//! never touch the templates directly; [`Catalog::get_courses`] hands out an
//! independent working copy on every call.
//!
//! The built-in BS RIS curriculum is constructed once, on first use. A custom
//! curriculum can be loaded from JSON and is validated before use.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use tracing::debug;

use crate::builder::{Builder, Validate};
use crate::grade::GradeLetter;
use crate::inputs::{check_credit_hours, IntoCreditHours};
use crate::semester;
use crate::types::GpaError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub code: String,
    /// Weight of the course in the GPA. Zero-credit courses are allowed.
    pub credit_hours: Decimal,
    /// `None` until the student picks a grade.
    #[serde(default)]
    pub grade: Option<GradeLetter>,
    /// Required courses must be graded before the GPA can be computed.
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl Course {
    /// Creates an ungraded course, rejecting credit hours outside
    /// `0..=MAX_CREDIT_HOURS`.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        credit_hours: impl IntoCreditHours,
        required: bool,
    ) -> Result<Self, GpaError> {
        let credit_hours = credit_hours.into_credit_hours()?;
        let course = Self::template(name, code, credit_hours, required);
        course.validate()?;
        Ok(course)
    }

    /// Unchecked constructor for static catalog rows.
    pub fn template(
        name: impl Into<String>,
        code: impl Into<String>,
        credit_hours: Decimal,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            credit_hours,
            grade: None,
            required,
        }
    }

    pub fn with_grade(mut self, grade: GradeLetter) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    pub fn is_optional(&self) -> bool {
        !self.required
    }

    /// `credit_hours * points`, or `None` while ungraded or on overflow.
    pub fn quality_points(&self) -> Option<Decimal> {
        self.grade
            .and_then(|grade| self.credit_hours.checked_mul(grade.points()))
    }

    fn validate(&self) -> Result<(), GpaError> {
        if self.code.trim().is_empty() {
            return Err(GpaError::InvalidInput(format!(
                "Course '{}' has an empty code",
                self.name
            )));
        }
        check_credit_hours(self.credit_hours)
            .map_err(|e| match e {
                GpaError::InvalidInput(msg) => {
                    GpaError::InvalidInput(format!("Course {}: {}", self.code, msg))
                }
                other => other,
            })?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub key: String,
    pub label: String,
    pub courses: Vec<Course>,
}

impl Semester {
    pub fn new(key: impl Into<String>, label: impl Into<String>, courses: Vec<Course>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            courses,
        }
    }

    pub fn required_count(&self) -> usize {
        self.courses.iter().filter(|c| c.required).count()
    }

    /// Sum of credit hours over every course, optional ones included.
    pub fn total_credit_hours(&self) -> Decimal {
        self.courses
            .iter()
            .fold(Decimal::ZERO, |acc, c| acc.saturating_add(c.credit_hours))
    }

    pub fn required_credit_hours(&self) -> Decimal {
        self.courses
            .iter()
            .filter(|c| c.required)
            .fold(Decimal::ZERO, |acc, c| acc.saturating_add(c.credit_hours))
    }

    pub fn summary(&self) -> SemesterSummary {
        SemesterSummary {
            key: self.key.clone(),
            label: self.label.clone(),
        }
    }
}

/// What a semester picker needs to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterSummary {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Program title, e.g. "BS RIS".
    pub title: String,
    pub semesters: Vec<Semester>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog {
        title: "BS RIS".to_string(),
        semesters: vec![
            semester!("1", "Semester 1", [
                ("Applied Calculus and Analytical Geometry", "GSC 110", 3, required),
                ("Applied Physics Lab", "GSL 113", 1, required),
                ("Computing Fundamentals", "CSC 110", 2, required),
                ("Computing Fundamentals Lab", "CSL 110", 1, required),
                ("Functional English", "ENG 101", 3, required),
                ("Islamic Studies", "ISL 101", 2, required),
                ("Tajweed", "ISL 107", 0, optional),
                ("Applied Physics", "GSC 114", 2, required),
                ("Engineering Drawing and CAD", "EEL 121", 1, required),
            ]),
            semester!("2", "Semester 2", [
                ("Circuit Analysis", "GSC 115", 3, required),
                ("Circuit Analysis Lab", "GSL 115", 1, required),
                ("Computer Programming", "CSC 113", 3, required),
                ("Computer Programming Lab", "CSL 113", 1, required),
                ("Engineering Ethics", "HSS 424", 2, required),
                ("Engineering Mechanics", "MSC 231", 3, required),
                ("Entrepreneurship", "HSS 423", 2, required),
                ("Linear Algebra & Differential Equations", "GSC 123", 3, required),
                ("Understanding Quran-I", "ISL 108", 0, optional),
            ]),
        ],
    }
});

impl Catalog {
    /// The built-in curriculum.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Semester keys and labels in catalog order.
    pub fn list_semesters(&self) -> Vec<SemesterSummary> {
        self.semesters.iter().map(Semester::summary).collect()
    }

    pub fn semester(&self, key: &str) -> Option<&Semester> {
        let key = key.trim();
        self.semesters.iter().find(|s| s.key == key)
    }

    /// Returns a fresh, ungraded copy of a semester's courses.
    pub fn get_courses(&self, key: &str) -> Result<Vec<Course>, GpaError> {
        let semester = self
            .semester(key)
            .ok_or_else(|| GpaError::UnknownSemester(key.to_string()))?;
        Ok(semester
            .courses
            .iter()
            .cloned()
            .map(|mut course| {
                course.grade = None;
                course
            })
            .collect())
    }

    /// Validates the catalog for logical consistency.
    pub fn validate(&self) -> Result<(), GpaError> {
        let mut seen = HashSet::new();
        for semester in &self.semesters {
            if semester.key.trim().is_empty() {
                return Err(GpaError::ConfigurationError(
                    "Semester key must not be empty".to_string(),
                ));
            }
            // Lookup trims its input, so a padded key could never be selected.
            if semester.key != semester.key.trim() {
                return Err(GpaError::ConfigurationError(format!(
                    "Semester key '{}' has surrounding whitespace",
                    semester.key
                )));
            }
            if !seen.insert(semester.key.as_str()) {
                return Err(GpaError::ConfigurationError(format!(
                    "Duplicate semester key '{}'",
                    semester.key
                )));
            }
            for course in &semester.courses {
                course.validate()?;
                if course.grade.is_some() {
                    return Err(GpaError::ConfigurationError(format!(
                        "Catalog course {} in semester '{}' must not carry a grade",
                        course.code, semester.key
                    )));
                }
            }
        }
        Ok(())
    }

    /// Attempts to load a catalog from a JSON file.
    pub fn try_from_json(path: &str) -> Result<Self, GpaError> {
        let content = fs::read_to_string(path).map_err(|e| {
            GpaError::ConfigurationError(format!("Failed to read catalog file: {}", e))
        })?;
        let catalog: Catalog = content.parse()?;
        debug!(path, semesters = catalog.semesters.len(), "Loaded catalog");
        Ok(catalog)
    }
}

impl std::str::FromStr for Catalog {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let catalog: Catalog = serde_json::from_str(s).map_err(|e| {
            GpaError::ConfigurationError(format!("Failed to parse catalog JSON: {}", e))
        })?;
        catalog.validate()?;
        Ok(catalog)
    }
}

// ========== CatalogBuilder ==========

#[derive(Default)]
pub struct CatalogBuilder {
    title: Option<String>,
    semesters: Vec<Semester>,
}

impl CatalogBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn semester(mut self, semester: Semester) -> Self {
        self.semesters.push(semester);
        self
    }
}

impl Validate for CatalogBuilder {
    fn validate(&self) -> Result<(), GpaError> {
        if self.semesters.is_empty() {
            return Err(GpaError::ConfigurationError(
                "Catalog needs at least one semester".to_string(),
            ));
        }
        Ok(())
    }
}

impl Builder<Catalog> for CatalogBuilder {
    fn build(self) -> Result<Catalog, GpaError> {
        Validate::validate(&self)?;
        let catalog = Catalog {
            title: self.title.unwrap_or_else(|| "Curriculum".to_string()),
            semesters: self.semesters,
        };
        catalog.validate()?;
        Ok(catalog)
    }
}
