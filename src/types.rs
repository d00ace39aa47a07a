use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grade::GradeLetter;

/// The kind of arithmetic a [`CalculationStep`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Add,
    Skip,
    Divide,
    Round,
    Result,
    Info,
}

/// Represents a single step in the GPA calculation process.
///
/// The trace lets a caller show exactly how the final GPA was derived,
/// course by course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationStep {
    /// Human-readable description of what this step does.
    pub description: String,
    /// The value at this step (if applicable).
    pub amount: Option<Decimal>,
    pub operation: Operation,
}

impl CalculationStep {
    pub fn add(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: Operation::Add,
        }
    }

    pub fn skip(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: None,
            operation: Operation::Skip,
        }
    }

    pub fn divide(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: Operation::Divide,
        }
    }

    pub fn round(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: Operation::Round,
        }
    }

    pub fn result(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: Operation::Result,
        }
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: None,
            operation: Operation::Info,
        }
    }
}

/// One graded course as it entered the GPA.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseBreakdown {
    pub name: String,
    pub code: String,
    pub credit_hours: Decimal,
    pub grade: GradeLetter,
    /// Scale value of `grade`.
    pub grade_points: Decimal,
    /// `credit_hours * grade_points`.
    pub quality_points: Decimal,
    pub required: bool,
}

impl CourseBreakdown {
    /// Format: "{credits} credits - Grade: {grade}"
    pub fn credit_line(&self) -> String {
        format!("{} credits - Grade: {}", self.credit_hours.normalize(), self.grade)
    }
}

/// Represents the outcome of a GPA computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpaResult {
    /// The weighted average, already rounded to `precision` places.
    pub gpa: Decimal,
    /// Sum of credit-weighted grade points over graded courses.
    pub total_quality_points: Decimal,
    /// Sum of credit hours over graded courses.
    pub total_credit_hours: Decimal,
    /// Decimal places `gpa` was rounded to.
    pub precision: u32,
    /// Optional label (e.g. "Semester 1").
    pub label: Option<String>,
    /// Graded courses, in catalog order.
    pub breakdown: Vec<CourseBreakdown>,
    /// Step-by-step trace of how this calculation was derived.
    pub calculation_trace: Vec<CalculationStep>,
}

impl GpaResult {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the GPA padded to `precision` places, e.g. "3.75" or "0.00".
    pub fn format_gpa(&self) -> String {
        let rounded = self
            .gpa
            .round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.*}", self.precision as usize, rounded)
    }

    /// Number of courses that contributed to the result.
    pub fn graded_count(&self) -> usize {
        self.breakdown.len()
    }

    /// Returns a concise status string.
    /// Format: "{Label}: GPA {gpa} over {credits} credit hours"
    pub fn summary(&self) -> String {
        let label_str = self.label.as_deref().unwrap_or("Semester");
        format!(
            "{}: GPA {} over {} credit hours",
            label_str,
            self.format_gpa(),
            self.total_credit_hours.normalize()
        )
    }

    /// Generates a human-readable explanation of the GPA calculation.
    ///
    /// Each trace step is rendered on its own line with an operator symbol,
    /// so a student can check every quality-point product by hand.
    pub fn explain(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();
        let label = self.label.as_deref().unwrap_or("Semester");

        // Writing into a String cannot fail.
        let _ = writeln!(&mut output, "Explanation for '{}':", label);
        let _ = writeln!(&mut output, "{:-<50}", "");

        let max_desc_len = self
            .calculation_trace
            .iter()
            .map(|step| step.description.len())
            .max()
            .unwrap_or(20)
            .max(20);

        for step in &self.calculation_trace {
            let op_symbol = match step.operation {
                Operation::Add => "+",
                Operation::Divide => "/",
                Operation::Round => "~",
                Operation::Result => "=",
                Operation::Skip | Operation::Info => " ",
            };

            match (step.operation, step.amount) {
                (Operation::Info, _) => {
                    let _ = writeln!(&mut output, "  INFO: {}", step.description);
                }
                (Operation::Skip, _) => {
                    let _ = writeln!(&mut output, "  SKIP: {}", step.description);
                }
                (_, Some(amount)) => {
                    let _ = writeln!(
                        &mut output,
                        "  {:<width$} : {} {:>8.2}",
                        step.description,
                        op_symbol,
                        amount,
                        width = max_desc_len
                    );
                }
                (_, None) => {
                    let _ = writeln!(
                        &mut output,
                        "  {:<width$} : [No Amount]",
                        step.description,
                        width = max_desc_len
                    );
                }
            }
        }

        let _ = writeln!(&mut output, "{:-<50}", "");
        let _ = writeln!(&mut output, "GPA: {}", self.format_gpa());
        output
    }
}

impl std::fmt::Display for GpaResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label_str = self.label.as_deref().unwrap_or("Semester");
        writeln!(f, "Your GPA for {}: {}", label_str, self.format_gpa())?;
        write!(f, "Course Breakdown:")?;
        for course in &self.breakdown {
            write!(f, "\n  {} ({}) {}", course.name, course.code, course.credit_line())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GpaError {
    #[error("Invalid grade '{0}': expected one of A, A-, B+, B, B-, C+, C, C-, D+, D, F")]
    InvalidGrade(String),
    #[error("Course index {index} is out of range for a list of {len} courses")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Cannot compute GPA: required courses are not graded: {}", .missing.join(", "))]
    IncompleteGrading { missing: Vec<String> },
    #[error("Unknown semester '{0}'")]
    UnknownSemester(String),
    #[error("No semester selected")]
    NoSemesterSelected,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Calculation error: {0}")]
    CalculationError(String),
}
