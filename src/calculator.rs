//! # Weighted GPA
//!
//! Over the graded courses only:
//!
//! ```text
//! total_points  = Σ credit_hours × points(grade)
//! total_credits = Σ credit_hours
//! gpa           = 0                                        if total_credits == 0
//!               = round(total_points / total_credits, p)   otherwise
//! ```
//!
//! Ungraded courses (optional ones left blank) are skipped entirely. A graded
//! zero-credit course appears in the breakdown but adds nothing to either sum.

use rust_decimal::Decimal;

use crate::catalog::{Course, Semester};
use crate::config::GpaConfig;
use crate::traits::CalculateGpa;
use crate::types::{CalculationStep, CourseBreakdown, GpaError, GpaResult};

/// Computes the weighted GPA over `courses` without checking that required
/// courses are graded. Gating belongs to the caller.
pub fn weighted_gpa(courses: &[Course], config: &GpaConfig) -> Result<GpaResult, GpaError> {
    config.validate()?;

    let mut total_points = Decimal::ZERO;
    let mut total_credits = Decimal::ZERO;
    let mut breakdown = Vec::new();
    let mut trace = Vec::with_capacity(courses.len() + 3);

    for course in courses {
        let Some(grade) = course.grade else {
            trace.push(CalculationStep::skip(format!("{} ungraded", course.code)));
            continue;
        };

        let grade_points = grade.points();
        let quality_points = course
            .credit_hours
            .checked_mul(grade_points)
            .ok_or_else(|| overflow("quality points", &course.code))?;

        total_points = total_points
            .checked_add(quality_points)
            .ok_or_else(|| overflow("total quality points", &course.code))?;
        total_credits = total_credits
            .checked_add(course.credit_hours)
            .ok_or_else(|| overflow("total credit hours", &course.code))?;

        if course.credit_hours.is_zero() {
            trace.push(CalculationStep::info(format!(
                "{} ({}) carries no credit weight",
                course.code, grade
            )));
        } else {
            trace.push(CalculationStep::add(
                format!("{} {} x {}", course.code, grade, course.credit_hours.normalize()),
                quality_points,
            ));
        }

        breakdown.push(CourseBreakdown {
            name: course.name.clone(),
            code: course.code.clone(),
            credit_hours: course.credit_hours,
            grade,
            grade_points,
            quality_points,
            required: course.required,
        });
    }

    trace.push(CalculationStep::result("Total Quality Points", total_points));
    trace.push(CalculationStep::divide("Total Credit Hours", total_credits));

    let gpa = if total_credits.is_zero() {
        trace.push(CalculationStep::info("No credit-bearing course graded - GPA is 0"));
        Decimal::ZERO
    } else {
        let rounded = total_points
            .checked_div(total_credits)
            .ok_or_else(|| GpaError::CalculationError("GPA division overflowed".to_string()))?
            .round_dp_with_strategy(config.precision, config.rounding.strategy());
        trace.push(CalculationStep::round(
            format!("Rounded to {} places", config.precision),
            rounded,
        ));
        rounded
    };
    trace.push(CalculationStep::result("GPA", gpa));

    Ok(GpaResult {
        gpa,
        total_quality_points: total_points,
        total_credit_hours: total_credits,
        precision: config.precision,
        label: None,
        breakdown,
        calculation_trace: trace,
    })
}

fn overflow(what: &str, code: &str) -> GpaError {
    GpaError::CalculationError(format!("Overflow computing {} at course {}", what, code))
}

impl CalculateGpa for [Course] {
    fn calculate_gpa(&self, config: &GpaConfig) -> Result<GpaResult, GpaError> {
        weighted_gpa(self, config)
    }
}

impl CalculateGpa for Vec<Course> {
    fn calculate_gpa(&self, config: &GpaConfig) -> Result<GpaResult, GpaError> {
        weighted_gpa(self, config)
    }
}

impl CalculateGpa for Semester {
    fn calculate_gpa(&self, config: &GpaConfig) -> Result<GpaResult, GpaError> {
        Ok(weighted_gpa(&self.courses, config)?.with_label(self.label.clone()))
    }

    fn get_label(&self) -> Option<String> {
        Some(self.label.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoundingMode;
    use crate::grade::GradeLetter;
    use rust_decimal_macros::dec;

    fn course(code: &str, credits: u32, grade: Option<GradeLetter>) -> Course {
        let mut c = Course::new(format!("Course {}", code), code, credits, true).unwrap();
        c.grade = grade;
        c
    }

    #[test]
    fn test_weighted_average() {
        // 3*4.00 + 1*3.00 = 15.00 over 4 credits
        let courses = vec![
            course("GSC 110", 3, Some(GradeLetter::A)),
            course("GSL 113", 1, Some(GradeLetter::B)),
        ];
        let result = courses.calculate_gpa(&GpaConfig::default()).unwrap();
        assert_eq!(result.total_quality_points, dec!(15.00));
        assert_eq!(result.total_credit_hours, dec!(4));
        assert_eq!(result.gpa, dec!(3.75));
        assert_eq!(result.format_gpa(), "3.75");
    }

    #[test]
    fn test_nothing_graded_is_zero() {
        let courses = vec![course("GSC 110", 3, None), course("GSL 113", 1, None)];
        let result = courses.calculate_gpa(&GpaConfig::default()).unwrap();
        assert_eq!(result.gpa, Decimal::ZERO);
        assert_eq!(result.format_gpa(), "0.00");
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn test_only_zero_credit_graded_is_zero() {
        let courses = vec![course("ISL 107", 0, Some(GradeLetter::A))];
        let result = courses.calculate_gpa(&GpaConfig::default()).unwrap();
        assert_eq!(result.gpa, Decimal::ZERO);
        assert_eq!(result.graded_count(), 1);
    }

    #[test]
    fn test_rounding_modes() {
        // (3*4.00 + 2*3.67 + 1*2.00) / 6 = 21.34 / 6 = 3.5566...
        let courses = vec![
            course("A", 3, Some(GradeLetter::A)),
            course("B", 2, Some(GradeLetter::AMinus)),
            course("C", 1, Some(GradeLetter::C)),
        ];
        let half_up = courses.calculate_gpa(&GpaConfig::default()).unwrap();
        assert_eq!(half_up.gpa, dec!(3.56));

        let down = GpaConfig::default().with_rounding(RoundingMode::Down);
        assert_eq!(courses.calculate_gpa(&down).unwrap().gpa, dec!(3.55));

        let three = GpaConfig::default().with_precision(3).unwrap();
        assert_eq!(courses.calculate_gpa(&three).unwrap().gpa, dec!(3.557));
    }

    #[test]
    fn test_trace_records_each_course() {
        let courses = vec![
            course("GSC 110", 3, Some(GradeLetter::A)),
            course("ISL 107", 0, Some(GradeLetter::F)),
            course("ENG 101", 3, None),
        ];
        let result = courses.calculate_gpa(&GpaConfig::default()).unwrap();
        let explanation = result.explain();
        assert!(explanation.contains("GSC 110 A x 3"));
        assert!(explanation.contains("ISL 107 (F) carries no credit weight"));
        assert!(explanation.contains("SKIP: ENG 101 ungraded"));
        assert!(explanation.ends_with("GPA: 4.00\n"));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let mut huge = Course::template("Huge", "BIG 1", Decimal::MAX, true);
        huge.grade = Some(GradeLetter::A);
        let res = vec![huge].calculate_gpa(&GpaConfig::default());
        assert!(matches!(res, Err(GpaError::CalculationError(_))));

        // Each product is zero, but the credit sum overflows.
        let half = dec!(50000000000000000000000000000);
        let courses: Vec<Course> = (0..2)
            .map(|i| {
                let mut c = Course::template("Half", format!("BIG {}", i), half, true);
                c.grade = Some(GradeLetter::F);
                c
            })
            .collect();
        let res = courses.calculate_gpa(&GpaConfig::default());
        assert!(matches!(res, Err(GpaError::CalculationError(_))));
    }

    #[test]
    fn test_semester_label() {
        let semester = Semester::new("1", "Semester 1", vec![course("GSC 110", 3, Some(GradeLetter::B))]);
        let result = semester.calculate_gpa(&GpaConfig::default()).unwrap();
        assert_eq!(result.label.as_deref(), Some("Semester 1"));
        assert_eq!(semester.get_label().as_deref(), Some("Semester 1"));
    }
}
