use colored::Colorize;
use gpa::prelude::*;
use inquire::{Confirm, Select};
use std::fmt;

use crate::report;

struct SemesterChoice(SemesterSummary);

impl fmt::Display for SemesterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.label)
    }
}

enum GradeChoice {
    Skip,
    Grade(GradeLetter),
}

impl fmt::Display for GradeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeChoice::Skip => write!(f, "(skip)"),
            GradeChoice::Grade(grade) => write!(f, "{:<3} {:.2}", grade.to_string(), grade.points()),
        }
    }
}

/// Runs the guided GPA wizard until the user declines another round.
pub fn run_wizard_mode(session: &mut GpaSession<'_>) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "\n{}",
        format!("{} GPA CALCULATOR", session.catalog().title).to_uppercase().bright_cyan().bold()
    );
    println!("{}", "Pick a semester, then a grade for each course.".dimmed());
    println!("{}", "You can press Ctrl+C at any time to exit.".dimmed());

    loop {
        let choices: Vec<SemesterChoice> = session
            .list_semesters()
            .into_iter()
            .map(SemesterChoice)
            .collect();
        if choices.is_empty() {
            return Err(GpaError::ConfigurationError("Catalog has no semesters".to_string()).into());
        }

        let chosen = Select::new("Select Semester:", choices).prompt()?;
        session.select_semester(&chosen.0.key)?;
        println!();

        for index in 0..session.courses().len() {
            let course = &session.courses()[index];
            let prompt = format!(
                "{} ({}) - Credits: {}{}",
                course.name,
                course.code,
                course.credit_hours.normalize(),
                if course.required { "" } else { " (Optional)" }
            );

            let mut options: Vec<GradeChoice> = GradeScale::letters().map(GradeChoice::Grade).collect();
            let help = if course.required {
                "Select grade"
            } else {
                options.insert(0, GradeChoice::Skip);
                "Optional grade"
            };

            match Select::new(&prompt, options).with_help_message(help).prompt()? {
                GradeChoice::Skip => session.clear_grade(index)?,
                GradeChoice::Grade(grade) => session.set_grade_letter(index, grade)?,
            }
        }

        let result = session.compute()?;
        report::print_result(&result, false)?;

        if !Confirm::new("Calculate another GPA?").with_default(false).prompt()? {
            break;
        }
        session.reset();
    }

    Ok(())
}
