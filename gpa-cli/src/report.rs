//! Terminal rendering of catalogs, scales and results.

use colored::Colorize;
use gpa::prelude::*;
use rust_decimal::Decimal;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SemesterRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Semester")]
    label: String,
    #[tabled(rename = "Courses")]
    courses: usize,
    #[tabled(rename = "Credit Hours")]
    credits: String,
}

#[derive(Tabled)]
struct CourseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Course")]
    name: String,
    #[tabled(rename = "Credits")]
    credits: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct ScaleRow {
    #[tabled(rename = "Grade")]
    grade: String,
    #[tabled(rename = "Points")]
    points: String,
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Course")]
    name: String,
    #[tabled(rename = "Credits")]
    credits: String,
    #[tabled(rename = "Grade")]
    grade: String,
    #[tabled(rename = "Quality Points")]
    quality_points: String,
}

fn credits(value: Decimal) -> String {
    value.normalize().to_string()
}

pub fn print_semesters(catalog: &Catalog, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.list_semesters())?);
        return Ok(());
    }

    let rows: Vec<SemesterRow> = catalog
        .semesters
        .iter()
        .map(|s| SemesterRow {
            key: s.key.clone(),
            label: s.label.clone(),
            courses: s.courses.len(),
            credits: credits(s.total_credit_hours()),
        })
        .collect();

    println!("\n{}", format!("{} GPA CALCULATOR", catalog.title).to_uppercase().bright_cyan().bold());
    println!("{}", Table::new(rows).with(Style::rounded()));
    Ok(())
}

pub fn print_courses(semester: &Semester, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(semester)?);
        return Ok(());
    }

    let rows: Vec<CourseRow> = semester
        .courses
        .iter()
        .enumerate()
        .map(|(i, c)| CourseRow {
            index: i + 1,
            code: c.code.clone(),
            name: c.name.clone(),
            credits: credits(c.credit_hours),
            status: if c.required { "Required".to_string() } else { "Optional".to_string() },
        })
        .collect();

    println!("\n{}", semester.label.bright_cyan().bold());
    println!("{}", Table::new(rows).with(Style::rounded()));
    println!(
        "{}",
        format!(
            "{} required courses, {} credit hours",
            semester.required_count(),
            credits(semester.required_credit_hours())
        )
        .dimmed()
    );
    Ok(())
}

pub fn print_scale(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let entries = GradeScale::entries();
    if json {
        let map: Vec<_> = entries
            .iter()
            .map(|(grade, points)| serde_json::json!({ "grade": grade, "points": points }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    let rows: Vec<ScaleRow> = entries
        .into_iter()
        .map(|(grade, points)| ScaleRow {
            grade: grade.to_string(),
            points: format!("{:.2}", points),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
    Ok(())
}

pub fn print_result(result: &GpaResult, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    let label = result.label.as_deref().unwrap_or("Semester");
    println!("\n{}", format!("Your GPA for {}", label).bold());
    println!("{}", result.format_gpa().bright_blue().bold());

    let rows: Vec<BreakdownRow> = result
        .breakdown
        .iter()
        .map(|b| BreakdownRow {
            code: b.code.clone(),
            name: b.name.clone(),
            credits: credits(b.credit_hours),
            grade: b.grade.to_string(),
            quality_points: format!("{:.2}", b.quality_points),
        })
        .collect();

    println!("\n{}", "Course Breakdown:".bold());
    println!("{}", Table::new(rows).with(Style::rounded()));
    println!(
        "{}",
        format!(
            "{} quality points / {} credit hours",
            format!("{:.2}", result.total_quality_points),
            credits(result.total_credit_hours)
        )
        .dimmed()
    );
    Ok(())
}

pub fn print_error(err: &dyn std::error::Error) {
    eprintln!("{} {}", "error:".red().bold(), err);
}
