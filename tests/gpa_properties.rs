use gpa::prelude::*;
use rust_decimal_macros::dec;

fn grade_all(session: &mut GpaSession<'_>, letter: &str) {
    for i in 0..session.courses().len() {
        session.set_grade(i, letter).unwrap();
    }
}

#[test]
fn test_uniform_grade_yields_its_points() {
    for grade in GradeScale::letters() {
        for key in ["1", "2"] {
            let mut session = GpaSession::builtin();
            session.select_semester(key).unwrap();
            grade_all(&mut session, grade.as_ref());

            let result = session.compute().unwrap();
            assert_eq!(result.gpa, grade.points(), "grade {} semester {}", grade, key);
        }
    }
}

#[test]
fn test_zero_credit_grade_never_moves_gpa() {
    let mut session = GpaSession::builtin();
    session.select_semester("2").unwrap();
    let grades = ["A", "B+", "C", "A-", "B", "D+", "C+", "B-"];
    let mut graded = 0;
    for i in 0..session.courses().len() {
        if session.courses()[i].required {
            session.set_grade(i, grades[graded]).unwrap();
            graded += 1;
        }
    }
    let quran = session.find_course("ISL 108").unwrap();
    let baseline = session.compute().unwrap().gpa;

    for letter in GradeScale::letters() {
        session.set_grade_letter(quran, letter).unwrap();
        assert_eq!(session.compute().unwrap().gpa, baseline, "optional grade {}", letter);
    }
}

#[test]
fn test_compute_is_deterministic() {
    let mut session = GpaSession::builtin();
    session.select_semester("1").unwrap();
    for (i, letter) in ["A", "B", "C+", "A-", "B+", "D", "F", "C-", "B-"].iter().enumerate() {
        session.set_grade(i, letter).unwrap();
    }

    let first = session.compute().unwrap();
    let second = session.compute().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_mixed_first_semester() {
    let mut session = GpaSession::builtin();
    session.select_semester("1").unwrap();
    // GSC 110 A (3), GSL 113 B (1), CSC 110 B+ (2), CSL 110 A (1), ENG 101 C (3),
    // ISL 101 A- (2), ISL 107 skipped, GSC 114 B- (2), EEL 121 A (1)
    let grades = [
        ("GSC 110", "A"),
        ("GSL 113", "B"),
        ("CSC 110", "B+"),
        ("CSL 110", "A"),
        ("ENG 101", "C"),
        ("ISL 101", "A-"),
        ("GSC 114", "B-"),
        ("EEL 121", "A"),
    ];
    for (code, letter) in grades {
        let idx = session.find_course(code).unwrap();
        session.set_grade(idx, letter).unwrap();
    }

    let result = session.compute().unwrap();
    // 12 + 3 + 6.66 + 4 + 6 + 7.34 + 5.34 + 4 = 48.34 over 15 credits
    assert_eq!(result.total_quality_points, dec!(48.34));
    assert_eq!(result.total_credit_hours, dec!(15));
    assert_eq!(result.gpa, dec!(3.22));
    assert_eq!(result.format_gpa(), "3.22");
    assert_eq!(result.label.as_deref(), Some("Semester 1"));
    assert_eq!(result.graded_count(), 8);
    assert!(result.breakdown.iter().all(|b| b.code != "ISL 107"));
}

#[test]
fn test_example_three_a_one_b() {
    let semester = Semester::new(
        "x",
        "Example",
        vec![
            Course::new("Lecture", "LEC 1", 3, true).unwrap().with_grade(GradeLetter::A),
            Course::new("Lab", "LAB 1", 1, true).unwrap().with_grade(GradeLetter::B),
        ],
    );
    let result = semester.calculate_gpa(&GpaConfig::default()).unwrap();
    assert_eq!(result.total_quality_points, dec!(15.00));
    assert_eq!(result.format_gpa(), "3.75");
}

#[test]
fn test_empty_grading_is_zero() {
    let courses: Vec<Course> = Catalog::builtin().get_courses("1").unwrap();
    let result = courses.calculate_gpa(&GpaConfig::default()).unwrap();
    assert_eq!(result.format_gpa(), "0.00");
}

#[test]
fn test_points_for_unknown_letter() {
    assert_eq!(GradeScale::points_for("X"), Err(GpaError::InvalidGrade("X".to_string())));
}
