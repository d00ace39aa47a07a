use gpa::prelude::*;
use rust_decimal_macros::dec;

#[test]
fn test_published_totals_per_semester() {
    let catalog = Catalog::builtin();

    // (key, courses, required, required credit hours, total credit hours)
    let published = [("1", 9, 8, dec!(15), dec!(15)), ("2", 9, 8, dec!(18), dec!(18))];

    for (key, count, required, required_credits, total_credits) in published {
        let courses = catalog.get_courses(key).unwrap();
        assert_eq!(courses.len(), count, "semester {}", key);
        assert_eq!(courses.iter().filter(|c| c.required).count(), required, "semester {}", key);

        let semester = catalog.semester(key).unwrap();
        assert_eq!(semester.required_credit_hours(), required_credits, "semester {}", key);
        assert_eq!(semester.total_credit_hours(), total_credits, "semester {}", key);
    }
}

#[test]
fn test_optional_courses_are_zero_credit() {
    let catalog = Catalog::builtin();
    let optional: Vec<_> = catalog
        .semesters
        .iter()
        .flat_map(|s| s.courses.iter())
        .filter(|c| c.is_optional())
        .map(|c| (c.code.as_str(), c.credit_hours))
        .collect();

    assert_eq!(optional, vec![("ISL 107", dec!(0)), ("ISL 108", dec!(0))]);
}

#[test]
fn test_first_semester_order() {
    let codes: Vec<_> = Catalog::builtin()
        .get_courses("1")
        .unwrap()
        .into_iter()
        .map(|c| c.code)
        .collect();

    assert_eq!(
        codes,
        ["GSC 110", "GSL 113", "CSC 110", "CSL 110", "ENG 101", "ISL 101", "ISL 107", "GSC 114", "EEL 121"]
    );
}

#[test]
fn test_catalog_survives_json_round_trip() {
    let catalog = Catalog::builtin();
    let json = serde_json::to_string(catalog).unwrap();
    let back: Catalog = json.parse().unwrap();
    assert_eq!(&back, catalog);
}

#[test]
fn test_try_from_json_missing_file() {
    let res = Catalog::try_from_json("definitely/not/here.json");
    assert!(matches!(res, Err(GpaError::ConfigurationError(_))));
}
