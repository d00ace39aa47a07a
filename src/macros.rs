//! Declarative macros for reducing boilerplate in catalog definitions.
//!
//! The `semester!` macro turns a compact course table into a
//! [`Semester`](crate::catalog::Semester) of ungraded course templates.

/// Macro for declaring a semester of course templates.
///
/// Each row is `(name, code, credit_hours, required | optional)`. Credit hours
/// must be a non-negative integer literal; fractional weights go through
/// [`Course::new`](crate::catalog::Course::new) instead.
///
/// # Usage
///
/// ```rust
/// use gpa::semester;
///
/// let s = semester!("1", "Semester 1", [
///     ("Functional English", "ENG 101", 3, required),
///     ("Tajweed", "ISL 107", 0, optional),
/// ]);
/// assert_eq!(s.courses.len(), 2);
/// assert_eq!(s.required_count(), 1);
/// ```
///
/// A fractional literal is rejected at compile time rather than truncated:
///
/// ```compile_fail
/// use gpa::semester;
///
/// let s = semester!("1", "Semester 1", [("Lab", "LAB 1", 0.5, required)]);
/// ```
#[macro_export]
macro_rules! semester {
    (@required required) => { true };
    (@required optional) => { false };
    (
        $key:expr, $label:expr, [
            $( ($name:expr, $code:expr, $credits:literal, $kind:ident) ),* $(,)?
        ]
    ) => {
        $crate::catalog::Semester::new(
            $key,
            $label,
            vec![
                $(
                    $crate::catalog::Course::template(
                        $name,
                        $code,
                        {
                            let credits: u32 = $credits;
                            $crate::Decimal::from(credits)
                        },
                        $crate::semester!(@required $kind),
                    )
                ),*
            ],
        )
    };
}
