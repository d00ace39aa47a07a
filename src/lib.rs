pub mod macros;

pub mod builder;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod grade;
pub mod inputs;
pub mod prelude;
pub mod session;
pub mod traits;
pub mod types;

pub use rust_decimal::Decimal;

pub use catalog::{Catalog, Course, Semester, SemesterSummary};
pub use config::{GpaConfig, RoundingMode};
pub use grade::{GradeLetter, GradeScale};
pub use session::{GpaSession, SessionState};
pub use traits::CalculateGpa;
pub use types::{CourseBreakdown, GpaError, GpaResult};
