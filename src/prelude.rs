//! Prelude module for the GPA engine
//!
//! This module re-exports commonly used structs, traits, and types to allow
//! for easier usage of the library.
//!
//! # Usage
//!
//! ```rust
//! use gpa::prelude::*;
//!
//! let mut session = GpaSession::builtin();
//! session.select_semester("1").unwrap();
//! assert!(!session.can_compute());
//! ```

// Core exports
pub use crate::builder::Builder;
pub use crate::catalog::{Catalog, Course, Semester, SemesterSummary};
pub use crate::config::{GpaConfig, RoundingMode};
pub use crate::grade::{GradeLetter, GradeScale};
pub use crate::inputs::IntoCreditHours;
pub use crate::session::{GpaSession, SessionState};
pub use crate::traits::CalculateGpa;
pub use crate::types::{CalculationStep, CourseBreakdown, GpaError, GpaResult, Operation};
