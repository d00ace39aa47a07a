use crate::config::GpaConfig;
use crate::types::{GpaError, GpaResult};

/// Trait implemented by everything a GPA can be computed over.
pub trait CalculateGpa {
    /// Calculate the GPA and its breakdown.
    ///
    /// * `Result<GpaResult, GpaError>`
    fn calculate_gpa(&self, config: &GpaConfig) -> Result<GpaResult, GpaError>;

    /// Returns the label of the course set, if any.
    fn get_label(&self) -> Option<String> {
        None
    }
}
