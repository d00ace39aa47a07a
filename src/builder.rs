use crate::types::GpaError;

/// Trait for builders that produce a catalog or configuration.
///
/// This creates a unified interface for object creation across the crate.
pub trait Builder<T> {
    /// Builds the final object, returning a Result.
    fn build(self) -> Result<T, GpaError>;
}

/// Checks a builder's pending state before anything is constructed.
pub trait Validate {
    fn validate(&self) -> Result<(), GpaError>;
}
