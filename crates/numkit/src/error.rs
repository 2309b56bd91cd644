use thiserror::Error;

/// Errors reported by this crate.
///
/// Numeric degeneracies (NaN, infinity) are not errors; see the crate docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A precondition on the arguments was violated, e.g. an empty slice.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
