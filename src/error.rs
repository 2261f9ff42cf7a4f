use std::fmt;

use crate::request::ParameterError;

/// Failure raised inside the augmentation step.
///
/// This error never escapes [`augment`](crate::augment): it exists so the
/// resolver/extractor/merge internals can propagate failures with `?`, and
/// so the top level can log exactly what went wrong before falling back to
/// the unmodified base claim set.
#[derive(Debug)]
pub struct AugmentError {
    /// The parameter that was being read when the failure occurred
    pub parameter: &'static str,
    /// Human-readable description of the underlying failure
    pub message: String,
}

impl AugmentError {
    /// Wraps a [`ParameterError`] raised while reading the named parameter.
    pub(crate) fn parameter_read(parameter: &'static str, source: ParameterError) -> Self {
        Self {
            parameter,
            message: source.message().to_string(),
        }
    }
}

impl fmt::Display for AugmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to read request parameter '{}': {}",
            self.parameter, self.message
        )
    }
}

impl std::error::Error for AugmentError {}
