//! # Error reporting for malformed problems
//!
//! Infeasibility and unboundedness are not errors, they are outcomes of a search. The errors in
//! this module only describe problems that can't be searched at all.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// An `InconsistencyError` is created when an integer program is inconsistently represented.
///
/// For example, a constraint might have more coefficients than there are variables, or a bound
/// might not be a finite number.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InconsistencyError {
    description: String,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> InconsistencyError {
        InconsistencyError { description: description.into() }
    }

    /// What is wrong with the problem.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Display for InconsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InconsistencyError: {}", self.description)
    }
}

impl Error for InconsistencyError {}
