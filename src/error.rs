use std::backtrace::Backtrace;

use crate::solver::variable::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Structural violations raised by the solver and by problem definitions.
///
/// None of these represent "no solution found" — an exhausted search space is
/// reported as an empty result, not an error. Every variant here indicates a
/// bug in a CSP definition (or in the solver's own bookkeeping) and aborts the
/// offending operation immediately.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The value is not in the variable's remaining domain.
    #[error("cannot assign {value} to variable {variable}: value is not in the remaining domain")]
    DomainViolation { variable: VariableId, value: String },

    /// The variable already holds a fixed value, so its domain cannot shrink.
    #[error("cannot restrict the domain of variable {variable}: a value is already assigned")]
    InvalidRestriction { variable: VariableId },

    /// The identity does not name a variable of this assignment. The key set
    /// of an assignment is fixed for the whole solve.
    #[error("variable {variable} is not part of this assignment")]
    UnknownVariable { variable: VariableId },

    /// A problem definition could not be parsed into a well-formed CSP.
    #[error("invalid puzzle definition: {0}")]
    InvalidPuzzle(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl Error {
    /// The underlying [`SolverError`], without the captured backtrace.
    pub fn inner(&self) -> &SolverError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
