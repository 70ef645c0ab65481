//! Crate error types.

use thiserror::Error;

/// Errors raised when building a problem instance from external data.
///
/// Infeasible *solutions* are never errors: feasibility is reported by the
/// boolean [`CvrpProblem::validate`](crate::models::CvrpProblem::validate)
/// predicate and callers discard or regenerate failing candidates.
#[derive(Debug, Error)]
pub enum DataError {
    /// Demand list length does not match the customer list length.
    #[error("demand list has {demands} entries for {customers} customers")]
    DemandMismatch {
        /// Number of customer locations supplied.
        customers: usize,
        /// Number of demand entries supplied.
        demands: usize,
    },

    /// A required section of a VRP file is missing or empty.
    #[error("missing or empty {0}")]
    MissingSection(&'static str),

    /// A line of a VRP file could not be parsed.
    #[error("malformed line {line}: {reason}")]
    Malformed {
        /// 1-based line number within the input.
        line: usize,
        /// What went wrong on that line.
        reason: String,
    },

    /// Reading a VRP file from disk failed.
    #[error("failed to read VRP file")]
    Io(#[from] std::io::Error),
}
