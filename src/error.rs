use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the experiment harness. The trees themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Randomization degree {degree} exceeds the number of records ({len})")]
    DegreeOutOfRange { degree: usize, len: usize },
}

/// The first broken invariant found by `validate()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("In-order traversal is not sorted at position {position}")]
    Order { position: usize },

    #[error("Node at in-order position {position} has balance factor {factor}")]
    Unbalanced { position: usize, factor: isize },

    #[error("Node at in-order position {position} caches height {cached}, actual {actual}")]
    StaleHeight {
        position: usize,
        cached: isize,
        actual: isize,
    },

    #[error("Tree counts {counted} records, but {actual} nodes are reachable")]
    Count { counted: usize, actual: usize },
}
