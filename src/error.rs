use thiserror::Error;

/// Errors that can occur while setting up or running a search
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A precondition of the call was violated, e.g. an endpoint outside of the Grid
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A text map could not be parsed
    #[error("unexpected {found:?} at line {line}, column {column}")]
    ParseGrid {
        /// 1-based line of the offending character
        line: usize,
        /// 1-based column of the offending character
        column: usize,
        /// The character that was found
        found: char,
    },

    /// The search expanded more waypoints than allowed by
    /// [`max_expansions`](crate::PathfinderConfig::max_expansions)
    #[error("search aborted after {limit} expansions")]
    ExpansionLimit {
        /// The configured budget
        limit: usize,
    },
}

impl PathError {
    /// Shorthand for [`PathError::InvalidArgument`]
    pub(crate) fn invalid(msg: impl Into<String>) -> PathError {
        PathError::InvalidArgument(msg.into())
    }
}
