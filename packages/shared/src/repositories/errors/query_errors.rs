/// Query-level failure raised by the query executor.
///
/// Per-row mapping failures are deliberately not represented here; a row
/// that cannot be decoded is skipped, not escalated.
#[derive(Debug)]
pub enum QueryError {
    /// The store could not be reached, even after retrying.
    Connectivity(String),
    /// The operation exceeded its deadline.
    Timeout(String),
    /// The statement was rejected by the store.
    Query(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Connectivity(msg) => write!(f, "Store unreachable: {}", msg),
            QueryError::Timeout(msg) => write!(f, "Operation timed out: {}", msg),
            QueryError::Query(msg) => write!(f, "Query failed: {}", msg),
        }
    }
}

impl std::error::Error for QueryError {}
