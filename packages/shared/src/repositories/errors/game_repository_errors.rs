use crate::repositories::errors::query_errors::QueryError;

/// Failures of the game repository. The write path reports the exact step
/// that failed so callers can tell a dead store from a rejected insert.
#[derive(Debug)]
pub enum GameRepositoryError {
    Connectivity(String),
    Timeout(String),
    Query(String),
    /// The transaction could not be started.
    Transaction(String),
    /// The insert statement failed.
    Insert(String),
    /// The store did not return the assigned identifier.
    IdRetrieval(String),
    /// The transaction could not be committed; the insert was rolled back.
    Commit(String),
}

impl std::fmt::Display for GameRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameRepositoryError::Connectivity(msg) => write!(f, "Store unreachable: {}", msg),
            GameRepositoryError::Timeout(msg) => write!(f, "Operation timed out: {}", msg),
            GameRepositoryError::Query(msg) => write!(f, "Query failed: {}", msg),
            GameRepositoryError::Transaction(msg) => {
                write!(f, "Cannot obtain transaction: {}", msg)
            }
            GameRepositoryError::Insert(msg) => write!(f, "Insert failed: {}", msg),
            GameRepositoryError::IdRetrieval(msg) => {
                write!(f, "Cannot obtain inserted id: {}", msg)
            }
            GameRepositoryError::Commit(msg) => write!(f, "Commit failed: {}", msg),
        }
    }
}

impl std::error::Error for GameRepositoryError {}

impl From<QueryError> for GameRepositoryError {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::Connectivity(msg) => GameRepositoryError::Connectivity(msg),
            QueryError::Timeout(msg) => GameRepositoryError::Timeout(msg),
            QueryError::Query(msg) => GameRepositoryError::Query(msg),
        }
    }
}
