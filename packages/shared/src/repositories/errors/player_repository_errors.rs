use crate::repositories::errors::query_errors::QueryError;

#[derive(Debug)]
pub enum PlayerRepositoryError {
    Connectivity(String),
    Timeout(String),
    Query(String),
}

impl std::fmt::Display for PlayerRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerRepositoryError::Connectivity(msg) => {
                write!(f, "Store unreachable: {}", msg)
            }
            PlayerRepositoryError::Timeout(msg) => write!(f, "Operation timed out: {}", msg),
            PlayerRepositoryError::Query(msg) => write!(f, "Query failed: {}", msg),
        }
    }
}

impl std::error::Error for PlayerRepositoryError {}

impl From<QueryError> for PlayerRepositoryError {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::Connectivity(msg) => PlayerRepositoryError::Connectivity(msg),
            QueryError::Timeout(msg) => PlayerRepositoryError::Timeout(msg),
            QueryError::Query(msg) => PlayerRepositoryError::Query(msg),
        }
    }
}
