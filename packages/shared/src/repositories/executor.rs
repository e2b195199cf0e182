use std::time::Duration;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Connection, FromRow, PgPool, Postgres};
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

use crate::repositories::errors::query_errors::QueryError;

/// Upper bound on any single store round trip.
pub const OPERATION_DEADLINE: Duration = Duration::from_secs(5);

const PING_ATTEMPTS: u32 = 3;
const INITIAL_PING_BACKOFF: Duration = Duration::from_millis(50);

/// Verifies the store is reachable before a statement is issued.
///
/// Transient failures are retried with doubling backoff; once the attempts
/// are exhausted the last error is reported. Failing here costs one extra
/// round trip but yields a clearer error than a raw query failure.
pub async fn ensure_reachable(pool: &PgPool) -> Result<(), QueryError> {
    let mut backoff = INITIAL_PING_BACKOFF;
    let mut last_error = String::new();

    for attempt in 1..=PING_ATTEMPTS {
        match ping(pool).await {
            Ok(()) => return Ok(()),
            Err(e) => {
                warn!(attempt, error = %e, "store unreachable");
                last_error = e;
            }
        }
        if attempt < PING_ATTEMPTS {
            sleep(backoff).await;
            backoff *= 2;
        }
    }

    Err(QueryError::Connectivity(last_error))
}

async fn ping(pool: &PgPool) -> Result<(), String> {
    let check = async {
        let mut conn = pool.acquire().await.map_err(|e| e.to_string())?;
        conn.ping().await.map_err(|e| e.to_string())
    };
    match timeout(OPERATION_DEADLINE, check).await {
        Ok(result) => result,
        Err(_) => Err(format!("ping exceeded {:?}", OPERATION_DEADLINE)),
    }
}

/// Runs a bound read query and maps every returned row into `T`.
///
/// A row that fails to decode is logged and skipped so one malformed row
/// cannot hide the remaining good ones; only connectivity problems, the
/// deadline, or a rejected statement fail the whole query. The returned
/// sequence never contains a partially mapped entity.
pub async fn run_query<'q, T>(
    pool: &PgPool,
    query: Query<'q, Postgres, PgArguments>,
) -> Result<Vec<T>, QueryError>
where
    T: for<'r> FromRow<'r, PgRow>,
{
    ensure_reachable(pool).await?;

    let rows = match timeout(OPERATION_DEADLINE, query.fetch_all(pool)).await {
        Ok(Ok(rows)) => rows,
        Ok(Err(e)) => return Err(QueryError::Query(e.to_string())),
        Err(_) => {
            return Err(QueryError::Timeout(format!(
                "query exceeded {:?}",
                OPERATION_DEADLINE
            )))
        }
    };

    let mut mapped = Vec::with_capacity(rows.len());
    for row in &rows {
        match T::from_row(row) {
            Ok(entity) => mapped.push(entity),
            Err(e) => warn!(error = %e, "cannot map row, skipping it"),
        }
    }
    debug!(returned = rows.len(), mapped = mapped.len(), "query completed");

    Ok(mapped)
}
