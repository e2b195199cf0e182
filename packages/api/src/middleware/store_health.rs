use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::Connection;
use tracing::error;

use crate::{error::ErrorResponse, state::AppState};

/// Pings the store before every request and rejects with 503 when it is
/// down, so handlers never run against a connection known to be dead.
pub async fn require_store(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let ping = async {
        let mut conn = state.pool.acquire().await?;
        conn.ping().await
    };

    match ping.await {
        Ok(()) => next.run(request).await,
        Err(e) => {
            error!(error = %e, "cannot serve request, no database connection");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: "database unreachable".to_string(),
                }),
            )
                .into_response()
        }
    }
}
