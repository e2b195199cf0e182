use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{error::ApiError, state::AppState};
use shared::models::game::{Game, NewGame};

pub fn routes() -> Router<AppState> {
    Router::new().route("/games", get(get_games).post(record_game))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordGameResponse {
    pub id: i64,
}

async fn get_games(State(state): State<AppState>) -> Result<Json<Vec<Game>>, ApiError> {
    info!("Getting all games...");
    state
        .game_repository
        .get_games()
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to retrieve games: {}", e);
            ApiError::from(e)
        })
}

async fn record_game(
    State(state): State<AppState>,
    Json(payload): Json<NewGame>,
) -> Result<(StatusCode, Json<RecordGameResponse>), ApiError> {
    info!(
        "Recording game, white {} vs black {}...",
        payload.white_player, payload.black_player
    );
    let id = state
        .game_repository
        .record_game(&payload)
        .await
        .map_err(|e| {
            error!("Failed to record game: {}", e);
            ApiError::from(e)
        })?;

    Ok((StatusCode::CREATED, Json(RecordGameResponse { id })))
}
