use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use shared::repositories::errors::game_repository_errors::GameRepositoryError;
use shared::repositories::errors::player_repository_errors::PlayerRepositoryError;

#[derive(Debug)]
pub enum ApiError {
    PlayerRepository(PlayerRepositoryError),
    GameRepository(GameRepositoryError),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<PlayerRepositoryError> for ApiError {
    fn from(error: PlayerRepositoryError) -> Self {
        ApiError::PlayerRepository(error)
    }
}

impl From<GameRepositoryError> for ApiError {
    fn from(error: GameRepositoryError) -> Self {
        ApiError::GameRepository(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::PlayerRepository(e) => {
                let status = match e {
                    PlayerRepositoryError::Connectivity(_) | PlayerRepositoryError::Timeout(_) => {
                        StatusCode::SERVICE_UNAVAILABLE
                    }
                    PlayerRepositoryError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, e.to_string())
            }
            ApiError::GameRepository(e) => {
                let status = match e {
                    GameRepositoryError::Connectivity(_) | GameRepositoryError::Timeout(_) => {
                        StatusCode::SERVICE_UNAVAILABLE
                    }
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, e.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
