use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{error, info};

use crate::{error::ApiError, state::AppState};
use shared::models::player::Player;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/players", get(get_players))
        .route("/player/{id}", get(get_player))
}

async fn get_players(State(state): State<AppState>) -> Result<Json<Vec<Player>>, ApiError> {
    info!("Getting all players...");
    state
        .player_repository
        .get_players()
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to retrieve players: {}", e);
            ApiError::from(e)
        })
}

async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    info!("Getting player with id {}...", id);
    let players = state.player_repository.get_player(id).await.map_err(|e| {
        error!("Failed to retrieve player {}: {}", id, e);
        ApiError::from(e)
    })?;

    // An unknown id is 204, not 404.
    match players.into_iter().next() {
        Some(player) => Ok(Json(player).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use sqlx::postgres::PgPoolOptions;

    use shared::models::game::{Game, NewGame};
    use shared::repositories::errors::game_repository_errors::GameRepositoryError;
    use shared::repositories::errors::player_repository_errors::PlayerRepositoryError;
    use shared::repositories::game_repository::GameRepository;
    use shared::repositories::player_repository::PlayerRepository;

    struct StubPlayerRepository {
        players: Vec<Player>,
        store_down: bool,
    }

    #[async_trait]
    impl PlayerRepository for StubPlayerRepository {
        async fn get_players(&self) -> Result<Vec<Player>, PlayerRepositoryError> {
            if self.store_down {
                return Err(PlayerRepositoryError::Connectivity(
                    "stub: store down".to_string(),
                ));
            }
            Ok(self.players.clone())
        }

        async fn get_player(&self, id: i64) -> Result<Vec<Player>, PlayerRepositoryError> {
            if self.store_down {
                return Err(PlayerRepositoryError::Connectivity(
                    "stub: store down".to_string(),
                ));
            }
            Ok(self
                .players
                .iter()
                .filter(|p| p.id == id)
                .cloned()
                .collect())
        }
    }

    struct UnusedGameRepository;

    #[async_trait]
    impl GameRepository for UnusedGameRepository {
        async fn get_games(&self) -> Result<Vec<Game>, GameRepositoryError> {
            unreachable!("player routes never touch the game repository")
        }

        async fn record_game(&self, _game: &NewGame) -> Result<i64, GameRepositoryError> {
            unreachable!("player routes never touch the game repository")
        }
    }

    fn sample_player(id: i64, nickname: &str) -> Player {
        Player {
            id,
            first_name: nickname.to_string(),
            last_name: nickname.to_string(),
            nickname: nickname.to_string(),
            active: true,
            registered_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        }
    }

    fn test_state(players: Vec<Player>, store_down: bool) -> AppState {
        // The lazy pool never connects; handlers under test only use the
        // repositories.
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/unused")
            .unwrap();
        AppState {
            player_repository: Arc::new(StubPlayerRepository {
                players,
                store_down,
            }),
            game_repository: Arc::new(UnusedGameRepository),
            pool,
        }
    }

    #[tokio::test]
    async fn test_get_players_returns_all_players_as_json() {
        let state = test_state(
            vec![sample_player(1, "Ada"), sample_player(2, "Turing")],
            false,
        );

        let response = get_players(State(state)).await.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let players: Vec<Player> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].id, 1);
        assert_eq!(players[1].nickname, "Turing");
    }

    #[tokio::test]
    async fn test_get_player_returns_the_matching_player() {
        let state = test_state(vec![sample_player(1, "Ada")], false);

        let response = get_player(State(state), Path(1))
            .await
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let player: Player = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(player.id, 1);
    }

    #[tokio::test]
    async fn test_get_player_returns_no_content_for_unknown_id() {
        let state = test_state(vec![sample_player(1, "Ada")], false);

        let response = get_player(State(state), Path(999))
            .await
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_get_players_maps_connectivity_failure_to_service_unavailable() {
        let state = test_state(Vec::new(), true);

        let error = get_players(State(state)).await.unwrap_err();
        assert_eq!(
            error.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
