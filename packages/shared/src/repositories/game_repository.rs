use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::models::game::{Game, NewGame};
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::executor::{self, OPERATION_DEADLINE};

#[cfg(test)]
use mockall::automock;

const GET_GAMES_QUERY: &str = "SELECT id, player_white, player_black, played_at, result \
     FROM game ORDER BY played_at DESC";
const STORE_GAME_QUERY: &str = "INSERT INTO game (player_white, player_black, played_at, result) \
     VALUES ($1, $2, $3, $4) RETURNING id";

/// Read and write access to games.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait GameRepository: Send + Sync {
    /// All games, most recent first.
    async fn get_games(&self) -> Result<Vec<Game>, GameRepositoryError>;

    /// Records a game inside a transaction scoped to this single insert and
    /// returns the store-assigned identifier. On any failure the transaction
    /// is rolled back and the error names the step that failed.
    async fn record_game(&self, game: &NewGame) -> Result<i64, GameRepositoryError>;
}

pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    async fn get_games(&self) -> Result<Vec<Game>, GameRepositoryError> {
        debug!("retrieving all games");
        let games = executor::run_query(&self.pool, sqlx::query(GET_GAMES_QUERY)).await?;
        Ok(games)
    }

    async fn record_game(&self, game: &NewGame) -> Result<i64, GameRepositoryError> {
        executor::ensure_reachable(&self.pool).await?;

        // Dropping `tx` without an explicit commit rolls the transaction
        // back, so every early return below leaves the game table untouched.
        let mut tx = match timeout(OPERATION_DEADLINE, self.pool.begin()).await {
            Ok(Ok(tx)) => tx,
            Ok(Err(e)) => return Err(GameRepositoryError::Transaction(e.to_string())),
            Err(_) => {
                return Err(GameRepositoryError::Timeout(
                    "transaction start exceeded deadline".to_string(),
                ))
            }
        };

        let insert = sqlx::query(STORE_GAME_QUERY)
            .bind(game.white_player)
            .bind(game.black_player)
            .bind(game.played_at)
            .bind(game.result);
        let row = match timeout(OPERATION_DEADLINE, insert.fetch_one(&mut *tx)).await {
            Ok(Ok(row)) => row,
            Ok(Err(e)) => return Err(GameRepositoryError::Insert(e.to_string())),
            Err(_) => {
                return Err(GameRepositoryError::Timeout(
                    "insert exceeded deadline".to_string(),
                ))
            }
        };

        let id: i64 = row
            .try_get(0)
            .map_err(|e| GameRepositoryError::IdRetrieval(e.to_string()))?;

        match timeout(OPERATION_DEADLINE, tx.commit()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(GameRepositoryError::Commit(e.to_string())),
            Err(_) => {
                return Err(GameRepositoryError::Timeout(
                    "commit exceeded deadline".to_string(),
                ))
            }
        }

        info!(
            id,
            white = game.white_player,
            black = game.black_player,
            "game recorded"
        );
        Ok(id)
    }
}
