use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::models::player::Player;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;
use crate::repositories::executor;

#[cfg(test)]
use mockall::automock;

const GET_PLAYERS_QUERY: &str = "SELECT id, first_name, last_name, nickname, active, \
     registered_at FROM player ORDER BY id ASC";
const GET_PLAYER_QUERY: &str = "SELECT id, first_name, last_name, nickname, active, \
     registered_at FROM player WHERE id = $1";

/// Read-only access to players.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait PlayerRepository: Send + Sync {
    /// All players, ordered by ascending identifier.
    async fn get_players(&self) -> Result<Vec<Player>, PlayerRepositoryError>;

    /// The player with the given identifier, as a sequence of zero or one
    /// elements. The sequence shape mirrors the many-rows semantics of the
    /// underlying query even though the id is unique.
    async fn get_player(&self, id: i64) -> Result<Vec<Player>, PlayerRepositoryError>;
}

pub struct PgPlayerRepository {
    pool: PgPool,
}

impl PgPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PgPlayerRepository {
    async fn get_players(&self) -> Result<Vec<Player>, PlayerRepositoryError> {
        debug!("retrieving all players");
        let players = executor::run_query(&self.pool, sqlx::query(GET_PLAYERS_QUERY)).await?;
        Ok(players)
    }

    async fn get_player(&self, id: i64) -> Result<Vec<Player>, PlayerRepositoryError> {
        debug!(id, "retrieving player");
        let players =
            executor::run_query(&self.pool, sqlx::query(GET_PLAYER_QUERY).bind(id)).await?;
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_queries_pin_the_retrieval_order() {
        assert!(GET_PLAYERS_QUERY.contains("ORDER BY id ASC"));
        assert!(GET_PLAYER_QUERY.contains("WHERE id = $1"));
    }

    #[tokio::test]
    async fn test_mock_repository_returns_empty_sequence_for_unknown_id() {
        let mut mock = MockPlayerRepository::new();
        mock.expect_get_player()
            .withf(|id| *id == 999)
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        let players = mock.get_player(999).await.unwrap();
        assert!(players.is_empty());
    }
}
