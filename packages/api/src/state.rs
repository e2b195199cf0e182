use std::sync::Arc;

use sqlx::PgPool;

use shared::repositories::game_repository::GameRepository;
use shared::repositories::player_repository::PlayerRepository;

#[derive(Clone)]
pub struct AppState {
    pub player_repository: Arc<dyn PlayerRepository>,
    pub game_repository: Arc<dyn GameRepository>,
    /// Shared pool, pinged by the store-health middleware.
    pub pool: PgPool,
}
