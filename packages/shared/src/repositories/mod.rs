pub mod errors;
pub mod executor;
pub mod game_repository;
pub mod player_repository;
