//! Core persistence layer for the Elo rating service.
//!
//! Entity models for players and games, plus the PostgreSQL-backed
//! repositories that read and record them. HTTP concerns live in the
//! `api` package; nothing in this crate depends on them.

pub mod models;
pub mod repositories;
