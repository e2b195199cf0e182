use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// A registered player. The identifier is assigned by the store at insertion
/// time and never generated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    /// Whether the player is eligible for future games.
    pub active: bool,
    pub registered_at: DateTime<Utc>,
}

/// Maps one result-set row into a [`Player`].
///
/// Columns are read positionally in the order the player queries select
/// them: id, first_name, last_name, nickname, active, registered_at. A
/// column that cannot be coerced fails this row only, not the whole query.
impl FromRow<'_, PgRow> for Player {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Player {
            id: row.try_get(0)?,
            first_name: row.try_get(1)?,
            last_name: row.try_get(2)?,
            nickname: row.try_get(3)?,
            active: row.try_get(4)?,
            registered_at: row.try_get(5)?,
        })
    }
}
