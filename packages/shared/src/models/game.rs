use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// Outcome codes stored in the `result` column, from White's perspective.
///
/// The encoding is part of the schema contract: the `game` migration carries
/// a CHECK constraint admitting exactly these values.
pub mod result_code {
    /// Game ended in a draw.
    pub const DRAW: i32 = 0;
    /// White won.
    pub const WHITE_WIN: i32 = 1;
    /// Black won.
    pub const BLACK_WIN: i32 = 2;
}

/// A recorded game between two players. Both player fields reference
/// existing `Player` ids; the schema enforces that, not this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub white_player: i64,
    pub black_player: i64,
    /// Outcome from White's perspective, see [`result_code`].
    pub result: i32,
    /// When the game was played. Caller-supplied, not necessarily "now".
    pub played_at: DateTime<Utc>,
}

/// A game about to be recorded. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    pub white_player: i64,
    pub black_player: i64,
    pub result: i32,
    pub played_at: DateTime<Utc>,
}

/// Maps one result-set row into a [`Game`].
///
/// Columns are read positionally in the order the game query selects them:
/// id, player_white, player_black, played_at, result.
impl FromRow<'_, PgRow> for Game {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Game {
            id: row.try_get(0)?,
            white_player: row.try_get(1)?,
            black_player: row.try_get(2)?,
            played_at: row.try_get(3)?,
            result: row.try_get(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test]
    fn test_game_serializes_with_camel_case_field_names() {
        let game = Game {
            id: 7,
            white_player: 1,
            black_player: 2,
            result: result_code::WHITE_WIN,
            played_at: Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["whitePlayer"], 1);
        assert_eq!(json["blackPlayer"], 2);
        assert_eq!(json["result"], 1);
        assert!(json.get("playedAt").is_some());
        assert!(json.get("white_player").is_none());
    }

    #[test]
    fn test_new_game_deserializes_from_wire_format() {
        let json = r#"{
            "whitePlayer": 1,
            "blackPlayer": 2,
            "result": 1,
            "playedAt": "2024-03-01T18:30:00Z"
        }"#;

        let game: NewGame = serde_json::from_str(json).unwrap();
        assert_eq!(game.white_player, 1);
        assert_eq!(game.black_player, 2);
        assert_eq!(game.result, result_code::WHITE_WIN);
        assert_eq!(
            game.played_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_new_game_rejects_missing_fields() {
        let json = r#"{"whitePlayer": 1, "blackPlayer": 2}"#;
        let result: Result<NewGame, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test_case(result_code::DRAW ; "draw")]
    #[test_case(result_code::WHITE_WIN ; "white win")]
    #[test_case(result_code::BLACK_WIN ; "black win")]
    fn test_result_codes_survive_the_wire_format(code: i32) {
        let json = serde_json::json!({
            "whitePlayer": 1,
            "blackPlayer": 2,
            "result": code,
            "playedAt": "2024-03-01T18:30:00Z"
        });
        let game: NewGame = serde_json::from_value(json).unwrap();
        assert_eq!(game.result, code);
    }

    #[test]
    fn test_result_codes_are_distinct() {
        assert_ne!(result_code::DRAW, result_code::WHITE_WIN);
        assert_ne!(result_code::DRAW, result_code::BLACK_WIN);
        assert_ne!(result_code::WHITE_WIN, result_code::BLACK_WIN);
    }
}
