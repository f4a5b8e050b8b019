use super::{fields::describe, from_raw};
use crate::constants::stats::{CHESS_MODE_MARKER, RATING_ONLY_MODES};
use crate::error::ChessError;
use crate::models::{ChessModeStats, ModeStats, PlayerStats, RatingOnlyStats};
use serde_json::Value;

/// Which record a stat mode's payload is built as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatVariant {
    /// Rated chess modes (`chess_daily`, `chess960_daily`, `chess_blitz`, ...)
    Chess,
    /// `tactics`, `lessons` and `puzzle_rush`
    RatingOnly,
    /// Anything else (`fide`, new modes); left as raw JSON
    Untyped,
}

/// Picks the variant tag for a stat mode name.
pub fn classify_mode(name: &str) -> StatVariant {
    if name.contains(CHESS_MODE_MARKER) {
        StatVariant::Chess
    } else if RATING_ONLY_MODES.contains(&name) {
        StatVariant::RatingOnly
    } else {
        StatVariant::Untyped
    }
}

/// Builds the per-mode statistics map of a player.
///
/// The result has the same keys as the payload, in payload order.
pub fn dispatch_stats(value: Value) -> Result<PlayerStats, ChessError> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(ChessError::unexpected_shape(
                "PlayerStats",
                format!("expected a JSON object, found {}", describe(&other)),
            ));
        }
    };

    let modes = map
        .into_iter()
        .map(|(name, payload)| {
            let stats = match classify_mode(&name) {
                StatVariant::Chess => ModeStats::Chess(from_raw::<ChessModeStats>(payload)?),
                StatVariant::RatingOnly => {
                    ModeStats::RatingOnly(from_raw::<RatingOnlyStats>(payload)?)
                }
                StatVariant::Untyped => ModeStats::Untyped(payload),
            };
            Ok((name, stats))
        })
        .collect::<Result<Vec<_>, ChessError>>()?;

    Ok(PlayerStats::new(modes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_mode() {
        assert_eq!(classify_mode("chess_blitz"), StatVariant::Chess);
        assert_eq!(classify_mode("chess960_daily"), StatVariant::Chess);
        assert_eq!(classify_mode("tactics"), StatVariant::RatingOnly);
        assert_eq!(classify_mode("lessons"), StatVariant::RatingOnly);
        assert_eq!(classify_mode("puzzle_rush"), StatVariant::RatingOnly);
        assert_eq!(classify_mode("fide"), StatVariant::Untyped);
        assert_eq!(classify_mode("unknown_mode"), StatVariant::Untyped);
        // exact match only for the rating-only set
        assert_eq!(classify_mode("tactics_v2"), StatVariant::Untyped);
    }

    #[test]
    fn test_dispatch_keeps_keys_and_order() {
        let stats = dispatch_stats(json!({
            "unknown_mode": {"anything": [1, 2, 3]},
            "chess_blitz": {
                "last": {"rating": 1500, "date": 1600000000, "rd": 50},
                "best": {"rating": 1600, "date": 1590000000, "game": "https://www.chess.com/game/live/1"},
                "record": {"win": 10, "loss": 5, "draw": 1}
            },
            "tactics": {"highest": {"rating": 2000, "date": 1500000000}}
        }))
        .unwrap();

        let names: Vec<&str> = stats.names().collect();
        assert_eq!(names, ["unknown_mode", "chess_blitz", "tactics"]);

        assert!(matches!(stats.get("chess_blitz"), Some(ModeStats::Chess(_))));
        assert!(matches!(stats.get("tactics"), Some(ModeStats::RatingOnly(_))));
        assert_eq!(
            stats.get("unknown_mode"),
            Some(&ModeStats::Untyped(json!({"anything": [1, 2, 3]})))
        );
    }

    #[test]
    fn test_chess_mode_requires_last_best_record() {
        let err = dispatch_stats(json!({
            "chess_rapid": {
                "last": {"rating": 1500, "date": 1600000000, "rd": 50},
                "record": {"win": 1, "loss": 0, "draw": 0}
            }
        }))
        .unwrap_err();
        assert!(matches!(err, ChessError::MissingField { schema: "ChessModeStats", ref field } if field == "best"));
    }

    #[test]
    fn test_non_object_payload() {
        assert!(matches!(
            dispatch_stats(json!([])),
            Err(ChessError::UnexpectedShape { .. })
        ));
    }
}
