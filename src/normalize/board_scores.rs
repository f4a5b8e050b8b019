use super::fields::{coerce_float, describe};
use crate::error::ChessError;
use crate::models::BoardScore;
use serde_json::Value;

const SCHEMA: &str = "BoardScore";

/// Collapses a per-opponent score mapping into the two positional slots.
///
/// The API keys a board's scores by usernames, which are meaningless to the
/// caller. The first entry becomes `player1` and the second `player2`; key
/// names are ignored. Anything other than exactly two entries is rejected.
pub fn coerce_board_scores(entries: Vec<(String, Value)>) -> Result<BoardScore, ChessError> {
    let found = entries.len();
    let [(_, first), (_, second)]: [(String, Value); 2] = entries
        .try_into()
        .map_err(|_| ChessError::shape_mismatch(SCHEMA, "board_scores", 2, found))?;

    let score = |field: &str, value: Value| {
        coerce_float(&value)
            .ok_or_else(|| ChessError::type_coercion(SCHEMA, field, "a float", describe(&value)))
    };

    Ok(BoardScore {
        player1: score("player1", first)?,
        player2: score("player2", second)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(pairs: &[(&str, Value)]) -> Vec<(String, Value)> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_positional_assignment() {
        let score = coerce_board_scores(entries(&[("zed", json!(1.5)), ("alice", json!(0.5))]))
            .unwrap();
        assert_eq!(score.player1, 1.5);
        assert_eq!(score.player2, 0.5);
    }

    #[test]
    fn test_key_names_do_not_matter() {
        let a = coerce_board_scores(entries(&[("a", json!(2)), ("b", json!(0))])).unwrap();
        let b = coerce_board_scores(entries(&[("player2", json!(2)), ("player1", json!(0))]))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrong_entry_count() {
        for pairs in [
            entries(&[]),
            entries(&[("only", json!(1))]),
            entries(&[("a", json!(1)), ("b", json!(0)), ("c", json!(1))]),
        ] {
            let found = pairs.len();
            let err = coerce_board_scores(pairs).unwrap_err();
            assert!(
                matches!(err, ChessError::ShapeMismatch { expected: 2, found: f, .. } if f == found)
            );
        }
    }

    #[test]
    fn test_non_numeric_score() {
        let err =
            coerce_board_scores(entries(&[("a", json!("x")), ("b", json!(1))])).unwrap_err();
        assert!(matches!(err, ChessError::TypeCoercion { ref field, .. } if field == "player1"));
    }
}
