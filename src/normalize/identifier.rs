use crate::constants::keys::{ID, RESERVED_ID};
use crate::error::ChessError;
use serde_json::{Map, Value};

/// Moves the reserved `@id` self reference to `id`.
///
/// An object that already exposes `id` and has no `@id` is returned as is, so
/// the rewrite can be applied more than once. When both are present the `@id`
/// value wins, since it is the one the API documents.
pub fn rewrite_identifier(
    schema: &'static str,
    mut map: Map<String, Value>,
) -> Result<Map<String, Value>, ChessError> {
    match map.remove(RESERVED_ID) {
        Some(value) => {
            map.insert(ID.to_string(), value);
            Ok(map)
        }
        None if map.contains_key(ID) => Ok(map),
        None => Err(ChessError::missing_identifier(schema)),
    }
}
