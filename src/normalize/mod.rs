//! Structural normalization and validated construction of API payloads.
//!
//! Every record is built in two phases. A pure normalization step rewrites the
//! raw JSON (the `@id` rename, bucket splitting, board-score collapsing,
//! stat-mode tagging) and a validating constructor reads the normalized object
//! field by field through [`Fields`]. Nested records go through [`from_raw`]
//! again, so each nesting level gets its own identifier rewrite before its
//! parent is assembled.

pub mod board_scores;
pub mod buckets;
pub mod fields;
pub mod identifier;
pub mod stats;

pub use board_scores::coerce_board_scores;
pub use buckets::{StatusBuckets, transform_buckets};
pub use fields::Fields;
pub use identifier::rewrite_identifier;
pub use stats::{StatVariant, classify_mode, dispatch_stats};

use crate::constants::keys::RESERVED_ID;
use crate::error::ChessError;
use serde_json::Value;

/// A record shape the API returns.
pub trait Schema: Sized {
    /// Name used in error messages
    const NAME: &'static str;

    /// Whether the raw payload carries an `@id` self reference that must be
    /// renamed to `id` before construction.
    const IDENTIFIED: bool = false;

    /// Whether an `@id` self reference may be present without being required.
    /// When present it is renamed to `id`; when absent the payload is built
    /// as is.
    const OPTIONALLY_IDENTIFIED: bool = false;

    /// Reads every declared field out of an already-normalized object.
    fn build(fields: &mut Fields) -> Result<Self, ChessError>;
}

/// Validates an already-normalized JSON object into `T`.
///
/// No key is renamed here: a payload for an identified schema that still
/// carries `@id` instead of `id` fails with [`ChessError::MissingField`].
pub fn construct<T: Schema>(value: Value) -> Result<T, ChessError> {
    match value {
        Value::Object(map) => T::build(&mut Fields::new(T::NAME, map)),
        other => Err(ChessError::unexpected_shape(
            T::NAME,
            format!("expected a JSON object, found {}", fields::describe(&other)),
        )),
    }
}

/// Normalizes a raw API payload and constructs `T` from it.
pub fn from_raw<T: Schema>(value: Value) -> Result<T, ChessError> {
    let rewrite = match &value {
        Value::Object(map) if T::OPTIONALLY_IDENTIFIED => map.contains_key(RESERVED_ID),
        _ => T::IDENTIFIED,
    };
    if !rewrite {
        return construct(value);
    }
    match value {
        Value::Object(map) => construct(Value::Object(rewrite_identifier(T::NAME, map)?)),
        other => Err(ChessError::unexpected_shape(
            T::NAME,
            format!("expected a JSON object, found {}", fields::describe(&other)),
        )),
    }
}

/// Constructs every element of a JSON array as `T`.
pub fn list_from_raw<T: Schema>(value: Value) -> Result<Vec<T>, ChessError> {
    match value {
        Value::Array(items) => items.into_iter().map(from_raw).collect(),
        other => Err(ChessError::unexpected_shape(
            T::NAME,
            format!("expected a JSON array, found {}", fields::describe(&other)),
        )),
    }
}
