use super::{Fields, Schema, from_raw};
use crate::error::ChessError;
use serde::Serialize;
use serde_json::Value;

/// A payload split into `finished`, `in_progress` and `registered` lists.
///
/// `F` is the record type of finished entries and `O` the type of the two
/// open buckets; most endpoints use one type for all three.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBuckets<F, O = F> {
    pub finished: Vec<F>,
    pub in_progress: Vec<O>,
    pub registered: Vec<O>,
}

impl<F, O> StatusBuckets<F, O> {
    /// Entry counts as `(finished, in_progress, registered)`
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.finished.len(),
            self.in_progress.len(),
            self.registered.len(),
        )
    }

    pub fn len(&self) -> usize {
        self.finished.len() + self.in_progress.len() + self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F: Schema, O: Schema> Schema for StatusBuckets<F, O> {
    const NAME: &'static str = "StatusBuckets";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            finished: fields.records("finished")?,
            in_progress: fields.records("in_progress")?,
            registered: fields.records("registered")?,
        })
    }
}

/// Converts every entry of a three-bucket payload into its typed record.
///
/// Each entry gets its own identifier rewrite. Entries keep their bucket and
/// their position inside it.
pub fn transform_buckets<F: Schema, O: Schema>(
    value: Value,
) -> Result<StatusBuckets<F, O>, ChessError> {
    from_raw(value)
}
