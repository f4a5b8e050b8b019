//! Validating reader over one normalized JSON object.
//!
//! Records are read by hand rather than with `#[derive(Deserialize)]` so each
//! failure names its schema and field as a `MissingField`, `TypeCoercion` or
//! `InvalidEnumValue` error, and so loosely typed values (numeric strings)
//! can be coerced per field.

use super::{Schema, from_raw};
use crate::error::ChessError;
use crate::models::ApiEnum;
use serde_json::{Map, Value};

const DESCRIBE_MAX_CHARS: usize = 40;

/// Short human description of a JSON value for error messages.
pub(crate) fn describe(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() > DESCRIBE_MAX_CHARS {
        let head: String = text.chars().take(DESCRIBE_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        text
    }
}

pub(crate) fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Field-by-field access to one JSON object while building a [`Schema`].
///
/// Each getter removes the key it reads. A JSON `null` is treated the same as
/// an absent key.
#[derive(Debug)]
pub struct Fields {
    schema: &'static str,
    map: Map<String, Value>,
}

impl Fields {
    pub fn new(schema: &'static str, map: Map<String, Value>) -> Self {
        Self { schema, map }
    }

    pub fn schema(&self) -> &'static str {
        self.schema
    }

    fn take(&mut self, key: &str) -> Option<Value> {
        match self.map.remove(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn require(&mut self, key: &str) -> Result<Value, ChessError> {
        self.take(key)
            .ok_or_else(|| ChessError::missing_field(self.schema, key))
    }

    fn coerce<T>(
        &self,
        key: &str,
        value: Value,
        expected: &'static str,
        coerce: fn(&Value) -> Option<T>,
    ) -> Result<T, ChessError> {
        coerce(&value)
            .ok_or_else(|| ChessError::type_coercion(self.schema, key, expected, describe(&value)))
    }

    pub fn string(&mut self, key: &str) -> Result<String, ChessError> {
        let value = self.require(key)?;
        self.coerce(key, value, "a string", coerce_string)
    }

    pub fn opt_string(&mut self, key: &str) -> Result<Option<String>, ChessError> {
        self.take(key)
            .map(|value| self.coerce(key, value, "a string", coerce_string))
            .transpose()
    }

    pub fn int(&mut self, key: &str) -> Result<i64, ChessError> {
        let value = self.require(key)?;
        self.coerce(key, value, "an integer", coerce_int)
    }

    pub fn opt_int(&mut self, key: &str) -> Result<Option<i64>, ChessError> {
        self.take(key)
            .map(|value| self.coerce(key, value, "an integer", coerce_int))
            .transpose()
    }

    /// Reads a float; numeric strings such as `"12.5"` are accepted.
    pub fn float(&mut self, key: &str) -> Result<f64, ChessError> {
        let value = self.require(key)?;
        self.coerce(key, value, "a float", coerce_float)
    }

    /// Optional form of [`Fields::float`].
    pub fn opt_float(&mut self, key: &str) -> Result<Option<f64>, ChessError> {
        self.take(key)
            .map(|value| self.coerce(key, value, "a float", coerce_float))
            .transpose()
    }

    pub fn bool(&mut self, key: &str) -> Result<bool, ChessError> {
        let value = self.require(key)?;
        self.coerce(key, value, "a boolean", Value::as_bool)
    }

    pub fn opt_bool(&mut self, key: &str) -> Result<Option<bool>, ChessError> {
        self.take(key)
            .map(|value| self.coerce(key, value, "a boolean", Value::as_bool))
            .transpose()
    }

    fn parse_enum<E: ApiEnum>(&self, key: &str, value: Value) -> Result<E, ChessError> {
        match value {
            Value::String(s) => {
                E::parse(&s).ok_or_else(|| ChessError::invalid_enum_value(self.schema, key, s))
            }
            other => Err(ChessError::type_coercion(
                self.schema,
                key,
                "a string",
                describe(&other),
            )),
        }
    }

    pub fn enumeration<E: ApiEnum>(&mut self, key: &str) -> Result<E, ChessError> {
        let value = self.require(key)?;
        self.parse_enum(key, value)
    }

    pub fn opt_enumeration<E: ApiEnum>(&mut self, key: &str) -> Result<Option<E>, ChessError> {
        self.take(key)
            .map(|value| self.parse_enum(key, value))
            .transpose()
    }

    fn build_nested<T: Schema>(&self, key: &str, value: Value) -> Result<T, ChessError> {
        if !value.is_object() {
            return Err(ChessError::type_coercion(
                self.schema,
                key,
                "an object",
                describe(&value),
            ));
        }
        from_raw(value)
    }

    /// Builds a nested record, applying its own identifier rewrite first.
    pub fn nested<T: Schema>(&mut self, key: &str) -> Result<T, ChessError> {
        let value = self.require(key)?;
        self.build_nested(key, value)
    }

    pub fn opt_nested<T: Schema>(&mut self, key: &str) -> Result<Option<T>, ChessError> {
        self.take(key)
            .map(|value| self.build_nested(key, value))
            .transpose()
    }

    fn array(&self, key: &str, value: Value) -> Result<Vec<Value>, ChessError> {
        match value {
            Value::Array(items) => Ok(items),
            other => Err(ChessError::type_coercion(
                self.schema,
                key,
                "an array",
                describe(&other),
            )),
        }
    }

    fn build_records<T: Schema>(&self, key: &str, value: Value) -> Result<Vec<T>, ChessError> {
        self.array(key, value)?
            .into_iter()
            .enumerate()
            .map(|(index, item)| self.build_nested(&format!("{key}[{index}]"), item))
            .collect()
    }

    /// Builds every element of an array field as a nested record, in order.
    pub fn records<T: Schema>(&mut self, key: &str) -> Result<Vec<T>, ChessError> {
        let value = self.require(key)?;
        self.build_records(key, value)
    }

    pub fn opt_records<T: Schema>(&mut self, key: &str) -> Result<Option<Vec<T>>, ChessError> {
        self.take(key)
            .map(|value| self.build_records(key, value))
            .transpose()
    }

    fn build_strings(&self, key: &str, value: Value) -> Result<Vec<String>, ChessError> {
        self.array(key, value)?
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                self.coerce(&format!("{key}[{index}]"), item, "a string", coerce_string)
            })
            .collect()
    }

    pub fn strings(&mut self, key: &str) -> Result<Vec<String>, ChessError> {
        let value = self.require(key)?;
        self.build_strings(key, value)
    }

    pub fn opt_strings(&mut self, key: &str) -> Result<Option<Vec<String>>, ChessError> {
        self.take(key)
            .map(|value| self.build_strings(key, value))
            .transpose()
    }

    /// Takes a required value without interpreting it.
    pub fn raw(&mut self, key: &str) -> Result<Value, ChessError> {
        self.require(key)
    }

    /// Hands back every key no getter has read yet.
    pub fn take_remaining(&mut self) -> Map<String, Value> {
        std::mem::take(&mut self.map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountStatus;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => Fields::new("Test", map),
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_required_and_optional_strings() {
        let mut f = fields(json!({"name": "erik", "title": null}));
        assert_eq!(f.string("name").unwrap(), "erik");
        assert_eq!(f.opt_string("title").unwrap(), None);
        assert_eq!(f.opt_string("absent").unwrap(), None);

        let err = f.string("absent").unwrap_err();
        assert!(matches!(err, ChessError::MissingField { schema: "Test", ref field } if field == "absent"));
    }

    #[test]
    fn test_numbers_render_into_string_fields() {
        let mut f = fields(json!({"player_id": 41}));
        assert_eq!(f.string("player_id").unwrap(), "41");
    }

    #[test]
    fn test_int_coercion() {
        let mut f = fields(json!({"a": 5, "b": 7.0, "c": "12", "d": 1.5, "e": "x", "f": true}));
        assert_eq!(f.int("a").unwrap(), 5);
        assert_eq!(f.int("b").unwrap(), 7);
        assert_eq!(f.int("c").unwrap(), 12);
        assert!(matches!(f.int("d"), Err(ChessError::TypeCoercion { .. })));
        assert!(matches!(f.int("e"), Err(ChessError::TypeCoercion { .. })));
        assert!(matches!(f.int("f"), Err(ChessError::TypeCoercion { .. })));
    }

    #[test]
    fn test_string_encoded_float() {
        let mut f = fields(json!({"tie_break": "12.5", "points": "abc", "score": 3}));
        assert_eq!(f.float("tie_break").unwrap(), 12.5);
        assert_eq!(f.float("score").unwrap(), 3.0);

        let err = f.float("points").unwrap_err();
        assert!(matches!(
            err,
            ChessError::TypeCoercion { expected: "a float", ref field, .. } if field == "points"
        ));
    }

    #[test]
    fn test_bool_is_strict() {
        let mut f = fields(json!({"a": true, "b": "true"}));
        assert!(f.bool("a").unwrap());
        assert!(matches!(f.opt_bool("b"), Err(ChessError::TypeCoercion { .. })));
    }

    #[test]
    fn test_enumeration() {
        let mut f = fields(json!({"ok": "premium", "bad": "banned", "num": 3}));
        assert_eq!(
            f.enumeration::<AccountStatus>("ok").unwrap(),
            AccountStatus::Premium
        );
        assert!(matches!(
            f.enumeration::<AccountStatus>("bad"),
            Err(ChessError::InvalidEnumValue { ref value, .. }) if value == "banned"
        ));
        assert!(matches!(
            f.enumeration::<AccountStatus>("num"),
            Err(ChessError::TypeCoercion { .. })
        ));
    }

    #[test]
    fn test_strings_report_index() {
        let mut f = fields(json!({"admin": ["a", {"x": 1}]}));
        let err = f.strings("admin").unwrap_err();
        assert!(matches!(err, ChessError::TypeCoercion { ref field, .. } if field == "admin[1]"));
    }

    #[test]
    fn test_take_remaining() {
        let mut f = fields(json!({"read": 1, "left": 2}));
        f.int("read").unwrap();
        let rest = f.take_remaining();
        assert_eq!(rest.len(), 1);
        assert!(rest.contains_key("left"));
    }

    #[test]
    fn test_describe_truncates() {
        let long = Value::String("x".repeat(100));
        assert!(describe(&long).ends_with("..."));
        assert_eq!(describe(&json!(5)), "5");
    }
}
