//! Conversions between `Value` and `serde_json::Value`.
//!
//! Raw DTO input is typically a decoded JSON request payload, so the
//! ingestion boundary accepts `serde_json::Value` directly. Numbers map
//! to `Int` when they fit in `i64`, then `Uint`, then `Float`.

use crate::value::{Map, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(value) => Self::Bool(value),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Self::Int(int)
                } else if let Some(uint) = number.as_u64() {
                    Self::Uint(uint)
                } else {
                    number.as_f64().map_or(Self::Null, Self::Float)
                }
            }
            serde_json::Value::String(text) => Self::Text(text),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, Self::from(value));
                }

                Self::Map(map)
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(value) => Self::Bool(value),
            // Non-finite floats have no JSON form and degrade to null.
            Value::Float(value) => serde_json::Number::from_f64(value).map_or(Self::Null, Self::Number),
            Value::Int(value) => Self::Number(value.into()),
            Value::Uint(value) => Self::Number(value.into()),
            Value::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Map(map) => {
                let mut object = serde_json::Map::new();
                for (key, value) in map {
                    object.insert(key, Self::from(value));
                }

                Self::Object(object)
            }
            Value::Null => Self::Null,
            Value::Text(text) => Self::String(text),
        }
    }
}
