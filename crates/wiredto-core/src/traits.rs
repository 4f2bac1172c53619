use crate::{
    model::DtoModel,
    obs,
    value::{Map, Value},
};

///
/// FieldValue
///
/// Conversion between a typed scalar field and the raw `Value` it
/// travels as. `from_value` performs no cross-type coercion: a
/// mismatched raw value yields `None` and the field is left untouched.
/// Integer widths accept both signed and unsigned raw forms when the
/// value fits, and floats additionally accept integer forms: payload
/// decoders do not distinguish the numeric shapes (whole numbers
/// decode as integers).
///

pub trait FieldValue {
    fn to_value(&self) -> Value;

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>
    where
        Self: Sized;
}

// Local helpers to expand the integer impls without repetition.
macro_rules! impl_field_value_int {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldValue for $ty {
            fn to_value(&self) -> Value {
                Value::Int(i64::from(*self))
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::Int(int) => Self::try_from(*int).ok(),
                    Value::Uint(uint) => Self::try_from(*uint).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! impl_field_value_uint {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldValue for $ty {
            fn to_value(&self) -> Value {
                Value::Uint(u64::from(*self))
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::Int(int) => u64::try_from(*int)
                        .ok()
                        .and_then(|uint| Self::try_from(uint).ok()),
                    Value::Uint(uint) => Self::try_from(*uint).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

impl_field_value_int!(i8, i16, i32, i64);
impl_field_value_uint!(u8, u16, u32, u64);

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl FieldValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(float) => Some(*float as Self),
            Value::Int(int) => Some(*int as Self),
            Value::Uint(uint) => Some(*uint as Self),
            _ => None,
        }
    }
}

impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(float) => Some(*float),
            Value::Int(int) => Some(*int as Self),
            Value::Uint(uint) => Some(*uint as Self),
            _ => None,
        }
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}

/// Identity escape hatch: a `Value` field holds whatever the payload
/// carried, composite or not.
impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::List(items) => items.iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

///
/// Dto
///
/// A typed bag of named fields hydrated from raw nested data and
/// flattened back to it. `hydrate` and `flatten` are macro-generated
/// from the declared field types; `MODEL` is the static registry that
/// replaces runtime reflection.
///
/// Hydration policy:
/// - raw keys with no declared field are silently ignored
/// - declared fields absent from the raw map keep their defaults
/// - a scalar supplied for a nested field leaves the field untouched
///

pub trait Dto: Default {
    /// Static field model for this variant.
    const MODEL: &'static DtoModel;

    /// Assign declared fields from `raw`, recursing into nested DTOs
    /// and collections for composite values.
    fn hydrate(&mut self, raw: &Map);

    /// Flatten every declared field back to plain nested data, in
    /// declaration order.
    #[must_use]
    fn flatten(&self) -> Map;

    /// Construct from a raw value. Non-map input yields the
    /// all-defaults instance.
    #[must_use]
    fn from_raw(value: &Value) -> Self {
        let mut dto = Self::default();

        if let Value::Map(raw) = value {
            let unknown = raw.keys().filter(|key| !Self::MODEL.contains(key)).count();
            obs::record_dto_hydration(u64::try_from(unknown).unwrap_or(u64::MAX));
            dto.hydrate(raw);
        } else {
            obs::record_dto_hydration(0);
        }

        dto
    }

    /// Wire bridge: serialize for the host framework's client-state
    /// transfer. Exactly `flatten`, wrapped as a value.
    #[must_use]
    fn to_wire(&self) -> Value {
        Value::Map(self.flatten())
    }

    /// Wire bridge: reconstruct from client-submitted state. Exactly
    /// `from_raw`.
    #[must_use]
    fn from_wire(value: &Value) -> Self {
        Self::from_raw(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{map, test_fixtures::TestItem};

    #[test]
    fn int_widths_accept_both_raw_forms_in_range() {
        assert_eq!(i8::from_value(&Value::Int(-7)), Some(-7));
        assert_eq!(i8::from_value(&Value::Int(300)), None);
        assert_eq!(i64::from_value(&Value::Uint(9)), Some(9));
        assert_eq!(u32::from_value(&Value::Int(-1)), None);
        assert_eq!(u64::from_value(&Value::Uint(u64::MAX)), Some(u64::MAX));
        assert_eq!(i64::from_value(&Value::Uint(u64::MAX)), None);
    }

    #[test]
    fn mismatched_values_are_rejected_without_coercion() {
        assert_eq!(String::from_value(&Value::Int(1)), None);
        assert_eq!(bool::from_value(&Value::Text("true".to_string())), None);
        assert_eq!(i64::from_value(&Value::Float(1.0)), None);
        assert_eq!(f64::from_value(&Value::Text("2".to_string())), None);
    }

    #[test]
    fn float_fields_accept_integer_raw_forms() {
        assert_eq!(f64::from_value(&Value::Int(2)), Some(2.0));
        assert_eq!(f64::from_value(&Value::Uint(2)), Some(2.0));
        assert_eq!(f32::from_value(&Value::Int(-1)), Some(-1.0));
        assert_eq!(f32::from_value(&Value::Uint(3)), Some(3.0));
    }

    #[test]
    fn option_maps_null_to_none() {
        assert_eq!(Option::<i64>::from_value(&Value::Null), Some(None));
        assert_eq!(Option::<i64>::from_value(&Value::Int(4)), Some(Some(4)));
        assert_eq!(Option::<i64>::from_value(&Value::Bool(true)), None);
        assert_eq!(Option::<i64>::None.to_value(), Value::Null);
    }

    #[test]
    fn vec_hydrates_element_wise_or_not_at_all() {
        let raw = Value::List(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(Vec::<i64>::from_value(&raw), Some(vec![1, 2]));

        let mixed = Value::List(vec![Value::Int(1), Value::Text("x".to_string())]);
        assert_eq!(Vec::<i64>::from_value(&mixed), None);
    }

    #[test]
    fn from_raw_ignores_unknown_keys_and_keeps_defaults() {
        let raw = Value::Map(map! {
            "n" => 5i64,
            "unknown_field" => 9i64,
        });

        let item = TestItem::from_raw(&raw);
        assert_eq!(item.n, 5);
        assert_eq!(item.label, String::new());

        let flat = item.flatten();
        assert!(flat.get("unknown_field").is_none());
        assert_eq!(flat.get("n"), Some(&Value::Int(5)));
    }

    #[test]
    fn from_raw_on_non_map_input_yields_defaults() {
        let item = TestItem::from_raw(&Value::Int(3));
        assert_eq!(item, TestItem::default());
    }

    #[test]
    fn wire_bridge_is_pass_through() {
        let raw = Value::Map(map! { "n" => 2i64, "label" => "ok" });
        let item = TestItem::from_wire(&raw);
        assert_eq!(item.to_wire(), raw);
    }
}
