//! JSON encoding rules shared by all wire types
//!
//! Clients were written against a service that prints whole-number floats
//! without a fractional part and that matches object keys case-insensitively
//! when no exact key matches. These helpers reproduce both.

use serde::Serializer;

/// Largest magnitude at which every whole f64 still round-trips through i64
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0; // 2^63

/// Serialize whole numbers inside the i64 range as integers, anything else as f64
pub fn number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let v = *value;
    if v.is_finite() && v.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&v) {
        serializer.serialize_i64(v as i64)
    } else {
        serializer.serialize_f64(v)
    }
}

/// Resolve an incoming object key against a type's field names.
///
/// An exact match wins; otherwise the first name equal under Unicode
/// lowercasing is used. Unknown keys yield `None` and are skipped.
pub fn match_key(key: &str, names: &[&'static str]) -> Option<&'static str> {
    names.iter().copied().find(|name| *name == key).or_else(|| {
        names.iter().copied().find(|name| {
            name.chars()
                .flat_map(char::to_lowercase)
                .eq(key.chars().flat_map(char::to_lowercase))
        })
    })
}

/// Implement `Deserialize` for a plain struct with lenient key matching.
///
/// Missing keys keep the `Default` value, `null` leaves a field untouched,
/// unknown keys are ignored and a repeated key overwrites the earlier one.
/// Anything other than a JSON object is rejected.
macro_rules! lenient_deserialize {
    ($ty:ident { $($field:ident => $key:literal),+ $(,)? }) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                const FIELDS: &[&str] = &[$($key),+];

                struct FieldsVisitor;

                impl<'de> serde::de::Visitor<'de> for FieldsVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(f, "a JSON object for {}", stringify!($ty))
                    }

                    fn visit_map<A>(self, mut map: A) -> Result<$ty, A::Error>
                    where
                        A: serde::de::MapAccess<'de>,
                    {
                        let mut value = <$ty>::default();
                        while let Some(key) = map.next_key::<String>()? {
                            match $crate::wire::match_key(&key, FIELDS) {
                                $(Some($key) => {
                                    if let Some(v) = map.next_value()? {
                                        value.$field = v;
                                    }
                                })+
                                _ => {
                                    map.next_value::<serde::de::IgnoredAny>()?;
                                }
                            }
                        }
                        Ok(value)
                    }
                }

                deserializer.deserialize_struct(stringify!($ty), FIELDS, FieldsVisitor)
            }
        }
    };
}

pub(crate) use lenient_deserialize;
