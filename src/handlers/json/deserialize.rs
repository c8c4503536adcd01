//! A [`Deserialize`](serde::de::Deserialize) implementation for a single JSON object that fails on
//! repeated field names, where deserializing straight into a map would keep only the last value.
use crate::Record;
use serde::de::{Error, MapAccess};
use serde::{de, Deserialize};

/// A record read from a JSON object whose field names are all distinct.
#[derive(Debug)]
pub(super) struct UniqueFields(pub(super) Record);

impl<'de> Deserialize<'de> for UniqueFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> de::Visitor<'de> for RecordVisitor {
    type Value = UniqueFields;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an object with string values")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = Record::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(field) = map.next_key::<String>()? {
            let value = map.next_value::<String>()?;
            if record.contains_key(&field) {
                return Err(A::Error::custom(format_args!("duplicate field `{}`", field)));
            }
            record.insert(field, value);
        }
        Ok(UniqueFields(record))
    }
}

#[cfg(test)]
mod tests {
    use super::UniqueFields;

    #[test]
    fn fields_keep_their_order() {
        let result = serde_json::from_str::<UniqueFields>(r#"{"z": "1", "a": "2"}"#);
        let fields = result
            .as_ref()
            .map(|UniqueFields(record)| record.keys().map(String::as_str).collect::<Vec<_>>());
        assert!(matches!(&fields, Ok(keys) if *keys == ["z", "a"]),
                "Expected fields in document order: {:?}", result);
    }

    #[test]
    fn repeated_field_causes_error() {
        let result = serde_json::from_str::<UniqueFields>(r#"{"a": "1", "a": "2"}"#);
        assert!(
            matches!(&result, Err(err) if err.to_string().contains("duplicate field `a`")),
            "Expected repeated field to be rejected: {:?}", result,
        );
    }

    #[test]
    fn non_string_value_causes_error() {
        let result = serde_json::from_str::<UniqueFields>(r#"{"a": 1}"#);
        assert!(result.is_err(), "Expected number value to be rejected: {:?}", result);
    }
}
