use polars::prelude::{DataFrame, NamedFrom, Series};
use serde_json::Value;

use crate::errors::LoaderError;
use crate::model::{CANONICAL_COLUMNS, METADATA_COLUMNS, REGION, VALUE};
use crate::registry::DataLoader;

use super::{build_frame, text_series};

const RENAMES: [(&str, &str); 2] = [("country", REGION), ("life_expectancy", VALUE)];

/// Eurostat's newer long export: an array of records carrying
/// `unit, sex, age, country, year, life_expectancy, flag, flag_detail`.
///
/// `country` and `life_expectancy` are renamed onto the canonical columns and
/// everything else is dropped. A record without one of the six canonical fields
/// is rejected.
pub struct JsonLoader;

impl Default for JsonLoader {
    fn default() -> Self {
        Self
    }
}

impl JsonLoader {
    const NAME: &'static str = "JSON";

    fn invalid(reason: impl Into<String>) -> LoaderError {
        LoaderError::InvalidLayout {
            loader: Self::NAME,
            reason: reason.into(),
        }
    }

    /// Integers stay integers and numbers stay numbers so the cleaner can pass
    /// them through; anything mixed falls back to text.
    fn measure_series(name: &str, values: Vec<Value>) -> Series {
        if values.iter().all(|v| v.is_null() || v.is_i64()) {
            let data: Vec<Option<i64>> = values.iter().map(Value::as_i64).collect();
            return Series::new(name.into(), data);
        }
        if values.iter().all(|v| v.is_null() || v.is_number()) {
            let data: Vec<Option<f64>> = values.iter().map(Value::as_f64).collect();
            return Series::new(name.into(), data);
        }
        text_series(name, values.into_iter().map(Self::as_text).collect())
    }

    fn as_text(value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        }
    }
}

impl DataLoader for JsonLoader {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extension(&self) -> &'static str {
        ".json"
    }

    fn parse(&self, content: &[u8]) -> Result<DataFrame, LoaderError> {
        let document: Value = serde_json::from_slice(content).map_err(|source| LoaderError::Json {
            loader: Self::NAME,
            source,
        })?;
        let Value::Array(records) = document else {
            return Err(Self::invalid("expected a top-level array of records"));
        };

        let mut fields: Vec<Vec<Value>> = vec![Vec::with_capacity(records.len()); CANONICAL_COLUMNS.len()];
        for (record_index, record) in records.into_iter().enumerate() {
            let Value::Object(mut object) = record else {
                return Err(Self::invalid(format!("record {record_index} is not an object")));
            };

            for (source, target) in RENAMES {
                if let Some(value) = object.remove(source) {
                    object.insert(target.to_string(), value);
                }
            }

            for (values, field) in fields.iter_mut().zip(CANONICAL_COLUMNS) {
                let value = object.remove(field).ok_or(LoaderError::MissingField {
                    loader: Self::NAME,
                    record_index,
                    field,
                })?;
                if value.is_null() && METADATA_COLUMNS.contains(&field) {
                    return Err(LoaderError::NullField {
                        loader: Self::NAME,
                        record_index,
                        field,
                    });
                }
                values.push(value);
            }
        }

        let series = CANONICAL_COLUMNS
            .iter()
            .zip(fields)
            .map(|(name, values)| {
                if METADATA_COLUMNS.contains(name) {
                    text_series(name, values.into_iter().map(Self::as_text).collect())
                } else {
                    Self::measure_series(name, values)
                }
            })
            .collect();
        build_frame(Self::NAME, series)
    }
}
