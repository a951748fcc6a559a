//! Payload shaping against a record's field schema.
//!
//! Inbound upsert bodies are arbitrary JSON. [`shape`] checks them against
//! the record's [`RecordDescriptor`] and produces a normalized object in
//! which every schema field is present (absent optionals become null),
//! unrecognized fields are dropped and values are coerced to their declared
//! kind. The normalized object deserializes directly into the record's
//! entity model.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::registry::{FieldKind, RecordDescriptor};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("{field} is required for {record}")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },
    #[error("{field} must be a valid {expected} for {record}")]
    InvalidField {
        record: &'static str,
        field: &'static str,
        expected: FieldKind,
    },
    #[error("{field} must be a non-negative integer for {record}")]
    InvalidKey {
        record: &'static str,
        field: &'static str,
    },
}

/// A validated upsert payload: the primary key the caller supplied (if any)
/// and the normalized record object.
#[derive(Debug)]
pub struct ShapedRecord {
    pub key: Option<i32>,
    pub record: Value,
}

/// Validate and normalize an upsert payload.
///
/// A primary key of 0, null or absent means "assign one on insert"; the
/// placeholder 0 is written into the normalized object either way so the
/// object always carries the full column set.
pub fn shape(
    descriptor: &'static RecordDescriptor,
    payload: &Value,
) -> Result<ShapedRecord, PayloadError> {
    let object = payload.as_object().ok_or(PayloadError::NotAnObject)?;

    let key = match object.get(descriptor.primary_key) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let id = coerce(FieldKind::Integer, value)
                .as_ref()
                .and_then(Value::as_i64)
                .filter(|id| *id >= 0)
                .ok_or(PayloadError::InvalidKey {
                    record: descriptor.display_name,
                    field: descriptor.primary_key,
                })?;
            if id == 0 { None } else { Some(id as i32) }
        }
    };

    let mut record = Map::with_capacity(descriptor.fields.len() + 1);
    record.insert(
        descriptor.primary_key.to_string(),
        Value::from(key.unwrap_or(0)),
    );

    for field in descriptor.fields {
        let value = match object.get(field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    return Err(PayloadError::MissingField {
                        record: descriptor.display_name,
                        field: field.name,
                    });
                }
                Value::Null
            }
            Some(raw) => {
                coerce(field.kind, raw).ok_or(PayloadError::InvalidField {
                    record: descriptor.display_name,
                    field: field.name,
                    expected: field.kind,
                })?
            }
        };
        record.insert(field.name.to_string(), value);
    }

    Ok(ShapedRecord {
        key,
        record: Value::Object(record),
    })
}

fn coerce(kind: FieldKind, value: &Value) -> Option<Value> {
    match kind {
        FieldKind::Integer => coerce_integer(value),
        FieldKind::Float => coerce_float(value),
        FieldKind::Text => coerce_text(value),
        FieldKind::Date => coerce_date(value),
        FieldKind::Boolean => coerce_boolean(value),
    }
}

fn coerce_integer(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                in_i32(i)
            } else {
                // Integral floats like 20.0 pass, 20.5 does not.
                let f = n.as_f64()?;
                if f.fract() == 0.0 { in_i32(f as i64) } else { None }
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok().and_then(in_i32),
        _ => None,
    }
}

fn in_i32(i: i64) -> Option<Value> {
    i32::try_from(i).ok().map(Value::from)
}

fn coerce_float(value: &Value) -> Option<Value> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|f| f.is_finite())
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
}

fn coerce_text(value: &Value) -> Option<Value> {
    match value {
        Value::String(s) => Some(Value::String(s.clone())),
        Value::Number(n) => Some(Value::String(n.to_string())),
        _ => None,
    }
}

fn coerce_date(value: &Value) -> Option<Value> {
    let s = value.as_str()?;
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .map(|d| Value::String(d.to_string()))
}

fn coerce_boolean(value: &Value) -> Option<Value> {
    match value {
        Value::Bool(b) => Some(Value::Bool(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(Value::Bool(false)),
            Some(1) => Some(Value::Bool(true)),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(Value::Bool(true)),
            "false" | "0" => Some(Value::Bool(false)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use serde_json::json;

    #[test]
    fn shapes_a_minimal_seed_payload() {
        let payload = json!({
            "species": "Tomato",
            "variety": "Roma",
            "number_of_seeds": 20
        });

        let shaped = shape(&registry::SEEDS, &payload).unwrap();
        assert_eq!(shaped.key, None);
        assert_eq!(
            shaped.record,
            json!({
                "seed_id": 0,
                "species": "Tomato",
                "variety": "Roma",
                "number_of_seeds": 20,
                "heirloom": null,
                "yield_id": null,
                "comments": null
            })
        );
    }

    #[test]
    fn normalized_record_deserializes_into_the_entity_model() {
        let payload = json!({
            "species": "Tomato",
            "variety": "Roma",
            "number_of_seeds": 20,
            "heirloom": true
        });

        let shaped = shape(&registry::SEEDS, &payload).unwrap();
        let model: crate::entity::seeds::Model = serde_json::from_value(shaped.record).unwrap();
        assert_eq!(model.species, "Tomato");
        assert_eq!(model.heirloom, Some(true));
        assert_eq!(model.yield_id, None);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let payload = json!({ "species": "Tomato", "variety": "Roma" });
        let err = shape(&registry::SEEDS, &payload).unwrap_err();
        assert_eq!(
            err,
            PayloadError::MissingField {
                record: "Seed",
                field: "number_of_seeds"
            }
        );
        assert_eq!(err.to_string(), "number_of_seeds is required for Seed");
    }

    #[test]
    fn explicit_null_counts_as_missing_for_required_fields() {
        let payload = json!({
            "species": "Tomato",
            "variety": "Roma",
            "number_of_seeds": null
        });
        assert!(matches!(
            shape(&registry::SEEDS, &payload),
            Err(PayloadError::MissingField { .. })
        ));
    }

    #[test]
    fn unrecognized_fields_are_dropped() {
        let payload = json!({
            "species": "Tomato",
            "variety": "Roma",
            "number_of_seeds": 20,
            "favourite": "yes"
        });

        let shaped = shape(&registry::SEEDS, &payload).unwrap();
        assert!(shaped.record.get("favourite").is_none());
    }

    #[test]
    fn key_parsing() {
        let with_key = json!({
            "seed_id": 7,
            "species": "Tomato",
            "variety": "Roma",
            "number_of_seeds": 20
        });
        assert_eq!(shape(&registry::SEEDS, &with_key).unwrap().key, Some(7));

        let zero_key = json!({
            "seed_id": 0,
            "species": "Tomato",
            "variety": "Roma",
            "number_of_seeds": 20
        });
        assert_eq!(shape(&registry::SEEDS, &zero_key).unwrap().key, None);

        let negative = json!({
            "seed_id": -3,
            "species": "Tomato",
            "variety": "Roma",
            "number_of_seeds": 20
        });
        assert!(matches!(
            shape(&registry::SEEDS, &negative),
            Err(PayloadError::InvalidKey { .. })
        ));
    }

    #[test]
    fn tolerant_coercion() {
        assert_eq!(coerce(FieldKind::Integer, &json!("20")), Some(json!(20)));
        assert_eq!(coerce(FieldKind::Integer, &json!(20.0)), Some(json!(20)));
        assert_eq!(coerce(FieldKind::Integer, &json!(20.5)), None);
        assert_eq!(coerce(FieldKind::Integer, &json!(1_i64 << 40)), None);

        assert_eq!(coerce(FieldKind::Float, &json!(6)), Some(json!(6.0)));
        assert_eq!(coerce(FieldKind::Float, &json!("6.2")), Some(json!(6.2)));
        assert_eq!(coerce(FieldKind::Float, &json!("soup")), None);

        assert_eq!(coerce(FieldKind::Text, &json!(12)), Some(json!("12")));
        assert_eq!(coerce(FieldKind::Text, &json!(true)), None);

        assert_eq!(
            coerce(FieldKind::Date, &json!("2024-03-01")),
            Some(json!("2024-03-01"))
        );
        assert_eq!(coerce(FieldKind::Date, &json!("2024-02-30")), None);
        assert_eq!(coerce(FieldKind::Date, &json!("03/01/2024")), None);

        assert_eq!(coerce(FieldKind::Boolean, &json!(1)), Some(json!(true)));
        assert_eq!(coerce(FieldKind::Boolean, &json!("false")), Some(json!(false)));
        assert_eq!(coerce(FieldKind::Boolean, &json!(2)), None);
    }

    #[test]
    fn wrong_typed_required_field_names_the_expected_kind() {
        let payload = json!({
            "seed_id": 1,
            "species": "Tomato",
            "variety": "Roma",
            "number_of_seeds": "plenty"
        });
        let err = shape(&registry::SEEDS, &payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "number_of_seeds must be a valid integer for Seed"
        );
    }

    #[test]
    fn body_must_be_an_object() {
        assert_eq!(
            shape(&registry::SEEDS, &json!([1, 2])).unwrap_err(),
            PayloadError::NotAnObject
        );
    }

    #[test]
    fn date_fields_shape_for_germination() {
        let payload = json!({
            "seed_id": 1,
            "planted_date": "2024-03-01",
            "seeds_attempted": 10,
            "seeds_successful": 8,
            "method": "paper towel"
        });

        let shaped = shape(&registry::GERMINATIONS, &payload).unwrap();
        assert_eq!(shaped.record["planted_date"], json!("2024-03-01"));
        assert_eq!(shaped.record["germination_date"], Value::Null);

        let model: crate::entity::germinations::Model =
            serde_json::from_value(shaped.record).unwrap();
        assert_eq!(model.planted_date.to_string(), "2024-03-01");
        assert_eq!(model.germination_date, None);
    }
}
