//! Cell classification: raw text to typed values.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// The one date format accepted in source cells.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// The closed set of semantic types a column may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Integer,
    Float,
    Boolean,
    Timestamp,
    Text,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// A typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(NaiveDate),
    Text(String),
    Null,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("value '{value}' does not parse as {expected}")]
    TypeMismatch { value: String, expected: TypeTag },
}

/// Classify a raw cell. With `expected` set, the cell must parse as that
/// tag; otherwise candidate tags are tried in priority order, with text
/// as the total fallback.
pub fn classify(raw: &str, expected: Option<TypeTag>) -> Result<(Value, TypeTag), ClassifyError> {
    if let Some(tag) = expected {
        return match parse_as(raw, tag) {
            Some(value) => Ok((value, tag)),
            None => Err(ClassifyError::TypeMismatch {
                value: raw.to_string(),
                expected: tag,
            }),
        };
    }

    for tag in [
        TypeTag::Integer,
        TypeTag::Float,
        TypeTag::Boolean,
        TypeTag::Timestamp,
    ] {
        if let Some(value) = parse_as(raw, tag) {
            return Ok((value, tag));
        }
    }
    Ok((Value::Text(raw.to_string()), TypeTag::Text))
}

fn parse_as(raw: &str, tag: TypeTag) -> Option<Value> {
    match tag {
        TypeTag::Integer => raw.parse::<i64>().ok().map(Value::Integer),
        TypeTag::Float => raw.parse::<f64>().ok().map(Value::Float),
        TypeTag::Boolean => match raw.to_lowercase().as_str() {
            "true" => Some(Value::Boolean(true)),
            "false" => Some(Value::Boolean(false)),
            _ => None,
        },
        TypeTag::Timestamp => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .map(Value::Timestamp),
        TypeTag::Text => Some(Value::Text(raw.to_string())),
    }
}
