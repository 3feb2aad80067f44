//! Target SQL dialect and type-name mapping.

use crate::value::TypeTag;

/// SQL dialect variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Portable lowest-common-denominator SQL
    #[default]
    Generic,
    /// PostgreSQL
    PostgreSQL,
}

impl Dialect {
    /// Parse dialect from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "generic" => Some(Self::Generic),
            "postgres" | "postgresql" => Some(Self::PostgreSQL),
            _ => None,
        }
    }

    /// SQL type name for a column type tag.
    pub fn type_name(self, tag: TypeTag) -> &'static str {
        match self {
            Self::Generic => match tag {
                TypeTag::Integer => "integer",
                TypeTag::Float => "float",
                TypeTag::Boolean => "boolean",
                TypeTag::Timestamp => "timestamp",
                TypeTag::Text => "text",
            },
            Self::PostgreSQL => match tag {
                TypeTag::Integer => "integer",
                TypeTag::Float => "double precision",
                TypeTag::Boolean => "boolean",
                TypeTag::Timestamp => "timestamp",
                TypeTag::Text => "text",
            },
        }
    }
}
