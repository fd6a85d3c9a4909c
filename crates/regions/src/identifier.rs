//! Record identifiers: an integer or a non-empty string, passed through as is.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A type-checked identifier. The value is not normalized.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Identifier {
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Str(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Caller-supplied message, e.g. "research_identifier must be either an integer or a string".
    #[error("{message}")]
    InvalidType { message: String },
}

impl IdentifierError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidType { .. } => "InvalidIdentifierType",
        }
    }
}

impl Identifier {
    /// Accept a JSON integer (`i64` or `u64` range) or a non-empty string.
    ///
    /// Floats, booleans, null, empty strings and containers are rejected with
    /// `message`.
    pub fn from_value(value: &Value, message: &str) -> Result<Self, IdentifierError> {
        let parsed = match value {
            Value::Number(n) => n
                .as_i64()
                .map(Identifier::Int)
                .or_else(|| n.as_u64().map(Identifier::UInt)),
            Value::String(s) if !s.is_empty() => Some(Identifier::Str(s.clone())),
            _ => None,
        };
        parsed.ok_or_else(|| IdentifierError::InvalidType {
            message: message.to_string(),
        })
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Int(i) => write!(f, "{i}"),
            Identifier::UInt(u) => write!(f, "{u}"),
            Identifier::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(v: i64) -> Self {
        Identifier::Int(v)
    }
}

impl From<&str> for Identifier {
    fn from(v: &str) -> Self {
        Identifier::Str(v.to_string())
    }
}
