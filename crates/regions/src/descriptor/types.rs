use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::geom2::Point;
use crate::polygon::{PolygonError, ValidatedPolygon};

/// Discriminant of a descriptor payload (the `"type"` tag).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorKind {
    Text,
    Point,
    Polygon,
}

impl DescriptorKind {
    pub const ALL: [DescriptorKind; 3] = [Self::Text, Self::Point, Self::Polygon];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Point => "point",
            Self::Polygon => "polygon",
        }
    }

    /// Parse a wire tag; `None` for unknown kinds.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == tag)
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structurally parsed payload; coordinates not yet checked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawDescriptor {
    Text {
        text: String,
    },
    Point {
        coordinates: (f64, f64),
        text: String,
    },
    Polygon {
        coordinates: Vec<(f64, f64)>,
        text: String,
    },
}

impl RawDescriptor {
    #[inline]
    pub fn kind(&self) -> DescriptorKind {
        match self {
            Self::Text { .. } => DescriptorKind::Text,
            Self::Point { .. } => DescriptorKind::Point,
            Self::Polygon { .. } => DescriptorKind::Polygon,
        }
    }

    /// Classify a loosely typed payload by its `"type"` tag.
    ///
    /// Extra fields are ignored. A missing or unknown tag, or a field that does
    /// not match the declared kind, is `DescriptorError::Malformed`.
    pub fn from_value(value: &Value) -> Result<Self, DescriptorError> {
        let obj = value
            .as_object()
            .ok_or_else(|| DescriptorError::malformed("untyped", "descriptor must be an object"))?;
        let tag = match obj.get("type") {
            Some(Value::String(tag)) => tag.as_str(),
            Some(_) => {
                return Err(DescriptorError::malformed(
                    "untyped",
                    "\"type\" tag must be a string",
                ))
            }
            None => return Err(DescriptorError::malformed("untyped", "missing \"type\" tag")),
        };
        let kind = DescriptorKind::from_tag(tag).ok_or_else(|| {
            DescriptorError::malformed(
                tag,
                "unknown descriptor kind, expected one of \"text\", \"point\", \"polygon\"",
            )
        })?;
        RawDescriptor::deserialize(value)
            .map_err(|err| DescriptorError::malformed(kind.as_str(), err.to_string()))
    }
}

/// A descriptor whose shape and geometry have been validated.
#[derive(Clone, Debug, PartialEq)]
pub enum Descriptor {
    Text { text: String },
    Point { at: Point, text: String },
    Polygon { polygon: ValidatedPolygon, text: String },
}

impl Descriptor {
    #[inline]
    pub fn kind(&self) -> DescriptorKind {
        match self {
            Self::Text { .. } => DescriptorKind::Text,
            Self::Point { .. } => DescriptorKind::Point,
            Self::Polygon { .. } => DescriptorKind::Polygon,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        match self {
            Self::Text { text } | Self::Point { text, .. } | Self::Polygon { text, .. } => text,
        }
    }
}

/// Why a single descriptor was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DescriptorError {
    /// Shape does not match the declared kind (or the kind is missing/unknown).
    #[error("malformed {kind} descriptor: {reason}")]
    Malformed { kind: String, reason: String },
    #[error("{kind} descriptor has a non-finite coordinate at point {index}")]
    NonFiniteCoordinate { kind: DescriptorKind, index: usize },
    #[error(transparent)]
    Polygon(#[from] PolygonError),
}

impl DescriptorError {
    /// Stable rule name for reports; polygon failures keep their own code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "MalformedDescriptor",
            Self::NonFiniteCoordinate { .. } => "NonFiniteCoordinate",
            Self::Polygon(err) => err.code(),
        }
    }

    pub(crate) fn malformed(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            kind: kind.into(),
            reason: reason.into(),
        }
    }
}
