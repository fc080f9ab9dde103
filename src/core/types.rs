use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Axis-aligned rectangle in pixel space.
///
/// Used for the plotting area, the highlighted cursor band and tooltip boxes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Creates validated dimensions. Width and height must be finite and `>= 0`.
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> ChartResult<Self> {
        let dims = Self {
            top,
            left,
            width,
            height,
        };
        dims.validate()
    }

    /// Creates dimensions anchored at the origin.
    pub fn sized(width: f64, height: f64) -> ChartResult<Self> {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn validate(self) -> ChartResult<Self> {
        let origin_ok = self.top.is_finite() && self.left.is_finite();
        let size_ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0;
        if !origin_ok || !size_ok {
            return Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Inclusive containment test against the rectangle edges.
    #[must_use]
    pub fn contains(self, other: Dimensions) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Segment in pixel space, used for crosshair guide lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A raw datum value as read from a series row.
///
/// Numbers use `OrderedFloat` so values can key ordinal domains and be sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    Number(OrderedFloat<f64>),
    Text(String),
}

impl PrimitiveValue {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Numeric view of the value. Text is never coerced.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value.into_inner()),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Converts a JSON cell into a primitive. `null`, arrays and objects are not values.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(number) => number.as_f64().map(Self::number),
            serde_json::Value::String(text) => Some(Self::Text(text.clone())),
            serde_json::Value::Bool(flag) => Some(Self::Text(flag.to_string())),
            _ => None,
        }
    }
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i64> for PrimitiveValue {
    fn from(value: i64) -> Self {
        Self::number(value as f64)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value.into_inner()),
            Self::Text(text) => f.write_str(text),
        }
    }
}
