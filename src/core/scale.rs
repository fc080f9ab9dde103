use serde::{Deserialize, Serialize};

use crate::core::{BandScale, ContinuousScale, PrimitiveValue, ScaleType};

/// Data value resolved from a pixel position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvertedValue {
    pub value: PrimitiveValue,
    /// `false` when the pixel falls in a gap between data buckets.
    pub within_bandwidth: bool,
}

impl InvertedValue {
    #[must_use]
    pub fn number(value: f64, within_bandwidth: bool) -> Self {
        Self {
            value: PrimitiveValue::number(value),
            within_bandwidth,
        }
    }
}

/// Immutable mapping from data values to pixels along one axis.
pub trait Scale {
    fn scale_type(&self) -> ScaleType;

    /// Pixel start of `value`, `None` when the value cannot be placed.
    fn scale(&self, value: &PrimitiveValue) -> Option<f64>;

    /// Width of one bar; 0 for continuous scales without bars.
    fn bandwidth(&self) -> f64;

    /// Fraction of each band reserved as blank space, in `[0, 1]`.
    fn bars_padding(&self) -> f64;

    fn range(&self) -> (f64, f64);

    fn invert_with_step(&self, pixel: f64, data: &[f64]) -> Option<InvertedValue>;

    fn ticks(&self) -> Vec<PrimitiveValue>;

    fn is_single_value(&self) -> bool;

    fn is_value_in_domain(&self, value: &PrimitiveValue) -> bool;
}

/// Any scale the engine builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "scale", rename_all = "camelCase")]
pub enum ChartScale {
    Band(BandScale),
    Continuous(ContinuousScale),
    /// Scale of an empty domain: nothing can be placed on it.
    Empty { range: (f64, f64) },
}

impl ChartScale {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    #[must_use]
    pub fn as_band(&self) -> Option<&BandScale> {
        match self {
            Self::Band(scale) => Some(scale),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_continuous(&self) -> Option<&ContinuousScale> {
        match self {
            Self::Continuous(scale) => Some(scale),
            _ => None,
        }
    }

    fn inner(&self) -> Option<&dyn Scale> {
        match self {
            Self::Band(scale) => Some(scale),
            Self::Continuous(scale) => Some(scale),
            Self::Empty { .. } => None,
        }
    }
}

impl Scale for ChartScale {
    fn scale_type(&self) -> ScaleType {
        self.inner()
            .map_or(ScaleType::Linear, |scale| scale.scale_type())
    }

    fn scale(&self, value: &PrimitiveValue) -> Option<f64> {
        self.inner()?.scale(value)
    }

    fn bandwidth(&self) -> f64 {
        self.inner().map_or(0.0, |scale| scale.bandwidth())
    }

    fn bars_padding(&self) -> f64 {
        self.inner().map_or(0.0, |scale| scale.bars_padding())
    }

    fn range(&self) -> (f64, f64) {
        match self {
            Self::Empty { range } => *range,
            other => other.inner().map_or((0.0, 0.0), |scale| scale.range()),
        }
    }

    fn invert_with_step(&self, pixel: f64, data: &[f64]) -> Option<InvertedValue> {
        self.inner()?.invert_with_step(pixel, data)
    }

    fn ticks(&self) -> Vec<PrimitiveValue> {
        self.inner().map(|scale| scale.ticks()).unwrap_or_default()
    }

    fn is_single_value(&self) -> bool {
        self.inner().is_none_or(|scale| scale.is_single_value())
    }

    fn is_value_in_domain(&self, value: &PrimitiveValue) -> bool {
        self.inner()
            .is_some_and(|scale| scale.is_value_in_domain(value))
    }
}
