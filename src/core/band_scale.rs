use serde::{Deserialize, Serialize};

use crate::core::{InvertedValue, PrimitiveValue, Scale, ScaleType};
use crate::error::{ChartError, ChartResult};

/// Ordinal scale that splits the range into one step per category.
///
/// Inner padding is `bars_padding`, outer padding is half of it, so the first
/// band starts at `r0 + step * bars_padding / 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: Vec<PrimitiveValue>,
    range: (f64, f64),
    step: f64,
    start: f64,
    bandwidth: f64,
    original_bandwidth: f64,
    bars_padding: f64,
}

/// Out-of-range padding falls back to no padding.
fn safe_bars_padding(bars_padding: f64) -> f64 {
    if (0.0..=1.0).contains(&bars_padding) {
        bars_padding
    } else {
        0.0
    }
}

impl BandScale {
    /// `override_bandwidth` replaces the natural band width, before padding.
    pub fn new(
        domain: Vec<PrimitiveValue>,
        range: (f64, f64),
        override_bandwidth: Option<f64>,
        bars_padding: f64,
    ) -> ChartResult<Self> {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        let bars_padding = safe_bars_padding(bars_padding);
        let count = domain.len() as f64;
        let span = range.1 - range.0;
        let step = span / count.max(1.0);
        let start = range.0 + step * bars_padding / 2.0;
        let original_bandwidth = if domain.is_empty() {
            0.0
        } else {
            (step * (1.0 - bars_padding)).abs()
        };
        let bandwidth = match override_bandwidth {
            Some(width) if width > 0.0 && width.is_finite() && !domain.is_empty() => {
                width * (1.0 - bars_padding)
            }
            _ => original_bandwidth,
        };
        Ok(Self {
            domain,
            range,
            step,
            start,
            bandwidth,
            original_bandwidth,
            bars_padding,
        })
    }

    #[must_use]
    pub fn domain(&self) -> &[PrimitiveValue] {
        &self.domain
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Band width of one category before the cluster split.
    #[must_use]
    pub fn original_bandwidth(&self) -> f64 {
        self.original_bandwidth
    }

    /// Category under a pixel: the range is quantized into equal steps and
    /// positions beyond the edges resolve to the first or last category.
    #[must_use]
    pub fn invert(&self, pixel: f64) -> Option<&PrimitiveValue> {
        let last = self.domain.len().checked_sub(1)?;
        let span = self.range.1 - self.range.0;
        if !pixel.is_finite() || span == 0.0 {
            return self.domain.first();
        }
        let position = ((pixel - self.range.0) / span * self.domain.len() as f64).floor();
        let index = if position <= 0.0 {
            0
        } else {
            (position as usize).min(last)
        };
        self.domain.get(index)
    }
}

impl Scale for BandScale {
    fn scale_type(&self) -> ScaleType {
        ScaleType::Ordinal
    }

    fn scale(&self, value: &PrimitiveValue) -> Option<f64> {
        let index = self.domain.iter().position(|candidate| candidate == value)?;
        let position = self.start + self.step * index as f64;
        position.is_finite().then_some(position)
    }

    fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    fn bars_padding(&self) -> f64 {
        self.bars_padding
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn invert_with_step(&self, pixel: f64, _data: &[f64]) -> Option<InvertedValue> {
        self.invert(pixel).map(|value| InvertedValue {
            value: value.clone(),
            within_bandwidth: true,
        })
    }

    fn ticks(&self) -> Vec<PrimitiveValue> {
        self.domain.clone()
    }

    fn is_single_value(&self) -> bool {
        self.domain.len() < 2
    }

    fn is_value_in_domain(&self, value: &PrimitiveValue) -> bool {
        self.domain.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn abc() -> Vec<PrimitiveValue> {
        vec!["a".into(), "b".into(), "c".into()]
    }

    #[test]
    fn padding_offsets_first_band_by_half_padding() {
        let scale = BandScale::new(abc(), (0.0, 120.0), None, 0.5).expect("scale");
        assert_relative_eq!(scale.step(), 40.0);
        assert_relative_eq!(scale.bandwidth(), 20.0);
        assert_relative_eq!(scale.scale(&"a".into()).expect("a"), 10.0);
        assert_relative_eq!(scale.scale(&"c".into()).expect("c"), 90.0);
    }

    #[test]
    fn invert_quantizes_and_clamps() {
        let scale = BandScale::new(abc(), (0.0, 120.0), None, 0.0).expect("scale");
        assert_eq!(scale.invert(-5.0), Some(&"a".into()));
        assert_eq!(scale.invert(40.0), Some(&"b".into()));
        assert_eq!(scale.invert(119.9), Some(&"c".into()));
        assert_eq!(scale.invert(500.0), Some(&"c".into()));
    }

    #[test]
    fn invalid_padding_is_ignored() {
        let scale = BandScale::new(abc(), (0.0, 120.0), Some(20.0), 1.5).expect("scale");
        assert_relative_eq!(scale.bars_padding(), 0.0);
        assert_relative_eq!(scale.bandwidth(), 20.0);
    }
}
