use serde::{Deserialize, Serialize};

use crate::core::{InvertedValue, PrimitiveValue, Scale, ScaleType};
use crate::error::{ChartError, ChartResult};

/// Smallest absolute value a log domain may reach when it touches zero.
pub const LOG_MIN_ABS_DOMAIN: f64 = 1.0;

/// Default number of ticks requested from continuous scales.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Bars on a continuous axis tick once per bucket until there are more than
/// this many buckets per requested tick; nice linear ticks are used beyond.
const MAX_BUCKET_TICKS_PER_TICK: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogBase {
    #[default]
    Common,
    Binary,
    Natural,
}

impl LogBase {
    #[must_use]
    pub fn base(self) -> f64 {
        match self {
            Self::Common => 10.0,
            Self::Binary => 2.0,
            Self::Natural => std::f64::consts::E,
        }
    }
}

/// Keeps a log domain strictly positive or strictly negative.
///
/// A domain touching or crossing zero is cut at `log_min_limit` (or
/// [`LOG_MIN_ABS_DOMAIN`]) on the side with the smaller magnitude.
#[must_use]
pub fn limit_log_scale_domain((min, max): (f64, f64), log_min_limit: Option<f64>) -> (f64, f64) {
    let abs_limit = log_min_limit.map(f64::abs).filter(|limit| *limit > 0.0);
    if let Some(limit) = abs_limit {
        if min > 0.0 && min < limit {
            return if max > limit { (limit, max) } else { (limit, limit) };
        }
        if max < 0.0 && max > -limit {
            return if min < -limit { (min, -limit) } else { (-limit, -limit) };
        }
    }

    let fallback = abs_limit.unwrap_or(LOG_MIN_ABS_DOMAIN);
    if min == 0.0 {
        return if max > 0.0 {
            (fallback, max)
        } else if max < 0.0 {
            (-fallback, max)
        } else {
            (fallback, fallback)
        };
    }
    if max == 0.0 {
        return if min > 0.0 {
            (min, fallback)
        } else if min < 0.0 {
            (min, -fallback)
        } else {
            (fallback, fallback)
        };
    }
    if min < 0.0 && max > 0.0 {
        return if max.abs() >= min.abs() {
            (fallback, max)
        } else {
            (min, -fallback)
        };
    }
    if min > 0.0 && max < 0.0 {
        return if min.abs() >= max.abs() {
            (min, fallback)
        } else {
            (-fallback, max)
        };
    }
    (min, max)
}

const E10: f64 = 7.071_067_811_865_476;
const E5: f64 = 3.162_277_660_168_379_5;
const E2: f64 = std::f64::consts::SQRT_2;

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Round tick values covering `[start, stop]`, about `count` of them.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }
    let mut ticks: Vec<f64> = if step > 0.0 {
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|index| index as f64 * step).collect()
    } else {
        let inverse = -step;
        let first = (lo * inverse).ceil() as i64;
        let last = (hi * inverse).floor() as i64;
        (first..=last).map(|index| index as f64 / inverse).collect()
    };
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Construction options of [`ContinuousScale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContinuousScaleOptions {
    /// Width of one bar slot before padding; 0 for scales without bars.
    pub bandwidth: f64,
    pub min_interval: f64,
    pub total_bars_in_cluster: usize,
    pub bars_padding: f64,
    pub desired_tick_count: usize,
    pub is_single_value_histogram: bool,
    pub integers_only: bool,
    pub log_base: LogBase,
    pub log_min_limit: Option<f64>,
}

impl Default for ContinuousScaleOptions {
    fn default() -> Self {
        Self {
            bandwidth: 0.0,
            min_interval: 0.0,
            total_bars_in_cluster: 1,
            bars_padding: 0.0,
            desired_tick_count: DEFAULT_TICK_COUNT,
            is_single_value_histogram: false,
            integers_only: false,
            log_base: LogBase::Common,
            log_min_limit: None,
        }
    }
}

/// Linear, time or logarithmic mapping from a numeric domain onto a pixel range.
///
/// When the scale carries bars, every scaled value is shifted by half of the
/// padding of each bar in the cluster so bars sit centered in their slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousScale {
    scale_type: ScaleType,
    domain: (f64, f64),
    range: (f64, f64),
    log_base: LogBase,
    bandwidth: f64,
    bandwidth_padding: f64,
    bars_padding: f64,
    min_interval: f64,
    total_bars_in_cluster: usize,
    is_single_value_histogram: bool,
    tick_values: Vec<f64>,
}

impl ContinuousScale {
    pub fn new(
        scale_type: ScaleType,
        domain: (f64, f64),
        range: (f64, f64),
        options: ContinuousScaleOptions,
    ) -> ChartResult<Self> {
        if scale_type == ScaleType::Ordinal {
            return Err(ChartError::InvalidConfig(
                "continuous scale cannot use the ordinal scale type".to_owned(),
            ));
        }
        let all_finite = [domain.0, domain.1, range.0, range.1]
            .iter()
            .all(|value| value.is_finite());
        if !all_finite {
            return Err(ChartError::InvalidData(
                "continuous scale domain and range must be finite".to_owned(),
            ));
        }

        let domain = if scale_type == ScaleType::Log {
            limit_log_scale_domain(domain, options.log_min_limit)
        } else {
            domain
        };
        let bars_padding = options.bars_padding.clamp(0.0, 1.0);
        let bandwidth = options.bandwidth.max(0.0);
        let mut scale = Self {
            scale_type,
            domain,
            range,
            log_base: options.log_base,
            bandwidth: bandwidth * (1.0 - bars_padding),
            bandwidth_padding: bandwidth * bars_padding,
            bars_padding,
            min_interval: options.min_interval.max(0.0),
            total_bars_in_cluster: options.total_bars_in_cluster.max(1),
            is_single_value_histogram: options.is_single_value_histogram,
            tick_values: Vec::new(),
        };
        scale.tick_values = scale.compute_ticks(
            options.desired_tick_count,
            options.integers_only,
            bandwidth > 0.0,
        );
        Ok(scale)
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn min_interval(&self) -> f64 {
        self.min_interval
    }

    #[must_use]
    pub fn total_bars_in_cluster(&self) -> usize {
        self.total_bars_in_cluster
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.domain.0 > self.domain.1
    }

    fn transform(&self, value: f64) -> f64 {
        match self.scale_type {
            ScaleType::Log => {
                let base = self.log_base.base();
                if self.domain.0 < 0.0 {
                    -(-value).log(base)
                } else {
                    value.log(base)
                }
            }
            _ => value,
        }
    }

    fn untransform(&self, value: f64) -> f64 {
        match self.scale_type {
            ScaleType::Log => {
                let base = self.log_base.base();
                if self.domain.0 < 0.0 {
                    -base.powf(-value)
                } else {
                    base.powf(value)
                }
            }
            _ => value,
        }
    }

    /// Plain domain-to-range mapping. A degenerate domain maps onto the range midpoint.
    fn project(&self, value: f64) -> f64 {
        let d0 = self.transform(self.domain.0);
        let d1 = self.transform(self.domain.1);
        let span = d1 - d0;
        let ratio = if span == 0.0 || !span.is_finite() {
            0.5
        } else {
            (self.transform(value) - d0) / span
        };
        self.range.0 + ratio * (self.range.1 - self.range.0)
    }

    /// Range-to-domain mapping, the inverse of the plain projection.
    #[must_use]
    pub fn invert(&self, pixel: f64) -> f64 {
        let d0 = self.transform(self.domain.0);
        let d1 = self.transform(self.domain.1);
        let span = self.range.1 - self.range.0;
        let ratio = if span == 0.0 {
            0.5
        } else {
            (pixel - self.range.0) / span
        };
        self.untransform(d0 + ratio * (d1 - d0))
    }

    fn scale_number(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let pixel = self.project(value);
        pixel
            .is_finite()
            .then_some(pixel + (self.bandwidth_padding / 2.0) * self.total_bars_in_cluster as f64)
    }

    fn compute_ticks(&self, count: usize, integers_only: bool, has_bars: bool) -> Vec<f64> {
        let (start, end) = self.domain;
        if has_bars && self.min_interval > 0.0 && self.scale_type != ScaleType::Time {
            let interval_count = ((end - start) / self.min_interval).floor();
            let max_buckets = (count.max(1) * MAX_BUCKET_TICKS_PER_TICK) as f64;
            if interval_count.is_finite() && (0.0..=max_buckets).contains(&interval_count) {
                return (0..=interval_count as usize)
                    .map(|index| start + index as f64 * self.min_interval)
                    .collect();
            }
        }
        let ticks = match self.scale_type {
            ScaleType::Log => self.log_ticks(count),
            _ => linear_ticks(start, end, count),
        };
        if integers_only {
            ticks.into_iter().filter(|tick| tick.fract() == 0.0).collect()
        } else {
            ticks
        }
    }

    fn log_ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let first = self.transform(lo).min(self.transform(hi)).floor();
        let last = self.transform(lo).max(self.transform(hi)).ceil();
        if !first.is_finite() || !last.is_finite() || last - first > count as f64 {
            return linear_ticks(self.domain.0, self.domain.1, count);
        }
        let ticks: Vec<f64> = (first as i64..=last as i64)
            .map(|exponent| self.untransform(exponent as f64))
            .filter(|tick| *tick >= lo && *tick <= hi)
            .collect();
        if ticks.len() < 2 {
            linear_ticks(self.domain.0, self.domain.1, count)
        } else {
            ticks
        }
    }
}

impl Scale for ContinuousScale {
    fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    fn scale(&self, value: &PrimitiveValue) -> Option<f64> {
        value.as_f64().and_then(|number| self.scale_number(number))
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

    /// Resolves a pixel to the data value of the bucket under it.
    ///
    /// `data` holds the sorted numeric x values. Without bars the nearest
    /// value wins. With bars, pixels before the first value or between
    /// buckets further apart than `min_interval` resolve to a virtual bucket
    /// with `within_bandwidth == false`.
    fn invert_with_step(&self, pixel: f64, data: &[f64]) -> Option<InvertedValue> {
        let first = *data.first()?;
        let inverted = self.invert(pixel);
        if inverted.is_nan() {
            return None;
        }
        let bisect_value = if self.bandwidth == 0.0 {
            inverted + self.min_interval / 2.0
        } else {
            inverted
        };
        let left_index = data.partition_point(|value| *value < bisect_value);

        if left_index == 0 {
            if inverted < first && self.min_interval > 0.0 {
                let steps = ((first - inverted) / self.min_interval).ceil();
                return Some(InvertedValue::number(
                    first - self.min_interval * steps,
                    false,
                ));
            }
            return Some(InvertedValue::number(first, true));
        }

        let current = data[left_index - 1];
        if self.bandwidth == 0.0 {
            let value = match data.get(left_index) {
                Some(&next) if (next - inverted).abs() <= (inverted - current).abs() => next,
                _ => current,
            };
            return Some(InvertedValue::number(value, true));
        }
        if self.min_interval == 0.0 || inverted - current <= self.min_interval {
            return Some(InvertedValue::number(current, true));
        }
        let steps = ((inverted - current) / self.min_interval).floor();
        Some(InvertedValue::number(
            current + self.min_interval * steps,
            false,
        ))
    }

    fn ticks(&self) -> Vec<PrimitiveValue> {
        self.tick_values
            .iter()
            .copied()
            .map(PrimitiveValue::number)
            .collect()
    }

    fn is_single_value(&self) -> bool {
        self.is_single_value_histogram || self.domain.0 == self.domain.1
    }

    fn is_value_in_domain(&self, value: &PrimitiveValue) -> bool {
        value
            .as_f64()
            .is_some_and(|number| number >= self.domain.0 && number <= self.domain.1)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn log_domain_never_touches_zero() {
        assert_eq!(limit_log_scale_domain((0.0, 100.0), None), (1.0, 100.0));
        assert_eq!(limit_log_scale_domain((-100.0, 0.0), None), (-100.0, -1.0));
        assert_eq!(limit_log_scale_domain((-10.0, 100.0), None), (1.0, 100.0));
        assert_eq!(limit_log_scale_domain((0.2, 100.0), Some(0.5)), (0.5, 100.0));
        assert_eq!(limit_log_scale_domain((2.0, 100.0), None), (2.0, 100.0));
    }

    #[test]
    fn linear_ticks_are_round() {
        assert_eq!(linear_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(linear_ticks(0.0, 1.0, 2), vec![0.0, 0.5, 1.0]);
        assert_eq!(linear_ticks(3.0, 3.0, 5), vec![3.0]);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale = ContinuousScale::new(
            ScaleType::Linear,
            (5.0, 5.0),
            (0.0, 100.0),
            ContinuousScaleOptions::default(),
        )
        .expect("scale");
        assert_relative_eq!(
            scale.scale(&PrimitiveValue::number(5.0)).expect("value"),
            50.0
        );
        assert!(scale.is_single_value());
    }

    #[test]
    fn log_scale_maps_decades_evenly() {
        let scale = ContinuousScale::new(
            ScaleType::Log,
            (1.0, 100.0),
            (0.0, 100.0),
            ContinuousScaleOptions::default(),
        )
        .expect("scale");
        assert_relative_eq!(
            scale.scale(&PrimitiveValue::number(10.0)).expect("value"),
            50.0,
            epsilon = 1e-9
        );
        assert!(scale.scale(&PrimitiveValue::number(-1.0)).is_none());
        assert_eq!(scale.ticks().len(), 3);
    }

    #[test]
    fn text_values_do_not_scale() {
        let scale = ContinuousScale::new(
            ScaleType::Linear,
            (0.0, 1.0),
            (0.0, 100.0),
            ContinuousScaleOptions::default(),
        )
        .expect("scale");
        assert!(scale.scale(&"a".into()).is_none());
    }
}
