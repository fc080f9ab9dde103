use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    BandScale, ChartScale, ContinuousScale, ContinuousScaleOptions, DEFAULT_TICK_COUNT, Domain,
    GroupId, LogBase, Scale, ScaleType, XDomain, YDomain,
};
use crate::error::ChartResult;

/// Where histogram bars sit relative to their x value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistogramModeAlignment {
    #[default]
    Start,
    Center,
    End,
}

/// Builds x and y scales from merged domains.
///
/// Building is the expensive half of the geometry pipeline and only runs when
/// data, layout or configuration change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleBuilder {
    /// Bar slots sharing one x band; 0 is treated as 1.
    pub total_bars_in_cluster: usize,
    pub bars_padding: f64,
    pub enable_histogram_mode: bool,
    pub desired_tick_count: usize,
    pub integers_only: bool,
    pub log_base: LogBase,
    pub log_min_limit: Option<f64>,
}

impl Default for ScaleBuilder {
    fn default() -> Self {
        Self {
            total_bars_in_cluster: 1,
            bars_padding: 0.0,
            enable_histogram_mode: false,
            desired_tick_count: DEFAULT_TICK_COUNT,
            integers_only: false,
            log_base: LogBase::Common,
            log_min_limit: None,
        }
    }
}

impl ScaleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_total_bars_in_cluster(mut self, total: usize) -> Self {
        self.total_bars_in_cluster = total;
        self
    }

    #[must_use]
    pub fn with_bars_padding(mut self, bars_padding: f64) -> Self {
        self.bars_padding = bars_padding;
        self
    }

    #[must_use]
    pub fn with_histogram_mode(mut self, enabled: bool) -> Self {
        self.enable_histogram_mode = enabled;
        self
    }

    #[must_use]
    pub fn with_desired_tick_count(mut self, count: usize) -> Self {
        self.desired_tick_count = count;
        self
    }

    fn cluster_size(&self) -> usize {
        self.total_bars_in_cluster.max(1)
    }

    fn continuous_options(&self) -> ContinuousScaleOptions {
        ContinuousScaleOptions {
            total_bars_in_cluster: self.cluster_size(),
            bars_padding: self.bars_padding,
            desired_tick_count: self.desired_tick_count,
            integers_only: self.integers_only,
            log_base: self.log_base,
            log_min_limit: self.log_min_limit,
            ..ContinuousScaleOptions::default()
        }
    }

    /// Builds the x scale over `range`.
    ///
    /// Ordinal domains become band scales. Continuous domains carrying bars
    /// shorten the range by one band so the last bar stays inside it.
    pub fn build_x(&self, x_domain: &XDomain, range: (f64, f64)) -> ChartResult<ChartScale> {
        let span = (range.1 - range.0).abs();
        let cluster = self.cluster_size() as f64;
        let scale = match &x_domain.domain {
            Domain::Empty => ChartScale::Empty { range },
            Domain::Ordinal { values } => {
                let bandwidth = span / (values.len() as f64 * cluster);
                ChartScale::Band(BandScale::new(
                    values.clone(),
                    range,
                    Some(bandwidth),
                    self.bars_padding,
                )?)
            }
            Domain::Continuous { min, max } if x_domain.is_band_scale => {
                let (min, max) = (*min, *max);
                let min_interval = x_domain.min_interval;
                let is_single_value_histogram = self.enable_histogram_mode && max - min == 0.0;
                let adjusted_max = if is_single_value_histogram {
                    min + min_interval
                } else {
                    max
                };
                let interval_count = (adjusted_max - min) / min_interval;
                let offset_count = if is_single_value_histogram { 0.0 } else { 1.0 };
                let bandwidth = if interval_count.is_finite() {
                    span / (interval_count + offset_count)
                } else {
                    0.0
                };
                let range_end_offset = if is_single_value_histogram {
                    0.0
                } else {
                    bandwidth
                };
                let band_range = if range.1 < range.0 {
                    (range.0 - range_end_offset, range.1)
                } else {
                    (range.0, range.1 - range_end_offset)
                };
                ChartScale::Continuous(ContinuousScale::new(
                    x_domain.scale_type,
                    (min, adjusted_max),
                    band_range,
                    ContinuousScaleOptions {
                        bandwidth: bandwidth / cluster,
                        min_interval,
                        is_single_value_histogram,
                        ..self.continuous_options()
                    },
                )?)
            }
            Domain::Continuous { min, max } => ChartScale::Continuous(ContinuousScale::new(
                x_domain.scale_type,
                (*min, *max),
                range,
                ContinuousScaleOptions {
                    min_interval: x_domain.min_interval,
                    ..self.continuous_options()
                },
            )?),
        };
        debug!(
            scale_type = ?scale.scale_type(),
            bandwidth = scale.bandwidth(),
            bars_padding = scale.bars_padding(),
            range_start = range.0,
            range_end = range.1,
            "built x scale"
        );
        Ok(scale)
    }

    /// Builds one y scale per group. Y ranges usually run bottom-up: `(height, 0)`.
    pub fn build_y(
        &self,
        y_domains: &[YDomain],
        range: (f64, f64),
    ) -> ChartResult<IndexMap<GroupId, ChartScale>> {
        let mut scales = IndexMap::with_capacity(y_domains.len());
        for y_domain in y_domains {
            let scale = match &y_domain.domain {
                Domain::Continuous { min, max } => {
                    let scale_type = match y_domain.scale_type {
                        ScaleType::Ordinal => ScaleType::Linear,
                        other => other,
                    };
                    ChartScale::Continuous(ContinuousScale::new(
                        scale_type,
                        (*min, *max),
                        range,
                        ContinuousScaleOptions {
                            total_bars_in_cluster: 1,
                            bars_padding: 0.0,
                            ..self.continuous_options()
                        },
                    )?)
                }
                Domain::Ordinal { .. } | Domain::Empty => ChartScale::Empty { range },
            };
            scales.insert(y_domain.group_id.clone(), scale);
        }
        debug!(group_count = scales.len(), "built y scales");
        Ok(scales)
    }
}

/// Pixel shift applied to histogram bars so they start, center or end on
/// their x value. 0 outside histogram mode.
#[must_use]
pub fn compute_x_scale_offset(
    x_scale: &ChartScale,
    enable_histogram_mode: bool,
    alignment: HistogramModeAlignment,
) -> f64 {
    if !enable_histogram_mode {
        return 0.0;
    }
    let bandwidth = x_scale.bandwidth();
    let bars_padding = x_scale.bars_padding();
    let half_padding = if bars_padding < 1.0 {
        (bandwidth / (1.0 - bars_padding) - bandwidth) / 2.0
    } else {
        0.0
    };
    let start_alignment_offset = bandwidth / 2.0 + half_padding;
    match alignment {
        HistogramModeAlignment::Center => 0.0,
        HistogramModeAlignment::End => -start_alignment_offset,
        HistogramModeAlignment::Start => start_alignment_offset,
    }
}
