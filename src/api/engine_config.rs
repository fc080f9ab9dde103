use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    CustomXDomain, DEFAULT_TICK_COUNT, Dimensions, DomainRange, GroupId, HistogramModeAlignment,
    LogBase, Rotation,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{CrosshairMode, DEFAULT_TOOLTIP_PADDING};

/// Chart-wide settings that shape domains and scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSettings {
    #[serde(default)]
    pub x_domain: Option<CustomXDomain>,
    /// Custom y bounds keyed by series group.
    #[serde(default)]
    pub y_domains: IndexMap<GroupId, DomainRange>,
    #[serde(default = "default_bars_padding")]
    pub bars_padding: f64,
    /// Replaces `bars_padding` while histogram mode is enabled.
    #[serde(default = "default_histogram_padding")]
    pub histogram_padding: f64,
    #[serde(default)]
    pub enable_histogram_mode: bool,
    #[serde(default)]
    pub histogram_alignment: HistogramModeAlignment,
    #[serde(default = "default_tooltip_padding")]
    pub tooltip_padding: f64,
    #[serde(default = "default_desired_tick_count")]
    pub desired_tick_count: usize,
    #[serde(default)]
    pub integers_only: bool,
    #[serde(default)]
    pub log_base: LogBase,
    #[serde(default)]
    pub log_min_limit: Option<f64>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            x_domain: None,
            y_domains: IndexMap::new(),
            bars_padding: default_bars_padding(),
            histogram_padding: default_histogram_padding(),
            enable_histogram_mode: false,
            histogram_alignment: HistogramModeAlignment::Start,
            tooltip_padding: default_tooltip_padding(),
            desired_tick_count: default_desired_tick_count(),
            integers_only: false,
            log_base: LogBase::Common,
            log_min_limit: None,
        }
    }
}

impl ChartSettings {
    #[must_use]
    pub fn with_x_domain(mut self, domain: CustomXDomain) -> Self {
        self.x_domain = Some(domain);
        self
    }

    #[must_use]
    pub fn with_y_domain(mut self, group_id: impl Into<GroupId>, range: DomainRange) -> Self {
        self.y_domains.insert(group_id.into(), range);
        self
    }

    #[must_use]
    pub fn with_bars_padding(mut self, bars_padding: f64) -> Self {
        self.bars_padding = bars_padding;
        self
    }

    #[must_use]
    pub fn with_histogram_mode(mut self, alignment: HistogramModeAlignment) -> Self {
        self.enable_histogram_mode = true;
        self.histogram_alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_tooltip_padding(mut self, padding: f64) -> Self {
        self.tooltip_padding = padding;
        self
    }

    #[must_use]
    pub fn with_desired_tick_count(mut self, count: usize) -> Self {
        self.desired_tick_count = count;
        self
    }

    /// Padding actually applied between bars.
    #[must_use]
    pub fn effective_bars_padding(&self) -> f64 {
        if self.enable_histogram_mode {
            self.histogram_padding
        } else {
            self.bars_padding
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist and reload a chart setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEngineConfig {
    pub dimensions: Dimensions,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub crosshair_mode: CrosshairMode,
    #[serde(default)]
    pub settings: ChartSettings,
}

impl ChartEngineConfig {
    /// Creates a config for a plotting area of `dimensions` with default settings.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            rotation: Rotation::Deg0,
            crosshair_mode: CrosshairMode::Magnet,
            settings: ChartSettings::default(),
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_crosshair_mode(mut self, mode: CrosshairMode) -> Self {
        self.crosshair_mode = mode;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: ChartSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_bars_padding() -> f64 {
    0.25
}

fn default_histogram_padding() -> f64 {
    0.05
}

fn default_tooltip_padding() -> f64 {
    DEFAULT_TOOLTIP_PADDING
}

fn default_desired_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}
