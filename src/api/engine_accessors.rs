use indexmap::IndexMap;

use crate::core::{
    BarsInCluster, ChartScale, ChartTransform, DataSeries, Dimensions, GroupId, Rotation,
    SeriesSpec, XDomain, YDomain,
};

use super::{ChartEngineConfig, ChartGeometryEngine, ChartSettings};

impl ChartGeometryEngine {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.core.config
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.core.config.dimensions
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.core.config.rotation
    }

    #[must_use]
    pub fn settings(&self) -> &ChartSettings {
        &self.core.config.settings
    }

    #[must_use]
    pub fn series_specs(&self) -> &[SeriesSpec] {
        &self.core.specs
    }

    #[must_use]
    pub fn data_series(&self) -> &[DataSeries] {
        &self.core.scales.series.data_series
    }

    #[must_use]
    pub fn x_domain(&self) -> &XDomain {
        &self.core.scales.x_domain
    }

    #[must_use]
    pub fn y_domains(&self) -> &[YDomain] {
        &self.core.scales.y_domains
    }

    #[must_use]
    pub fn y_domain(&self, group_id: &str) -> Option<&YDomain> {
        self.core
            .scales
            .y_domains
            .iter()
            .find(|domain| domain.group_id == group_id)
    }

    #[must_use]
    pub fn x_scale(&self) -> &ChartScale {
        &self.core.scales.x_scale
    }

    #[must_use]
    pub fn y_scale(&self, group_id: &str) -> Option<&ChartScale> {
        self.core.scales.y_scales.get(group_id)
    }

    #[must_use]
    pub fn y_scales(&self) -> &IndexMap<GroupId, ChartScale> {
        &self.core.scales.y_scales
    }

    #[must_use]
    pub fn bars_in_cluster(&self) -> BarsInCluster {
        self.core.scales.bars_in_cluster
    }

    /// Histogram alignment shift in pixels; 0 outside histogram mode.
    #[must_use]
    pub fn x_scale_offset(&self) -> f64 {
        self.core.scales.x_scale_offset
    }

    /// Incremented on every scale rebuild.
    #[must_use]
    pub fn scale_generation(&self) -> u64 {
        self.core.scales.generation
    }

    #[must_use]
    pub fn chart_transform(&self) -> ChartTransform {
        self.core
            .config
            .rotation
            .chart_transform(self.core.config.dimensions)
    }
}
