use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    BarsInCluster, ChartTransform, Dimensions, GroupId, PrimitiveValue, Rotation, Scale, XDomain,
    YDomain,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{CrosshairMode, PointerFrame};

use super::ChartGeometryEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub dimensions: Dimensions,
    pub rotation: Rotation,
    pub crosshair_mode: CrosshairMode,
    pub chart_transform: ChartTransform,
    pub x_domain: XDomain,
    pub y_domains: IndexMap<GroupId, YDomain>,
    pub x_bandwidth: f64,
    pub x_ticks: Vec<PrimitiveValue>,
    pub bars_in_cluster: BarsInCluster,
    pub x_scale_offset: f64,
    pub scale_generation: u64,
    pub pointer: Option<PointerFrame>,
}

impl EngineSnapshot {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))
    }
}

impl ChartGeometryEngine {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let scales = &self.core.scales;
        EngineSnapshot {
            dimensions: self.core.config.dimensions,
            rotation: self.core.config.rotation,
            crosshair_mode: self.core.config.crosshair_mode,
            chart_transform: self.chart_transform(),
            x_domain: scales.x_domain.clone(),
            y_domains: scales
                .y_domains
                .iter()
                .map(|domain| (domain.group_id.clone(), domain.clone()))
                .collect(),
            x_bandwidth: scales.x_scale.bandwidth(),
            x_ticks: scales.x_scale.ticks(),
            bars_in_cluster: scales.bars_in_cluster,
            x_scale_offset: scales.x_scale_offset,
            scale_generation: scales.generation,
            pointer: self.core.last_frame.clone(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
