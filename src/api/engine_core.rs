use indexmap::IndexMap;

use crate::core::{
    BarsInCluster, ChartScale, GroupId, SeriesCollection, SeriesSpec, XDomain, YDomain,
};
use crate::interaction::PointerFrame;

use super::ChartEngineConfig;

/// Everything derived from data, layout and configuration.
///
/// Rebuilt as a whole by the scale coordinator; pointer events only read it.
#[derive(Debug, Clone)]
pub(super) struct ScaleState {
    pub(super) series: SeriesCollection,
    pub(super) x_domain: XDomain,
    pub(super) y_domains: Vec<YDomain>,
    pub(super) x_scale: ChartScale,
    pub(super) y_scales: IndexMap<GroupId, ChartScale>,
    pub(super) bars_in_cluster: BarsInCluster,
    /// Sorted numeric x values used to snap on continuous x scales.
    pub(super) sorted_x_values: Vec<f64>,
    pub(super) x_scale_offset: f64,
    pub(super) generation: u64,
}

impl ScaleState {
    pub(super) fn empty() -> Self {
        Self {
            series: SeriesCollection::default(),
            x_domain: XDomain::default(),
            y_domains: Vec::new(),
            x_scale: ChartScale::Empty { range: (0.0, 0.0) },
            y_scales: IndexMap::new(),
            bars_in_cluster: BarsInCluster::default(),
            sorted_x_values: Vec::new(),
            x_scale_offset: 0.0,
            generation: 0,
        }
    }
}

/// Internal engine core state used by the public facade (`ChartGeometryEngine`).
#[derive(Debug, Clone)]
pub(super) struct EngineCore {
    pub(super) config: ChartEngineConfig,
    pub(super) specs: Vec<SeriesSpec>,
    pub(super) scales: ScaleState,
    pub(super) last_frame: Option<PointerFrame>,
}
