use crate::core::{Dimensions, Rotation, SeriesSpec};
use crate::error::ChartResult;

use super::scale_coordinator::ScaleCoordinator;
use super::validation::{validate_dimensions, validate_series, validate_settings};
use super::{ChartSettings, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `ChartGeometryEngine` owns the series specs, keeps domains and scales
/// cached, and answers pointer events against those cached scales. Every
/// setter that changes data, layout or settings rebuilds the scales once;
/// pointer events never do.
#[derive(Debug, Clone)]
pub struct ChartGeometryEngine {
    pub(super) core: EngineCore,
}

impl ChartGeometryEngine {
    /// Replaces every series and rebuilds domains and scales.
    pub fn set_series(&mut self, specs: Vec<SeriesSpec>) -> ChartResult<()> {
        validate_series(&specs)?;
        self.core.specs = specs;
        self.rebuild()
    }

    /// Replaces every series from a JSON array of series specs.
    pub fn set_series_json(&mut self, input: &str) -> ChartResult<()> {
        let specs: Vec<SeriesSpec> = serde_json::from_str(input)?;
        self.set_series(specs)
    }

    /// Moves or resizes the plotting area.
    pub fn set_dimensions(&mut self, dimensions: Dimensions) -> ChartResult<()> {
        let dimensions = validate_dimensions(dimensions)?;
        if dimensions == self.core.config.dimensions {
            return Ok(());
        }
        self.core.config.dimensions = dimensions;
        self.rebuild()
    }

    pub fn set_rotation(&mut self, rotation: Rotation) -> ChartResult<()> {
        if rotation == self.core.config.rotation {
            return Ok(());
        }
        self.core.config.rotation = rotation;
        self.rebuild()
    }

    pub fn set_settings(&mut self, settings: ChartSettings) -> ChartResult<()> {
        validate_settings(&settings)?;
        if settings == self.core.config.settings {
            return Ok(());
        }
        self.core.config.settings = settings;
        self.rebuild()
    }

    /// Forces a rebuild, e.g. after the host mutated data in place.
    pub fn refresh(&mut self) -> ChartResult<()> {
        self.rebuild()
    }

    fn rebuild(&mut self) -> ChartResult<()> {
        // A cached frame was computed against the old scales.
        self.core.last_frame = None;
        ScaleCoordinator::rebuild(self)
    }
}
