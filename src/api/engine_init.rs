use crate::error::ChartResult;

use super::engine_core::{EngineCore, ScaleState};
use super::scale_coordinator::ScaleCoordinator;
use super::validation::{validate_dimensions, validate_settings};
use super::{ChartEngineConfig, ChartGeometryEngine};

impl ChartGeometryEngine {
    /// Creates an engine without series. Scales are built immediately so
    /// pointer events are answered from the first call.
    pub fn new(config: ChartEngineConfig) -> ChartResult<Self> {
        let dimensions = validate_dimensions(config.dimensions)?;
        validate_settings(&config.settings)?;

        let mut engine = Self {
            core: EngineCore {
                config: ChartEngineConfig {
                    dimensions,
                    ..config
                },
                specs: Vec::new(),
                scales: ScaleState::empty(),
                last_frame: None,
            },
        };
        ScaleCoordinator::rebuild(&mut engine)?;
        Ok(engine)
    }
}
