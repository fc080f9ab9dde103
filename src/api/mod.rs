mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod scale_coordinator;
mod validation;

pub use engine::ChartGeometryEngine;
pub use engine_config::{ChartEngineConfig, ChartSettings};
pub use engine_snapshot::EngineSnapshot;
