//! xy-chart-engine: coordinate geometry and pointer interaction for XY charts.
//!
//! The crate is split into a pure scale/domain core (`core`), per-event
//! pointer geometry (`interaction`) and a small caching facade (`api`) that
//! keeps scale construction separate from pointer handling.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartEngineConfig, ChartGeometryEngine};
pub use error::{ChartError, ChartResult};
