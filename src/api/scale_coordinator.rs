use tracing::debug;

use crate::core::{
    PrimitiveValue, ScaleBuilder, compute_x_scale_offset, count_bars_in_cluster, get_data_series,
    merge_x_domain, merge_y_domains,
};
use crate::error::ChartResult;

use super::ChartGeometryEngine;
use super::engine_core::ScaleState;

pub(super) struct ScaleCoordinator;

impl ScaleCoordinator {
    /// Recomputes series, domains and scales from the current specs and config.
    ///
    /// On error the previous scales stay in place.
    pub(super) fn rebuild(engine: &mut ChartGeometryEngine) -> ChartResult<()> {
        let config = &engine.core.config;
        let settings = &config.settings;
        let specs = &engine.core.specs;

        let series = get_data_series(specs);
        let x_domain = merge_x_domain(specs, &series.x_values, settings.x_domain.as_ref());
        let y_domains = merge_y_domains(specs, &series, &settings.y_domains);
        let bars_in_cluster = count_bars_in_cluster(&series.data_series);
        let enable_histogram_mode = settings.enable_histogram_mode && x_domain.is_band_scale;

        let builder = ScaleBuilder {
            total_bars_in_cluster: bars_in_cluster.total.max(1),
            bars_padding: settings.effective_bars_padding(),
            enable_histogram_mode,
            desired_tick_count: settings.desired_tick_count,
            integers_only: settings.integers_only,
            log_base: settings.log_base,
            log_min_limit: settings.log_min_limit,
        };
        let (primary, cross) = config.rotation.oriented_size(config.dimensions);
        let x_scale = builder.build_x(&x_domain, (0.0, primary))?;
        let y_scales = builder.build_y(&y_domains, (cross, 0.0))?;
        let x_scale_offset =
            compute_x_scale_offset(&x_scale, enable_histogram_mode, settings.histogram_alignment);

        let mut sorted_x_values: Vec<f64> = series
            .x_values
            .iter()
            .filter_map(PrimitiveValue::as_f64)
            .collect();
        sorted_x_values.sort_by(f64::total_cmp);
        sorted_x_values.dedup();

        let generation = engine.core.scales.generation + 1;
        debug!(
            generation,
            series = series.data_series.len(),
            x_values = series.x_values.len(),
            groups = y_scales.len(),
            bars_in_cluster = bars_in_cluster.total,
            rotation = config.rotation.degrees(),
            "rebuilt chart scales"
        );

        engine.core.scales = ScaleState {
            series,
            x_domain,
            y_domains,
            x_scale,
            y_scales,
            bars_in_cluster,
            sorted_x_values,
            x_scale_offset,
            generation,
        };
        Ok(())
    }
}
