use indexmap::IndexSet;

use crate::core::{Dimensions, SeriesSpec};
use crate::error::{ChartError, ChartResult};

use super::ChartSettings;

pub(super) fn validate_dimensions(dimensions: Dimensions) -> ChartResult<Dimensions> {
    dimensions.validate()
}

pub(super) fn validate_settings(settings: &ChartSettings) -> ChartResult<()> {
    for (name, padding) in [
        ("bars padding", settings.bars_padding),
        ("histogram padding", settings.histogram_padding),
    ] {
        if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and within [0, 1]"
            )));
        }
    }
    if !settings.tooltip_padding.is_finite() || settings.tooltip_padding < 0.0 {
        return Err(ChartError::InvalidConfig(
            "tooltip padding must be finite and >= 0".to_owned(),
        ));
    }
    if settings.desired_tick_count == 0 {
        return Err(ChartError::InvalidConfig(
            "desired tick count must be > 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_series(specs: &[SeriesSpec]) -> ChartResult<()> {
    let mut ids = IndexSet::with_capacity(specs.len());
    for spec in specs {
        if spec.id.is_empty() {
            return Err(ChartError::InvalidData("series id must not be empty".to_owned()));
        }
        if !ids.insert(spec.id.as_str()) {
            return Err(ChartError::InvalidData(format!(
                "duplicate series id: {}",
                spec.id
            )));
        }
        if spec.y_accessors.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "series {} must declare at least one y accessor",
                spec.id
            )));
        }
    }
    Ok(())
}
