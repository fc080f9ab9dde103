use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    CustomXDomain, Domain, DomainBounds, DomainRange, PrimitiveValue, ScaleType, SeriesSpec,
    SeriesType, continuous_extent,
};

/// Resolved x scale type shared by every series of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XScaleKind {
    pub scale_type: ScaleType,
    /// At least one series draws bars, so x positions are bands.
    pub is_band_scale: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XDomain {
    pub scale_type: ScaleType,
    pub is_band_scale: bool,
    /// Smallest distance between consecutive x values; 0 for ordinal domains.
    pub min_interval: f64,
    pub domain: Domain,
}

impl Default for XDomain {
    fn default() -> Self {
        Self {
            scale_type: ScaleType::Linear,
            is_band_scale: false,
            min_interval: 0.0,
            domain: Domain::Empty,
        }
    }
}

/// Picks the x scale type for a set of specs.
///
/// One distinct type is used as-is, any ordinal among mixed types wins,
/// other mixes fall back to linear. `None` when there are no specs.
#[must_use]
pub fn convert_x_scale_types(specs: &[SeriesSpec]) -> Option<XScaleKind> {
    let types: IndexSet<ScaleType> = specs.iter().map(|spec| spec.x_scale_type).collect();
    let is_band_scale = specs
        .iter()
        .any(|spec| spec.series_type == SeriesType::Bar);
    let scale_type = match types.len() {
        0 => return None,
        1 => types[0],
        _ if types.contains(&ScaleType::Ordinal) => ScaleType::Ordinal,
        _ => ScaleType::Linear,
    };
    Some(XScaleKind {
        scale_type,
        is_band_scale,
    })
}

/// Smallest gap between distinct sorted values: 0 when empty, 1 for a single value.
#[must_use]
pub fn find_min_interval(values: &[f64]) -> f64 {
    match values.len() {
        0 => 0.0,
        1 => 1.0,
        _ => {
            let mut sorted = values.to_vec();
            sorted.sort_by(f64::total_cmp);
            sorted
                .windows(2)
                .map(|pair| (pair[1] - pair[0]).abs())
                .fold(f64::INFINITY, f64::min)
        }
    }
}

/// Applies a custom min interval, falling back to the computed one when the
/// custom value would make bars overlap or is negative.
#[must_use]
pub fn get_min_interval(computed: f64, values_len: usize, custom: Option<f64>) -> f64 {
    let Some(custom) = custom.filter(|value| value.is_finite()) else {
        return computed;
    };
    if values_len > 1 && custom > computed {
        warn!(
            "custom xDomain is invalid, custom minInterval is greater than computed minInterval. Using computed minInterval."
        );
        return computed;
    }
    if custom < 0.0 {
        warn!(
            "custom xDomain is invalid, custom minInterval is less than 0. Using computed minInterval."
        );
        return computed;
    }
    custom
}

fn apply_custom_x_range(computed: (f64, f64), custom: &DomainRange) -> (f64, f64) {
    let (computed_min, computed_max) = computed;
    match custom.bounds() {
        DomainBounds::Complete { min, max } if min > max => {
            warn!("custom xDomain is invalid, min is greater than max. Custom domain is ignored.");
            computed
        }
        DomainBounds::Complete { min, max } => (min, max),
        DomainBounds::Lower(min) if min > computed_max => {
            warn!(
                "custom xDomain is invalid, custom min is greater than computed max. Custom domain is ignored."
            );
            computed
        }
        DomainBounds::Lower(min) => (min, computed_max),
        DomainBounds::Upper(max) if computed_min > max => {
            warn!(
                "custom xDomain is invalid, computed min is greater than custom max. Custom domain is ignored."
            );
            computed
        }
        DomainBounds::Upper(max) => (computed_min, max),
        DomainBounds::Unbounded => computed,
    }
}

fn merge_ordinal(
    kind: XScaleKind,
    x_values: &IndexSet<PrimitiveValue>,
    custom: Option<&CustomXDomain>,
) -> XDomain {
    let values = match custom {
        Some(CustomXDomain::Ordinal(custom_values)) => custom_values.clone(),
        Some(CustomXDomain::Range(_)) => {
            warn!(
                "xDomain for ordinal scale should be an array of values, not a DomainRange object. xDomain is ignored."
            );
            x_values.iter().cloned().collect()
        }
        None => x_values.iter().cloned().collect(),
    };
    XDomain {
        scale_type: ScaleType::Ordinal,
        is_band_scale: kind.is_band_scale,
        min_interval: 0.0,
        domain: Domain::ordinal(values),
    }
}

/// Merges the x values of every series into the chart x domain.
#[must_use]
pub fn merge_x_domain(
    specs: &[SeriesSpec],
    x_values: &IndexSet<PrimitiveValue>,
    custom: Option<&CustomXDomain>,
) -> XDomain {
    let Some(kind) = convert_x_scale_types(specs) else {
        return XDomain::default();
    };
    if kind.scale_type == ScaleType::Ordinal {
        return merge_ordinal(kind, x_values, custom);
    }

    let numbers: Option<Vec<f64>> = x_values.iter().map(PrimitiveValue::as_f64).collect();
    let Some(numbers) = numbers else {
        warn!(
            scale_type = ?kind.scale_type,
            "x values are not all numbers, falling back to an ordinal x scale"
        );
        return merge_ordinal(kind, x_values, None);
    };

    let mut custom_min_interval = None;
    let mut domain = match continuous_extent(numbers.iter().copied(), true) {
        Some(extent) => {
            let extent = match custom {
                Some(CustomXDomain::Ordinal(_)) => {
                    warn!(
                        "xDomain for continuous scale should be a DomainRange object, not an array"
                    );
                    extent
                }
                Some(CustomXDomain::Range(range)) => {
                    custom_min_interval = range.min_interval;
                    apply_custom_x_range(extent, range)
                }
                None => extent,
            };
            Domain::continuous(extent.0, extent.1)
        }
        None => Domain::Empty,
    };
    if let (Domain::Empty, Some(CustomXDomain::Range(range))) = (&domain, custom) {
        if let DomainBounds::Complete { min, max } = range.bounds() {
            if min <= max {
                domain = Domain::continuous(min, max);
            }
        }
        custom_min_interval = range.min_interval;
    }

    let computed_min_interval = find_min_interval(&numbers);
    let min_interval = get_min_interval(computed_min_interval, numbers.len(), custom_min_interval);
    debug!(
        scale_type = ?kind.scale_type,
        is_band_scale = kind.is_band_scale,
        value_count = numbers.len(),
        min_interval,
        "merged x domain"
    );
    XDomain {
        scale_type: kind.scale_type,
        is_band_scale: kind.is_band_scale,
        min_interval,
        domain,
    }
}
