use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{
    DataSeries, Domain, DomainBounds, DomainRange, GroupId, PrimitiveValue, ScaleType,
    SeriesCollection, SeriesSpec, StackMode, continuous_extent,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YDomain {
    pub group_id: GroupId,
    pub scale_type: ScaleType,
    pub domain: Domain,
    /// The domain hugs the data instead of including zero.
    pub scale_to_extent: bool,
    pub is_stacked: bool,
    pub is_percentage: bool,
}

/// The y scale type shared by a group: the common type, or linear when mixed.
#[must_use]
pub fn coerce_y_scale_types(types: impl IntoIterator<Item = ScaleType>) -> ScaleType {
    let mut types = types.into_iter();
    let Some(first) = types.next() else {
        return ScaleType::Linear;
    };
    if types.all(|scale_type| scale_type == first) {
        first
    } else {
        ScaleType::Linear
    }
}

#[derive(Debug, Default)]
struct StackBucket {
    contributions: SmallVec<[f64; 4]>,
}

impl StackBucket {
    /// Positive and negative contributions grow away from zero independently.
    fn extents(&self) -> (Option<f64>, Option<f64>) {
        let mut positive = None;
        let mut negative = None;
        for &value in &self.contributions {
            if value >= 0.0 {
                *positive.get_or_insert(0.0) += value;
            } else {
                *negative.get_or_insert(0.0) += value;
            }
        }
        (positive, negative)
    }
}

fn stacked_values<'a>(series: impl Iterator<Item = &'a DataSeries>) -> Vec<f64> {
    let mut buckets: IndexMap<&PrimitiveValue, StackBucket> = IndexMap::new();
    for datum in series.flat_map(|series| series.data.iter()) {
        if let Some(y1) = datum.y1 {
            buckets.entry(&datum.x).or_default().contributions.push(y1);
        }
    }
    buckets
        .values()
        .flat_map(|bucket| {
            let (positive, negative) = bucket.extents();
            positive.into_iter().chain(negative)
        })
        .collect()
}

fn non_stacked_values<'a>(series: impl Iterator<Item = &'a DataSeries>) -> Vec<f64> {
    series
        .flat_map(|series| series.data.iter())
        .flat_map(|datum| datum.y1.into_iter().chain(datum.y0))
        .collect()
}

fn apply_custom_y_range(
    group_id: &str,
    computed: Option<(f64, f64)>,
    custom: &DomainRange,
) -> Option<(f64, f64)> {
    match (custom.bounds(), computed) {
        (DomainBounds::Complete { min, max }, _) if min > max => {
            warn!(
                group_id,
                "custom yDomain for {group_id} is invalid, min is greater than max. Custom domain is ignored."
            );
            computed
        }
        (DomainBounds::Complete { min, max }, _) => Some((min, max)),
        (DomainBounds::Lower(min), Some((_, computed_max))) if min > computed_max => {
            warn!(
                group_id,
                "custom yDomain for {group_id} is invalid, custom min is greater than computed max."
            );
            Some((min, min))
        }
        (DomainBounds::Lower(min), Some((_, computed_max))) => Some((min, computed_max)),
        (DomainBounds::Upper(max), Some((computed_min, _))) if computed_min > max => {
            warn!(
                group_id,
                "custom yDomain for {group_id} is invalid, computed min is greater than custom max."
            );
            Some((max, max))
        }
        (DomainBounds::Upper(max), Some((computed_min, _))) => Some((computed_min, max)),
        _ => computed,
    }
}

/// Computes one y domain per group, in first-seen group order.
///
/// Stacked series are summed per x value; percentage stacks always span
/// `[0, 1]`. Groups with bars or areas keep zero in the domain even when
/// fitting to the data was requested.
#[must_use]
pub fn merge_y_domains(
    specs: &[SeriesSpec],
    series: &SeriesCollection,
    custom_domains: &IndexMap<GroupId, DomainRange>,
) -> Vec<YDomain> {
    let mut groups: IndexMap<&str, Vec<&SeriesSpec>> = IndexMap::new();
    for spec in specs {
        groups.entry(spec.group_id.as_str()).or_default().push(spec);
    }

    groups
        .into_iter()
        .map(|(group_id, group_specs)| {
            let custom = custom_domains.get(group_id);
            let scale_type = coerce_y_scale_types(group_specs.iter().map(|spec| spec.y_scale_type));
            let is_stacked = group_specs.iter().any(|spec| spec.is_stacked());
            let is_percentage = group_specs
                .iter()
                .any(|spec| spec.is_stacked() && spec.stack_mode == Some(StackMode::Percentage));
            let has_zero_baseline = group_specs
                .iter()
                .any(|spec| spec.series_type.has_zero_baseline());
            let requested_fit = custom.is_some_and(|range| range.fit)
                || group_specs.iter().any(|spec| spec.y_scale_to_data_extent);
            let scale_to_extent = requested_fit && !has_zero_baseline;

            let domain = if is_percentage {
                Domain::continuous(0.0, 1.0)
            } else {
                let mut values = stacked_values(
                    series
                        .for_group(group_id)
                        .filter(|data_series| data_series.is_stacked),
                );
                values.extend(non_stacked_values(
                    series
                        .for_group(group_id)
                        .filter(|data_series| !data_series.is_stacked),
                ));
                let computed = continuous_extent(values, scale_to_extent);
                let resolved = match custom {
                    Some(range) => apply_custom_y_range(group_id, computed, range),
                    None => computed,
                };
                resolved.map_or(Domain::Empty, |(min, max)| Domain::continuous(min, max))
            };

            debug!(
                group_id,
                scale_type = ?scale_type,
                is_stacked,
                is_percentage,
                scale_to_extent,
                "merged y domain"
            );
            YDomain {
                group_id: group_id.to_owned(),
                scale_type,
                domain,
                scale_to_extent,
                is_stacked,
                is_percentage,
            }
        })
        .collect()
}
