use serde::{Deserialize, Serialize};

use crate::core::PrimitiveValue;

/// Input set of a scale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Domain {
    /// No usable value: every lookup on the derived scale misses.
    #[default]
    Empty,
    /// Distinct categories in first-seen order.
    Ordinal { values: Vec<PrimitiveValue> },
    Continuous { min: f64, max: f64 },
}

impl Domain {
    #[must_use]
    pub fn continuous(min: f64, max: f64) -> Self {
        Self::Continuous { min, max }
    }

    #[must_use]
    pub fn ordinal(values: Vec<PrimitiveValue>) -> Self {
        if values.is_empty() {
            Self::Empty
        } else {
            Self::Ordinal { values }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn as_continuous(&self) -> Option<(f64, f64)> {
        match self {
            Self::Continuous { min, max } => Some((*min, *max)),
            _ => None,
        }
    }

    #[must_use]
    pub fn ordinal_values(&self) -> Option<&[PrimitiveValue]> {
        match self {
            Self::Ordinal { values } => Some(values),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, value: &PrimitiveValue) -> bool {
        match self {
            Self::Empty => false,
            Self::Ordinal { values } => values.contains(value),
            Self::Continuous { min, max } => value
                .as_f64()
                .is_some_and(|number| number >= *min && number <= *max),
        }
    }
}

/// User-provided bounds for a continuous domain.
///
/// `min_interval` only applies to x domains and `fit` only to y domains.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub min_interval: Option<f64>,
    #[serde(default)]
    pub fit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainBounds {
    Complete { min: f64, max: f64 },
    Lower(f64),
    Upper(f64),
    Unbounded,
}

impl DomainRange {
    #[must_use]
    pub fn complete(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn lower(min: f64) -> Self {
        Self {
            min: Some(min),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn upper(max: f64) -> Self {
        Self {
            max: Some(max),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_min_interval(mut self, min_interval: f64) -> Self {
        self.min_interval = Some(min_interval);
        self
    }

    #[must_use]
    pub fn with_fit(mut self, fit: bool) -> Self {
        self.fit = fit;
        self
    }

    /// Classifies the finite bounds that were provided.
    #[must_use]
    pub fn bounds(&self) -> DomainBounds {
        let min = self.min.filter(|value| value.is_finite());
        let max = self.max.filter(|value| value.is_finite());
        match (min, max) {
            (Some(min), Some(max)) => DomainBounds::Complete { min, max },
            (Some(min), None) => DomainBounds::Lower(min),
            (None, Some(max)) => DomainBounds::Upper(max),
            (None, None) => DomainBounds::Unbounded,
        }
    }
}

/// Custom x domain: a category list for ordinal scales or bounds for continuous ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomXDomain {
    Ordinal(Vec<PrimitiveValue>),
    Range(DomainRange),
}

/// `[min, max]` of `values`. Unless `scale_to_extent`, the extent is widened to
/// include zero.
#[must_use]
pub fn continuous_extent(
    values: impl IntoIterator<Item = f64>,
    scale_to_extent: bool,
) -> Option<(f64, f64)> {
    let (min, max) = values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })?;
    if scale_to_extent {
        Some((min, max))
    } else {
        Some((min.min(0.0), max.max(0.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_includes_zero_unless_fitted() {
        assert_eq!(continuous_extent([2.0, 12.0], false), Some((0.0, 12.0)));
        assert_eq!(continuous_extent([2.0, 12.0], true), Some((2.0, 12.0)));
        assert_eq!(continuous_extent([-4.0, -1.0], false), Some((-4.0, 0.0)));
        assert_eq!(continuous_extent([f64::NAN], false), None);
    }

    #[test]
    fn custom_x_domain_deserializes_both_shapes() {
        let list: CustomXDomain = serde_json::from_str(r#"[0, "a"]"#).expect("list");
        assert_eq!(
            list,
            CustomXDomain::Ordinal(vec![PrimitiveValue::number(0.0), "a".into()])
        );
        let range: CustomXDomain =
            serde_json::from_str(r#"{"min": 1, "minInterval": 2}"#).expect("range");
        assert_eq!(
            range,
            CustomXDomain::Range(DomainRange::lower(1.0).with_min_interval(2.0))
        );
    }

    #[test]
    fn bounds_ignore_non_finite_values() {
        let range = DomainRange {
            min: Some(f64::NAN),
            max: Some(3.0),
            ..DomainRange::default()
        };
        assert_eq!(range.bounds(), DomainBounds::Upper(3.0));
    }
}
