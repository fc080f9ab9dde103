use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use crate::core::PrimitiveValue;

pub type SpecId = String;
pub type GroupId = String;

/// Group used by series that do not declare one.
pub const DEFAULT_GROUP_ID: &str = "__global__";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Bar,
    Line,
    Area,
}

impl SeriesType {
    /// Bars and areas are drawn from a zero baseline, so their y domain keeps 0.
    #[must_use]
    pub fn has_zero_baseline(self) -> bool {
        matches!(self, Self::Bar | Self::Area)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    #[default]
    Linear,
    Ordinal,
    Time,
    Log,
}

impl ScaleType {
    #[must_use]
    pub fn is_continuous(self) -> bool {
        !matches!(self, Self::Ordinal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackMode {
    /// Every x bucket is normalized to sum to 1.
    Percentage,
}

/// Reads a cell from a data row: `Key` for object rows, `Index` for array rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Accessor {
    Index(usize),
    Key(String),
}

impl Accessor {
    #[must_use]
    pub fn read<'a>(&self, row: &'a Value) -> Option<&'a Value> {
        let cell = match self {
            Self::Index(index) => row.as_array()?.get(*index)?,
            Self::Key(key) => row.as_object()?.get(key)?,
        };
        (!cell.is_null()).then_some(cell)
    }
}

impl From<&str> for Accessor {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<usize> for Accessor {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

fn default_group_id() -> GroupId {
    DEFAULT_GROUP_ID.to_owned()
}

fn default_x_accessor() -> Accessor {
    Accessor::Key("x".to_owned())
}

fn default_y_accessors() -> Vec<Accessor> {
    vec![Accessor::Key("y".to_owned())]
}

/// A plotted series as authored by the chart layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSpec {
    pub id: SpecId,
    #[serde(default = "default_group_id")]
    pub group_id: GroupId,
    pub series_type: SeriesType,
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default = "default_x_accessor")]
    pub x_accessor: Accessor,
    #[serde(default = "default_y_accessors")]
    pub y_accessors: Vec<Accessor>,
    #[serde(default)]
    pub y0_accessors: Vec<Accessor>,
    #[serde(default)]
    pub split_series_accessors: Vec<Accessor>,
    #[serde(default)]
    pub stack_accessors: Vec<Accessor>,
    #[serde(default)]
    pub stack_mode: Option<StackMode>,
    #[serde(default)]
    pub x_scale_type: ScaleType,
    #[serde(default)]
    pub y_scale_type: ScaleType,
    #[serde(default)]
    pub y_scale_to_data_extent: bool,
}

impl SeriesSpec {
    /// Creates a spec reading `x`/`y` keys on linear scales in the default group.
    #[must_use]
    pub fn new(id: impl Into<SpecId>, series_type: SeriesType, data: Vec<Value>) -> Self {
        Self {
            id: id.into(),
            group_id: default_group_id(),
            series_type,
            data,
            x_accessor: default_x_accessor(),
            y_accessors: default_y_accessors(),
            y0_accessors: Vec::new(),
            split_series_accessors: Vec::new(),
            stack_accessors: Vec::new(),
            stack_mode: None,
            x_scale_type: ScaleType::Linear,
            y_scale_type: ScaleType::Linear,
            y_scale_to_data_extent: false,
        }
    }

    #[must_use]
    pub fn bar(id: impl Into<SpecId>, data: Vec<Value>) -> Self {
        Self::new(id, SeriesType::Bar, data)
    }

    #[must_use]
    pub fn line(id: impl Into<SpecId>, data: Vec<Value>) -> Self {
        Self::new(id, SeriesType::Line, data)
    }

    #[must_use]
    pub fn area(id: impl Into<SpecId>, data: Vec<Value>) -> Self {
        Self::new(id, SeriesType::Area, data)
    }

    #[must_use]
    pub fn with_group(mut self, group_id: impl Into<GroupId>) -> Self {
        self.group_id = group_id.into();
        self
    }

    #[must_use]
    pub fn with_accessors(mut self, x: impl Into<Accessor>, y: impl Into<Accessor>) -> Self {
        self.x_accessor = x.into();
        self.y_accessors = vec![y.into()];
        self
    }

    #[must_use]
    pub fn with_y_accessors(mut self, accessors: Vec<Accessor>) -> Self {
        self.y_accessors = accessors;
        self
    }

    #[must_use]
    pub fn with_y0_accessors(mut self, accessors: Vec<Accessor>) -> Self {
        self.y0_accessors = accessors;
        self
    }

    #[must_use]
    pub fn with_split_accessors(mut self, accessors: Vec<Accessor>) -> Self {
        self.split_series_accessors = accessors;
        self
    }

    #[must_use]
    pub fn stacked_by(mut self, accessors: Vec<Accessor>) -> Self {
        self.stack_accessors = accessors;
        self
    }

    #[must_use]
    pub fn with_stack_mode(mut self, mode: StackMode) -> Self {
        self.stack_mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_scale_types(mut self, x: ScaleType, y: ScaleType) -> Self {
        self.x_scale_type = x;
        self.y_scale_type = y;
        self
    }

    #[must_use]
    pub fn scaled_to_data_extent(mut self, fit: bool) -> Self {
        self.y_scale_to_data_extent = fit;
        self
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        !self.stack_accessors.is_empty()
    }
}

/// One extracted sample. `y1`/`y0` are `None` when the cell is missing or not a
/// finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeriesDatum {
    pub x: PrimitiveValue,
    pub y1: Option<f64>,
    pub y0: Option<f64>,
}

pub type SplitKey = SmallVec<[Option<PrimitiveValue>; 2]>;

/// Samples of one `(spec, split key, y accessor)` combination.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    pub spec_id: SpecId,
    pub group_id: GroupId,
    pub series_type: SeriesType,
    pub is_stacked: bool,
    pub split_key: SplitKey,
    pub y_accessor: Accessor,
    pub data: Vec<DataSeriesDatum>,
}

/// Every data series of a chart plus the distinct x values in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesCollection {
    pub data_series: Vec<DataSeries>,
    pub x_values: IndexSet<PrimitiveValue>,
}

impl SeriesCollection {
    #[must_use]
    pub fn for_group<'a>(&'a self, group_id: &'a str) -> impl Iterator<Item = &'a DataSeries> {
        self.data_series
            .iter()
            .filter(move |series| series.group_id == group_id)
    }
}

fn finite_number(cell: Option<&Value>) -> Option<f64> {
    cell.and_then(Value::as_f64).filter(|value| value.is_finite())
}

fn extract_spec(spec: &SeriesSpec) -> (Vec<DataSeries>, Vec<PrimitiveValue>) {
    let mut series: IndexMap<(SplitKey, usize), DataSeries> = IndexMap::new();
    let mut x_values = Vec::with_capacity(spec.data.len());

    for row in &spec.data {
        let Some(x) = spec
            .x_accessor
            .read(row)
            .and_then(PrimitiveValue::from_json)
        else {
            continue;
        };
        x_values.push(x.clone());

        let split_key: SplitKey = spec
            .split_series_accessors
            .iter()
            .map(|accessor| accessor.read(row).and_then(PrimitiveValue::from_json))
            .collect();

        for (index, y_accessor) in spec.y_accessors.iter().enumerate() {
            let y1 = finite_number(y_accessor.read(row));
            let y0 = spec
                .y0_accessors
                .get(index)
                .and_then(|accessor| finite_number(accessor.read(row)));
            series
                .entry((split_key.clone(), index))
                .or_insert_with(|| DataSeries {
                    spec_id: spec.id.clone(),
                    group_id: spec.group_id.clone(),
                    series_type: spec.series_type,
                    is_stacked: spec.is_stacked(),
                    split_key: split_key.clone(),
                    y_accessor: y_accessor.clone(),
                    data: Vec::new(),
                })
                .data
                .push(DataSeriesDatum {
                    x: x.clone(),
                    y1,
                    y0,
                });
        }
    }

    (series.into_values().collect(), x_values)
}

/// Splits every spec into data series and collects the chart's x values.
#[must_use]
pub fn get_data_series(specs: &[SeriesSpec]) -> SeriesCollection {
    #[cfg(feature = "parallel-domains")]
    let extracted: Vec<_> = {
        use rayon::prelude::*;
        specs.par_iter().map(extract_spec).collect()
    };
    #[cfg(not(feature = "parallel-domains"))]
    let extracted: Vec<_> = specs.iter().map(extract_spec).collect();

    let mut collection = SeriesCollection::default();
    for (series, x_values) in extracted {
        collection.data_series.extend(series);
        collection.x_values.extend(x_values);
    }
    collection
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BarsInCluster {
    pub stacked: usize,
    pub non_stacked: usize,
    pub total: usize,
}

/// Counts the bar slots that share one x band.
///
/// Every non-stacked bar series takes its own slot; all stacked bars of a group
/// share one slot. Lines and areas align with the x value and take no slot.
#[must_use]
pub fn count_bars_in_cluster(data_series: &[DataSeries]) -> BarsInCluster {
    let mut stacked_groups: IndexSet<&str> = IndexSet::new();
    let mut non_stacked = 0;
    for series in data_series
        .iter()
        .filter(|series| series.series_type == SeriesType::Bar)
    {
        if series.is_stacked {
            stacked_groups.insert(series.group_id.as_str());
        } else {
            non_stacked += 1;
        }
    }
    BarsInCluster {
        stacked: stacked_groups.len(),
        non_stacked,
        total: stacked_groups.len() + non_stacked,
    }
}

/// `true` when no spec draws bars, so the x scale never needs bands.
#[must_use]
pub fn is_line_area_only(specs: &[SeriesSpec]) -> bool {
    !specs
        .iter()
        .any(|spec| spec.series_type == SeriesType::Bar)
}
