pub mod band_scale;
pub mod continuous_scale;
pub mod domain;
pub mod primitives;
pub mod rotation;
pub mod scale;
pub mod scale_builder;
pub mod series;
pub mod types;
pub mod x_domain;
pub mod y_domain;

pub use band_scale::BandScale;
pub use continuous_scale::{
    ContinuousScale, ContinuousScaleOptions, DEFAULT_TICK_COUNT, LOG_MIN_ABS_DOMAIN, LogBase,
    limit_log_scale_domain, linear_ticks,
};
pub use domain::{CustomXDomain, Domain, DomainBounds, DomainRange, continuous_extent};
pub use primitives::{datetime_cell, datetime_to_unix_millis, decimal_cell, decimal_to_f64};
pub use rotation::{AxisFrame, ChartTransform, OUTSIDE_POINTER, Rotation};
pub use scale::{ChartScale, InvertedValue, Scale};
pub use scale_builder::{HistogramModeAlignment, ScaleBuilder, compute_x_scale_offset};
pub use series::{
    Accessor, BarsInCluster, DEFAULT_GROUP_ID, DataSeries, DataSeriesDatum, GroupId, ScaleType,
    SeriesCollection, SeriesSpec, SeriesType, SpecId, SplitKey, StackMode, count_bars_in_cluster,
    get_data_series, is_line_area_only,
};
pub use types::{Dimensions, Line, Point, PrimitiveValue};
pub use x_domain::{
    XDomain, XScaleKind, convert_x_scale_types, find_min_interval, get_min_interval,
    merge_x_domain,
};
pub use y_domain::{YDomain, coerce_y_scale_types, merge_y_domains};
