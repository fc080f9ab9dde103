use approx::assert_relative_eq;
use serde_json::json;
use xy_chart::core::{
    ChartScale, Dimensions, InvertedValue, Line, OUTSIDE_POINTER, Point, PrimitiveValue, Rotation,
    Scale, ScaleBuilder, ScaleType, SeriesSpec, get_data_series, merge_x_domain,
};
use xy_chart::interaction::{
    CursorBandPosition, get_cursor_band_position, get_cursor_line_position,
};

const CHART: Dimensions = Dimensions {
    top: 0.0,
    left: 0.0,
    width: 120.0,
    height: 100.0,
};

fn build_x_scale(specs: &[SeriesSpec], length: f64, total_bars: usize) -> ChartScale {
    let series = get_data_series(specs);
    let x_domain = merge_x_domain(specs, &series.x_values, None);
    ScaleBuilder::new()
        .with_total_bars_in_cluster(total_bars)
        .build_x(&x_domain, (0.0, length))
        .expect("x scale")
}

fn ordinal_bar_scale(categories: &[&str], length: f64) -> ChartScale {
    let data = categories
        .iter()
        .map(|x| json!({ "x": x, "y": 1 }))
        .collect();
    let specs = [SeriesSpec::bar("bars", data)
        .with_scale_types(ScaleType::Ordinal, ScaleType::Linear)];
    build_x_scale(&specs, length, 1)
}

fn line_scale() -> ChartScale {
    let data = [0, 1, 2].iter().map(|x| json!({ "x": x, "y": 1 })).collect();
    build_x_scale(&[SeriesSpec::line("line", data)], 120.0, 1)
}

fn category(value: &str) -> InvertedValue {
    InvertedValue {
        value: value.into(),
        within_bandwidth: true,
    }
}

fn assert_band(band: CursorBandPosition, top: f64, left: f64, width: f64, height: f64) {
    assert!(band.visible, "band should be visible: {band:?}");
    assert_relative_eq!(band.top, top, epsilon = 1e-9);
    assert_relative_eq!(band.left, left, epsilon = 1e-9);
    assert_relative_eq!(band.width, width, epsilon = 1e-9);
    assert_relative_eq!(band.height, height, epsilon = 1e-9);
}

#[test]
fn ordinal_bar_band_snaps_to_category() {
    let x_scale = ordinal_bar_scale(&["a", "b", "c"], 120.0);
    let cursor = Point::new(50.0, 10.0);
    let value = x_scale.invert_with_step(cursor.x, &[]).expect("value");
    assert_eq!(value.value, PrimitiveValue::from("b"));

    let band = get_cursor_band_position(
        Rotation::Deg0,
        CHART,
        cursor,
        &value,
        true,
        &x_scale,
        Some(1),
    );
    assert_band(band, 0.0, 40.0, 40.0, 100.0);
}

#[test]
fn mirrored_rotation_places_band_from_the_far_edge() {
    let x_scale = ordinal_bar_scale(&["a", "b", "c"], 120.0);
    let band = get_cursor_band_position(
        Rotation::Deg180,
        CHART,
        Point::new(10.0, 10.0),
        &category("a"),
        true,
        &x_scale,
        Some(1),
    );
    assert_band(band, 0.0, 80.0, 40.0, 100.0);
}

#[test]
fn vertical_rotations_band_along_the_height() {
    let x_scale = ordinal_bar_scale(&["a", "b"], 100.0);
    let cursor = Point::new(10.0, 10.0);

    let band = get_cursor_band_position(
        Rotation::Deg90,
        CHART,
        cursor,
        &category("a"),
        true,
        &x_scale,
        Some(1),
    );
    assert_band(band, 0.0, 0.0, 120.0, 50.0);

    let band = get_cursor_band_position(
        Rotation::Deg270,
        CHART,
        cursor,
        &category("a"),
        true,
        &x_scale,
        Some(1),
    );
    assert_band(band, 50.0, 0.0, 120.0, 50.0);
}

#[test]
fn line_chart_band_is_a_hairline() {
    let x_scale = line_scale();
    let band = get_cursor_band_position(
        Rotation::Deg0,
        CHART,
        Point::new(58.0, 10.0),
        &InvertedValue::number(1.0, true),
        true,
        &x_scale,
        None,
    );
    assert_band(band, 0.0, 60.0, 1.0, 100.0);
}

#[test]
fn hairline_at_the_far_edge_stays_inside() {
    let x_scale = line_scale();

    let mirrored_first = get_cursor_band_position(
        Rotation::Deg180,
        CHART,
        Point::new(1.0, 10.0),
        &InvertedValue::number(0.0, true),
        true,
        &x_scale,
        None,
    );
    assert_band(mirrored_first, 0.0, 119.0, 1.0, 100.0);

    let last = get_cursor_band_position(
        Rotation::Deg0,
        CHART,
        Point::new(119.0, 10.0),
        &InvertedValue::number(2.0, true),
        true,
        &x_scale,
        Some(0),
    );
    assert_band(last, 0.0, 119.0, 1.0, 100.0);
}

#[test]
fn normal_mode_follows_the_cursor() {
    let x_scale = line_scale();
    let band = get_cursor_band_position(
        Rotation::Deg0,
        CHART,
        Point::new(33.0, 10.0),
        &InvertedValue::number(1.0, true),
        false,
        &x_scale,
        None,
    );
    assert_band(band, 0.0, 33.0, 1.0, 100.0);
}

#[test]
fn clustered_bars_highlight_the_whole_cluster() {
    let data = ["a", "b", "c"]
        .iter()
        .map(|x| json!({ "x": x, "y": 1 }))
        .collect::<Vec<_>>();
    let specs = [
        SeriesSpec::bar("first", data.clone())
            .with_scale_types(ScaleType::Ordinal, ScaleType::Linear),
        SeriesSpec::bar("second", data).with_scale_types(ScaleType::Ordinal, ScaleType::Linear),
    ];
    let x_scale = build_x_scale(&specs, 120.0, 2);

    let band = get_cursor_band_position(
        Rotation::Deg0,
        CHART,
        Point::new(100.0, 10.0),
        &category("c"),
        true,
        &x_scale,
        Some(2),
    );
    assert_band(band, 0.0, 80.0, 40.0, 100.0);
}

#[test]
fn band_is_hidden_outside_or_between_buckets() {
    let x_scale = line_scale();
    let outside = get_cursor_band_position(
        Rotation::Deg0,
        CHART,
        OUTSIDE_POINTER,
        &InvertedValue::number(1.0, true),
        true,
        &x_scale,
        None,
    );
    assert_eq!(outside, CursorBandPosition::hidden());

    let gap = get_cursor_band_position(
        Rotation::Deg0,
        CHART,
        Point::new(60.0, 10.0),
        &InvertedValue::number(1.0, false),
        true,
        &x_scale,
        None,
    );
    assert!(!gap.visible);

    let unknown = get_cursor_band_position(
        Rotation::Deg0,
        CHART,
        Point::new(60.0, 10.0),
        &category("nope"),
        true,
        &x_scale,
        None,
    );
    assert!(!unknown.visible);
}

#[test]
fn band_is_offset_by_the_chart_origin() {
    let chart = Dimensions {
        top: 5.0,
        left: 10.0,
        ..CHART
    };
    let x_scale = ordinal_bar_scale(&["a", "b", "c"], 120.0);
    let band = get_cursor_band_position(
        Rotation::Deg0,
        chart,
        Point::new(50.0, 10.0),
        &category("b"),
        true,
        &x_scale,
        Some(1),
    );
    assert_band(band, 5.0, 50.0, 40.0, 100.0);
}

#[test]
fn cursor_line_runs_along_the_data_axis() {
    let chart = Dimensions {
        top: 5.0,
        left: 10.0,
        ..CHART
    };
    let local = Point::new(30.0, 20.0);

    assert_eq!(
        get_cursor_line_position(Rotation::Deg0, chart, local),
        Some(Line {
            x1: 10.0,
            y1: 25.0,
            x2: 130.0,
            y2: 25.0
        })
    );
    assert_eq!(
        get_cursor_line_position(Rotation::Deg90, chart, local),
        Some(Line {
            x1: 40.0,
            y1: 5.0,
            x2: 40.0,
            y2: 105.0
        })
    );
    assert_eq!(
        get_cursor_line_position(Rotation::Deg0, chart, OUTSIDE_POINTER),
        None
    );
}
