use xy_chart::core::{Dimensions, Point, Rotation};
use xy_chart::interaction::{
    CursorBandPosition, DEFAULT_TOOLTIP_PADDING, HorizontalBand, TooltipAnchor, VerticalBand,
    get_final_tooltip_position, get_horizontal_tooltip_anchor, get_tooltip_transform,
    get_vertical_tooltip_anchor,
};

const CHART: Dimensions = Dimensions {
    top: 0.0,
    left: 0.0,
    width: 120.0,
    height: 100.0,
};

const COLUMN: CursorBandPosition = CursorBandPosition {
    top: 0.0,
    left: 40.0,
    width: 40.0,
    height: 100.0,
    visible: true,
};

fn sized(width: f64, height: f64) -> Dimensions {
    Dimensions {
        top: 0.0,
        left: 0.0,
        width,
        height,
    }
}

#[test]
fn tooltip_sits_after_the_band_in_the_first_half() {
    let transform = get_tooltip_transform(
        CHART,
        Rotation::Deg0,
        &COLUMN,
        Point::new(50.0, 30.0),
        false,
        DEFAULT_TOOLTIP_PADDING,
    );
    assert_eq!(transform.x, TooltipAnchor::after(100.0));
    assert_eq!(transform.y, TooltipAnchor::after(50.0));
    assert_eq!(
        transform.to_string(),
        "translateX(100px) translateX(-0%) translateY(50px) translateY(-0%)"
    );
}

#[test]
fn tooltip_flips_before_the_band_in_the_second_half() {
    let transform = get_tooltip_transform(
        CHART,
        Rotation::Deg0,
        &COLUMN,
        Point::new(90.0, 80.0),
        false,
        DEFAULT_TOOLTIP_PADDING,
    );
    assert_eq!(transform.x, TooltipAnchor::before(20.0));
    assert_eq!(transform.y, TooltipAnchor::before(60.0));
}

#[test]
fn single_value_anchors_to_band_start() {
    let x = get_horizontal_tooltip_anchor(
        90.0,
        &COLUMN,
        CHART,
        Rotation::Deg0,
        true,
        DEFAULT_TOOLTIP_PADDING,
    );
    assert_eq!(x, TooltipAnchor::after(40.0));
}

#[test]
fn vertical_rotation_anchors_band_on_the_vertical_axis() {
    let row = CursorBandPosition {
        top: 0.0,
        left: 0.0,
        width: 120.0,
        height: 50.0,
        visible: true,
    };
    let x = get_horizontal_tooltip_anchor(
        50.0,
        &row,
        CHART,
        Rotation::Deg90,
        false,
        DEFAULT_TOOLTIP_PADDING,
    );
    assert_eq!(x, TooltipAnchor::after(70.0));

    let y = get_vertical_tooltip_anchor(
        30.0,
        &row,
        CHART,
        Rotation::Deg90,
        false,
        DEFAULT_TOOLTIP_PADDING,
    );
    assert_eq!(y, TooltipAnchor::after(70.0));

    let flipped = get_vertical_tooltip_anchor(
        70.0,
        &row,
        CHART,
        Rotation::Deg270,
        false,
        DEFAULT_TOOLTIP_PADDING,
    );
    assert_eq!(flipped, TooltipAnchor::before(-20.0));
}

#[test]
fn cursor_anchor_includes_the_chart_origin() {
    let chart = Dimensions {
        top: 10.0,
        left: 30.0,
        ..CHART
    };
    let y = get_vertical_tooltip_anchor(
        30.0,
        &COLUMN,
        chart,
        Rotation::Deg180,
        false,
        5.0,
    );
    assert_eq!(y, TooltipAnchor::after(45.0));
}

#[test]
fn final_position_matches_reference_case() {
    let container = Dimensions {
        top: 10.0,
        left: 10.0,
        width: 100.0,
        height: 100.0,
    };
    let placement = get_final_tooltip_position(
        container,
        sized(40.0, 30.0),
        Rotation::Deg0,
        HorizontalBand {
            band_left: 10.0,
            band_width: 0.0,
        },
        VerticalBand {
            band_top: 0.0,
            band_height: 0.0,
        },
        5.0,
    );
    assert_eq!(placement.css_left(), "25px");
    assert_eq!(placement.css_top(), "10px");
}

#[test]
fn final_position_flips_and_aligns_when_overflowing() {
    let container = Dimensions {
        top: 10.0,
        left: 10.0,
        width: 100.0,
        height: 100.0,
    };
    let placement = get_final_tooltip_position(
        container,
        sized(40.0, 30.0),
        Rotation::Deg0,
        HorizontalBand {
            band_left: 70.0,
            band_width: 10.0,
        },
        VerticalBand {
            band_top: 80.0,
            band_height: 0.0,
        },
        5.0,
    );
    assert_eq!(placement.left, 35.0);
    assert_eq!(placement.top, 80.0);
}

#[test]
fn final_position_on_vertical_chart_goes_below_the_band() {
    let container = Dimensions {
        top: 10.0,
        left: 10.0,
        width: 100.0,
        height: 100.0,
    };
    let placement = get_final_tooltip_position(
        container,
        sized(40.0, 30.0),
        Rotation::Deg90,
        HorizontalBand {
            band_left: 10.0,
            band_width: 100.0,
        },
        VerticalBand {
            band_top: 0.0,
            band_height: 20.0,
        },
        5.0,
    );
    assert_eq!(placement.left, 20.0);
    assert_eq!(placement.top, 35.0);
}

#[test]
fn oversized_tooltip_is_pinned_to_the_container_origin() {
    let container = Dimensions {
        top: 10.0,
        left: 10.0,
        width: 100.0,
        height: 100.0,
    };
    let placement = get_final_tooltip_position(
        container,
        sized(300.0, 300.0),
        Rotation::Deg0,
        HorizontalBand {
            band_left: 50.0,
            band_width: 10.0,
        },
        VerticalBand {
            band_top: 50.0,
            band_height: 0.0,
        },
        5.0,
    );
    assert_eq!(placement.left, 10.0);
    assert_eq!(placement.top, 10.0);
}
