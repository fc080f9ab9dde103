use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Dimensions, Point, Rotation};
use crate::interaction::CursorBandPosition;

/// Gap between the crosshair band and the tooltip box.
pub const DEFAULT_TOOLTIP_PADDING: f64 = 20.0;

/// One axis of the tooltip anchor.
///
/// `offset` is a percentage of the tooltip's own size to shift it back by:
/// 0 keeps the box after the anchor, 100 moves it before the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    pub position: f64,
    pub offset: f64,
}

impl TooltipAnchor {
    #[must_use]
    pub fn after(position: f64) -> Self {
        Self {
            position,
            offset: 0.0,
        }
    }

    #[must_use]
    pub fn before(position: f64) -> Self {
        Self {
            position,
            offset: 100.0,
        }
    }
}

/// Two independent anchors, rendered as a CSS-style transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipTransform {
    pub x: TooltipAnchor,
    pub y: TooltipAnchor,
}

impl fmt::Display for TooltipTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translateX({}px) translateX(-{}%) translateY({}px) translateY(-{}%)",
            self.x.position, self.x.offset, self.y.position, self.y.offset
        )
    }
}

/// Anchors one axis beside the band: after its far edge while the cursor is
/// in the first half of the chart, before its near edge otherwise.
fn band_anchor(
    cursor: f64,
    chart_length: f64,
    band_start: f64,
    band_size: f64,
    is_single_value_x_scale: bool,
    padding: f64,
) -> TooltipAnchor {
    if is_single_value_x_scale {
        return TooltipAnchor::after(band_start);
    }
    if cursor <= chart_length / 2.0 {
        TooltipAnchor::after(band_start + band_size + padding)
    } else {
        TooltipAnchor::before(band_start - padding)
    }
}

/// Anchors one axis next to the raw cursor.
fn cursor_anchor(cursor: f64, chart_origin: f64, chart_length: f64, padding: f64) -> TooltipAnchor {
    if cursor <= chart_length / 2.0 {
        TooltipAnchor::after(chart_origin + cursor + padding)
    } else {
        TooltipAnchor::before(chart_origin + cursor - padding)
    }
}

/// Horizontal anchor. `cursor_x` is chart-local and unrotated.
#[must_use]
pub fn get_horizontal_tooltip_anchor(
    cursor_x: f64,
    band: &CursorBandPosition,
    chart_dims: Dimensions,
    rotation: Rotation,
    is_single_value_x_scale: bool,
    padding: f64,
) -> TooltipAnchor {
    if rotation.is_horizontal() {
        band_anchor(
            cursor_x,
            chart_dims.width,
            band.left,
            band.width,
            is_single_value_x_scale,
            padding,
        )
    } else {
        cursor_anchor(cursor_x, chart_dims.left, chart_dims.width, padding)
    }
}

/// Vertical anchor. `cursor_y` is chart-local and unrotated.
#[must_use]
pub fn get_vertical_tooltip_anchor(
    cursor_y: f64,
    band: &CursorBandPosition,
    chart_dims: Dimensions,
    rotation: Rotation,
    is_single_value_x_scale: bool,
    padding: f64,
) -> TooltipAnchor {
    if rotation.is_vertical() {
        band_anchor(
            cursor_y,
            chart_dims.height,
            band.top,
            band.height,
            is_single_value_x_scale,
            padding,
        )
    } else {
        cursor_anchor(cursor_y, chart_dims.top, chart_dims.height, padding)
    }
}

/// Tooltip transform for a pointer: the band axis anchors beside the
/// crosshair band, the cross axis beside the cursor.
#[must_use]
pub fn get_tooltip_transform(
    chart_dims: Dimensions,
    rotation: Rotation,
    band: &CursorBandPosition,
    local_pointer: Point,
    is_single_value_x_scale: bool,
    padding: f64,
) -> TooltipTransform {
    TooltipTransform {
        x: get_horizontal_tooltip_anchor(
            local_pointer.x,
            band,
            chart_dims,
            rotation,
            is_single_value_x_scale,
            padding,
        ),
        y: get_vertical_tooltip_anchor(
            local_pointer.y,
            band,
            chart_dims,
            rotation,
            is_single_value_x_scale,
            padding,
        ),
    }
}

/// Band extent along the horizontal axis, relative to the container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizontalBand {
    pub band_left: f64,
    pub band_width: f64,
}

/// Band extent along the vertical axis, relative to the container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalBand {
    pub band_top: f64,
    pub band_height: f64,
}

/// Absolute tooltip box origin in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
}

impl TooltipPlacement {
    #[must_use]
    pub fn css_left(&self) -> String {
        format!("{}px", self.left.round())
    }

    #[must_use]
    pub fn css_top(&self) -> String {
        format!("{}px", self.top.round())
    }
}

/// Places a measured tooltip next to the band: beside it on the band axis,
/// flipped to the other side when it would overflow, aligned with the band
/// start on the cross axis. The result never leaves `container`.
#[must_use]
pub fn get_final_tooltip_position(
    container: Dimensions,
    tooltip: Dimensions,
    rotation: Rotation,
    h_band: HorizontalBand,
    v_band: VerticalBand,
    padding: f64,
) -> TooltipPlacement {
    let beside = |band_start: f64, band_size: f64, tooltip_size: f64, container_size: f64| {
        if band_start + band_size + tooltip_size + padding > container_size {
            band_start - tooltip_size - padding
        } else {
            band_start + band_size + padding
        }
    };
    let aligned = |band_start: f64, tooltip_size: f64, container_size: f64| {
        if band_start + tooltip_size > container_size {
            container_size - tooltip_size
        } else {
            band_start
        }
    };

    let (left, top) = if rotation.is_horizontal() {
        (
            beside(
                h_band.band_left,
                h_band.band_width,
                tooltip.width,
                container.width,
            ),
            aligned(v_band.band_top, tooltip.height, container.height),
        )
    } else {
        (
            aligned(h_band.band_left, tooltip.width, container.width),
            beside(
                v_band.band_top,
                v_band.band_height,
                tooltip.height,
                container.height,
            ),
        )
    };

    let max_left = (container.right() - tooltip.width).max(container.left);
    let max_top = (container.bottom() - tooltip.height).max(container.top);
    TooltipPlacement {
        left: (container.left + left).clamp(container.left, max_left),
        top: (container.top + top).clamp(container.top, max_top),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_renders_as_css() {
        let transform = TooltipTransform {
            x: TooltipAnchor::after(60.0),
            y: TooltipAnchor::before(12.5),
        };
        assert_eq!(
            transform.to_string(),
            "translateX(60px) translateX(-0%) translateY(12.5px) translateY(-100%)"
        );
    }

    #[test]
    fn final_position_places_tooltip_after_band() {
        let container = Dimensions {
            top: 10.0,
            left: 10.0,
            width: 100.0,
            height: 100.0,
        };
        let tooltip = Dimensions {
            top: 0.0,
            left: 0.0,
            width: 40.0,
            height: 30.0,
        };
        let placement = get_final_tooltip_position(
            container,
            tooltip,
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
}
