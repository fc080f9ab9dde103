use serde::{Deserialize, Serialize};

use crate::core::{Dimensions, InvertedValue, Line, Point, PrimitiveValue, Rotation, Scale};

/// Width of the crosshair when the x scale has no bands.
pub const DEFAULT_SNAP_POSITION_BAND: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnappedPosition {
    pub position: f64,
    pub band: f64,
}

/// Highlighted crosshair rectangle in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CursorBandPosition {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub visible: bool,
}

impl CursorBandPosition {
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_dimensions(dims: Dimensions) -> Self {
        Self {
            top: dims.top,
            left: dims.left,
            width: dims.width,
            height: dims.height,
            visible: true,
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            top: self.top,
            left: self.left,
            width: self.width,
            height: self.height,
        }
    }
}

/// Snaps `value` onto its band.
///
/// With bars the band covers the whole cluster including its padding, so a
/// multi-series cluster highlights as one region. Without bars the result is
/// a hairline at the value.
#[must_use]
pub fn get_snap_position(
    value: &PrimitiveValue,
    scale: &impl Scale,
    total_bars_in_cluster: usize,
) -> Option<SnappedPosition> {
    let position = scale.scale(value)?;
    let bandwidth = scale.bandwidth();
    let bars_padding = scale.bars_padding();
    if bandwidth > 0.0 && bars_padding < 1.0 {
        let total = total_bars_in_cluster.max(1) as f64;
        let band = bandwidth / (1.0 - bars_padding);
        let half_padding = (band - bandwidth) / 2.0;
        return Some(SnappedPosition {
            position: position - half_padding * total,
            band: band * total,
        });
    }
    Some(SnappedPosition {
        position,
        band: DEFAULT_SNAP_POSITION_BAND,
    })
}

/// Locates the crosshair band for a pointer.
///
/// `cursor` is the pointer projected onto the data axes (see
/// [`Rotation::project_pointer`]). `total_bars_in_cluster` is `None` or 0 for
/// charts without bars. The band is hidden when the pointer is outside the
/// plotting area, falls between buckets, or hits a value the scale cannot place.
#[must_use]
pub fn get_cursor_band_position(
    rotation: Rotation,
    chart_dims: Dimensions,
    cursor: Point,
    inverted_value: &InvertedValue,
    snap_enabled: bool,
    x_scale: &impl Scale,
    total_bars_in_cluster: Option<usize>,
) -> CursorBandPosition {
    let (primary, cross) = rotation.oriented_size(chart_dims);
    let inside = cursor.x >= 0.0 && cursor.y >= 0.0 && cursor.x <= primary && cursor.y <= cross;
    if !inside || !inverted_value.within_bandwidth {
        return CursorBandPosition::hidden();
    }

    let total = total_bars_in_cluster.filter(|total| *total > 0).unwrap_or(1);
    let Some(SnappedPosition { position, band }) =
        get_snap_position(&inverted_value.value, x_scale, total)
    else {
        return CursorBandPosition::hidden();
    };

    let offset = if snap_enabled { position } else { cursor.x };
    let mirrored_band = if x_scale.bandwidth() > 0.0 { band } else { 0.0 };
    let frame = rotation.primary_axis(chart_dims);
    let (start, size) = frame.clamp(
        frame.place(offset, mirrored_band),
        band,
        DEFAULT_SNAP_POSITION_BAND,
    );
    CursorBandPosition::from_dimensions(frame.span_rect(chart_dims, start, size))
}

/// Guide line across the data x-axis at the pointer.
///
/// `local_pointer` is chart-local and unrotated; a negative coordinate means
/// the pointer is outside the plotting area and no line is drawn.
#[must_use]
pub fn get_cursor_line_position(
    rotation: Rotation,
    chart_dims: Dimensions,
    local_pointer: Point,
) -> Option<Line> {
    if local_pointer.x < 0.0 || local_pointer.y < 0.0 {
        return None;
    }
    if rotation.is_horizontal() {
        let y = local_pointer.y + chart_dims.top;
        Some(Line {
            x1: chart_dims.left,
            y1: y,
            x2: chart_dims.right(),
            y2: y,
        })
    } else {
        let x = local_pointer.x + chart_dims.left;
        Some(Line {
            x1: x,
            y1: chart_dims.top,
            x2: x,
            y2: chart_dims.bottom(),
        })
    }
}
