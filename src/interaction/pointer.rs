use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    ChartScale, ChartTransform, Dimensions, InvertedValue, Line, OUTSIDE_POINTER, Point,
    Rotation, Scale,
};
use crate::interaction::{
    CrosshairMode, CursorBandPosition, TooltipTransform, get_cursor_band_position,
    get_cursor_line_position, get_tooltip_transform,
};

/// Everything a renderer needs for one pointer event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerFrame {
    /// Pointer in container pixels as received.
    pub pointer: Point,
    /// Chart-local unrotated pointer, `(-1, -1)` outside the plotting area.
    pub local: Point,
    /// Pointer along the data axes, `(-1, -1)` outside the plotting area.
    pub projected: Point,
    pub value: Option<InvertedValue>,
    pub band: CursorBandPosition,
    pub line: Option<Line>,
    pub tooltip: Option<TooltipTransform>,
    pub chart_transform: ChartTransform,
}

/// Per-event half of the geometry pipeline.
///
/// Borrows an already built x scale; creating one is cheap and never touches
/// domains or scale construction.
#[derive(Debug, Clone, Copy)]
pub struct PointerGeometry<'a> {
    pub rotation: Rotation,
    pub chart_dims: Dimensions,
    pub x_scale: &'a ChartScale,
    /// Sorted numeric x values, used to snap on continuous scales.
    pub x_values: &'a [f64],
    pub total_bars_in_cluster: Option<usize>,
    pub crosshair_mode: CrosshairMode,
    pub tooltip_padding: f64,
}

impl PointerGeometry<'_> {
    /// Resolves a container pointer into crosshair and tooltip geometry.
    #[must_use]
    pub fn frame(&self, pointer: Point) -> PointerFrame {
        let local = self
            .rotation
            .local_pointer(pointer, self.chart_dims)
            .unwrap_or(OUTSIDE_POINTER);
        let projected = self.rotation.project_pointer(pointer, self.chart_dims);
        let chart_transform = self.rotation.chart_transform(self.chart_dims);

        let is_outside = projected == OUTSIDE_POINTER;
        if self.crosshair_mode.is_hidden() || is_outside {
            trace!(
                x = pointer.x,
                y = pointer.y,
                hidden = self.crosshair_mode.is_hidden(),
                "pointer frame without crosshair"
            );
            return PointerFrame {
                pointer,
                local,
                projected,
                value: None,
                band: CursorBandPosition::hidden(),
                line: None,
                tooltip: None,
                chart_transform,
            };
        }

        let value = self.x_scale.invert_with_step(projected.x, self.x_values);
        let band = value.as_ref().map_or_else(CursorBandPosition::hidden, |value| {
            get_cursor_band_position(
                self.rotation,
                self.chart_dims,
                projected,
                value,
                self.crosshair_mode.snap_enabled(),
                self.x_scale,
                self.total_bars_in_cluster,
            )
        });
        let line = get_cursor_line_position(self.rotation, self.chart_dims, local);
        let tooltip = band.visible.then(|| {
            get_tooltip_transform(
                self.chart_dims,
                self.rotation,
                &band,
                local,
                self.x_scale.is_single_value(),
                self.tooltip_padding,
            )
        });

        trace!(
            x = pointer.x,
            y = pointer.y,
            projected_x = projected.x,
            band_visible = band.visible,
            "pointer frame"
        );
        PointerFrame {
            pointer,
            local,
            projected,
            value,
            band,
            line,
            tooltip,
            chart_transform,
        }
    }
}
