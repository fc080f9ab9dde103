use crate::core::{Dimensions, OUTSIDE_POINTER, Point};
use crate::interaction::{
    CrosshairMode, HorizontalBand, PointerFrame, PointerGeometry, TooltipPlacement, VerticalBand,
    get_final_tooltip_position,
};

use super::ChartGeometryEngine;

impl ChartGeometryEngine {
    #[must_use]
    pub fn crosshair_mode(&self) -> CrosshairMode {
        self.core.config.crosshair_mode
    }

    pub fn set_crosshair_mode(&mut self, mode: CrosshairMode) {
        self.core.config.crosshair_mode = mode;
        if mode == CrosshairMode::Hidden {
            self.pointer_leave();
        }
    }

    /// Per-event geometry bound to the cached scales.
    #[must_use]
    pub fn pointer_geometry(&self) -> PointerGeometry<'_> {
        let scales = &self.core.scales;
        let total = scales.bars_in_cluster.total;
        PointerGeometry {
            rotation: self.core.config.rotation,
            chart_dims: self.core.config.dimensions,
            x_scale: &scales.x_scale,
            x_values: &scales.sorted_x_values,
            total_bars_in_cluster: (total > 0).then_some(total),
            crosshair_mode: self.core.config.crosshair_mode,
            tooltip_padding: self.core.config.settings.tooltip_padding,
        }
    }

    /// Handles pointer movement in container pixels.
    ///
    /// Reads the cached scales only; no domain or scale is rebuilt. A
    /// non-finite sample is treated as a pointer outside the chart.
    pub fn pointer_move(&mut self, pointer: Point) -> &PointerFrame {
        let pointer = if pointer.x.is_finite() && pointer.y.is_finite() {
            pointer
        } else {
            OUTSIDE_POINTER
        };
        let frame = self.pointer_geometry().frame(pointer);
        self.core.last_frame.insert(frame)
    }

    pub fn pointer_leave(&mut self) {
        self.core.last_frame = None;
    }

    #[must_use]
    pub fn pointer_frame(&self) -> Option<&PointerFrame> {
        self.core.last_frame.as_ref()
    }

    /// Places a measured tooltip next to the current crosshair band.
    ///
    /// `container` is the chart container in page pixels. `None` while no
    /// band is visible.
    #[must_use]
    pub fn tooltip_position(
        &self,
        container: Dimensions,
        tooltip: Dimensions,
    ) -> Option<TooltipPlacement> {
        let band = self
            .core
            .last_frame
            .as_ref()
            .map(|frame| frame.band)
            .filter(|band| band.visible)?;
        Some(get_final_tooltip_position(
            container,
            tooltip,
            self.core.config.rotation,
            HorizontalBand {
                band_left: band.left,
                band_width: band.width,
            },
            VerticalBand {
                band_top: band.top,
                band_height: band.height,
            },
            self.core.config.settings.tooltip_padding,
        ))
    }
}
