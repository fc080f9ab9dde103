pub mod crosshair;
pub mod pointer;
pub mod tooltip;

use serde::{Deserialize, Serialize};

pub use crosshair::{
    CursorBandPosition, DEFAULT_SNAP_POSITION_BAND, SnappedPosition, get_cursor_band_position,
    get_cursor_line_position, get_snap_position,
};
pub use pointer::{PointerFrame, PointerGeometry};
pub use tooltip::{
    DEFAULT_TOOLTIP_PADDING, HorizontalBand, TooltipAnchor, TooltipPlacement, TooltipTransform,
    VerticalBand, get_final_tooltip_position, get_horizontal_tooltip_anchor,
    get_tooltip_transform, get_vertical_tooltip_anchor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrosshairMode {
    /// Crosshair band snaps onto the data bucket under the pointer.
    #[default]
    Magnet,
    /// Crosshair band follows the raw pointer position without snapping.
    Normal,
    /// Crosshair remains hidden regardless of pointer movement.
    Hidden,
}

impl CrosshairMode {
    #[must_use]
    pub fn snap_enabled(self) -> bool {
        matches!(self, Self::Magnet)
    }

    #[must_use]
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}
