use serde::{Deserialize, Serialize};

use crate::core::{Dimensions, Point};
use crate::error::ChartError;

/// Chart orientation in degrees.
///
/// `Deg0`/`Deg180` keep the data x-axis on the visual horizontal axis,
/// `Deg90`/`Deg270` move it onto the vertical axis. `Deg180` and `Deg270`
/// run the x-axis against the screen direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    /// Also reachable as `-90`.
    Deg270,
}

impl TryFrom<i32> for Rotation {
    type Error = ChartError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 | -90 => Ok(Self::Deg270),
            other => Err(ChartError::InvalidConfig(format!(
                "unsupported chart rotation: {other}"
            ))),
        }
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Projected pointer used when the pointer left the plotting area.
pub const OUTSIDE_POINTER: Point = Point { x: -1.0, y: -1.0 };

/// Render-layer transform that rotates the drawing surface of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartTransform {
    pub x: f64,
    pub y: f64,
    pub rotate: i32,
}

/// The primary (data x) axis expressed in screen pixels.
///
/// Every rotation-dependent computation goes through this frame so that the
/// four orientations share one code path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFrame {
    /// Screen coordinate where the axis area starts (`left` or `top`).
    pub origin: f64,
    /// Screen length of the axis area (`width` or `height`).
    pub length: f64,
    /// The data axis grows against the screen direction.
    pub mirrored: bool,
    /// The data axis lies on the visual horizontal axis.
    pub horizontal: bool,
}

impl Rotation {
    #[must_use]
    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Deg0 | Self::Deg180)
    }

    #[must_use]
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    #[must_use]
    pub fn is_mirrored(self) -> bool {
        matches!(self, Self::Deg180 | Self::Deg270)
    }

    /// Returns `(primary, cross)` lengths: the data x-axis extent first.
    #[must_use]
    pub fn oriented_size(self, dims: Dimensions) -> (f64, f64) {
        if self.is_horizontal() {
            (dims.width, dims.height)
        } else {
            (dims.height, dims.width)
        }
    }

    #[must_use]
    pub fn primary_axis(self, dims: Dimensions) -> AxisFrame {
        let (origin, length) = if self.is_horizontal() {
            (dims.left, dims.width)
        } else {
            (dims.top, dims.height)
        };
        AxisFrame {
            origin,
            length,
            mirrored: self.is_mirrored(),
            horizontal: self.is_horizontal(),
        }
    }

    /// Converts a container pointer into chart-local screen coordinates.
    ///
    /// Returns `None` when the pointer lies outside the plotting area.
    #[must_use]
    pub fn local_pointer(self, pointer: Point, dims: Dimensions) -> Option<Point> {
        let x = pointer.x - dims.left;
        let y = pointer.y - dims.top;
        let inside = x >= 0.0 && y >= 0.0 && x <= dims.width && y <= dims.height;
        inside.then_some(Point::new(x, y))
    }

    /// Re-expresses a chart-local pointer along the data axes: `x` runs along
    /// the data x-axis from its origin, `y` along the cross axis.
    #[must_use]
    pub fn orient(self, local: Point, dims: Dimensions) -> Point {
        match self {
            Self::Deg0 => local,
            Self::Deg90 => Point::new(local.y, dims.width - local.x),
            Self::Deg180 => Point::new(dims.width - local.x, dims.height - local.y),
            Self::Deg270 => Point::new(dims.height - local.y, local.x),
        }
    }

    /// Container pointer to data-oriented chart coordinates.
    ///
    /// A pointer outside the plotting area projects to [`OUTSIDE_POINTER`].
    #[must_use]
    pub fn project_pointer(self, pointer: Point, dims: Dimensions) -> Point {
        self.local_pointer(pointer, dims)
            .map_or(OUTSIDE_POINTER, |local| self.orient(local, dims))
    }

    #[must_use]
    pub fn chart_transform(self, dims: Dimensions) -> ChartTransform {
        let (x, y) = match self {
            Self::Deg0 => (0.0, 0.0),
            Self::Deg90 => (dims.width, 0.0),
            Self::Deg180 => (dims.width, dims.height),
            Self::Deg270 => (0.0, dims.height),
        };
        let rotate = match self {
            Self::Deg270 => -90,
            other => other.degrees(),
        };
        ChartTransform { x, y, rotate }
    }
}

impl AxisFrame {
    #[must_use]
    pub fn end(self) -> f64 {
        self.origin + self.length
    }

    /// Screen start of a band of `band` pixels placed `offset` pixels along
    /// the data axis.
    #[must_use]
    pub fn place(self, offset: f64, band: f64) -> f64 {
        if self.mirrored {
            self.end() - offset - band
        } else {
            self.origin + offset
        }
    }

    /// Fits `[start, start + band]` inside the axis area, returning `(start, size)`.
    ///
    /// Bands are cropped at the edges; a band wider than the area covers the
    /// whole area. A hairline (`band <= hairline`) keeps its size and is
    /// shifted back inside instead of being cropped to nothing.
    #[must_use]
    pub fn clamp(self, start: f64, band: f64, hairline: f64) -> (f64, f64) {
        if band >= self.length {
            return (self.origin, self.length);
        }
        if band <= hairline {
            let max_start = (self.end() - band).max(self.origin);
            return (start.clamp(self.origin, max_start), band);
        }
        if start < self.origin {
            let size = (band - (self.origin - start)).max(0.0);
            return (self.origin, size);
        }
        if start + band > self.end() {
            return (start, (self.end() - start).max(0.0));
        }
        (start, band)
    }

    /// Builds the full cross-axis rectangle for a primary-axis span.
    #[must_use]
    pub fn span_rect(self, dims: Dimensions, start: f64, size: f64) -> Dimensions {
        if self.horizontal {
            Dimensions {
                top: dims.top,
                left: start,
                width: size,
                height: dims.height,
            }
        } else {
            Dimensions {
                top: start,
                left: dims.left,
                width: dims.width,
                height: size,
            }
        }
    }
}
