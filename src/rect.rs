//! Axis-aligned rectangle value type.
//!
//! `Rect` answers the side/corner/percentage point queries the router needs.
//! It is immutable: every adjusting operation returns a new value, so the
//! `right == left + width` / `bottom == top + height` invariant holds for the
//! lifetime of any instance.

use glam::{DVec2, dvec2};

use crate::errors::GeometryError;
use crate::types::{Point, Side, SidePoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

/// Partial box description for [`Rect::from_spec`].
///
/// Any two of `{left, right, width}` fix the horizontal extent, any two of
/// `{top, bottom, height}` the vertical one; `x`/`y` are aliases for
/// `left`/`top`. Combinations that leave an axis underivable are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RectSpec {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

fn resolve_extent(
    low: Option<f64>,
    high: Option<f64>,
    size: Option<f64>,
    axis: &'static str,
) -> Result<(f64, f64), GeometryError> {
    match (low, high, size) {
        (Some(low), Some(high), _) => Ok((low, high)),
        (Some(low), None, Some(size)) => Ok((low, low + size)),
        (None, Some(high), Some(size)) => Ok((high - size, high)),
        _ => Err(GeometryError::UnderspecifiedRect { axis }),
    }
}

impl Rect {
    /// Build from explicit edges. Callers are responsible for `left <= right`
    /// and `top <= bottom`; inverted edges yield negative width/height, which
    /// downstream arithmetic tolerates.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Build from two opposite corner points, normalizing so that any pair of
    /// points forms a valid (possibly zero-area) rectangle.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    /// Build from a partial box description.
    ///
    /// Underspecified input is an error rather than silent NaN geometry.
    pub fn from_spec(spec: RectSpec) -> Result<Self, GeometryError> {
        let (left, right) = resolve_extent(
            spec.left.or(spec.x),
            spec.right,
            spec.width,
            "horizontal",
        )?;
        let (top, bottom) = resolve_extent(
            spec.top.or(spec.y),
            spec.bottom,
            spec.height,
            "vertical",
        )?;
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Alias for `left`, matching the box-model naming of the source data.
    pub fn x(&self) -> f64 {
        self.left
    }

    /// Alias for `top`.
    pub fn y(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        dvec2(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// A point on `side`, offset `percent` of that side's length from its
    /// top/left end. `percent` is not clamped: values outside `0..=1`
    /// extrapolate linearly along the side.
    pub fn relative_side(&self, side: Side, percent: f64) -> SidePoint {
        let point = match side {
            Side::Left => dvec2(self.left, self.top + self.height() * percent),
            Side::Right => dvec2(self.right, self.top + self.height() * percent),
            Side::Top => dvec2(self.left + self.width() * percent, self.top),
            Side::Bottom => dvec2(self.left + self.width() * percent, self.bottom),
        };
        SidePoint::new(point, side)
    }

    /// The midpoint of `side`, pushed outward by `offset`.
    pub fn center_side(&self, side: Side, offset: f64) -> SidePoint {
        let mid = self.relative_side(side, 0.5).point;
        SidePoint::new(mid + side.factor() * offset, side)
    }

    /// A rectangle expanded symmetrically by `h` horizontally and `v`
    /// vertically. Negative values shrink.
    pub fn with_padding_xy(&self, h: f64, v: f64) -> Rect {
        Rect {
            left: self.left - h,
            top: self.top - v,
            right: self.right + h,
            bottom: self.bottom + v,
        }
    }

    /// Uniform padding on all four sides.
    pub fn with_padding(&self, pad: f64) -> Rect {
        self.with_padding_xy(pad, pad)
    }

    /// The same rectangle shifted by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// The same rectangle shifted by an offset vector.
    pub fn translate_by(&self, offset: DVec2) -> Rect {
        self.translate(offset.x, offset.y)
    }

    /// A rectangle of the same size with its top-left corner at `point`.
    pub fn move_to(&self, point: Point) -> Rect {
        Rect::new(point.x, point.y, self.width(), self.height())
    }
}
