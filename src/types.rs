//! Geometry primitives shared by the router and the overlay.
//!
//! All coordinates live in the overlay's own 2D space (y grows downward, as
//! in SVG). Vector arithmetic is done with [`glam::DVec2`].

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::errors::ConfigError;

/// A location in the overlay's coordinate space.
pub type Point = DVec2;

/// One edge of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Which coordinate axis a side's outward direction runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Side {
    /// Unit outward direction vector for this side.
    ///
    /// Left and right point along the x axis, top and bottom along y
    /// (y-down, so top is negative).
    pub fn factor(self) -> DVec2 {
        match self {
            Side::Left => DVec2::new(-1.0, 0.0),
            Side::Right => DVec2::new(1.0, 0.0),
            Side::Top => DVec2::new(0.0, -1.0),
            Side::Bottom => DVec2::new(0.0, 1.0),
        }
    }

    /// The axis a connector travels along when leaving (or entering) this side.
    pub fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::X,
            Side::Top | Side::Bottom => Axis::Y,
        }
    }

    /// The side on the opposite edge of the rectangle.
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ConfigError;

    /// Parses the four lowercase side names. Anything else is a configuration
    /// error: side names come from declarative attributes, so a bad value is
    /// a caller bug rather than a geometry edge case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            other => Err(ConfigError::UnknownSide {
                value: other.to_string(),
            }),
        }
    }
}

/// A point on a rectangle's boundary, tagged with the side it was derived
/// from. The side tells the router which direction the path must initially
/// travel away from the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidePoint {
    pub point: Point,
    pub side: Side,
}

impl SidePoint {
    pub fn new(point: Point, side: Side) -> Self {
        Self { point, side }
    }

    /// The anchor as a ray pointing outward from its rectangle.
    pub fn ray(self) -> Ray {
        let f = self.side.factor();
        Ray {
            x: self.point.x,
            y: self.point.y,
            dx: f.x,
            dy: f.y,
        }
    }
}

/// A point plus an axis-aligned outward direction. Used only for the
/// pre-check of whether two anchors already face each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

/// An intermediate waypoint constraint: a vertical line at `x` or a
/// horizontal line at `y` that the orthogonal path must pass through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridLine {
    /// Vertical line at the given x coordinate.
    X(f64),
    /// Horizontal line at the given y coordinate.
    Y(f64),
}

/// One straight axis-aligned leg of a connector path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }

    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }
}
