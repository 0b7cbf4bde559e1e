//! Default routing and rendering settings (overlay coordinate units).

use crate::types::Side;

/// Outward offset applied when inserting detour grid lines, so a path clears
/// its rectangle before turning.
pub const GRID_PADDING: f64 = 20.0;

/// How far the final leg stops short of the target anchor, leaving room for
/// the arrowhead marker to render without overlapping the target shape.
pub const ARROW_GAP: f64 = 10.0;

/// Nominal corner-rounding radius for connector bends.
pub const BEND_RADIUS: f64 = 20.0;

/// Interpolation fraction for the single bend between aligned anchors.
pub const BEND_POSITION: f64 = 0.5;

/// Fraction along a side at which an anchor sits when no position is given.
pub const SIDE_POSITION: f64 = 0.5;

pub const SOURCE_SIDE: Side = Side::Bottom;
pub const TARGET_SIDE: Side = Side::Top;

pub const STROKE: &str = "white";

/// DOM ids of the overlay `<svg>` and its arrowhead `<marker>`.
pub const OVERLAY_ID: &str = "arrows";
pub const MARKER_ID: &str = "arrow";
