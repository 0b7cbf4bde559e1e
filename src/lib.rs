//! Orthogonal connector arrows rendered as an SVG overlay.
//!
//! Given pairs of axis-aligned rectangles, `orthoarrow` routes an
//! axis-parallel polyline between a side anchor on each, rounds its corners
//! into cubic joins, and emits the result as SVG path data with an arrowhead
//! marker at the target end.
//!
//! The pieces compose bottom-up:
//!
//! - [`Rect`] / [`RectSpec`]: rectangle queries (side anchors, padding,
//!   translation)
//! - [`route`]: grid-line waypoints and leg construction between two
//!   [`SidePoint`] anchors
//! - [`path`]: arrowhead pull-back, corner rounding, path-data serialization
//! - [`Overlay`]: the declarative layer binding `data-edge-*` attribute maps
//!   and a [`GeometrySource`] into overlay markup
//!
//! ```
//! use orthoarrow::{draw_arrows, Point, Rect};
//! use std::collections::HashMap;
//!
//! let mut rects = HashMap::new();
//! rects.insert("hero".to_string(), Rect::new(0.0, 0.0, 200.0, 80.0));
//! rects.insert("cta".to_string(), Rect::new(300.0, 200.0, 120.0, 40.0));
//!
//! let svg = draw_arrows(
//!     &[
//!         ("hero", &[("data-edge-source", "signup")]),
//!         ("cta", &[("data-edge-target", "signup")]),
//!     ],
//!     &rects,
//!     Point::ZERO,
//! )?;
//! assert!(svg.contains("marker-end"));
//! # Ok::<(), miette::Report>(())
//! ```

pub mod defaults;
mod errors;
pub mod log;
mod overlay;
pub mod path;
mod rect;
pub mod route;
mod types;

pub use errors::{ConfigError, GeometryError};
pub use overlay::{
    ATTR_BEND_POSITION, ATTR_SOURCE, ATTR_SOURCE_POSITION, ATTR_SOURCE_SIDE, ATTR_STROKE,
    ATTR_TARGET, ATTR_TARGET_POSITION, ATTR_TARGET_SIDE, EdgeConfig, GeometrySource, Overlay,
};
pub use rect::{Rect, RectSpec};
pub use types::{Axis, GridLine, LineSegment, Point, Ray, Side, SidePoint};

/// One-shot convenience: register `elements` (id plus attribute list), draw
/// every declared connector against `geometry`, and return the overlay
/// markup.
///
/// Hosts that redraw on resize should hold an [`Overlay`] instead.
pub fn draw_arrows(
    elements: &[(&str, &[(&str, &str)])],
    geometry: &impl GeometrySource,
    origin: Point,
) -> Result<String, miette::Report> {
    let mut overlay = Overlay::new(origin);
    for (id, attrs) in elements {
        overlay.register_element(*id, attrs)?;
    }
    overlay.redraw(geometry);
    Ok(overlay.to_svg())
}
