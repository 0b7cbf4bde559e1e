//! SVG path assembly: command model, arrowhead pull-back, corner rounding
//! and path-data serialization.

use std::fmt::Write as _;

use crate::types::{LineSegment, Point, Side};

/// One SVG path command, tagged with its control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { c1: Point, c2: Point, to: Point },
}

/// An ordered sequence of path commands, before and after corner rounding.
pub type SvgPath = Vec<PathCommand>;

impl PathCommand {
    /// The point the pen rests at after this command.
    pub fn end_point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::CurveTo { to, .. } => to,
        }
    }
}

/// Turn connected legs into `M`/`L` commands.
///
/// The final endpoint is pulled back `arrow_gap` units along the target
/// side's outward direction, so the arrowhead marker renders into the gap
/// instead of overlapping the target shape.
pub fn svg_path_from_segments(
    segments: &[LineSegment],
    target_side: Side,
    arrow_gap: f64,
) -> SvgPath {
    let Some(first) = segments.first() else {
        return Vec::new();
    };

    let mut path = Vec::with_capacity(segments.len() + 1);
    path.push(PathCommand::MoveTo(first.from));
    for (i, segment) in segments.iter().enumerate() {
        let end = if i + 1 == segments.len() {
            segment.to + target_side.factor() * arrow_gap
        } else {
            segment.to
        };
        path.push(PathCommand::LineTo(end));
    }
    path
}

/// A corner is bendable when its incident legs form a true right angle:
/// neither both x coordinates nor both y coordinates may match the corner's.
/// Exact comparison is intentional; the coordinates are copied between legs,
/// never recomputed.
fn is_bendable(prev: Point, corner: Point, next: Point) -> bool {
    !(prev.x == corner.x && next.x == corner.x) && !(prev.y == corner.y && next.y == corner.y)
}

/// Round every bendable interior corner of a polyline path into a cubic join.
///
/// For a corner with incident leg lengths `d_prev` and `d_next`, the
/// effective radius is `min(radius, d_prev - 0.1, d_next - 0.1)`, so the
/// rounding never overshoots into an adjacent corner and never exceeds the
/// request. Each rounded corner becomes an `L` to the point `r` short of the
/// corner, then a `C` whose outer control points sit `r` along each incident
/// leg with the corner itself as the middle control. Corners with a
/// degenerate incident leg pass through unrounded.
pub fn bend_path(path: &SvgPath, radius: f64) -> SvgPath {
    let mut out: SvgPath = Vec::with_capacity(path.len() * 2);

    for (i, command) in path.iter().enumerate() {
        let corner = match *command {
            PathCommand::LineTo(p) if i > 0 => p,
            other => {
                out.push(other);
                continue;
            }
        };

        // Only interior corners within a run of line commands can bend.
        let next = match path.get(i + 1) {
            Some(PathCommand::LineTo(p)) => *p,
            _ => {
                out.push(PathCommand::LineTo(corner));
                continue;
            }
        };
        let prev = path[i - 1].end_point();

        let d_prev = corner.distance(prev);
        let d_next = corner.distance(next);
        let r = radius.min(d_prev - 0.1).min(d_next - 0.1);

        if !is_bendable(prev, corner, next) || r <= 0.0 {
            out.push(PathCommand::LineTo(corner));
            continue;
        }

        let toward_prev = (prev - corner) / d_prev;
        let toward_next = (next - corner) / d_next;
        out.push(PathCommand::LineTo(corner + toward_prev * r));
        out.push(PathCommand::CurveTo {
            c1: corner + toward_prev * r,
            c2: corner,
            to: corner + toward_next * r,
        });
    }

    out
}

/// Serialize to SVG path data: `M x,y L x,y C x1,y1 x2,y2 x,y ...`.
pub fn path_to_d(path: &SvgPath) -> String {
    let mut d = String::new();
    for command in path {
        if !d.is_empty() {
            d.push(' ');
        }
        match *command {
            PathCommand::MoveTo(p) => {
                let _ = write!(d, "M {},{}", p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                let _ = write!(d, "L {},{}", p.x, p.y);
            }
            PathCommand::CurveTo { c1, c2, to } => {
                let _ = write!(d, "C {},{} {},{} {},{}", c1.x, c1.y, c2.x, c2.y, to.x, to.y);
            }
        }
    }
    d
}
