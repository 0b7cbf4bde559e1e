//! Orthogonal router core.
//!
//! Given two side-anchored points, computes the grid lines (axis-aligned
//! waypoint constraints) an orthogonal connector must pass through, then
//! expands source, grid lines and target into a connected run of
//! horizontal/vertical legs.
//!
//! No stage here can fail: degenerate anchors produce zero-length legs, which
//! serialize to valid (if invisible) path data.

use crate::defaults;
use crate::log::debug;
use crate::types::{Axis, GridLine, LineSegment, Point, Ray, SidePoint};
use glam::dvec2;

/// Tuning knobs for grid-line computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteOptions {
    /// Outward clearance inserted before a detour turns.
    pub padding: f64,
    /// 0–1 fraction choosing where, along the shared axis between two aligned
    /// anchors, the single bend occurs.
    pub bend_position: f64,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            padding: defaults::GRID_PADDING,
            bend_position: defaults::BEND_POSITION,
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Facing pre-check: do two outward rays already point at each other, so a
/// single straight leg suffices?
///
/// The test is four strict inequalities on per-axis dot products. Every
/// side-derived ray has a zero direction component, so one product is always
/// zero and the check never passes for anchors produced from rectangle
/// sides; it only short-circuits for rays with direction on both axes.
/// Kept as observed behavior rather than a true segment-intersection test.
pub fn ortho_rays_intersect(a: &Ray, b: &Ray) -> bool {
    a.dx * (b.x - a.x) > 0.0
        && a.dy * (b.y - a.y) > 0.0
        && b.dx * (a.x - b.x) > 0.0
        && b.dy * (a.y - b.y) > 0.0
}

/// Compute the interior grid lines for an orthogonal path from `source` to
/// `target`.
///
/// The case analysis is driven by which axis each anchor exits along:
///
/// - mixed axes: one pad line out of each anchor, source first;
/// - same axis, opposite sides with a clear channel between them: a single
///   line at the `bend_position`-weighted coordinate;
/// - same axis, opposite sides, obstructed: a U-shaped detour (pad out,
///   cross-axis interpolation, pad out);
/// - same axis, same side: one shared channel at the padded outward extreme
///   of the further-out anchor.
pub fn inner_grid_lines(source: SidePoint, target: SidePoint, opts: RouteOptions) -> Vec<GridLine> {
    if ortho_rays_intersect(&source.ray(), &target.ray()) {
        return Vec::new();
    }

    let sf = source.side.factor();
    let tf = target.side.factor();
    let (s, t) = (source.point, target.point);
    let p = opts.padding;

    let lines = match (source.side.axis(), target.side.axis()) {
        (Axis::X, Axis::Y) => vec![
            GridLine::X(s.x + p * sf.x),
            GridLine::Y(t.y + p * tf.y),
        ],
        (Axis::Y, Axis::X) => vec![
            GridLine::Y(s.y + p * sf.y),
            GridLine::X(t.x + p * tf.x),
        ],
        (Axis::X, Axis::X) => {
            if source.side == target.side {
                let outermost = if sf.x > 0.0 { s.x.max(t.x) } else { s.x.min(t.x) };
                vec![GridLine::X(outermost + p * sf.x)]
            } else if (t.x - s.x) * sf.x > 0.0 {
                // Clear horizontal channel between the anchors.
                vec![GridLine::X(lerp(s.x, t.x, opts.bend_position))]
            } else {
                vec![
                    GridLine::X(s.x + p * sf.x),
                    GridLine::Y(lerp(s.y, t.y, opts.bend_position)),
                    GridLine::X(t.x + p * tf.x),
                ]
            }
        }
        (Axis::Y, Axis::Y) => {
            if source.side == target.side {
                let outermost = if sf.y > 0.0 { s.y.max(t.y) } else { s.y.min(t.y) };
                vec![GridLine::Y(outermost + p * sf.y)]
            } else if (t.y - s.y) * sf.y > 0.0 {
                vec![GridLine::Y(lerp(s.y, t.y, opts.bend_position))]
            } else {
                vec![
                    GridLine::Y(s.y + p * sf.y),
                    GridLine::X(lerp(s.x, t.x, opts.bend_position)),
                    GridLine::Y(t.y + p * tf.y),
                ]
            }
        }
    };

    debug!(?source, ?target, ?lines, "computed grid lines");
    lines
}

/// Expand source point, grid lines and target point into connected
/// axis-aligned legs.
///
/// The first leg travels along the source's exit axis; each grid line fixes
/// the coordinate of the next corner. Before the target, an implicit corner
/// is inserted when needed so the final leg enters along the target's entry
/// axis. Consecutive legs share an endpoint, and zero-length legs are kept
/// rather than filtered (corner rounding skips them later).
pub fn line_segments_from_grid_lines(
    source: SidePoint,
    grid_lines: &[GridLine],
    target: SidePoint,
) -> Vec<LineSegment> {
    let mut points: Vec<Point> = Vec::with_capacity(grid_lines.len() + 3);
    points.push(source.point);

    for line in grid_lines {
        let prev = *points.last().expect("points starts non-empty");
        let next = match *line {
            GridLine::X(x) => dvec2(x, prev.y),
            GridLine::Y(y) => dvec2(prev.x, y),
        };
        points.push(next);
    }

    // Enter the target perpendicular to its side: the final leg runs along
    // the target's exit axis, so the corner before it must align on the
    // other axis.
    let last = *points.last().expect("points starts non-empty");
    match target.side.axis() {
        Axis::X => {
            if last.y != target.point.y {
                points.push(dvec2(last.x, target.point.y));
            }
        }
        Axis::Y => {
            if last.x != target.point.x {
                points.push(dvec2(target.point.x, last.y));
            }
        }
    }
    points.push(target.point);

    points
        .windows(2)
        .map(|pair| LineSegment::new(pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;
    use crate::types::Side;

    fn anchor(x: f64, y: f64, side: Side) -> SidePoint {
        SidePoint::new(dvec2(x, y), side)
    }

    #[test]
    fn facing_rays_with_zero_component_never_short_circuit() {
        // Anti-parallel, collinear, facing: still false under the strict
        // test, so side anchors always reach the grid-line case analysis.
        let a = Ray { x: 10.0, y: 5.0, dx: 1.0, dy: 0.0 };
        let b = Ray { x: 100.0, y: 5.0, dx: -1.0, dy: 0.0 };
        assert!(!ortho_rays_intersect(&a, &b));
    }

    #[test]
    fn diagonal_facing_rays_intersect() {
        let a = Ray { x: 0.0, y: 0.0, dx: 1.0, dy: 1.0 };
        let b = Ray { x: 10.0, y: 10.0, dx: -1.0, dy: -1.0 };
        assert!(ortho_rays_intersect(&a, &b));

        // Same-direction rays never face each other.
        let c = Ray { x: 10.0, y: 10.0, dx: 1.0, dy: 1.0 };
        assert!(!ortho_rays_intersect(&a, &c));
    }

    #[test]
    fn facing_opposite_sides_get_one_weighted_line() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(100.0, 0.0, 10.0, 10.0);
        let source = a.relative_side(Side::Right, 0.5);
        let target = b.relative_side(Side::Left, 0.5);

        let lines = inner_grid_lines(source, target, RouteOptions::default());
        assert_eq!(lines, vec![GridLine::X(55.0)]);

        let lines = inner_grid_lines(
            source,
            target,
            RouteOptions {
                bend_position: 0.25,
                ..Default::default()
            },
        );
        assert_eq!(lines, vec![GridLine::X(32.5)]);
    }

    #[test]
    fn obstructed_opposite_sides_get_u_detour() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(100.0, 0.0, 10.0, 10.0);
        // Exiting away from each other: route around both rectangles.
        let source = a.relative_side(Side::Left, 0.5);
        let target = b.relative_side(Side::Right, 0.5);

        let lines = inner_grid_lines(source, target, RouteOptions::default());
        assert_eq!(
            lines,
            vec![GridLine::X(-20.0), GridLine::Y(5.0), GridLine::X(130.0)]
        );
    }

    #[test]
    fn mixed_axes_pad_out_of_both_anchors() {
        let source = anchor(0.0, 0.0, Side::Bottom);
        let target = anchor(50.0, 50.0, Side::Left);

        let lines = inner_grid_lines(source, target, RouteOptions::default());
        assert_eq!(lines, vec![GridLine::Y(20.0), GridLine::X(30.0)]);
    }

    #[test]
    fn same_side_shares_an_outer_channel() {
        let source = anchor(10.0, 5.0, Side::Right);
        let target = anchor(110.0, 45.0, Side::Right);
        let lines = inner_grid_lines(source, target, RouteOptions::default());
        assert_eq!(lines, vec![GridLine::X(130.0)]);

        let source = anchor(10.0, 5.0, Side::Left);
        let target = anchor(110.0, 45.0, Side::Left);
        let lines = inner_grid_lines(source, target, RouteOptions::default());
        assert_eq!(lines, vec![GridLine::X(-10.0)]);
    }

    #[test]
    fn horizontal_pairs_mirror_vertical_pairs() {
        // Facing top/bottom anchors with a clear vertical channel.
        let source = anchor(5.0, 10.0, Side::Bottom);
        let target = anchor(5.0, 100.0, Side::Top);
        let lines = inner_grid_lines(source, target, RouteOptions::default());
        assert_eq!(lines, vec![GridLine::Y(55.0)]);

        // Facing away: U detour in y.
        let source = anchor(5.0, 10.0, Side::Top);
        let target = anchor(65.0, 100.0, Side::Bottom);
        let lines = inner_grid_lines(source, target, RouteOptions::default());
        assert_eq!(
            lines,
            vec![GridLine::Y(-10.0), GridLine::X(35.0), GridLine::Y(120.0)]
        );
    }

    #[test]
    fn segments_alternate_and_share_endpoints() {
        let source = anchor(0.0, 0.0, Side::Bottom);
        let target = anchor(50.0, 50.0, Side::Left);
        let lines = inner_grid_lines(source, target, RouteOptions::default());
        let segments = line_segments_from_grid_lines(source, &lines, target);

        let expected = [
            (dvec2(0.0, 0.0), dvec2(0.0, 20.0)),
            (dvec2(0.0, 20.0), dvec2(30.0, 20.0)),
            (dvec2(30.0, 20.0), dvec2(30.0, 50.0)),
            (dvec2(30.0, 50.0), dvec2(50.0, 50.0)),
        ];
        assert_eq!(segments.len(), expected.len());
        for (seg, (from, to)) in segments.iter().zip(expected) {
            assert_eq!(seg.from, from);
            assert_eq!(seg.to, to);
            assert!(seg.is_horizontal() || seg.is_vertical());
        }
        for pair in segments.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn aligned_facing_anchors_collapse_to_collinear_legs() {
        let source = anchor(10.0, 5.0, Side::Right);
        let target = anchor(100.0, 5.0, Side::Left);
        let lines = inner_grid_lines(source, target, RouteOptions::default());
        let segments = line_segments_from_grid_lines(source, &lines, target);

        // The bend-position grid line sits on the shared y, so the "S"
        // degenerates into two collinear horizontal legs.
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.is_horizontal()));
        assert_eq!(segments[0].to, dvec2(55.0, 5.0));
        assert_eq!(segments[1].to, dvec2(100.0, 5.0));
    }

    #[test]
    fn empty_grid_lines_fall_back_to_a_direct_leg() {
        let source = anchor(10.0, 5.0, Side::Right);
        let target = anchor(100.0, 5.0, Side::Left);
        let segments = line_segments_from_grid_lines(source, &[], target);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].from, dvec2(10.0, 5.0));
        assert_eq!(segments[0].to, dvec2(100.0, 5.0));
    }

    #[test]
    fn coincident_anchors_produce_degenerate_but_valid_legs() {
        let source = anchor(5.0, 5.0, Side::Right);
        let target = anchor(5.0, 5.0, Side::Left);
        let lines = inner_grid_lines(source, target, RouteOptions::default());
        let segments = line_segments_from_grid_lines(source, &lines, target);
        assert!(!segments.is_empty());
        for pair in segments.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }
}
