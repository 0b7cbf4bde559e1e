//! Connector overlay: binds declarative edge attributes to live geometry.
//!
//! The original implementation scanned the DOM for `data-edge-*` attributes
//! and mutated a global `<svg>` appended to `document.body`. Here the overlay
//! is an explicit component: the host registers elements (id plus attribute
//! map), supplies live rectangles through [`GeometrySource`], and drives
//! `redraw`/`redraw_edge` from whatever resize signals it has. Redraw is a
//! pure function of the supplied geometry, so repeated calls with unchanged
//! layout produce byte-identical path data.

use std::collections::{BTreeMap, HashMap};

use crate::defaults;
use crate::errors::ConfigError;
use crate::log::{debug, warn};
use crate::path::{bend_path, path_to_d, svg_path_from_segments};
use crate::rect::Rect;
use crate::route::{RouteOptions, inner_grid_lines, line_segments_from_grid_lines};
use crate::types::{Point, Side};

/// Attribute names, mirroring the original DOM data-attribute contract.
pub const ATTR_SOURCE: &str = "data-edge-source";
pub const ATTR_TARGET: &str = "data-edge-target";
pub const ATTR_SOURCE_SIDE: &str = "data-edge-source-side";
pub const ATTR_TARGET_SIDE: &str = "data-edge-target-side";
pub const ATTR_SOURCE_POSITION: &str = "data-edge-source-position";
pub const ATTR_TARGET_POSITION: &str = "data-edge-target-position";
pub const ATTR_BEND_POSITION: &str = "data-edge-bend-position";
pub const ATTR_STROKE: &str = "data-edge-stroke";

/// Live rectangle lookup, the seam where a host plugs in its measurements
/// (for a browser host, `getBoundingClientRect` per element id).
pub trait GeometrySource {
    fn rect_of(&self, id: &str) -> Option<Rect>;
}

impl GeometrySource for HashMap<String, Rect> {
    fn rect_of(&self, id: &str) -> Option<Rect> {
        self.get(id).copied()
    }
}

impl GeometrySource for BTreeMap<String, Rect> {
    fn rect_of(&self, id: &str) -> Option<Rect> {
        self.get(id).copied()
    }
}

impl<F> GeometrySource for F
where
    F: Fn(&str) -> Option<Rect>,
{
    fn rect_of(&self, id: &str) -> Option<Rect> {
        self(id)
    }
}

/// Per-pair configuration, parsed from the declaring element's attributes.
///
/// Side names are validated (a bad side is a caller bug); numeric attributes
/// that fail to parse silently fall back to their defaults, matching the
/// original's `parseFloat` behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeConfig {
    pub source_side: Side,
    pub target_side: Side,
    pub source_position: f64,
    pub target_position: f64,
    pub bend_position: f64,
    pub stroke: String,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            source_side: defaults::SOURCE_SIDE,
            target_side: defaults::TARGET_SIDE,
            source_position: defaults::SIDE_POSITION,
            target_position: defaults::SIDE_POSITION,
            bend_position: defaults::BEND_POSITION,
            stroke: defaults::STROKE.to_string(),
        }
    }
}

impl EdgeConfig {
    fn from_attrs(attrs: &BTreeMap<&str, &str>) -> Result<Self, ConfigError> {
        let mut config = EdgeConfig::default();
        if let Some(side) = attrs.get(ATTR_SOURCE_SIDE) {
            config.source_side = side.parse()?;
        }
        if let Some(side) = attrs.get(ATTR_TARGET_SIDE) {
            config.target_side = side.parse()?;
        }
        config.source_position =
            parse_float(attrs.get(ATTR_SOURCE_POSITION)).unwrap_or(config.source_position);
        config.target_position =
            parse_float(attrs.get(ATTR_TARGET_POSITION)).unwrap_or(config.target_position);
        config.bend_position =
            parse_float(attrs.get(ATTR_BEND_POSITION)).unwrap_or(config.bend_position);
        if let Some(stroke) = attrs.get(ATTR_STROKE) {
            config.stroke = (*stroke).to_string();
        }
        Ok(config)
    }
}

fn parse_float(value: Option<&&str>) -> Option<f64> {
    value.and_then(|v| v.trim().parse::<f64>().ok())
}

/// One declared connector: drawn from the element that published the source
/// key to the element that referenced it.
#[derive(Debug, Clone)]
struct Edge {
    source_key: String,
    target_element: String,
    config: EdgeConfig,
    /// Path data from the last redraw; `None` until drawn, or when either
    /// endpoint could not be resolved.
    d: Option<String>,
}

/// The overlay component owning the connector set and its rendered markup.
#[derive(Debug, Clone)]
pub struct Overlay {
    /// Offset of the overlay SVG's local space within the host's coordinate
    /// space; subtracted from every measured rectangle before routing.
    origin: Point,
    bend_radius: f64,
    /// Source key -> id of the element that declared it.
    sources: BTreeMap<String, String>,
    edges: Vec<Edge>,
}

impl Overlay {
    /// Create an overlay whose local space starts at `origin` in host
    /// coordinates. Pass `Point::ZERO` when both spaces coincide.
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            bend_radius: defaults::BEND_RADIUS,
            sources: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    /// Override the corner-rounding radius for subsequently drawn paths.
    pub fn set_bend_radius(&mut self, radius: f64) {
        self.bend_radius = radius;
    }

    /// Register one element's attribute map.
    ///
    /// An element may publish a source key (`data-edge-source`), declare a
    /// connector toward some source (`data-edge-target` plus optional
    /// per-pair configuration), both, or neither.
    pub fn register_element(
        &mut self,
        id: impl Into<String>,
        attrs: &[(&str, &str)],
    ) -> Result<(), ConfigError> {
        let id = id.into();
        let attrs: BTreeMap<&str, &str> = attrs.iter().copied().collect();

        if let Some(key) = attrs.get(ATTR_SOURCE) {
            if key.is_empty() {
                return Err(ConfigError::EmptySourceKey);
            }
            if self.sources.contains_key(*key) {
                return Err(ConfigError::DuplicateSourceKey {
                    key: (*key).to_string(),
                });
            }
            self.sources.insert((*key).to_string(), id.clone());
        }

        if let Some(key) = attrs.get(ATTR_TARGET) {
            let config = EdgeConfig::from_attrs(&attrs)?;
            self.edges.push(Edge {
                source_key: (*key).to_string(),
                target_element: id,
                config,
                d: None,
            });
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Path data of the first connector declared against `source_key`, if it
    /// has been drawn.
    pub fn edge_path(&self, source_key: &str) -> Option<&str> {
        self.edges
            .iter()
            .find(|e| e.source_key == source_key)
            .and_then(|e| e.d.as_deref())
    }

    /// Recompute every connector from current geometry (the window-resize
    /// path of the original).
    pub fn redraw(&mut self, geometry: &impl GeometrySource) {
        for i in 0..self.edges.len() {
            self.redraw_index(i, geometry);
        }
    }

    /// Recompute only the connectors declared against `source_key` (the
    /// per-pair resize-observer path).
    pub fn redraw_edge(&mut self, source_key: &str, geometry: &impl GeometrySource) {
        for i in 0..self.edges.len() {
            if self.edges[i].source_key == source_key {
                self.redraw_index(i, geometry);
            }
        }
    }

    fn redraw_index(&mut self, index: usize, geometry: &impl GeometrySource) {
        let edge = &self.edges[index];

        // A target pointing at an unregistered key, or an element the host
        // cannot measure, is skipped silently: a missing arrow simply does
        // not render.
        let Some(source_element) = self.sources.get(&edge.source_key) else {
            warn!(key = %edge.source_key, "no source element for edge target");
            self.edges[index].d = None;
            return;
        };
        let (Some(source_rect), Some(target_rect)) = (
            geometry.rect_of(source_element),
            geometry.rect_of(&edge.target_element),
        ) else {
            warn!(key = %edge.source_key, "edge endpoint has no measurable geometry");
            self.edges[index].d = None;
            return;
        };

        let d = self.route(source_rect, target_rect, &edge.config);
        debug!(key = %edge.source_key, d = %d, "drew edge");
        self.edges[index].d = Some(d);
    }

    fn route(&self, source_rect: Rect, target_rect: Rect, config: &EdgeConfig) -> String {
        let source_rect = source_rect.translate_by(-self.origin);
        let target_rect = target_rect.translate_by(-self.origin);

        let source = source_rect.relative_side(config.source_side, config.source_position);
        let target = target_rect.relative_side(config.target_side, config.target_position);

        let options = RouteOptions {
            bend_position: config.bend_position,
            ..RouteOptions::default()
        };
        let lines = inner_grid_lines(source, target, options);
        let segments = line_segments_from_grid_lines(source, &lines, target);
        let path = svg_path_from_segments(&segments, target.side, defaults::ARROW_GAP);
        path_to_d(&bend_path(&path, self.bend_radius))
    }

    /// Render the overlay markup: one `<svg>` with a shared arrowhead marker
    /// and one `<path class="edge">` per drawn connector, in declaration
    /// order. The overlay is position-fixed over the host and ignores
    /// pointer events.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<svg id=\"{}\" style=\"position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;overflow:visible\">\n",
            defaults::OVERLAY_ID
        ));
        out.push_str("  <defs>\n");
        out.push_str(&format!(
            "    <marker id=\"{}\" viewBox=\"0 0 10 10\" refX=\"5\" refY=\"5\" markerWidth=\"6\" markerHeight=\"6\" orient=\"auto-start-reverse\">\n",
            defaults::MARKER_ID
        ));
        out.push_str("      <path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"context-stroke\"/>\n");
        out.push_str("    </marker>\n");
        out.push_str("  </defs>\n");

        for edge in &self.edges {
            let Some(d) = &edge.d else { continue };
            out.push_str(&format!(
                "  <path class=\"edge\" d=\"{}\" fill=\"none\" stroke=\"{}\" marker-end=\"url(#{})\"/>\n",
                escape_attr(d),
                escape_attr(&edge.config.stroke),
                defaults::MARKER_ID
            ));
        }

        out.push_str("</svg>");
        out
    }
}

/// Escape a string for embedding in a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
