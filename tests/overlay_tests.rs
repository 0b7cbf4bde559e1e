//! End-to-end overlay tests: register elements, redraw against measured
//! rectangles, snapshot the emitted markup.

use std::collections::HashMap;

use orthoarrow::{ATTR_SOURCE, ATTR_SOURCE_SIDE, ATTR_TARGET, ATTR_TARGET_SIDE};
use orthoarrow::{Overlay, Point, Rect, draw_arrows};

fn geometry() -> HashMap<String, Rect> {
    let mut rects = HashMap::new();
    rects.insert("hero".to_string(), Rect::new(0.0, 0.0, 100.0, 50.0));
    rects.insert("cta".to_string(), Rect::new(200.0, 100.0, 100.0, 50.0));
    rects
}

#[test]
fn overlay_markup_snapshot() {
    let mut overlay = Overlay::new(Point::ZERO);
    overlay
        .register_element("hero", &[(ATTR_SOURCE, "signup")])
        .unwrap();
    overlay
        .register_element(
            "cta",
            &[
                (ATTR_TARGET, "signup"),
                (ATTR_SOURCE_SIDE, "right"),
                (ATTR_TARGET_SIDE, "left"),
            ],
        )
        .unwrap();
    overlay.redraw(&geometry());

    insta::assert_snapshot!(overlay.to_svg(), @r##"
    <svg id="arrows" style="position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;overflow:visible">
      <defs>
        <marker id="arrow" viewBox="0 0 10 10" refX="5" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse">
          <path d="M 0 0 L 10 5 L 0 10 z" fill="context-stroke"/>
        </marker>
      </defs>
      <path class="edge" d="M 100,25 L 130,25 C 130,25 150,25 150,45 L 150,105 C 150,105 150,125 170,125 L 190,125" fill="none" stroke="white" marker-end="url(#arrow)"/>
    </svg>
    "##);
}

#[test]
fn redraw_follows_moving_geometry() {
    let mut overlay = Overlay::new(Point::ZERO);
    overlay
        .register_element("hero", &[(ATTR_SOURCE, "signup")])
        .unwrap();
    overlay
        .register_element("cta", &[(ATTR_TARGET, "signup")])
        .unwrap();

    overlay.redraw(&geometry());
    let before = overlay.edge_path("signup").unwrap().to_string();

    // Simulate a window resize shifting the target element.
    let mut moved = geometry();
    moved.insert("cta".to_string(), Rect::new(300.0, 200.0, 100.0, 50.0));
    overlay.redraw(&moved);
    let after = overlay.edge_path("signup").unwrap().to_string();

    assert_ne!(before, after);

    // Moving it back restores the original path exactly.
    overlay.redraw(&geometry());
    assert_eq!(overlay.edge_path("signup").unwrap(), before);
}

#[test]
fn closure_geometry_source() {
    let lookup = |id: &str| match id {
        "hero" => Some(Rect::new(0.0, 0.0, 100.0, 50.0)),
        "cta" => Some(Rect::new(200.0, 100.0, 100.0, 50.0)),
        _ => None,
    };

    let svg = draw_arrows(
        &[
            ("hero", &[(ATTR_SOURCE, "signup")]),
            ("cta", &[(ATTR_TARGET, "signup")]),
        ],
        &lookup,
        Point::ZERO,
    )
    .unwrap();
    assert!(svg.contains("class=\"edge\""));
}

#[test]
fn defaults_route_bottom_to_top() {
    // With no side attributes the edge leaves the source's bottom side and
    // enters the target's top side; the final leg is pulled back 10 units
    // upward from the target's top-center anchor.
    let mut overlay = Overlay::new(Point::ZERO);
    overlay
        .register_element("hero", &[(ATTR_SOURCE, "signup")])
        .unwrap();
    overlay
        .register_element("cta", &[(ATTR_TARGET, "signup")])
        .unwrap();
    overlay.redraw(&geometry());

    let d = overlay.edge_path("signup").unwrap();
    assert!(d.starts_with("M 50,50 "));
    assert!(d.ends_with("L 250,90"));
}
