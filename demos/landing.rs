//! Render the arrow overlay for a small two-section landing layout and print
//! the SVG to stdout.
//!
//! Run with `--features tracing` to see the router's debug output.

use std::collections::HashMap;

use orthoarrow::{
    ATTR_SOURCE, ATTR_SOURCE_SIDE, ATTR_STROKE, ATTR_TARGET, ATTR_TARGET_SIDE, Overlay, Point,
    Rect,
};

fn main() -> miette::Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Measured layout: a hero banner, a feature card below it, and a call to
    // action in the lower right.
    let mut rects = HashMap::new();
    rects.insert("hero".to_string(), Rect::new(40.0, 40.0, 400.0, 120.0));
    rects.insert("features".to_string(), Rect::new(40.0, 240.0, 260.0, 160.0));
    rects.insert("cta".to_string(), Rect::new(420.0, 300.0, 160.0, 60.0));

    let mut overlay = Overlay::new(Point::ZERO);
    overlay.register_element("hero", &[(ATTR_SOURCE, "tour")])?;
    overlay.register_element("features", &[(ATTR_TARGET, "tour")])?;
    overlay.register_element("cta", &[(ATTR_SOURCE, "signup")])?;
    overlay.register_element(
        "features",
        &[
            (ATTR_TARGET, "signup"),
            (ATTR_SOURCE_SIDE, "left"),
            (ATTR_TARGET_SIDE, "right"),
            (ATTR_STROKE, "coral"),
        ],
    )?;

    overlay.redraw(&rects);
    println!("{}", overlay.to_svg());
    Ok(())
}
