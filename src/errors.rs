//! Error types with diagnostic codes using miette.
//!
//! Geometry itself never fails: degenerate rectangles and coincident anchors
//! produce degenerate but well-formed paths. Errors are reserved for
//! declarative configuration that indicates a caller bug.

use miette::Diagnostic;
use thiserror::Error;

/// Errors in declarative connector configuration.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("unknown side: {value}")]
    #[diagnostic(
        code(orthoarrow::config::unknown_side),
        help("expected one of: left, right, top, bottom")
    )]
    UnknownSide { value: String },

    #[error("element declares edge-source without a key")]
    #[diagnostic(code(orthoarrow::config::empty_source_key))]
    EmptySourceKey,

    #[error("duplicate edge-source key: {key}")]
    #[diagnostic(
        code(orthoarrow::config::duplicate_source_key),
        help("each edge-source key must be declared by exactly one element")
    )]
    DuplicateSourceKey { key: String },
}

/// Errors in rectangle construction.
#[derive(Error, Diagnostic, Debug)]
pub enum GeometryError {
    #[error("underspecified rectangle: cannot derive {axis} extent")]
    #[diagnostic(
        code(orthoarrow::geometry::underspecified_rect),
        help("supply two of left/right/width (and top/bottom/height)")
    )]
    UnderspecifiedRect { axis: &'static str },
}
