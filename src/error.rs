use miette::Diagnostic;
use thiserror::Error;

use crate::geometry::IntVector2;

/// Main error type for pxshape operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Cannot build {what} from an empty collection")]
    #[diagnostic(code(pxshape::empty_input))]
    EmptyInput { what: &'static str },

    #[error("Line {index} ends at {end} but line {} starts at {start}", .index + 1)]
    #[diagnostic(
        code(pxshape::disconnected),
        help("Consecutive lines must meet within one pixel (including diagonally)")
    )]
    Disconnected {
        index: usize,
        end: IntVector2,
        start: IntVector2,
    },

    #[error("{what} {value} is out of range {min}..={max}")]
    #[diagnostic(code(pxshape::out_of_range))]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Winding number is only defined for loops")]
    #[diagnostic(
        code(pxshape::not_a_loop),
        help("A path is a loop when its end is within one pixel of its start")
    )]
    NotALoop,

    #[error("Winding number is undefined for {point}, which lies on the path")]
    #[diagnostic(code(pxshape::point_on_path))]
    PointOnPath { point: IntVector2 },

    #[error("Unknown {kind}: {value}")]
    #[diagnostic(code(pxshape::unknown_variant))]
    UnknownVariant {
        kind: &'static str,
        value: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(pxshape::invalid_parameter))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{shape} does not support {transform}")]
    #[diagnostic(
        code(pxshape::unsupported_transform),
        help("Isometric shapes only keep their projection under point reflections and vertical/horizontal flips")
    )]
    UnsupportedTransform {
        shape: &'static str,
        transform: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxshape::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxshape::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },
}

impl ShapeError {
    /// Range error for an integer query outside `min..=max`.
    pub fn out_of_range(what: &'static str, value: impl Into<i64>, min: impl Into<i64>, max: impl Into<i64>) -> Self {
        Self::OutOfRange {
            what,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;
