use std::fmt;

use crate::rigid_body::ShapeKind;

/// Errors surfaced by the engine
///
/// A zero-length `Vec2::unit()` is deliberately not represented here: it
/// yields non-finite components that flow on through the frame.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// A shape was asked for geometry it does not implement.
    UnimplementedCapability {
        shape: ShapeKind,
        capability: &'static str,
    },
    /// A matrix operation was invoked on operands of the wrong shape.
    /// `rows` x `columns` is the left operand; binary ops also carry the
    /// right one.
    InvalidDimension {
        op: &'static str,
        rows: usize,
        columns: usize,
        rhs: Option<(usize, usize)>,
    },
    /// Body construction parameters out of range.
    InvalidBody(String),
    /// Configuration could not be parsed.
    Config(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnimplementedCapability { shape, capability } => {
                write!(f, "{} does not implement {}", shape.name(), capability)
            }
            EngineError::InvalidDimension { op, rows, columns, rhs: None } => {
                write!(f, "{} is undefined for a {}x{} matrix", op, rows, columns)
            }
            EngineError::InvalidDimension { op, rows, columns, rhs: Some((r, c)) } => {
                write!(f, "{} is undefined for {}x{} and {}x{} matrices", op, rows, columns, r, c)
            }
            EngineError::InvalidBody(msg) => write!(f, "invalid body: {}", msg),
            EngineError::Config(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Config(err.to_string())
    }
}
