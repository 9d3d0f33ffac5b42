use thiserror::Error;

/// Errors raised while reading a layout description. Builders themselves
/// never fail; these only cover the notation and JSON front doors.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("unknown breakpoint `{0}` (expected a name like `tablet` or an infix like `md`)")]
    UnknownBreakpoint(String),

    #[error("rule `{0}` has no value after its breakpoint")]
    EmptyValue(String),

    #[error("invalid layout document: {0}")]
    Json(#[from] serde_json::Error),
}
