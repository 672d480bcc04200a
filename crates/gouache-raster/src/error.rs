use std::fmt;

/// Errors raised by drawing, color resolution, and text layout.
///
/// Validation errors are raised synchronously at the offending call; a
/// failed call never leaves partially drawn state behind because every
/// primitive is a single atomic sequence of paint calls.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawError {
    /// A named color could not be resolved, or a palette was missing where
    /// one was required.
    InvalidColor(String),
    /// A color's channel arity does not match the draw mode, or the draw
    /// mode requested at construction is incompatible with the surface.
    InvalidMode(String),
    /// An out-of-range argument (alignment name, missing font).
    InvalidArgument(String),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::InvalidColor(msg) => write!(f, "invalid color: {msg}"),
            DrawError::InvalidMode(msg) => write!(f, "invalid mode: {msg}"),
            DrawError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for DrawError {}
