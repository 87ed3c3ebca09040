use crate::foundation::core::ElementKind;

/// Convenience result type used across spritehost.
pub type HostResult<T> = Result<T, HostError>;

/// Error taxonomy returned by registry, boundary, and configuration APIs.
#[derive(thiserror::Error, Debug)]
pub enum HostError {
    /// The call addressed an id absent from the relevant table (or of the wrong kind).
    #[error("not found: {kind} {id}")]
    NotFound {
        /// Table the id was looked up in.
        kind: ElementKind,
        /// Requested id.
        id: u32,
    },

    /// A pixel write landed outside the bitmap surface.
    #[error("out of bounds: pixel ({x}, {y}) outside {width}x{height} bitmap {id}")]
    OutOfBounds {
        /// Bitmap sprite id.
        id: u32,
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Bitmap width.
        width: u32,
        /// Bitmap height.
        height: u32,
    },

    /// A surface was requested with non-positive or over-limit dimensions.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },

    /// Invalid caller-provided data (settings, scripts, asset names).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HostError {
    /// Build a [`HostError::NotFound`] value.
    pub fn not_found(kind: ElementKind, id: u32) -> Self {
        Self::NotFound { kind, id }
    }

    /// Build a [`HostError::InvalidDimensions`] value.
    pub fn invalid_dimensions(width: impl Into<i64>, height: impl Into<i64>) -> Self {
        Self::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Build a [`HostError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HostError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for [`HostError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for HostError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
