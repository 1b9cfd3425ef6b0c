/// Convenience result type used across quadfade.
pub type QuadfadeResult<T> = Result<T, QuadfadeError>;

/// Top-level error taxonomy.
///
/// The degrade algorithm itself never fails; errors only come from option validation,
/// thread-pool setup, config loading and the file-format adapter.
#[derive(thiserror::Error, Debug)]
pub enum QuadfadeError {
    /// Invalid user-provided options or image shape.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding or encoding an image container.
    #[error("codec error: {0}")]
    Codec(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QuadfadeError {
    /// Build a [`QuadfadeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QuadfadeError::Codec`] value.
    pub fn codec(msg: impl Into<String>) -> Self {
        Self::Codec(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
