/// Result alias used throughout the crate.
pub type HaloResult<T> = Result<T, HaloError>;

/// Error type for parameter handling and rendering.
#[derive(thiserror::Error, Debug)]
pub enum HaloError {
    /// Caller-supplied input is out of contract (surface size, FPS, ranges).
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal raster operation misuse (buffer sizes, kernels).
    #[error("render error: {0}")]
    Render(String),

    /// Parameter JSON could not be read or written.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HaloError {
    /// Build a [`HaloError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HaloError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`HaloError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
