/// Convenience result type used across vidmark.
pub type VidmarkResult<T> = Result<T, VidmarkError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Input misses (a click outside the video frame, a drag on an id that no longer exists) are not
/// errors; handlers report those through their outcome values instead.
#[derive(thiserror::Error, Debug)]
pub enum VidmarkError {
    /// Invalid user-provided configuration or annotation data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The host media engine refused an operation.
    #[error("playback error: {0}")]
    Playback(String),

    /// The upload collaborator failed.
    #[error("upload error: {0}")]
    Upload(String),

    /// The render collaborator failed.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VidmarkError {
    /// Build a [`VidmarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VidmarkError::Playback`] value.
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Build a [`VidmarkError::Upload`] value.
    pub fn upload(msg: impl Into<String>) -> Self {
        Self::Upload(msg.into())
    }

    /// Build a [`VidmarkError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`VidmarkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
