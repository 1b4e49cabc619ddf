/// Crate-wide result alias.
pub type FolioResult<T> = Result<T, FolioError>;

/// Errors raised while building motion, navigation and content state.
///
/// Cosmetic subsystems convert these into logged no-ops at the site boundary; they never
/// block navigation or primary content.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid user-provided data (ranges, offsets, configuration).
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation primitive could not produce a value.
    #[error("animation error: {0}")]
    Animation(String),

    /// The blog content source failed or returned unusable data.
    #[error("content error: {0}")]
    Content(String),

    /// A path or route could not be resolved.
    #[error("navigation error: {0}")]
    Navigation(String),

    /// Encoding or decoding JSON failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, preserving its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`FolioError::Content`].
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`FolioError::Navigation`].
    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::Navigation(msg.into())
    }

    /// Build a [`FolioError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
