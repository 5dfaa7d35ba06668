//! Error types and result utilities for bit-depth analysis.

use std::path::Path;

use thiserror::Error;

/// Convenience type alias for results that may contain an [`AudioAnalysisError`].
pub type AudioAnalysisResult<T> = Result<T, AudioAnalysisError>;

/// Error types that can occur while loading, analysing or rendering audio.
///
/// Every variant is fatal for the run that produced it. Inputs are static
/// in-memory buffers, so re-running without changing the input cannot succeed.
#[derive(Error, Debug)]
pub enum AudioAnalysisError {
    /// The codec could not decode the source file.
    #[error("Failed to load audio from '{path}': {reason}")]
    Load {
        /// Path of the file that failed to decode.
        path: String,
        /// Underlying codec message.
        reason: String,
    },

    /// The codec could not encode or write the destination file.
    #[error("Failed to save audio to '{path}': {reason}")]
    Save {
        /// Path of the file that failed to write.
        path: String,
        /// Underlying codec message.
        reason: String,
    },

    /// The raw buffer does not have the shape the analysis expects
    /// (wrong channel count, odd interleaved length, zero sample rate).
    #[error("Input shape error: {0}")]
    InputShape(String),

    /// A configuration value is out of its valid range.
    ///
    /// Raised before any processing starts.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Two buffers that must be compared sample by sample have different lengths.
    #[error("Length mismatch: original has {original} samples, processed has {processed}")]
    LengthMismatch {
        /// Length of the reference buffer.
        original: usize,
        /// Length of the processed buffer.
        processed: usize,
    },

    /// An operation that needs at least one sample was given none.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// The renderer failed to produce its artifact.
    #[error("Render error for '{id}': {reason}")]
    Render {
        /// Output identifier of the plot.
        id: String,
        /// Underlying renderer message.
        reason: String,
    },

    /// Filesystem bookkeeping failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AudioAnalysisError {
    /// Builds a [`AudioAnalysisError::Load`] for `path`.
    pub fn load(path: &Path, reason: impl ToString) -> Self {
        Self::Load {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Builds a [`AudioAnalysisError::Save`] for `path`.
    pub fn save(path: &Path, reason: impl ToString) -> Self {
        Self::Save {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Builds a [`AudioAnalysisError::InputShape`].
    pub fn input_shape(msg: impl Into<String>) -> Self {
        Self::InputShape(msg.into())
    }

    /// Builds a [`AudioAnalysisError::Configuration`].
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Builds a [`AudioAnalysisError::EmptyInput`].
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Builds a [`AudioAnalysisError::Render`].
    pub fn render(id: &str, reason: impl ToString) -> Self {
        Self::Render {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }
}
