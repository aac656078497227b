//! Error types surfaced by the viewer.

use thiserror::Error;

/// Errors the viewer can report to its host.
///
/// A zero-sized container or an image that has not loaded yet is not an
/// error; engine operations simply do nothing in that case.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// Network or decoding failure while fetching the source
    #[error("failed to load image: {src}")]
    ImageLoad { src: String },

    /// The image decoded but reported zero natural dimensions
    #[error("image has no usable dimensions: {src}")]
    InvalidImage { src: String },

    /// A configuration override was rejected
    #[error("invalid viewer config: {0}")]
    Config(String),

    /// A required browser object was unavailable
    #[error("DOM unavailable: {0}")]
    Dom(String),
}
