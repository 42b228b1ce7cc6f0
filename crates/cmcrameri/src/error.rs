//! Loader and registry errors.

use std::path::PathBuf;

use cmcrameri_core::CoreError;
use thiserror::Error;

/// Mismatch between the shipped data files and the static name tables.
///
/// These are packaging defects: the data set cannot be loaded until the
/// files or the tables are fixed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackagingViolation {
    #[error("{name} not categorized properly: matched {matches} categories")]
    Uncategorized { name: String, matches: usize },

    #[error("{name}: base {base:?} is not eligible for a {kind} variant")]
    NotEligible {
        name: String,
        base: String,
        kind: &'static str,
    },

    #[error("{name}: N should be {expected} but is {got}")]
    SampleCount {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("{name}: expected 3 or 4 colour channels, got {got}")]
    ChannelCount { name: String, got: usize },

    #[error("{name}: sample {index} has a channel outside [0, 1]")]
    ValueOutOfRange { name: String, index: usize },

    #[error("{name}: file name is not valid UTF-8")]
    InvalidName { name: String },
}

#[derive(Debug, Error)]
pub enum ColormapError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid colour table {}: {source}", path.display())]
    Matrix { path: PathBuf, source: CoreError },

    #[error("packaging invariant violated: {0}")]
    Packaging(#[from] PackagingViolation),

    #[error("colour map already registered: {0}")]
    DuplicateName(String),

    #[error("unknown colour map: {0}")]
    UnknownColormap(String),

    #[error("preview of {width_cells}x{height_cells} cells does not fit in an image")]
    PreviewTooLarge {
        width_cells: usize,
        height_cells: usize,
    },

    #[error("preview image error: {0}")]
    Image(#[from] image::ImageError),
}

impl ColormapError {
    /// True for errors caused by inconsistent data files and name tables.
    pub fn is_packaging_violation(&self) -> bool {
        matches!(self, Self::Packaging(_))
    }
}

/// Result type alias for loader and registry operations.
pub type ColormapResult<T> = std::result::Result<T, ColormapError>;
