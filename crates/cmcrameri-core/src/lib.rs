//! cmcrameri core - foundation types for colour map packaging
//!
//! This crate provides the building blocks shared by the loader and tools:
//! - RGBA colour samples
//! - Whitespace-delimited numeric matrix loading
//! - Core error types

pub mod color;
pub mod error;
pub mod matrix;

pub use color::Color;
pub use error::{CoreError, CoreResult};
pub use matrix::{load_matrix, parse_matrix, Matrix};

/// Sample count constants for the shipped colour map data.
pub mod samples {
    /// Samples in a continuous (sequential, diverging, multi-sequential, cyclic) map.
    pub const CONTINUOUS: usize = 256;

    /// Samples in a categorical palette.
    pub const CATEGORICAL: usize = 100;
}
