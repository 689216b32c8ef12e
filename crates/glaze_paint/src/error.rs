//! Painting error types

use thiserror::Error;

/// Errors from painting primitives
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PaintError {
    /// The affine basis has no inverse
    #[error("transform is singular (determinant {det})")]
    SingularTransform { det: f32 },
}

/// Result type for painting operations
pub type Result<T> = std::result::Result<T, PaintError>;
