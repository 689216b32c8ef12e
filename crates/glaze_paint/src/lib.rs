//! Glaze painting primitives
//!
//! The paint data model the engine rasterizer consumes:
//!
//! - Packed ARGB colors with luminance and interpolation helpers
//! - Paint attribute sets (blend mode, stroke geometry, filters, shaders)
//! - Gradient shaders compiled to an inverse-transform sampling record
//! - Mask and color filters
//!
//! All of these are value snapshots: built on the UI thread, handed to the
//! rasterizer per draw call, never shared across threads or mutated in
//! flight.

pub mod blend;
pub mod canvas;
pub mod color;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod gradient;
pub mod paint;
pub mod xform;

pub use blend::BlendMode;
pub use canvas::{Canvas, Clip};
pub use color::Color;
pub use error::{PaintError, Result};
pub use filter::{BlurStyle, ColorFilter, MaskFilter};
pub use geometry::{align_to_pixel, Offset, Rect, Size};
pub use gradient::{Gradient, GradientParams, PaintShader, TileMode};
pub use paint::{FilterMode, Paint, PaintingStyle, StrokeCap, StrokeJoin};
pub use xform::Affine;
