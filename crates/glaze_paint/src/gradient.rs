//! Gradient shaders.
//!
//! A gradient is compiled once from its high-level description into the
//! six-parameter record the rasterizer samples per pixel: an inverse
//! affine basis, an extent, a radius, a feather width, and two colors.
//! The sampler maps each pixel through [`Gradient::inv_xform`], measures a
//! distance against the extent/radius, and interpolates between the two
//! colors over the feather width.

use bytemuck::{Pod, Zeroable};
use tracing::debug;

use crate::color::Color;
use crate::geometry::{Offset, Rect};
use crate::xform::Affine;

/// Pushes the linear parameterization origin far behind the start point,
/// so the sampler's clamp behaves identically at both ends of the segment.
const LARGE: f32 = 1e5;

/// Sampling policy outside the gradient extent.
// TODO: implement Repeated and Mirror in the engine-side sampler; until
// then every gradient clamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileMode {
    #[default]
    Clamp,
    Repeated,
    Mirror,
}

/// Shader attached to a [`Paint`](crate::Paint).
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum PaintShader {
    Gradient(Gradient),
}

/// A two-color gradient in the rasterizer's sampling form.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    /// Maps a sample point into the gradient's local space.
    pub inv_xform: Affine,
    pub extent: [f32; 2],
    pub radius: f32,
    /// Soft-edge width; never below 1.0 so the transition band cannot
    /// collapse to zero.
    pub feather: f32,
    pub inner_color: Color,
    pub outer_color: Color,
    /// Recorded for the sampler; only [`TileMode::Clamp`] is honored today.
    pub tile_mode: TileMode,
}

impl Gradient {
    /// Linear gradient along the segment from `from` to `to`.
    pub fn linear(
        from: Offset,
        to: Offset,
        color0: Color,
        color1: Color,
        tile_mode: TileMode,
    ) -> Gradient {
        let dir = to - from;
        let d = dir.distance();
        let (dx, dy) = if d > 1e-4 {
            (dir.dx / d, dir.dy / d)
        } else {
            // Degenerate segment: fall back to a vertical basis rather
            // than dividing by a near-zero length.
            debug!(?from, ?to, "degenerate linear gradient, using vertical basis");
            (0.0, 1.0)
        };

        let xform = Affine::new([
            dy,
            -dx,
            dx,
            dy,
            from.dx - dx * LARGE,
            from.dy - dy * LARGE,
        ]);

        Gradient {
            inv_xform: xform.invert_or_identity(),
            extent: [LARGE, LARGE + d * 0.5],
            radius: 0.0,
            feather: d.max(1.0),
            inner_color: color0,
            outer_color: color1,
            tile_mode,
        }
    }

    /// Radial gradient between two radii around `center`.
    pub fn radial(
        center: Offset,
        radius0: f32,
        radius1: f32,
        color0: Color,
        color1: Color,
        tile_mode: TileMode,
    ) -> Gradient {
        let r = (radius0 + radius1) * 0.5;
        let xform = Affine::translation(center.dx, center.dy);

        Gradient {
            inv_xform: xform.invert_or_identity(),
            extent: [r, r],
            radius: r,
            feather: (radius1 - radius0).max(1.0),
            inner_color: color0,
            outer_color: color1,
            tile_mode,
        }
    }

    /// Box gradient over `rect` with corner radius `radius`.
    pub fn box_gradient(
        rect: Rect,
        radius: f32,
        feather: f32,
        color0: Color,
        color1: Color,
        tile_mode: TileMode,
    ) -> Gradient {
        let ext0 = rect.width * 0.5;
        let ext1 = rect.height * 0.5;
        let xform = Affine::translation(rect.left + ext0, rect.top + ext1);

        Gradient {
            inv_xform: xform.invert_or_identity(),
            extent: [ext0, ext1],
            radius,
            feather: feather.max(1.0),
            inner_color: color0,
            outer_color: color1,
            tile_mode,
        }
    }

    /// The plain-old-data block handed to the rasterizer.
    pub fn params(&self) -> GradientParams {
        GradientParams {
            inv_xform: self.inv_xform.elements,
            extent: self.extent,
            radius: self.radius,
            feather: self.feather,
            inner_color: self.inner_color.to_f32_rgba(),
            outer_color: self.outer_color.to_f32_rgba(),
        }
    }
}

/// Gradient uniforms exactly as the rasterizer receives them.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct GradientParams {
    pub inv_xform: [f32; 6],
    pub extent: [f32; 2],
    pub radius: f32,
    pub feather: f32,
    pub inner_color: [f32; 4],
    pub outer_color: [f32; 4],
}
