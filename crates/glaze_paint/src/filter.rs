//! Mask and color filters attached to a [`Paint`](crate::Paint).

use std::hash::{Hash, Hasher};

use crate::blend::BlendMode;
use crate::color::Color;

/// Blur styles for a [`MaskFilter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlurStyle {
    // only Normal is rasterized for now.
    #[default]
    Normal,
    Solid,
    Outer,
    Inner,
}

/// A blur applied to the shape mask before it is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskFilter {
    pub style: BlurStyle,
    pub sigma: f32,
}

impl MaskFilter {
    /// Gaussian blur of the given style and standard deviation.
    pub const fn blur(style: BlurStyle, sigma: f32) -> Self {
        Self { style, sigma }
    }
}

impl Hash for MaskFilter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.style.hash(state);
        self.sigma.to_bits().hash(state);
    }
}

/// Blends every painted pixel against a fixed color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorFilter {
    pub color: Color,
    pub blend_mode: BlendMode,
}

impl ColorFilter {
    /// Filter that blends against `color` with `blend_mode`.
    pub const fn mode(color: Color, blend_mode: BlendMode) -> Self {
        Self { color, blend_mode }
    }
}
