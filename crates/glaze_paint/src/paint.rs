//! The paint attribute set consumed per draw call.

use crate::blend::BlendMode;
use crate::color::Color;
use crate::filter::{ColorFilter, MaskFilter};
use crate::gradient::PaintShader;

/// Whether shapes are filled or stroked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaintingStyle {
    #[default]
    Fill,
    Stroke,
}

/// Shape of stroke endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Shape of stroke corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Texture sampling filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterMode {
    #[default]
    Point,
    Bilinear,
    Trilinear,
}

/// Everything the rasterizer needs to draw one primitive: color, blend
/// mode, stroke geometry, filters, and an optional shader.
///
/// A `Paint` is plain data with no identity beyond its fields; a draw call
/// takes a snapshot and the caller is free to mutate it afterwards. No
/// field combination is validated - when a shader is set, `color` is only
/// a fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub blend_mode: BlendMode,
    pub style: PaintingStyle,
    pub stroke_width: f32,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,
    pub stroke_miter_limit: f32,
    pub filter_mode: FilterMode,
    pub color_filter: Option<ColorFilter>,
    pub mask_filter: Option<MaskFilter>,
    pub shader: Option<PaintShader>,
    pub invert_colors: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            blend_mode: BlendMode::SrcOver,
            style: PaintingStyle::Fill,
            stroke_width: 0.0,
            stroke_cap: StrokeCap::Butt,
            stroke_join: StrokeJoin::Miter,
            stroke_miter_limit: 4.0,
            filter_mode: FilterMode::Point,
            color_filter: None,
            mask_filter: None,
            shader: None,
            invert_colors: false,
        }
    }
}

impl Paint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projection keeping only the fields that affect the stroked outline,
    /// discarding color, filters, and shader.
    pub fn shape_only(&self) -> Paint {
        Paint {
            style: self.style,
            stroke_width: self.stroke_width,
            stroke_cap: self.stroke_cap,
            stroke_join: self.stroke_join,
            stroke_miter_limit: self.stroke_miter_limit,
            ..Paint::default()
        }
    }
}
