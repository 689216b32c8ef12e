//! The rasterizer boundary.

use crate::geometry::{Offset, Rect};
use crate::paint::Paint;

/// Clip behavior for a clipped region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Clip {
    #[default]
    None,
    HardEdge,
    AntiAlias,
    AntiAliasWithSaveLayer,
}

/// Drawing surface implemented by the engine renderer.
///
/// Glaze produces [`Paint`] snapshots and hands them across this boundary;
/// rasterization itself lives on the engine side. Each draw call reads the
/// paint once and must not retain it.
pub trait Canvas {
    fn draw_rect(&mut self, rect: Rect, paint: &Paint);
    fn draw_line(&mut self, from: Offset, to: Offset, paint: &Paint);
    fn draw_circle(&mut self, center: Offset, radius: f32, paint: &Paint);
    fn clip_rect(&mut self, rect: Rect, clip: Clip);
}
