//! Compositing layer handles.

use glaze_paint::Offset;

/// Identifier of the engine texture backing an offscreen layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Handle to a GPU-backed offscreen layer a subtree is painted into, so a
/// post-effect such as opacity can be applied to the whole subtree at
/// once.
///
/// The layer is a scarce resource owned exclusively by one render node:
/// pushing a new compositing state replaces it, and reaching a boundary
/// alpha (0 or 255) releases it entirely.
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityLayer {
    /// Paint offset of the subtree within the layer.
    pub offset: Offset,
    /// Blend alpha in `0..=255` applied when the layer is composited.
    pub alpha: u32,
    /// Backing texture, reusable across pushes of the same node.
    pub texture: TextureId,
}

impl OpacityLayer {
    pub fn new(offset: Offset, alpha: u32, texture: TextureId) -> Self {
        Self {
            offset,
            alpha,
            texture,
        }
    }
}
