//! Paint-pass collaborator interface.

use glaze_paint::Offset;

use crate::layer::OpacityLayer;

/// Node-scoped handle into the frame's paint pass.
///
/// The tree walk hands each render node a context that knows how to paint
/// that node's child, either directly into the current layer or into an
/// offscreen compositing layer. The engine integration implements this;
/// nothing in it can fail or block.
pub trait PaintingContext {
    /// Paint the node's child directly, with no intermediate layer.
    fn paint_child(&mut self, offset: Offset);

    /// Composite the child into an offscreen layer blended at
    /// `alpha / 255`. When `old_layer` is given, its backing texture is
    /// reused instead of allocating a fresh one.
    fn push_opacity(
        &mut self,
        offset: Offset,
        alpha: u32,
        old_layer: Option<OpacityLayer>,
    ) -> OpacityLayer;
}
