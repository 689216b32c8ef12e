//! Glaze render-tree compositing
//!
//! Per-node paint-time machinery on top of `glaze_paint`:
//!
//! - [`AnimatedOpacity`]: decides offscreen compositing versus direct
//!   paint-through for an animated-opacity subtree and propagates the
//!   decision to the owning tree
//! - [`PaintingContext`] / [`CompositingHost`]: the paint-pass and
//!   dirty-propagation collaborators the engine integration implements
//! - [`Painter`]: capability interface for custom paint delegates
//!
//! All state here is mutated from exactly two single-threaded event
//! sources: animation value-change notifications and the frame paint
//! pass, with notifications drained before painting.

pub mod context;
pub mod layer;
pub mod opacity;
pub mod painter;

pub use context::PaintingContext;
pub use layer::{OpacityLayer, TextureId};
pub use opacity::{AnimatedOpacity, CompositingHost};
pub use painter::Painter;
