//! Opacity compositing state.
//!
//! The per-node state machine deciding whether an animated-opacity subtree
//! paints directly (alpha 0 or 255) or through an offscreen compositing
//! layer (anything in between), and pushing that decision up the tree.

use std::cell::RefCell;
use std::rc::Rc;

use glaze_animation::{AnimationSource, ListenerId};
use glaze_paint::{Color, Offset};
use tracing::trace;

use crate::context::PaintingContext;
use crate::layer::OpacityLayer;

/// Fire-and-forget signals into the owning render tree.
///
/// Implementations typically set dirty bits and request a frame; neither
/// call returns anything or can fail, and neither is acknowledged.
pub trait CompositingHost {
    /// An ancestor may need to re-decide its own layer requirements.
    fn mark_needs_compositing_bits_update(&self);

    /// The subtree must repaint this frame.
    fn mark_needs_paint(&self);
}

/// Which tree signals an alpha change produced.
#[derive(Clone, Copy, Default)]
struct TreeSignals {
    compositing_bits: bool,
    paint: bool,
}

/// Mutable compositing state shared with the animation listener.
#[derive(Default)]
struct OpacityState {
    alpha: u32,
    currently_needs_compositing: bool,
    always_include_semantics: bool,
    has_child: bool,
    layer: Option<OpacityLayer>,
}

impl OpacityState {
    /// Recompute the alpha and state class from the animation value,
    /// returning the signals the owner must fire.
    fn update(&mut self, opacity: f32) -> TreeSignals {
        let old_alpha = self.alpha;
        self.alpha = Color::alpha_from_opacity(opacity);
        if old_alpha == self.alpha {
            return TreeSignals::default();
        }

        let did_need_compositing = self.currently_needs_compositing;
        self.currently_needs_compositing = self.alpha > 0 && self.alpha < 255;
        trace!(
            old_alpha,
            alpha = self.alpha,
            composited = self.currently_needs_compositing,
            "opacity alpha changed"
        );

        TreeSignals {
            compositing_bits: self.has_child
                && did_need_compositing != self.currently_needs_compositing,
            paint: true,
        }
    }
}

/// Recompute the shared state and fire the resulting signals.
///
/// The borrow is released before signaling so a host may read back into
/// the node from inside its dirty-bit handling.
fn apply_update(state: &RefCell<OpacityState>, value: f32, host: Option<&dyn CompositingHost>) {
    let signals = state.borrow_mut().update(value);
    if let Some(host) = host {
        if signals.compositing_bits {
            host.mark_needs_compositing_bits_update();
        }
        if signals.paint {
            host.mark_needs_paint();
        }
    }
}

/// Animated-opacity compositing for a render node.
///
/// This replaces the inheritance-based mixin with composition: a render
/// node *has* an `AnimatedOpacity` and delegates `attach`, `detach`, and
/// `paint` to it. The node supplies its child to the paint pass through
/// the [`PaintingContext`] it was handed, and reports child presence via
/// [`AnimatedOpacity::set_has_child`].
pub struct AnimatedOpacity {
    state: Rc<RefCell<OpacityState>>,
    opacity: Rc<dyn AnimationSource>,
    host: Option<Rc<dyn CompositingHost>>,
    subscription: Option<ListenerId>,
}

impl AnimatedOpacity {
    /// State machine driven by `opacity`.
    ///
    /// The alpha is computed immediately, so a node painted before its
    /// first attach already sees a consistent value; no tree signals fire
    /// until the node is attached.
    pub fn new(opacity: Rc<dyn AnimationSource>) -> Self {
        let state = Rc::new(RefCell::new(OpacityState::default()));
        apply_update(&state, opacity.value(), None);
        Self {
            state,
            opacity,
            host: None,
            subscription: None,
        }
    }

    /// Current 8-bit alpha derived from the animation.
    pub fn alpha(&self) -> u32 {
        self.state.borrow().alpha
    }

    /// Whether this node currently forces an offscreen layer.
    pub fn always_needs_compositing(&self) -> bool {
        let state = self.state.borrow();
        state.has_child && state.currently_needs_compositing
    }

    /// The driving animation source.
    pub fn opacity(&self) -> &Rc<dyn AnimationSource> {
        &self.opacity
    }

    /// Replace the driving animation, re-subscribing if attached.
    pub fn set_opacity(&mut self, opacity: Rc<dyn AnimationSource>) {
        if Rc::ptr_eq(&self.opacity, &opacity) {
            return;
        }
        let attached = self.host.is_some();
        if attached {
            self.unsubscribe();
        }
        self.opacity = opacity;
        if attached {
            self.subscribe();
        }
        apply_update(&self.state, self.opacity.value(), self.host.as_deref());
    }

    /// Whether the child is reported to the semantics tree even when fully
    /// transparent.
    pub fn always_include_semantics(&self) -> bool {
        self.state.borrow().always_include_semantics
    }

    pub fn set_always_include_semantics(&mut self, value: bool) {
        self.state.borrow_mut().always_include_semantics = value;
    }

    /// Tell the state whether the owning node currently has a child.
    pub fn set_has_child(&mut self, has_child: bool) {
        self.state.borrow_mut().has_child = has_child;
    }

    /// Subscribe to the animation and recompute immediately.
    pub fn attach(&mut self, host: Rc<dyn CompositingHost>) {
        self.host = Some(host);
        self.subscribe();
        apply_update(&self.state, self.opacity.value(), self.host.as_deref());
    }

    /// Unsubscribe from the animation; synchronous and immediate.
    pub fn detach(&mut self) {
        self.unsubscribe();
        self.host = None;
    }

    fn subscribe(&mut self) {
        let Some(host) = self.host.clone() else {
            return;
        };
        let state = Rc::clone(&self.state);
        self.subscription = Some(self.opacity.add_listener(Box::new(move |value| {
            apply_update(&state, value, Some(host.as_ref()));
        })));
    }

    fn unsubscribe(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.opacity.remove_listener(id);
        }
    }

    /// Paint the child for this frame.
    ///
    /// Alpha 0 skips the child entirely, alpha 255 paints it straight
    /// through with no blending, and anything in between composites it
    /// into an opacity layer. The layer handle is dropped at both
    /// boundaries.
    pub fn paint(&mut self, context: &mut dyn PaintingContext, offset: Offset) {
        let mut state = self.state.borrow_mut();
        if !state.has_child {
            return;
        }
        if state.alpha == 0 {
            state.layer = None;
            return;
        }
        if state.alpha == 255 {
            state.layer = None;
            context.paint_child(offset);
            return;
        }
        debug_assert!(state.currently_needs_compositing);
        let old_layer = state.layer.take();
        let alpha = state.alpha;
        state.layer = Some(context.push_opacity(offset, alpha, old_layer));
    }

    /// Current compositing layer, if the node is in the composited state.
    pub fn layer(&self) -> Option<OpacityLayer> {
        self.state.borrow().layer.clone()
    }

    /// Visit the child for the semantics tree.
    ///
    /// Semantics inclusion is independent from painting: a fully
    /// transparent child is still reported when `always_include_semantics`
    /// is set, but it is never painted.
    pub fn visit_children_for_semantics(&self, visitor: impl FnOnce()) {
        let state = self.state.borrow();
        if state.has_child && (state.alpha != 0 || state.always_include_semantics) {
            drop(state);
            visitor();
        }
    }
}

#[cfg(test)]
mod tests {
    use glaze_animation::AnimationController;

    use super::*;

    #[test]
    fn test_alpha_computed_at_construction() {
        let node = AnimatedOpacity::new(Rc::new(AnimationController::new(0.5)));
        assert_eq!(node.alpha(), 128);
        assert!(!node.always_needs_compositing()); // no child yet
    }

    #[test]
    fn test_always_needs_compositing_requires_child() {
        let mut node = AnimatedOpacity::new(Rc::new(AnimationController::new(0.5)));
        node.set_has_child(true);
        assert!(node.always_needs_compositing());

        node.set_has_child(false);
        assert!(!node.always_needs_compositing());
    }

    #[test]
    fn test_boundary_alphas_do_not_composite() {
        let controller = Rc::new(AnimationController::new(1.0));
        let mut node = AnimatedOpacity::new(controller.clone());
        node.set_has_child(true);
        assert_eq!(node.alpha(), 255);
        assert!(!node.always_needs_compositing());

        controller.set_value(0.0);
        // Not attached, so no subscription: the state is stale by design.
        assert_eq!(node.alpha(), 255);
    }

    #[test]
    fn test_semantics_visit_honors_alpha_and_flag() {
        let controller = Rc::new(AnimationController::new(0.0));
        let mut node = AnimatedOpacity::new(controller);
        node.set_has_child(true);

        let mut visited = false;
        node.visit_children_for_semantics(|| visited = true);
        assert!(!visited);

        node.set_always_include_semantics(true);
        node.visit_children_for_semantics(|| visited = true);
        assert!(visited);
    }
}
