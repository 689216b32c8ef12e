//! Glaze animation sources
//!
//! Listenable values in `[0, 1]` that drive paint-time state:
//!
//! - [`AnimationController`]: owns a value and notifies on change
//! - [`CurvedAnimation`]: reshapes another source through a [`Curve`]
//! - [`ListenerList`]: slotmap-keyed subscription registry
//!
//! Everything here runs on the single UI thread in a cooperative,
//! frame-driven model; notification and unsubscription are synchronous
//! and nothing blocks or suspends.

pub mod animation;
pub mod curve;
pub mod listenable;

pub use animation::{AnimationController, AnimationSource, CurvedAnimation};
pub use curve::Curve;
pub use listenable::{ListenerId, ListenerList};
