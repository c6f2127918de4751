//! Document model for the equation editor.
//!
//! An [`Expression`] owns an arena of [`Node`] and [`Slot`] records. Ownership
//! flows strictly downwards (top-level sequence -> node slots -> slot
//! children); the `parent`/`owner` handles on each record exist only for
//! upward navigation.
//!
//! # Rendering
//!
//! Every sequence (the top level, or a slot's children) renders by joining
//! the LaTeX of its items with one space, except that two adjacent text items
//! are glued. Empty renderings are skipped and the result is trimmed.

/// Error types for structural mutations.
pub mod error;
/// Expression arena: nodes, slots and structural mutation.
pub mod expression;
/// Node kinds and their LaTeX templates.
pub mod kind;
/// Sequence joining and recursive LaTeX rendering.
mod render;
/// User-registrable `#n` LaTeX templates.
pub mod template;

pub use eqn_primitives::{NodeId, SlotId};
pub use error::{DocumentError, Result};
pub use expression::{Child, Expression, Link, Node, Slot};
pub use kind::NodeKind;
pub use template::{LatexTemplate, TemplateError};
