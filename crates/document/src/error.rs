use eqn_primitives::{NodeId, SlotId};
use thiserror::Error;

/// Errors raised by structural mutations on an [`crate::Expression`].
///
/// These are contract violations: the cursor is the sole mutator and never
/// addresses out of bounds. Callers recover locally rather than surfacing
/// them to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
	/// An insert or remove addressed a position outside the sequence.
	#[error("index {index} out of bounds for sequence of length {len}")]
	InvalidIndex {
		/// The offending index.
		index: usize,
		/// Length of the addressed sequence.
		len: usize,
	},

	/// A node handle does not resolve (never allocated or already freed).
	#[error("unknown node {0:?}")]
	UnknownNode(NodeId),

	/// A slot handle does not resolve.
	#[error("unknown slot {0:?}")]
	UnknownSlot(SlotId),

	/// A node was inserted while still attached elsewhere in the tree.
	#[error("node {0:?} is already attached")]
	AlreadyAttached(NodeId),

	/// A node was freed while still attached to the tree.
	#[error("node {0:?} is still attached")]
	StillAttached(NodeId),

	/// A slot wrap/unwrap was requested with an unsuitable node or slot.
	#[error("slot {slot} of node {node:?} cannot be {action}")]
	BadWrap {
		/// Owning node.
		node: NodeId,
		/// Slot index within the node.
		slot: usize,
		/// `"wrapped"` or `"unwrapped"`.
		action: &'static str,
	},
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
