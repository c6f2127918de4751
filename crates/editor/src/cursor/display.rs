use eqn_document::{Child, DocumentError, Expression, Node};
use eqn_primitives::{Address, NodeId};
use tracing::error;

use super::Result;

/// Text marking the cursor in display LaTeX.
pub const CARET: &str = "|";

/// A caret temporarily spliced into an expression.
///
/// While the guard lives the expression holds an extra [`CARET`] text node
/// at the cursor address and, for nested addresses, a frame around the
/// current slot. Dropping the guard takes both out again, so the tree is
/// restored even if rendering unwinds.
pub(super) struct CaretSplice<'a> {
	expr: &'a mut Expression,
	caret: NodeId,
	/// Owner and slot index of the framed slot.
	framed: Option<(NodeId, usize)>,
}

impl<'a> CaretSplice<'a> {
	pub(super) fn apply(expr: &'a mut Expression, at: Address) -> Result<Self> {
		let caret = expr.create_text(CARET);
		let mut splice = Self {
			expr,
			caret,
			framed: None,
		};
		match at {
			Address::Top { gap } => splice.expr.insert(caret, gap)?,
			Address::Slot { slot, gap } => {
				let owner = splice
					.expr
					.slot(slot)
					.ok_or(DocumentError::UnknownSlot(slot))?
					.owner();
				let index = splice.expr.slot_index(slot).ok_or(DocumentError::UnknownSlot(slot))?;
				splice.expr.wrap_slot(owner, index)?;
				splice.framed = Some((owner, index));
				splice.expr.insert_child(slot, Child::Node(caret), gap)?;
			}
		}
		Ok(splice)
	}

	pub(super) fn render(&self) -> String {
		self.expr.to_latex()
	}

	fn revert(&mut self) -> eqn_document::Result<()> {
		let caret = self.caret;
		if let Some(index) = self.expr.root_index(caret) {
			self.expr.remove_at(index)?;
		} else if let Some(slot) = self.expr.node(caret).and_then(Node::parent)
			&& let Some(index) = self.expr.child_index(slot, caret)
		{
			self.expr.remove_child_at(slot, index)?;
		}
		self.expr.discard(caret)?;
		if let Some((owner, index)) = self.framed.take() {
			self.expr.unwrap_slot(owner, index)?;
		}
		Ok(())
	}
}

impl Drop for CaretSplice<'_> {
	fn drop(&mut self) {
		if let Err(err) = self.revert() {
			error!(error = %err, "failed to revert caret splice");
		}
	}
}
