//! Cursor state machine.
//!
//! A [`Cursor`] is nothing but an [`Address`]. Every operation borrows the
//! [`Expression`] it works on, checks that the address still resolves, then
//! mutates the tree and re-addresses itself.
//!
//! # Transparency
//!
//! Text nodes, raw fragments and nodes without slots are never entered.
//! Any step that would land on one passes over it to the next gap.
//!
//! # Moves
//!
//! ```text
//! Top{g}        --right--> Top{g+1}            item g is transparent
//!               --right--> Slot{first, 0}      item g has slots
//! Slot{s, len}  --right--> Slot{next, 0}       s is not the owner's last slot
//!               --right--> gap after owner     s is the last slot
//! ```
//!
//! Moving left mirrors this, landing at the end of the last slot on entry and
//! in the gap before the owner on exit.

use eqn_document::{Child, DocumentError, Expression, Link, NodeKind, Slot};
use eqn_primitives::{Address, EditOutcome, NodeId, Site, SlotId};
use thiserror::Error;
use tracing::{debug, trace};

mod display;

use display::CaretSplice;
pub use display::CARET;

/// Errors raised by cursor operations.
///
/// Sessions resolve both variants locally by resetting the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
	/// The address no longer resolves against the expression.
	#[error("cursor address {address:?} is inconsistent: {reason}")]
	Inconsistent {
		/// The offending address.
		address: Address,
		/// What failed to resolve.
		reason: &'static str,
	},

	/// A structural mutation was rejected by the document.
	#[error(transparent)]
	Document(#[from] DocumentError),
}

/// Result type for cursor operations.
pub type Result<T> = std::result::Result<T, CursorError>;

/// What the cursor finds at an index of its current sequence.
enum Entry {
	/// A transparent item, stepped over.
	Pass,
	/// A node with slots, entered.
	Enter(NodeId),
}

/// Navigable edit position inside an [`Expression`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
	address: Address,
}

impl Cursor {
	/// Creates a cursor at the start of the document.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a cursor at an arbitrary address.
	///
	/// The address is checked lazily by the next operation.
	pub fn at(address: Address) -> Self {
		Self { address }
	}

	/// The current address.
	#[inline]
	pub fn address(&self) -> Address {
		self.address
	}

	/// Moves the cursor back to the document start.
	pub fn reset(&mut self) {
		self.address = Address::START;
	}

	/// The slot containing the cursor, or [`None`] at top level.
	#[inline]
	pub fn block(&self) -> Option<SlotId> {
		self.address.slot()
	}

	/// The node owning [`Cursor::block`].
	pub fn component(&self, expr: &Expression) -> Option<NodeId> {
		expr.slot(self.block()?).map(Slot::owner)
	}

	/// Position within the current slot; the start gap at top level.
	pub fn child(&self) -> Site {
		if self.address.is_top() {
			Site::START
		} else {
			self.address.site()
		}
	}

	/// Position along the top-level sequence.
	///
	/// A top-level gap at top level, otherwise the top-level node the cursor
	/// is nested under. [`None`] if the address does not resolve.
	pub fn position(&self, expr: &Expression) -> Option<Site> {
		match self.address {
			Address::Top { gap } => Some(Site::Gap(gap)),
			Address::Slot { slot, .. } => expr.root_of(slot).map(Site::Item),
		}
	}

	/// Checks that the address resolves against `expr`.
	pub fn validate(&self, expr: &Expression) -> Result<()> {
		match self.address {
			Address::Top { .. } => {
				if !self.address.site().fits(expr.len()) {
					return Err(self.inconsistent("gap past the end of the expression"));
				}
			}
			Address::Slot { slot, .. } => {
				let Some(record) = expr.slot(slot) else {
					return Err(self.inconsistent("slot has been freed"));
				};
				if !self.address.site().fits(record.len()) {
					return Err(self.inconsistent("gap past the end of the slot"));
				}
				if expr.node(record.owner()).is_none_or(|node| node.is_transparent()) {
					return Err(self.inconsistent("slot belongs to a transparent node"));
				}
				if expr.root_of(slot).is_none() {
					return Err(self.inconsistent("slot is not reachable from the expression"));
				}
			}
		}
		Ok(())
	}

	/// Inserts `ch` as a new text node and moves past it.
	pub fn add_text(&mut self, expr: &mut Expression, ch: char) -> Result<EditOutcome> {
		self.validate(expr)?;
		let node = expr.create_text(ch.to_string());
		place(expr, self.address, node)?;
		self.address = self.address.with_gap(self.address.gap() + 1);
		trace!(%ch, address = ?self.address, "add text");
		Ok(EditOutcome::Changed)
	}

	/// Inserts a node of `kind` at the cursor.
	///
	/// Transparent nodes are passed; anything else is entered at the start of
	/// its first slot.
	pub fn add_component(&mut self, expr: &mut Expression, kind: NodeKind) -> Result<EditOutcome> {
		self.validate(expr)?;
		debug!(kind = kind.label(), address = ?self.address, "add component");
		let transparent = kind.is_transparent();
		let node = expr.create(kind);
		place(expr, self.address, node)?;
		self.address = if transparent {
			self.address.with_gap(self.address.gap() + 1)
		} else {
			first_slot_start(expr, node)?
		};
		Ok(EditOutcome::Changed)
	}

	/// Removes the node the cursor is anchored to.
	///
	/// In a top-level gap that is the transparent node on the left, if any.
	/// Inside a slot it is the slot's owner; the cursor then takes the
	/// vacated gap.
	pub fn remove_component(&mut self, expr: &mut Expression) -> Result<EditOutcome> {
		self.validate(expr)?;
		match self.address {
			Address::Top { .. } => {
				let Some(left) = self.address.site().floor() else {
					return Ok(EditOutcome::Unchanged);
				};
				if !matches!(entry(expr, self.address, left), Some(Entry::Pass)) {
					return Ok(EditOutcome::Unchanged);
				}
				expr.delete_at(left)?;
				self.address = Address::top(left);
			}
			Address::Slot { slot, .. } => {
				let (owner, _) = slot_position(expr, slot)?;
				let vacated = self.before(expr, owner)?;
				match vacated {
					Address::Top { gap } => expr.delete_at(gap)?,
					Address::Slot { slot, gap } => expr.delete_child_at(slot, gap)?,
				}
				self.address = vacated;
			}
		}
		debug!(address = ?self.address, "remove component");
		Ok(EditOutcome::Changed)
	}

	/// Moves one logical step to the right.
	pub fn seek_right(&mut self, expr: &Expression) -> Result<EditOutcome> {
		self.validate(expr)?;
		let address = self.address;
		let right = address.site().ceil();
		let next = if Site::Item(right).fits(sequence_len(expr, address)) {
			match entry(expr, address, right) {
				Some(Entry::Pass) => address.with_gap(right + 1),
				Some(Entry::Enter(node)) => first_slot_start(expr, node)?,
				None => return Err(self.inconsistent("item right of the cursor does not resolve")),
			}
		} else {
			let Address::Slot { slot, .. } = address else {
				return Ok(EditOutcome::Unchanged);
			};
			let (owner, index) = slot_position(expr, slot)?;
			match owner_slots(expr, owner)?.get(index + 1) {
				Some(&next) => Address::in_slot(next, 0),
				None => {
					let before = self.before(expr, owner)?;
					before.with_gap(before.gap() + 1)
				}
			}
		};
		self.address = next;
		trace!(address = ?self.address, "seek right");
		Ok(EditOutcome::Moved)
	}

	/// Moves one logical step to the left.
	pub fn seek_left(&mut self, expr: &Expression) -> Result<EditOutcome> {
		self.validate(expr)?;
		let address = self.address;
		let next = if let Some(left) = address.site().floor() {
			match entry(expr, address, left) {
				Some(Entry::Pass) => address.with_gap(left),
				Some(Entry::Enter(node)) => last_slot_end(expr, node)?,
				None => return Err(self.inconsistent("item left of the cursor does not resolve")),
			}
		} else {
			let Address::Slot { slot, .. } = address else {
				return Ok(EditOutcome::Unchanged);
			};
			let (owner, index) = slot_position(expr, slot)?;
			match index.checked_sub(1) {
				Some(prev) => slot_end(expr, owner_slots(expr, owner)?[prev]),
				None => self.before(expr, owner)?,
			}
		};
		self.address = next;
		trace!(address = ?self.address, "seek left");
		Ok(EditOutcome::Moved)
	}

	/// Deletes what is immediately left of the cursor.
	///
	/// In a top-level gap a node with slots is not deleted: the cursor
	/// descends into its last slot instead. Inside a slot the child on the
	/// left is deleted whole, nested nodes included. A node whose slots are
	/// all empty is removed as soon as the cursor backspaces inside it. At
	/// the left boundary of a slot the cursor moves to the end of the
	/// previous slot; at the left boundary of the first slot nothing happens.
	pub fn backspace(&mut self, expr: &mut Expression) -> Result<EditOutcome> {
		self.validate(expr)?;
		if expr.is_empty() || self.address == Address::START {
			return Ok(EditOutcome::Unchanged);
		}
		match self.address {
			Address::Top { gap } => match entry(expr, self.address, gap - 1) {
				Some(Entry::Pass) => self.remove_component(expr),
				Some(Entry::Enter(node)) => {
					self.address = last_slot_end(expr, node)?;
					trace!(address = ?self.address, "backspace into node");
					Ok(EditOutcome::Moved)
				}
				None => Err(self.inconsistent("item left of the cursor does not resolve")),
			},
			Address::Slot { slot, .. } => {
				let (owner, index) = slot_position(expr, slot)?;
				if expr.is_node_empty(owner)? {
					return self.remove_component(expr);
				}
				if let Some(left) = self.address.site().floor() {
					expr.delete_child_at(slot, left)?;
					self.address = Address::in_slot(slot, left);
					trace!(address = ?self.address, "backspace");
					return Ok(EditOutcome::Changed);
				}
				let Some(prev) = index.checked_sub(1) else {
					return Ok(EditOutcome::Unchanged);
				};
				self.address = slot_end(expr, owner_slots(expr, owner)?[prev]);
				trace!(address = ?self.address, "backspace into previous slot");
				Ok(EditOutcome::Moved)
			}
		}
	}

	/// Renders the expression with a caret at the cursor.
	///
	/// The current slot is framed and a [`CARET`] text node is spliced in at
	/// the address for the duration of the render. The tree is restored
	/// before returning, including on unwind.
	pub fn display_latex(&self, expr: &mut Expression) -> Result<String> {
		self.validate(expr)?;
		let splice = CaretSplice::apply(expr, self.address)?;
		Ok(splice.render())
	}

	/// Address of the gap just before `node` in its containing sequence.
	fn before(&self, expr: &Expression, node: NodeId) -> Result<Address> {
		let record = expr.node(node).ok_or(DocumentError::UnknownNode(node))?;
		let found = match record.link() {
			Link::Root => expr.root_index(node).map(Address::top),
			Link::Child(parent) => expr
				.child_index(parent, node)
				.map(|index| Address::in_slot(parent, index)),
			Link::Detached => None,
		};
		found.ok_or_else(|| self.inconsistent("anchor node is not attached"))
	}

	fn inconsistent(&self, reason: &'static str) -> CursorError {
		CursorError::Inconsistent {
			address: self.address,
			reason,
		}
	}
}

/// Number of items in the sequence `address` points into.
fn sequence_len(expr: &Expression, address: Address) -> usize {
	match address {
		Address::Top { .. } => expr.len(),
		Address::Slot { slot, .. } => expr.slot(slot).map_or(0, Slot::len),
	}
}

fn entry(expr: &Expression, address: Address, index: usize) -> Option<Entry> {
	let node = match address {
		Address::Top { .. } => *expr.roots().get(index)?,
		Address::Slot { slot, .. } => match expr.slot(slot)?.children().get(index)? {
			Child::Text(_) => return Some(Entry::Pass),
			Child::Node(node) => *node,
		},
	};
	if expr.node(node)?.is_transparent() {
		Some(Entry::Pass)
	} else {
		Some(Entry::Enter(node))
	}
}

/// Attaches a fresh node at `address`, freeing it if the document refuses.
fn place(expr: &mut Expression, address: Address, node: NodeId) -> Result<()> {
	let placed = match address {
		Address::Top { gap } => expr.insert(node, gap),
		Address::Slot { slot, gap } => expr.insert_child(slot, Child::Node(node), gap),
	};
	if let Err(err) = placed {
		expr.discard(node)?;
		return Err(err.into());
	}
	Ok(())
}

/// Owner of `slot` and the slot's index among the owner's slots.
fn slot_position(expr: &Expression, slot: SlotId) -> Result<(NodeId, usize)> {
	let owner = expr.slot(slot).ok_or(DocumentError::UnknownSlot(slot))?.owner();
	let index = expr.slot_index(slot).ok_or(DocumentError::UnknownSlot(slot))?;
	Ok((owner, index))
}

fn owner_slots(expr: &Expression, owner: NodeId) -> Result<&[SlotId]> {
	Ok(expr.node(owner).ok_or(DocumentError::UnknownNode(owner))?.slots())
}

fn slot_end(expr: &Expression, slot: SlotId) -> Address {
	Address::in_slot(slot, expr.slot(slot).map_or(0, Slot::len))
}

fn first_slot_start(expr: &Expression, node: NodeId) -> Result<Address> {
	let slot = owner_slots(expr, node)?
		.first()
		.copied()
		.ok_or(DocumentError::UnknownNode(node))?;
	Ok(Address::in_slot(slot, 0))
}

fn last_slot_end(expr: &Expression, node: NodeId) -> Result<Address> {
	let slot = owner_slots(expr, node)?
		.last()
		.copied()
		.ok_or(DocumentError::UnknownNode(node))?;
	Ok(slot_end(expr, slot))
}
