use eqn_primitives::{NodeId, SlotId};
use slotmap::SlotMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::error::{DocumentError, Result};
use crate::kind::NodeKind;

#[cfg(test)]
mod tests;

/// Where a node hangs in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
	/// Allocated but not reachable from the expression.
	Detached,
	/// In the top-level sequence.
	Root,
	/// A child of the given slot.
	Child(SlotId),
}

/// A notation unit with a fixed number of slots.
#[derive(Debug, Clone)]
pub struct Node {
	kind: NodeKind,
	slots: SmallVec<[SlotId; 3]>,
	link: Link,
}

impl Node {
	/// The node's variant.
	pub fn kind(&self) -> &NodeKind {
		&self.kind
	}

	/// The node's slots in reading order.
	pub fn slots(&self) -> &[SlotId] {
		&self.slots
	}

	/// The slot containing this node, or [`None`] for top-level and detached nodes.
	pub fn parent(&self) -> Option<SlotId> {
		match self.link {
			Link::Child(slot) => Some(slot),
			Link::Detached | Link::Root => None,
		}
	}

	/// How the node is attached.
	pub fn link(&self) -> Link {
		self.link
	}

	/// Returns `true` if the cursor passes over this node.
	#[inline]
	pub fn is_transparent(&self) -> bool {
		self.kind.is_transparent()
	}
}

/// An item in a slot: a literal fragment or a nested node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
	/// Literal characters, emitted verbatim.
	Text(String),
	/// A nested node owned by the slot.
	Node(NodeId),
}

impl Child {
	/// Returns the nested node, if any.
	pub fn as_node(&self) -> Option<NodeId> {
		match self {
			Child::Node(id) => Some(*id),
			Child::Text(_) => None,
		}
	}
}

/// A variable-length content container owned by exactly one node.
#[derive(Debug, Clone)]
pub struct Slot {
	owner: NodeId,
	children: Vec<Child>,
}

impl Slot {
	/// The node this slot belongs to.
	pub fn owner(&self) -> NodeId {
		self.owner
	}

	/// The slot's children in reading order.
	pub fn children(&self) -> &[Child] {
		&self.children
	}

	/// Number of children.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	/// Returns `true` if the slot has no children.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}
}

/// The document root: an ordered sequence of top-level nodes and the arena
/// holding every node and slot of the tree.
#[derive(Debug, Clone, Default)]
pub struct Expression {
	nodes: SlotMap<NodeId, Node>,
	slots: SlotMap<SlotId, Slot>,
	roots: Vec<NodeId>,
}

impl Expression {
	/// Creates an empty expression.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of top-level nodes.
	pub fn len(&self) -> usize {
		self.roots.len()
	}

	/// Returns `true` if there are no top-level nodes.
	pub fn is_empty(&self) -> bool {
		self.roots.is_empty()
	}

	/// Top-level nodes in reading order.
	pub fn roots(&self) -> &[NodeId] {
		&self.roots
	}

	/// Number of allocated nodes, attached or not.
	pub fn allocated_nodes(&self) -> usize {
		self.nodes.len()
	}

	/// Looks up a node record.
	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.get(id)
	}

	/// Looks up a slot record.
	pub fn slot(&self, id: SlotId) -> Option<&Slot> {
		self.slots.get(id)
	}

	fn node_ref(&self, id: NodeId) -> Result<&Node> {
		self.nodes.get(id).ok_or(DocumentError::UnknownNode(id))
	}

	fn slot_ref(&self, id: SlotId) -> Result<&Slot> {
		self.slots.get(id).ok_or(DocumentError::UnknownSlot(id))
	}

	/// Allocates a detached node of `kind` together with its empty slots.
	pub fn create(&mut self, kind: NodeKind) -> NodeId {
		let arity = kind.arity();
		let id = self.nodes.insert(Node {
			kind,
			slots: SmallVec::new(),
			link: Link::Detached,
		});
		for _ in 0..arity {
			let slot = self.slots.insert(Slot {
				owner: id,
				children: Vec::new(),
			});
			self.nodes[id].slots.push(slot);
		}
		id
	}

	/// Allocates a detached text node holding `text`.
	pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
		let id = self.create(NodeKind::Text);
		let slot = self.nodes[id].slots[0];
		self.slots[slot].children.push(Child::Text(text.into()));
		id
	}

	/// Returns `true` if every slot of `id` has no children.
	///
	/// Slotless nodes are empty.
	pub fn is_node_empty(&self, id: NodeId) -> Result<bool> {
		let node = self.node_ref(id)?;
		Ok(node.slots.iter().all(|s| self.slots.get(*s).is_none_or(Slot::is_empty)))
	}

	/// Inserts a detached node into the top-level sequence at `index`.
	pub fn insert(&mut self, node: NodeId, index: usize) -> Result<()> {
		self.ensure_detached(node)?;
		if index > self.roots.len() {
			return Err(DocumentError::InvalidIndex {
				index,
				len: self.roots.len(),
			});
		}
		trace!(?node, index, kind = self.nodes[node].kind.label(), "insert top-level node");
		self.roots.insert(index, node);
		self.nodes[node].link = Link::Root;
		Ok(())
	}

	/// Removes the top-level node at `index` and returns it detached.
	///
	/// The node stays allocated; pass it to [`Expression::discard`] or
	/// re-insert it.
	pub fn remove_at(&mut self, index: usize) -> Result<NodeId> {
		if index >= self.roots.len() {
			return Err(DocumentError::InvalidIndex {
				index,
				len: self.roots.len(),
			});
		}
		let node = self.roots.remove(index);
		self.nodes[node].link = Link::Detached;
		trace!(?node, index, "remove top-level node");
		Ok(node)
	}

	/// Removes the top-level node at `index` and frees its subtree.
	pub fn delete_at(&mut self, index: usize) -> Result<()> {
		let node = self.remove_at(index)?;
		self.discard(node)
	}

	/// Inserts `child` into `slot` at `index`.
	///
	/// A node child must be detached.
	pub fn insert_child(&mut self, slot: SlotId, child: Child, index: usize) -> Result<()> {
		let len = self.slot_ref(slot)?.len();
		if let Child::Node(node) = &child {
			self.ensure_detached(*node)?;
		}
		if index > len {
			return Err(DocumentError::InvalidIndex { index, len });
		}
		if let Child::Node(node) = &child {
			trace!(?node, ?slot, index, kind = self.nodes[*node].kind.label(), "insert slot child");
			self.nodes[*node].link = Link::Child(slot);
		}
		self.slots[slot].children.insert(index, child);
		Ok(())
	}

	/// Removes the child of `slot` at `index`, detaching it if it is a node.
	pub fn remove_child_at(&mut self, slot: SlotId, index: usize) -> Result<Child> {
		let len = self.slot_ref(slot)?.len();
		if index >= len {
			return Err(DocumentError::InvalidIndex { index, len });
		}
		let child = self.slots[slot].children.remove(index);
		if let Child::Node(node) = &child
			&& let Some(record) = self.nodes.get_mut(*node)
		{
			record.link = Link::Detached;
		}
		trace!(?slot, index, "remove slot child");
		Ok(child)
	}

	/// Removes the child of `slot` at `index` and frees it.
	pub fn delete_child_at(&mut self, slot: SlotId, index: usize) -> Result<()> {
		match self.remove_child_at(slot, index)? {
			Child::Node(node) => self.discard(node),
			Child::Text(_) => Ok(()),
		}
	}

	/// Frees a detached node and everything below it.
	pub fn discard(&mut self, node: NodeId) -> Result<()> {
		if self.node_ref(node)?.link != Link::Detached {
			return Err(DocumentError::StillAttached(node));
		}
		let mut stack = vec![node];
		let mut freed = 0usize;
		while let Some(id) = stack.pop() {
			let Some(record) = self.nodes.remove(id) else {
				continue;
			};
			freed += 1;
			for slot in record.slots {
				if let Some(slot) = self.slots.remove(slot) {
					stack.extend(slot.children.iter().filter_map(Child::as_node));
				}
			}
		}
		trace!(?node, freed, "discard subtree");
		Ok(())
	}

	/// Drops every node, leaving an empty expression.
	pub fn clear(&mut self) {
		self.roots.clear();
		self.nodes.clear();
		self.slots.clear();
	}

	/// Returns the index of a top-level node.
	pub fn root_index(&self, node: NodeId) -> Option<usize> {
		self.roots.iter().position(|&r| r == node)
	}

	/// Returns the index of `node` among the children of `slot`.
	pub fn child_index(&self, slot: SlotId, node: NodeId) -> Option<usize> {
		self.slots
			.get(slot)?
			.children
			.iter()
			.position(|c| c.as_node() == Some(node))
	}

	/// Returns the index of `slot` among its owner's slots.
	pub fn slot_index(&self, slot: SlotId) -> Option<usize> {
		let owner = self.slots.get(slot)?.owner;
		self.nodes.get(owner)?.slots.iter().position(|&s| s == slot)
	}

	/// Returns the top-level index of the node under which `slot` is nested.
	///
	/// [`None`] if the slot is freed or hangs off a detached subtree.
	pub fn root_of(&self, slot: SlotId) -> Option<usize> {
		let mut node = self.slots.get(slot)?.owner;
		loop {
			match self.nodes.get(node)?.link {
				Link::Root => return self.root_index(node),
				Link::Detached => return None,
				Link::Child(parent) => {
					let owner = self.slots.get(parent)?.owner;
					// A child link must be mirrored by the parent's child list.
					self.child_index(parent, node)?;
					node = owner;
				}
			}
		}
	}

	/// Replaces slot `index` of `owner` with a fresh slot holding a new
	/// [`NodeKind::Frame`] that owns the replaced slot.
	///
	/// The replaced slot keeps its handle and children, so addresses into it
	/// remain valid. Returns the frame. Undo with [`Expression::unwrap_slot`].
	pub fn wrap_slot(&mut self, owner: NodeId, index: usize) -> Result<NodeId> {
		let bad = DocumentError::BadWrap {
			node: owner,
			slot: index,
			action: "wrapped",
		};
		let inner = *self.node_ref(owner)?.slots.get(index).ok_or(bad)?;

		let wrapper = self.create(NodeKind::Frame);
		let placeholder = self.nodes[wrapper].slots[0];
		self.slots.remove(placeholder);
		self.nodes[wrapper].slots[0] = inner;
		self.slots[inner].owner = wrapper;

		let outer = self.slots.insert(Slot {
			owner,
			children: vec![Child::Node(wrapper)],
		});
		self.nodes[wrapper].link = Link::Child(outer);
		self.nodes[owner].slots[index] = outer;
		trace!(?owner, index, ?wrapper, "wrap slot");
		Ok(wrapper)
	}

	/// Reverses [`Expression::wrap_slot`], freeing the frame.
	///
	/// Slot `index` must hold nothing but a frame; anything else is
	/// [`DocumentError::BadWrap`] and the tree is left untouched.
	pub fn unwrap_slot(&mut self, owner: NodeId, index: usize) -> Result<()> {
		let bad = DocumentError::BadWrap {
			node: owner,
			slot: index,
			action: "unwrapped",
		};
		let outer = *self.node_ref(owner)?.slots.get(index).ok_or(bad.clone())?;
		let wrapper = match self.slot_ref(outer)?.children.as_slice() {
			[Child::Node(wrapper)] => *wrapper,
			_ => return Err(bad),
		};
		let frame = self.node_ref(wrapper)?;
		let inner = match (&frame.kind, frame.slots.as_slice()) {
			(NodeKind::Frame, [inner]) => *inner,
			_ => return Err(bad),
		};

		self.slots[inner].owner = owner;
		self.nodes[owner].slots[index] = inner;
		self.slots.remove(outer);
		self.nodes.remove(wrapper);
		trace!(?owner, index, "unwrap slot");
		Ok(())
	}

	fn ensure_detached(&self, node: NodeId) -> Result<()> {
		match self.node_ref(node)?.link {
			Link::Detached => Ok(()),
			Link::Root | Link::Child(_) => Err(DocumentError::AlreadyAttached(node)),
		}
	}
}
