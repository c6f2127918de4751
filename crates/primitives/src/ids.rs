slotmap::new_key_type! {
	/// Handle to a node record in an expression arena.
	///
	/// Keys are generational: a handle to a freed node never resolves to a
	/// node allocated later in the same slot.
	pub struct NodeId;

	/// Handle to a slot record in an expression arena.
	pub struct SlotId;
}
