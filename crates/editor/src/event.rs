use eqn_document::NodeKind;

/// A discrete editing input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
	/// Insert one literal character as its own text node.
	InsertCharacter(char),
	/// Insert a node; multi-slot nodes are entered at their first slot.
	InsertNode(NodeKind),
	/// Step the cursor one logical position to the left.
	MoveLeft,
	/// Step the cursor one logical position to the right.
	MoveRight,
	/// Delete whatever is immediately left of the cursor.
	Backspace,
}

impl EditEvent {
	/// Short name for logs.
	pub fn name(&self) -> &'static str {
		match self {
			EditEvent::InsertCharacter(_) => "insert_character",
			EditEvent::InsertNode(_) => "insert_node",
			EditEvent::MoveLeft => "move_left",
			EditEvent::MoveRight => "move_right",
			EditEvent::Backspace => "backspace",
		}
	}
}
