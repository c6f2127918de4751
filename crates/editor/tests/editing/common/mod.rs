//! Common utilities for editor integration tests.

use eqn_editor::{EditEvent, EditorSession, NodeKind};
use proptest::prelude::*;

/// Creates an empty session with logging enabled.
pub fn session() -> EditorSession {
	let _ = tracing_subscriber::fmt::try_init();
	EditorSession::new()
}

/// Types `text` one character at a time.
pub fn type_str(session: &mut EditorSession, text: &str) {
	for ch in text.chars() {
		session.apply(EditEvent::InsertCharacter(ch));
	}
}

/// Node kinds covering every arity and both transparent kinds.
pub fn node_kind() -> impl Strategy<Value = NodeKind> {
	prop_oneof![
		Just(NodeKind::Fraction),
		Just(NodeKind::Sqrt),
		Just(NodeKind::NthRoot),
		Just(NodeKind::Subscript),
		Just(NodeKind::SubSup),
		Just(NodeKind::big_operator("sum")),
		Just(NodeKind::trig("sin")),
		Just(NodeKind::symbol("\\alpha")),
		Just(NodeKind::symbol("\\:\\:")),
	]
}

/// Any edit event, weighted towards movement.
pub fn edit_event() -> impl Strategy<Value = EditEvent> {
	prop_oneof![
		3 => proptest::sample::select(vec!['a', 'b', 'x', '1', '+', '=']).prop_map(EditEvent::InsertCharacter),
		2 => node_kind().prop_map(EditEvent::InsertNode),
		3 => Just(EditEvent::MoveLeft),
		3 => Just(EditEvent::MoveRight),
		2 => Just(EditEvent::Backspace),
	]
}

/// Applies every event, returning the session.
pub fn replay(events: &[EditEvent]) -> EditorSession {
	let mut session = session();
	for event in events {
		session.apply(event.clone());
	}
	session
}
