use eqn_editor::{Address, EditEvent, EditOutcome, NodeKind};
use proptest::prelude::*;

use crate::common::{edit_event, node_kind, replay, session, type_str};

proptest! {
	#[test]
	fn cursor_never_rests_in_transparent_nodes(events in prop::collection::vec(edit_event(), 0..60)) {
		let mut session = session();
		for event in events {
			let outcome = session.apply(event);
			prop_assert_ne!(outcome, EditOutcome::Recovered);
			let expr = session.expression();
			prop_assert_eq!(session.cursor().validate(expr), Ok(()));
			if let Some(owner) = session.cursor().component(expr) {
				prop_assert!(!expr.node(owner).unwrap().is_transparent());
			}
		}
	}

	#[test]
	fn display_never_mutates(events in prop::collection::vec(edit_event(), 0..40), repeats in 1usize..4) {
		let mut session = replay(&events);
		let latex = session.latex();
		let allocated = session.expression().allocated_nodes();
		let address = session.cursor().address();
		for _ in 0..repeats {
			let display = session.display_latex();
			prop_assert!(display.contains('|'));
		}
		prop_assert_eq!(session.latex(), latex);
		prop_assert_eq!(session.expression().allocated_nodes(), allocated);
		prop_assert_eq!(session.cursor().address(), address);
	}

	#[test]
	fn backspace_undoes_character(events in prop::collection::vec(edit_event(), 0..40), ch in proptest::char::range('a', 'z')) {
		let mut session = replay(&events);
		let latex = session.latex();
		let address = session.cursor().address();
		prop_assert_eq!(session.apply(EditEvent::InsertCharacter(ch)), EditOutcome::Changed);
		prop_assert_eq!(session.apply(EditEvent::Backspace), EditOutcome::Changed);
		prop_assert_eq!(session.latex(), latex);
		prop_assert_eq!(session.cursor().address(), address);
	}

	#[test]
	fn backspace_collapses_fresh_node(events in prop::collection::vec(edit_event(), 0..40), kind in node_kind()) {
		prop_assume!(!kind.is_transparent());
		let mut session = replay(&events);
		let latex = session.latex();
		let address = session.cursor().address();
		let allocated = session.expression().allocated_nodes();
		session.apply(EditEvent::InsertNode(kind));
		prop_assert_eq!(session.apply(EditEvent::Backspace), EditOutcome::Changed);
		prop_assert_eq!(session.latex(), latex);
		prop_assert_eq!(session.cursor().address(), address);
		prop_assert_eq!(session.expression().allocated_nodes(), allocated);
	}

	#[test]
	fn opposite_moves_cancel(events in prop::collection::vec(edit_event(), 0..40)) {
		let mut session = replay(&events);
		let start = session.cursor().address();
		if session.apply(EditEvent::MoveRight) == EditOutcome::Moved {
			session.apply(EditEvent::MoveLeft);
			prop_assert_eq!(session.cursor().address(), start);
		}
		if session.apply(EditEvent::MoveLeft) == EditOutcome::Moved {
			session.apply(EditEvent::MoveRight);
			prop_assert_eq!(session.cursor().address(), start);
		}
	}

	#[test]
	fn seeking_across_text_is_inverse(text in "[a-z0-9+=]{1,20}") {
		let mut session = session();
		type_str(&mut session, &text);
		let end = session.cursor().address();
		let n = text.len();

		for _ in 0..=n {
			session.apply(EditEvent::MoveLeft);
		}
		prop_assert_eq!(session.cursor().address(), Address::START);
		for _ in 0..=n {
			session.apply(EditEvent::MoveRight);
		}
		prop_assert_eq!(session.cursor().address(), end);
	}

	#[test]
	fn seeking_across_text_in_a_slot_is_inverse(text in "[a-z0-9]{1,12}") {
		let mut session = session();
		session.apply(EditEvent::InsertNode(NodeKind::Sqrt));
		let start = session.cursor().address();
		type_str(&mut session, &text);
		let end = session.cursor().address();

		for _ in 0..text.len() {
			session.apply(EditEvent::MoveLeft);
		}
		prop_assert_eq!(session.cursor().address(), start);
		for _ in 0..text.len() {
			session.apply(EditEvent::MoveRight);
		}
		prop_assert_eq!(session.cursor().address(), end);
	}
}
