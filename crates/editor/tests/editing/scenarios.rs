use eqn_editor::{Address, EditEvent, EditOutcome, Key, KeyResult, NodeKind, Palette, Site};
use pretty_assertions::assert_eq;

use crate::common::{session, type_str};

#[test]
fn fresh_session_renders_empty() {
	let session = session();
	assert_eq!(session.latex(), "");
	assert_eq!(session.cursor().address(), Address::START);
}

#[test]
fn typing_a_fraction() {
	let mut session = session();
	type_str(&mut session, "ab");
	assert_eq!(session.latex(), "ab");

	session.apply(EditEvent::InsertNode(NodeKind::Fraction));
	let cursor = *session.cursor();
	assert!(cursor.block().is_some());
	assert_eq!(cursor.child(), Site::START);
	assert_eq!(cursor.position(session.expression()), Some(Site::Item(2)));

	type_str(&mut session, "x");
	session.apply(EditEvent::MoveRight);
	type_str(&mut session, "y");
	assert_eq!(session.latex(), "ab \\frac{x}{y}");
	assert_eq!(session.display_latex(), "ab \\frac{x}{\\boxed{y|}}");
}

#[test]
fn palette_driven_session() {
	let palette = Palette::builtin();
	let mut session = session();
	let insert = |session: &mut eqn_editor::EditorSession, name: &str| {
		session.apply(EditEvent::InsertNode(palette.lookup(name).unwrap()))
	};

	insert(&mut session, "sum");
	type_str(&mut session, "i=0");
	session.apply(EditEvent::MoveRight);
	type_str(&mut session, "n");
	session.apply(EditEvent::MoveRight);
	insert(&mut session, "sin");
	type_str(&mut session, "2");
	session.apply(EditEvent::MoveRight);
	insert(&mut session, "theta");

	assert_eq!(session.latex(), "\\sum_{i=0}^{n}{\\sin^{2}{\\theta}}");
	assert_eq!(
		session.display_latex(),
		"\\sum_{i=0}^{n}{\\sin^{2}{\\boxed{\\theta |}}}"
	);
}

#[test]
fn keys_drive_the_session() {
	let mut session = session();
	for ch in "e^x".chars() {
		session.press(Key::Char(ch));
	}
	assert_eq!(session.press(Key::Char('$')), KeyResult::Edited(EditOutcome::Changed));
	assert_eq!(session.latex(), "e^x \\$");
	assert_eq!(session.press(Key::Backspace), KeyResult::Edited(EditOutcome::Changed));
	assert_eq!(session.press(Key::Enter), KeyResult::Committed(Some("e^x".to_string())));
	assert_eq!(session.press(Key::Enter), KeyResult::Committed(None));
	assert_eq!(session.history().len(), 2);
}

#[test]
fn empty_fraction_is_deleted_by_backspace() {
	let mut session = session();
	type_str(&mut session, "q");
	let before = session.latex();
	let address = session.cursor().address();

	session.apply(EditEvent::InsertNode(NodeKind::Fraction));
	assert_eq!(session.apply(EditEvent::Backspace), EditOutcome::Changed);
	assert_eq!(session.latex(), before);
	assert_eq!(session.cursor().address(), address);
	assert_eq!(session.expression().allocated_nodes(), 1);
}

#[test]
fn backspacing_through_a_filled_fraction() {
	let mut session = session();
	session.apply(EditEvent::InsertNode(NodeKind::Fraction));
	type_str(&mut session, "1");
	session.apply(EditEvent::MoveRight);
	type_str(&mut session, "2");
	session.apply(EditEvent::MoveRight);

	let steps = [
		(EditOutcome::Moved, "\\frac{1}{2}"),
		(EditOutcome::Changed, "\\frac{1}{}"),
		(EditOutcome::Moved, "\\frac{1}{}"),
		(EditOutcome::Changed, "\\frac{}{}"),
		(EditOutcome::Changed, ""),
		(EditOutcome::Unchanged, ""),
	];
	for (outcome, latex) in steps {
		assert_eq!(session.apply(EditEvent::Backspace), outcome);
		assert_eq!(session.latex(), latex);
	}
	assert_eq!(session.expression().allocated_nodes(), 0);
}

#[test]
fn nested_structures_render_and_navigate() {
	let mut session = session();
	session.apply(EditEvent::InsertNode(NodeKind::Sqrt));
	session.apply(EditEvent::InsertNode(NodeKind::Superscript));
	type_str(&mut session, "x");
	session.apply(EditEvent::MoveRight);
	type_str(&mut session, "2");
	session.apply(EditEvent::MoveRight);
	type_str(&mut session, "+1");
	session.apply(EditEvent::MoveRight);
	type_str(&mut session, "=y");
	assert_eq!(session.latex(), "\\sqrt{{x}^{2} +1} =y");

	for _ in 0..11 {
		assert_eq!(session.apply(EditEvent::MoveLeft), EditOutcome::Moved);
	}
	assert_eq!(session.cursor().address(), Address::START);
	assert_eq!(session.apply(EditEvent::MoveLeft), EditOutcome::Unchanged);
	assert_eq!(session.display_latex(), "| \\sqrt{{x}^{2} +1} =y");
}
