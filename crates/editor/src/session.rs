use std::mem;

use eqn_document::Expression;
use eqn_primitives::EditOutcome;
use tracing::{debug, error, trace};

use crate::cursor::{Cursor, CursorError};
use crate::event::EditEvent;
use crate::keys::{Key, KeyAction, KeyResult};

/// One editor instance: an expression, its cursor and the equations cleared
/// from it.
///
/// Editing never fails from the host's point of view. Boundary no-ops come
/// back as [`EditOutcome::Unchanged`]; a cursor that no longer resolves is
/// reset to the document start and reported as [`EditOutcome::Recovered`].
#[derive(Debug, Default)]
pub struct EditorSession {
	expression: Expression,
	cursor: Cursor,
	history: Vec<Expression>,
}

impl EditorSession {
	/// Creates a session with an empty expression.
	pub fn new() -> Self {
		Self::default()
	}

	/// Applies one edit event.
	pub fn apply(&mut self, event: EditEvent) -> EditOutcome {
		let name = event.name();
		let expr = &mut self.expression;
		let result = match event {
			EditEvent::InsertCharacter(ch) => self.cursor.add_text(expr, ch),
			EditEvent::InsertNode(kind) => self.cursor.add_component(expr, kind),
			EditEvent::MoveLeft => self.cursor.seek_left(expr),
			EditEvent::MoveRight => self.cursor.seek_right(expr),
			EditEvent::Backspace => self.cursor.backspace(expr),
		};
		match result {
			Ok(outcome) => {
				trace!(event = name, ?outcome, address = ?self.cursor.address(), "applied edit");
				outcome
			}
			Err(err) => self.recover(&err, name),
		}
	}

	/// Applies a key press.
	pub fn press(&mut self, key: Key) -> KeyResult {
		match key.action() {
			KeyAction::Edit(event) => KeyResult::Edited(self.apply(event)),
			KeyAction::Commit => KeyResult::Committed(self.commit()),
			KeyAction::Clear => {
				self.clear();
				KeyResult::Cleared
			}
			KeyAction::Ignored => KeyResult::Ignored,
		}
	}

	/// The caret-free LaTeX of the expression.
	pub fn latex(&self) -> String {
		self.expression.to_latex()
	}

	/// LaTeX with a caret at the cursor and the current slot framed.
	///
	/// Leaves the expression exactly as it was.
	pub fn display_latex(&mut self) -> String {
		match self.cursor.display_latex(&mut self.expression) {
			Ok(latex) => latex,
			Err(err) => {
				self.recover(&err, "display");
				self.cursor
					.display_latex(&mut self.expression)
					.unwrap_or_else(|_| self.expression.to_latex())
			}
		}
	}

	/// Moves the current expression to history and starts a fresh one.
	pub fn clear(&mut self) {
		let previous = mem::take(&mut self.expression);
		debug!(latex = %previous.to_latex(), depth = self.history.len() + 1, "clear expression");
		self.history.push(previous);
		self.cursor.reset();
	}

	/// Finishes the equation.
	///
	/// Returns its LaTeX, or [`None`] if it is empty. Either way the
	/// expression is then cleared into history.
	pub fn commit(&mut self) -> Option<String> {
		let latex = self.latex();
		self.clear();
		(!latex.is_empty()).then_some(latex)
	}

	/// Cleared expressions, oldest first.
	pub fn history(&self) -> &[Expression] {
		&self.history
	}

	/// The expression being edited.
	pub fn expression(&self) -> &Expression {
		&self.expression
	}

	/// The cursor.
	pub fn cursor(&self) -> &Cursor {
		&self.cursor
	}

	fn recover(&mut self, err: &CursorError, during: &'static str) -> EditOutcome {
		error!(error = %err, during, "resetting cursor to document start");
		self.cursor.reset();
		EditOutcome::Recovered
	}
}
