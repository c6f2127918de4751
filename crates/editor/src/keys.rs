//! Key-to-event mapping.
//!
//! Characters split three ways: plain text (letters, digits and the
//! punctuation in [`TEXT_PUNCTUATION`]) is inserted as is, LaTeX
//! metacharacters become escaped symbols, and anything else is ignored.

use eqn_document::NodeKind;
use eqn_primitives::EditOutcome;

use crate::event::EditEvent;

/// Punctuation inserted verbatim alongside ASCII letters and digits.
pub const TEXT_PUNCTUATION: &str = "!@^*()[];:'\"/?.,<>-=+`~";

/// Characters with special meaning in LaTeX, inserted as `\<char>` symbols.
pub const ESCAPED: &str = "$#%&_{}";

/// Symbol inserted for the space bar.
pub const SPACE_SYMBOL: &str = "\\:\\:";

/// A key press as seen by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	/// A printable character.
	Char(char),
	/// Left arrow.
	Left,
	/// Right arrow.
	Right,
	/// Backspace.
	Backspace,
	/// Enter; commits the equation.
	Enter,
	/// Escape; clears the equation.
	Escape,
}

impl Key {
	/// Parses a key name such as `left`, `enter`, `space` or a single character.
	pub fn from_name(name: &str) -> Option<Self> {
		let key = match name.to_ascii_lowercase().as_str() {
			"left" | "arrowleft" => Key::Left,
			"right" | "arrowright" => Key::Right,
			"backspace" | "bs" => Key::Backspace,
			"enter" | "return" => Key::Enter,
			"escape" | "esc" => Key::Escape,
			"space" => Key::Char(' '),
			"backslash" => Key::Char('\\'),
			_ => {
				let mut chars = name.chars();
				match (chars.next(), chars.next()) {
					(Some(ch), None) => Key::Char(ch),
					_ => return None,
				}
			}
		};
		Some(key)
	}

	/// What the session should do for this key.
	pub fn action(self) -> KeyAction {
		match self {
			Key::Char(ch) => char_event(ch).map_or(KeyAction::Ignored, KeyAction::Edit),
			Key::Left => KeyAction::Edit(EditEvent::MoveLeft),
			Key::Right => KeyAction::Edit(EditEvent::MoveRight),
			Key::Backspace => KeyAction::Edit(EditEvent::Backspace),
			Key::Enter => KeyAction::Commit,
			Key::Escape => KeyAction::Clear,
		}
	}
}

/// Session-level meaning of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
	/// Apply an edit event.
	Edit(EditEvent),
	/// Finish the equation and hand its LaTeX to the host.
	Commit,
	/// Discard the equation into history.
	Clear,
	/// Nothing to do.
	Ignored,
}

/// Result of [`crate::EditorSession::press`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResult {
	/// An edit event was applied.
	Edited(EditOutcome),
	/// The equation was committed; [`None`] if it was empty.
	Committed(Option<String>),
	/// The equation was cleared.
	Cleared,
	/// The key has no meaning to the editor.
	Ignored,
}

/// Maps a typed character to an edit event.
pub fn char_event(ch: char) -> Option<EditEvent> {
	if ch.is_ascii_alphanumeric() || TEXT_PUNCTUATION.contains(ch) {
		return Some(EditEvent::InsertCharacter(ch));
	}
	let symbol = match ch {
		' ' => SPACE_SYMBOL.to_string(),
		'\\' => "\\backslash".to_string(),
		c if ESCAPED.contains(c) => format!("\\{c}"),
		_ => return None,
	};
	Some(EditEvent::InsertNode(NodeKind::Symbol(symbol)))
}
