//! Edit scripts.
//!
//! One command per line; blank lines and lines starting with `#` are
//! skipped.
//!
//! ```text
//! # each character as a key press, spaces included
//! type ab
//! # palette entry, bare or family:name
//! insert frac
//! # named key
//! key right
//! # caret-free LaTeX, then LaTeX with caret
//! print
//! display
//! # cursor position in half units
//! where
//! ```

use eqn_editor::Key;
use thiserror::Error;

/// A parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Press a key for every character of the text.
	Type(String),
	/// Press one named key.
	Key(Key),
	/// Insert the palette entry with this name.
	Insert(String),
	/// Move left.
	Left,
	/// Move right.
	Right,
	/// Backspace.
	Backspace,
	/// Print the LaTeX.
	Print,
	/// Print the LaTeX with a caret.
	Display,
	/// Commit the equation, printing it if non-empty.
	Commit,
	/// Clear the equation into history.
	Clear,
	/// Print the cursor position and child in half units.
	Where,
	/// Print every cleared equation.
	History,
}

/// A command with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
	/// 1-based line number.
	pub number: usize,
	/// The command.
	pub command: Command,
}

/// Errors raised while parsing or replaying a script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
	/// The first word of a line is not a command.
	#[error("line {line}: unknown command '{command}'")]
	UnknownCommand {
		/// 1-based line number.
		line: usize,
		/// The unrecognised word.
		command: String,
	},

	/// A command that needs an argument has none.
	#[error("line {line}: '{command}' needs an argument")]
	MissingArgument {
		/// 1-based line number.
		line: usize,
		/// The command word.
		command: &'static str,
	},

	/// A command that takes no argument was given one.
	#[error("line {line}: '{command}' takes no argument")]
	UnexpectedArgument {
		/// 1-based line number.
		line: usize,
		/// The command word.
		command: &'static str,
	},

	/// A `key` argument names no key.
	#[error("line {line}: unknown key '{name}'")]
	UnknownKey {
		/// 1-based line number.
		line: usize,
		/// The key name.
		name: String,
	},

	/// An `insert` argument is not in the palette.
	#[error("line {line}: no palette entry named '{name}'")]
	UnknownEntry {
		/// 1-based line number.
		line: usize,
		/// The entry name.
		name: String,
	},
}

/// Parses a whole script.
pub fn parse(source: &str) -> Result<Vec<Line>, ScriptError> {
	let mut lines = Vec::new();
	for (index, raw) in source.lines().enumerate() {
		let number = index + 1;
		if let Some(command) = parse_line(number, raw)? {
			lines.push(Line { number, command });
		}
	}
	Ok(lines)
}

fn parse_line(line: usize, raw: &str) -> Result<Option<Command>, ScriptError> {
	let trimmed = raw.trim_start();
	if trimmed.is_empty() || trimmed.starts_with('#') {
		return Ok(None);
	}
	let (word, rest) = trimmed.split_once(char::is_whitespace).unwrap_or((trimmed, ""));

	// `type` keeps its argument verbatim so that spaces can be typed.
	if word == "type" {
		if rest.is_empty() {
			return Err(ScriptError::MissingArgument { line, command: "type" });
		}
		return Ok(Some(Command::Type(rest.to_string())));
	}

	let arg = rest.trim();
	let needs = |command: &'static str| {
		if arg.is_empty() {
			Err(ScriptError::MissingArgument { line, command })
		} else {
			Ok(arg)
		}
	};
	let bare = |command: &'static str, value: Command| {
		if arg.is_empty() {
			Ok(value)
		} else {
			Err(ScriptError::UnexpectedArgument { line, command })
		}
	};

	let command = match word {
		"key" => {
			let name = needs("key")?;
			let key = Key::from_name(name).ok_or_else(|| ScriptError::UnknownKey {
				line,
				name: name.to_string(),
			})?;
			Command::Key(key)
		}
		"insert" => Command::Insert(needs("insert")?.to_string()),
		"left" => bare("left", Command::Left)?,
		"right" => bare("right", Command::Right)?,
		"backspace" => bare("backspace", Command::Backspace)?,
		"print" => bare("print", Command::Print)?,
		"display" => bare("display", Command::Display)?,
		"commit" => bare("commit", Command::Commit)?,
		"clear" => bare("clear", Command::Clear)?,
		"where" => bare("where", Command::Where)?,
		"history" => bare("history", Command::History)?,
		other => {
			return Err(ScriptError::UnknownCommand {
				line,
				command: other.to_string(),
			});
		}
	};
	Ok(Some(command))
}
