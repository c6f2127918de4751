//! Replays parsed scripts against an editor session.

use std::io::{self, Write};

use anyhow::Context;
use eqn_editor::{EditEvent, EditOutcome, EditorSession, Key, KeyResult, Palette};
use tracing::{debug, warn};

use crate::script::{Command, Line, ScriptError};

/// Drives one session, writing command output to `out`.
pub struct Runner<'p, W> {
	session: EditorSession,
	palette: &'p Palette,
	out: W,
	/// Print display LaTeX after every edit that needs a re-render.
	watch: bool,
}

impl<'p, W: Write> Runner<'p, W> {
	pub fn new(palette: &'p Palette, out: W) -> Self {
		Self {
			session: EditorSession::new(),
			palette,
			out,
			watch: false,
		}
	}

	/// Echoes the caret-annotated equation after each visible edit.
	pub fn watching(mut self, watch: bool) -> Self {
		self.watch = watch;
		self
	}

	/// Runs every line in order, stopping at the first failure.
	pub fn run(&mut self, script: &[Line]) -> anyhow::Result<()> {
		for line in script {
			self.step(line)
				.with_context(|| format!("failed at script line {}", line.number))?;
		}
		Ok(())
	}

	fn step(&mut self, line: &Line) -> anyhow::Result<()> {
		debug!(line = line.number, command = ?line.command, "replay");
		match &line.command {
			Command::Type(text) => {
				for ch in text.chars() {
					self.press(Key::Char(ch))?;
				}
			}
			Command::Key(key) => self.press(*key)?,
			Command::Insert(name) => {
				let kind = self.palette.lookup(name).ok_or_else(|| ScriptError::UnknownEntry {
					line: line.number,
					name: name.clone(),
				})?;
				self.edit(EditEvent::InsertNode(kind))?;
			}
			Command::Left => self.edit(EditEvent::MoveLeft)?,
			Command::Right => self.edit(EditEvent::MoveRight)?,
			Command::Backspace => self.edit(EditEvent::Backspace)?,
			Command::Print => writeln!(self.out, "{}", self.session.latex())?,
			Command::Display => writeln!(self.out, "{}", self.session.display_latex())?,
			Command::Commit => {
				if let Some(latex) = self.session.commit() {
					writeln!(self.out, "{latex}")?;
				}
			}
			Command::Clear => self.session.clear(),
			Command::Where => {
				let cursor = self.session.cursor();
				match cursor.position(self.session.expression()) {
					Some(position) => writeln!(self.out, "position {position} child {}", cursor.child())?,
					None => writeln!(self.out, "position ? child {}", cursor.child())?,
				}
			}
			Command::History => {
				for (index, expr) in self.session.history().iter().enumerate() {
					writeln!(self.out, "{index}: {}", expr.to_latex())?;
				}
			}
		}
		Ok(())
	}

	fn press(&mut self, key: Key) -> anyhow::Result<()> {
		match self.session.press(key) {
			KeyResult::Edited(outcome) => self.settle(outcome)?,
			KeyResult::Committed(Some(latex)) => writeln!(self.out, "{latex}")?,
			KeyResult::Committed(None) | KeyResult::Cleared | KeyResult::Ignored => {}
		}
		Ok(())
	}

	fn edit(&mut self, event: EditEvent) -> io::Result<()> {
		let name = event.name();
		let outcome = self.session.apply(event);
		debug!(event = name, ?outcome, "edit");
		self.settle(outcome)
	}

	fn settle(&mut self, outcome: EditOutcome) -> io::Result<()> {
		if outcome == EditOutcome::Recovered {
			warn!("cursor was reset after an inconsistent edit");
		}
		if self.watch && outcome.needs_render() {
			writeln!(self.out, "{}", self.session.display_latex())?;
		}
		Ok(())
	}

	pub fn session_mut(&mut self) -> &mut EditorSession {
		&mut self.session
	}

	pub fn into_output(self) -> W {
		self.out
	}
}
