use eqn_primitives::{NodeId, SlotId};

use crate::expression::{Child, Expression};

/// One rendered item of a sequence.
enum Piece {
	/// Literal text; glues to a neighbouring text piece.
	Text(String),
	/// Any other notation.
	Markup(String),
}

impl Piece {
	fn as_str(&self) -> &str {
		match self {
			Piece::Text(s) | Piece::Markup(s) => s,
		}
	}
}

/// Joins a sequence: one space between items, none between two text items.
fn join(pieces: impl IntoIterator<Item = Piece>) -> String {
	let mut out = String::new();
	let mut prev_text = false;
	for piece in pieces {
		let s = piece.as_str().trim();
		if s.is_empty() {
			continue;
		}
		let is_text = matches!(piece, Piece::Text(_));
		if !out.is_empty() && !(prev_text && is_text) {
			out.push(' ');
		}
		out.push_str(s);
		prev_text = is_text;
	}
	out
}

impl Expression {
	/// Renders the whole expression.
	///
	/// Side-effect free; an empty expression renders to `""`.
	pub fn to_latex(&self) -> String {
		join(self.roots().iter().map(|&id| self.piece(id)))
	}

	/// Renders one node and everything below it.
	///
	/// Unknown handles render as the empty string.
	pub fn node_latex(&self, id: NodeId) -> String {
		self.piece(id).as_str().to_string()
	}

	/// Renders the children of one slot.
	pub fn slot_latex(&self, id: SlotId) -> String {
		let Some(slot) = self.slot(id) else {
			return String::new();
		};
		join(slot.children().iter().map(|child| match child {
			Child::Text(text) => Piece::Text(text.clone()),
			Child::Node(node) => self.piece(*node),
		}))
	}

	fn piece(&self, id: NodeId) -> Piece {
		let Some(node) = self.node(id) else {
			return Piece::Markup(String::new());
		};
		let slots: Vec<String> = node.slots().iter().map(|&s| self.slot_latex(s)).collect();
		let latex = node.kind().render(&slots);
		if node.kind().is_text() {
			Piece::Text(latex)
		} else {
			Piece::Markup(latex)
		}
	}
}
