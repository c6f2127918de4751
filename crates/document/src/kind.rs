use std::sync::Arc;

use crate::template::LatexTemplate;

/// The closed set of node variants.
///
/// A variant determines only the number of slots a node owns and how the
/// rendered slots combine into LaTeX. Custom variants carry a parsed
/// [`LatexTemplate`] and are how hosts register notation the built-in set
/// lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
	/// A run of literal text held in a single slot. Never entered by the cursor.
	Text,
	/// An opaque LaTeX fragment such as `\alpha`. Has no slots.
	Symbol(String),
	/// `\boxed{#1}`.
	Frame,
	/// `\sqrt{#1}`.
	Sqrt,
	/// `\frac{#1}{#2}`.
	Fraction,
	/// `\lim_{#1}{#2}`.
	Limit,
	/// `{#1}_{#2}`.
	Subscript,
	/// `{#1}^{#2}`.
	Superscript,
	/// `\sqrt[#1]{#2}`.
	NthRoot,
	/// `{#1}_{#2}^{#3}`.
	SubSup,
	/// `\op_{#1}^{#2}{#3}` for sum, integral, product, union and friends.
	BigOperator(String),
	/// `\op^{#1}{#2}`; the exponent group is emitted even when empty.
	Trig(String),
	/// A registered `#n` template.
	Custom(Arc<LatexTemplate>),
}

impl NodeKind {
	/// Creates a symbol from a LaTeX fragment.
	pub fn symbol(latex: impl Into<String>) -> Self {
		NodeKind::Symbol(latex.into())
	}

	/// Creates a three-slot big operator (`sum`, `int`, ...), without the backslash.
	pub fn big_operator(command: impl Into<String>) -> Self {
		NodeKind::BigOperator(command.into())
	}

	/// Creates a trigonometric function (`sin`, `arccos`, ...), without the backslash.
	pub fn trig(command: impl Into<String>) -> Self {
		NodeKind::Trig(command.into())
	}

	/// Number of slots a node of this kind owns.
	pub fn arity(&self) -> usize {
		match self {
			NodeKind::Symbol(_) => 0,
			NodeKind::Text | NodeKind::Frame | NodeKind::Sqrt => 1,
			NodeKind::Fraction
			| NodeKind::Limit
			| NodeKind::Subscript
			| NodeKind::Superscript
			| NodeKind::NthRoot
			| NodeKind::Trig(_) => 2,
			NodeKind::SubSup | NodeKind::BigOperator(_) => 3,
			NodeKind::Custom(template) => template.arity(),
		}
	}

	/// Returns `true` for text runs.
	#[inline]
	pub fn is_text(&self) -> bool {
		matches!(self, NodeKind::Text)
	}

	/// Returns `true` if the cursor must pass over this node instead of entering it.
	///
	/// Text runs and anything without slots are transparent.
	#[inline]
	pub fn is_transparent(&self) -> bool {
		self.is_text() || self.arity() == 0
	}

	/// Short label for logs.
	pub fn label(&self) -> &str {
		match self {
			NodeKind::Text => "text",
			NodeKind::Symbol(latex) => latex,
			NodeKind::Frame => "frame",
			NodeKind::Sqrt => "sqrt",
			NodeKind::Fraction => "frac",
			NodeKind::Limit => "lim",
			NodeKind::Subscript => "sub",
			NodeKind::Superscript => "sup",
			NodeKind::NthRoot => "nsqrt",
			NodeKind::SubSup => "subsup",
			NodeKind::BigOperator(cmd) | NodeKind::Trig(cmd) => cmd,
			NodeKind::Custom(template) => template.source(),
		}
	}

	/// Combines already-rendered slot contents into this kind's LaTeX.
	///
	/// `slots` must hold one entry per slot; missing entries render empty.
	pub fn render(&self, slots: &[String]) -> String {
		let s = |i: usize| slots.get(i).map_or("", String::as_str);
		match self {
			NodeKind::Text => s(0).to_string(),
			NodeKind::Symbol(latex) => latex.clone(),
			NodeKind::Frame => format!("\\boxed{{{}}}", s(0)),
			NodeKind::Sqrt => format!("\\sqrt{{{}}}", s(0)),
			NodeKind::Fraction => format!("\\frac{{{}}}{{{}}}", s(0), s(1)),
			NodeKind::Limit => format!("\\lim_{{{}}}{{{}}}", s(0), s(1)),
			NodeKind::Subscript => format!("{{{}}}_{{{}}}", s(0), s(1)),
			NodeKind::Superscript => format!("{{{}}}^{{{}}}", s(0), s(1)),
			NodeKind::NthRoot => format!("\\sqrt[{}]{{{}}}", s(0), s(1)),
			NodeKind::SubSup => format!("{{{}}}_{{{}}}^{{{}}}", s(0), s(1), s(2)),
			NodeKind::BigOperator(cmd) => format!("\\{cmd}_{{{}}}^{{{}}}{{{}}}", s(0), s(1), s(2)),
			NodeKind::Trig(cmd) => format!("\\{cmd}^{{{}}}{{{}}}", s(0), s(1)),
			NodeKind::Custom(template) => template.render(slots),
		}
	}
}
