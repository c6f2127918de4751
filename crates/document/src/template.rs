use thiserror::Error;

/// Errors produced while parsing a [`LatexTemplate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
	/// A `#` was not followed by a digit `1`-`9` or another `#`.
	#[error("dangling '#' at byte {offset}")]
	DanglingHash {
		/// Byte offset of the `#`.
		offset: usize,
	},

	/// A placeholder number is used but a lower one is missing.
	#[error("placeholder #{missing} is never used but #{max} is")]
	SkippedPlaceholder {
		/// The first unused placeholder number.
		missing: usize,
		/// The highest placeholder number used.
		max: usize,
	},
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
	Literal(String),
	Slot(usize),
}

/// A LaTeX snippet with `#1`..`#9` placeholders, one per slot.
///
/// The arity of the template is its highest placeholder. `##` produces a
/// literal `#`. Parsing `\binom{#1}{#2}` yields a two-slot template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexTemplate {
	source: String,
	parts: Vec<Part>,
	arity: usize,
}

impl LatexTemplate {
	/// Parses a template, validating placeholder usage.
	pub fn parse(source: &str) -> Result<Self, TemplateError> {
		let mut parts = Vec::new();
		let mut literal = String::new();
		let mut used = [false; 9];
		let mut chars = source.char_indices().peekable();

		while let Some((offset, c)) = chars.next() {
			if c != '#' {
				literal.push(c);
				continue;
			}
			match chars.next() {
				Some((_, '#')) => literal.push('#'),
				Some((_, d @ '1'..='9')) => {
					if !literal.is_empty() {
						parts.push(Part::Literal(std::mem::take(&mut literal)));
					}
					let index = d as usize - '1' as usize;
					used[index] = true;
					parts.push(Part::Slot(index));
				}
				_ => return Err(TemplateError::DanglingHash { offset }),
			}
		}
		if !literal.is_empty() {
			parts.push(Part::Literal(literal));
		}

		let arity = used.iter().rposition(|&u| u).map_or(0, |i| i + 1);
		if let Some(missing) = used[..arity].iter().position(|&u| !u) {
			return Err(TemplateError::SkippedPlaceholder {
				missing: missing + 1,
				max: arity,
			});
		}

		Ok(Self {
			source: source.to_string(),
			parts,
			arity,
		})
	}

	/// Number of slots the template consumes.
	#[inline]
	pub fn arity(&self) -> usize {
		self.arity
	}

	/// The template text as written.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Substitutes rendered slot contents into the template.
	///
	/// Missing slots render as empty groups.
	pub fn render(&self, slots: &[String]) -> String {
		let mut out = String::with_capacity(self.source.len());
		for part in &self.parts {
			match part {
				Part::Literal(text) => out.push_str(text),
				Part::Slot(i) => out.push_str(slots.get(*i).map_or("", String::as_str)),
			}
		}
		out
	}
}
