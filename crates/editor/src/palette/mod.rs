//! Button-name lookup table.
//!
//! Toolbar buttons identify what they insert by a short name (`alpha`,
//! `frac`, `sum`, `sin`). A [`Palette`] resolves those names to node kinds.
//! The same name may exist in several [`Family`] tables; a bare name is
//! resolved in [`Family::ALL`] order and `family:name` selects one table.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use eqn_document::{LatexTemplate, NodeKind};
use tracing::debug;

mod builtin;
mod config;

pub use config::{PaletteConfig, PaletteError, Result};

/// A palette table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
	/// Fixed structures: fractions, roots, scripts, limits.
	Function,
	/// Three-slot big operators.
	Operator,
	/// Functions with an exponent slot.
	Trig,
	/// User-registered `#n` templates.
	Template,
	/// Slotless LaTeX fragments.
	Symbol,
}

impl Family {
	/// Every family, in bare-name resolution order.
	pub const ALL: [Family; 5] = [
		Family::Function,
		Family::Operator,
		Family::Trig,
		Family::Template,
		Family::Symbol,
	];

	/// Prefix used in qualified names.
	pub fn prefix(self) -> &'static str {
		match self {
			Family::Function => "function",
			Family::Operator => "operator",
			Family::Trig => "trig",
			Family::Template => "template",
			Family::Symbol => "symbol",
		}
	}

	fn from_prefix(prefix: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|family| family.prefix() == prefix)
	}
}

/// Resolves button names to node kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	entries: BTreeMap<(Family, String), NodeKind>,
}

impl Default for Palette {
	fn default() -> Self {
		Self::builtin()
	}
}

impl Palette {
	/// The built-in tables.
	pub fn builtin() -> Self {
		let mut entries = BTreeMap::new();
		for (name, kind) in builtin::functions() {
			entries.insert((Family::Function, name.to_string()), kind);
		}
		for name in builtin::BIG_OPERATORS {
			entries.insert((Family::Operator, name.to_string()), NodeKind::big_operator(*name));
		}
		for name in builtin::TRIG {
			entries.insert((Family::Trig, name.to_string()), NodeKind::trig(*name));
		}
		for (name, latex) in builtin::GREEK.iter().chain(builtin::SYMBOLS) {
			entries.insert((Family::Symbol, name.to_string()), NodeKind::symbol(*latex));
		}
		Self { entries }
	}

	/// The built-in tables extended by TOML overrides.
	pub fn from_toml(source: &str) -> Result<Self> {
		let config: PaletteConfig = toml::from_str(source)?;
		let mut palette = Self::builtin();
		palette.merge(config)?;
		Ok(palette)
	}

	/// Reads overrides from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let source = fs::read_to_string(path).map_err(|error| PaletteError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let palette = Self::from_toml(&source)?;
		debug!(path = %path.display(), entries = palette.len(), "loaded palette");
		Ok(palette)
	}

	/// Adds or replaces entries.
	///
	/// Every entry is validated first; on error the palette is unchanged.
	pub fn merge(&mut self, config: PaletteConfig) -> Result<()> {
		let mut staged = Vec::new();
		for (name, latex) in config.symbols {
			check_name(&name)?;
			if latex.trim().is_empty() {
				return Err(PaletteError::EmptySymbol(name));
			}
			staged.push((Family::Symbol, name, NodeKind::Symbol(latex)));
		}
		for (name, command) in config.operators {
			check_name(&name)?;
			check_command(&name, &command)?;
			staged.push((Family::Operator, name, NodeKind::BigOperator(command)));
		}
		for (name, command) in config.trig {
			check_name(&name)?;
			check_command(&name, &command)?;
			staged.push((Family::Trig, name, NodeKind::Trig(command)));
		}
		for (name, source) in config.templates {
			check_name(&name)?;
			let template = match LatexTemplate::parse(&source) {
				Ok(template) => template,
				Err(error) => return Err(PaletteError::Template { name, error }),
			};
			staged.push((Family::Template, name, NodeKind::Custom(Arc::new(template))));
		}
		for (family, name, kind) in staged {
			debug!(family = family.prefix(), %name, kind = kind.label(), "palette entry");
			self.entries.insert((family, name), kind);
		}
		Ok(())
	}

	/// Looks up a name in one table.
	pub fn get(&self, family: Family, name: &str) -> Option<NodeKind> {
		self.entries.get(&(family, name.to_string())).cloned()
	}

	/// Resolves a bare or `family:name` qualified name.
	pub fn lookup(&self, name: &str) -> Option<NodeKind> {
		if let Some((prefix, rest)) = name.split_once(':') {
			return self.get(Family::from_prefix(prefix)?, rest);
		}
		Family::ALL.into_iter().find_map(|family| self.get(family, name))
	}

	/// Names in one table, sorted.
	pub fn names(&self, family: Family) -> impl Iterator<Item = &str> + '_ {
		self.entries
			.keys()
			.filter(move |(f, _)| *f == family)
			.map(|(_, name)| name.as_str())
	}

	/// Total number of entries across all tables.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

fn check_name(name: &str) -> Result<()> {
	if name.is_empty() || name.contains(':') || name.chars().any(char::is_whitespace) {
		return Err(PaletteError::InvalidName(name.to_string()));
	}
	Ok(())
}

fn check_command(name: &str, command: &str) -> Result<()> {
	if command.is_empty() || !command.chars().all(|c| c.is_ascii_alphabetic()) {
		return Err(PaletteError::InvalidCommand {
			name: name.to_string(),
			command: command.to_string(),
		});
	}
	Ok(())
}
