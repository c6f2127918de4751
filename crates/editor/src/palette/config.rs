use std::collections::BTreeMap;
use std::path::PathBuf;

use eqn_document::TemplateError;
use serde::Deserialize;
use thiserror::Error;

/// User additions to the palette, read from TOML.
///
/// ```toml
/// [symbols]
/// aleph = "\\aleph"
///
/// [operators]
/// oiint = "oiint"
///
/// [trig]
/// sinh = "sinh"
///
/// [templates]
/// binom = "\\binom{#1}{#2}"
/// ```
///
/// Entries replace built-ins of the same family and name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
	/// Name to LaTeX fragment.
	pub symbols: BTreeMap<String, String>,
	/// Name to command of a three-slot operator, without the backslash.
	pub operators: BTreeMap<String, String>,
	/// Name to command of a function with an exponent, without the backslash.
	pub trig: BTreeMap<String, String>,
	/// Name to `#n` template.
	pub templates: BTreeMap<String, String>,
}

/// Errors raised while loading palette overrides.
#[derive(Debug, Error)]
pub enum PaletteError {
	/// Error reading a palette file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or structure.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// An entry name is empty or contains whitespace or `:`.
	#[error("invalid palette name: {0:?}")]
	InvalidName(String),

	/// A symbol maps to empty LaTeX.
	#[error("symbol '{0}' has empty LaTeX")]
	EmptySymbol(String),

	/// An operator or function command is not a plain LaTeX command name.
	#[error("invalid command '{command}' for '{name}': expected ASCII letters")]
	InvalidCommand {
		/// Entry name.
		name: String,
		/// The rejected command.
		command: String,
	},

	/// A template failed to parse.
	#[error("invalid template '{name}': {error}")]
	Template {
		/// Entry name.
		name: String,
		/// The parse failure.
		error: TemplateError,
	},
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
