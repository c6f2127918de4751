//! Equation editor terminal host.
//!
//! Replays an edit script (see [`script`]) against a fresh session and
//! prints the final equation as LaTeX.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use eqn_editor::Palette;
use tracing::info;

mod cli;
mod run;
mod script;


use cli::Cli;
use run::Runner;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let palette = load_palette(cli.palette.as_deref())?;
	let source = read_script(cli.script.as_deref())?;

	let stdout = io::stdout();
	replay(&source, &palette, cli.display, cli.watch, stdout.lock())
}

/// Parses and runs `source`, then writes the final equation.
fn replay<W: Write>(
	source: &str,
	palette: &Palette,
	display: bool,
	watch: bool,
	out: W,
) -> anyhow::Result<()> {
	let script = script::parse(source)?;
	info!(commands = script.len(), "replaying script");

	let mut runner = Runner::new(palette, out).watching(watch);
	runner.run(&script)?;

	let session = runner.session_mut();
	let latex = if display {
		session.display_latex()
	} else {
		session.latex()
	};
	let mut out = runner.into_output();
	writeln!(out, "{latex}")?;
	out.flush()?;
	Ok(())
}

fn load_palette(path: Option<&Path>) -> anyhow::Result<Palette> {
	match path {
		Some(path) => {
			let palette = Palette::load(path)
				.with_context(|| format!("loading palette {}", path.display()))?;
			info!(path = %path.display(), entries = palette.len(), "palette loaded");
			Ok(palette)
		}
		None => Ok(Palette::builtin()),
	}
}

fn read_script(path: Option<&Path>) -> anyhow::Result<String> {
	match path {
		Some(path) => std::fs::read_to_string(path)
			.with_context(|| format!("reading script {}", path.display())),
		None => {
			let mut source = String::new();
			io::stdin()
				.read_to_string(&mut source)
				.context("reading script from stdin")?;
			Ok(source)
		}
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("EQN_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("eqn_editor=trace,eqn_document=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}
