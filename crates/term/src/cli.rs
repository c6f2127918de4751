use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "eqn")]
#[command(about = "Replay an equation editing script and print the resulting LaTeX")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Script to replay (reads stdin if omitted)
	pub script: Option<PathBuf>,

	/// Print the final equation with a caret at the cursor
	#[arg(long, short = 'd')]
	pub display: bool,

	/// Print the equation with a caret after every edit that changes it
	#[arg(long, short = 'w')]
	pub watch: bool,

	/// TOML file with extra palette entries
	#[arg(long, short = 'p', env = "EQN_PALETTE", value_name = "PATH")]
	pub palette: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}
