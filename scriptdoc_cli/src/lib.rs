use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate Lua API reference pages from the API definitions file.",
	long_about = "scriptdoc renders the reference documentation of the Sandman Lua API from a \
	              single JSON definitions file.\n\nIt writes an overview page, a page for global \
	              functions and one page per namespaced module, each with a function index, \
	              per-function documentation and synthesized usage examples.\n\nRun it without \
	              arguments from the project root, or configure paths in scriptdoc.toml."
)]
pub struct ScriptdocCli {
	/// Path to the project root directory. Config discovery and relative
	/// paths start here.
	#[arg(long, short)]
	pub path: Option<PathBuf>,

	/// API definitions file. Overrides `input` from scriptdoc.toml.
	#[arg(long, short)]
	pub input: Option<PathBuf>,

	/// Directory to write the pages to. Overrides `output` from
	/// scriptdoc.toml.
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}
