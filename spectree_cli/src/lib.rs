use std::path::PathBuf;

use clap::Parser;
use clap::builder::BoolishValueParser;

#[derive(Debug, Parser)]
#[command(
	name = "spectree",
	author,
	version,
	about = "Resolve @ references in a Markdown file.",
	long_about = "spectree flattens multi-file markdown documentation into a single document.\n\nAny \
	              line whose entire content is `@relative/path.md` is replaced by the resolved \
	              content of that file, recursively. References must stay inside the root \
	              directory (by default the directory of the input file) and must not form \
	              cycles.\n\nExamples:\n  spectree input.md              Output to stdout\n  \
	              spectree input.md -o output.md Output to file"
)]
pub struct SpecTreeCli {
	/// Markdown file to resolve.
	#[arg(value_name = "FILE")]
	pub file: Option<PathBuf>,

	/// Write the resolved document to FILE instead of stdout.
	#[arg(long, short, env = "SPECTREE_OUTPUT", value_name = "FILE")]
	pub output: Option<PathBuf>,

	/// Directory that every referenced file must stay inside. Defaults to the
	/// directory of the input file.
	#[arg(long, env = "SPECTREE_ROOT_DIR", value_name = "DIR")]
	pub root_dir: Option<PathBuf>,

	/// Fail on lines that look like references but are malformed, such as
	/// `  @file.md` or `@@file.md`. Use `--strict=false` to turn off strict
	/// mode enabled in `spectree.toml`.
	#[arg(
		long,
		env = "SPECTREE_STRICT",
		value_name = "BOOL",
		num_args = 0..=1,
		require_equals = true,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
	)]
	pub strict: Option<bool>,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}
