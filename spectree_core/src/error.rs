use std::path::Path;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SpecTreeError {
	#[error(transparent)]
	#[diagnostic(code(spectree::io_error))]
	Io(#[from] std::io::Error),

	#[error("file not found: {}{}", .path.display(), referenced_from_suffix(.referenced_from.as_deref()))]
	#[diagnostic(
		code(spectree::not_found),
		help("check that the referenced path is spelled correctly and relative to the referencing file")
	)]
	NotFound {
		path: PathBuf,
		referenced_from: Option<PathBuf>,
	},

	#[error("permission denied: cannot {operation} file {}", .path.display())]
	#[diagnostic(code(spectree::permission))]
	Permission { path: PathBuf, operation: String },

	#[error("circular reference detected: {}", format_chain(.chain, .path))]
	#[diagnostic(
		code(spectree::circular_reference),
		help("remove one of the `@` references that forms this cycle")
	)]
	CircularReference { path: PathBuf, chain: Vec<PathBuf> },

	#[error("path escapes root directory: {reference} (root: {})", .root_dir.display())]
	#[diagnostic(
		code(spectree::path_escape),
		help("references must resolve to files inside the root directory; pass `--root-dir` to widen it")
	)]
	PathEscape { reference: String, root_dir: PathBuf },

	#[error("invalid reference on line {line}: {reference} - {reason}")]
	#[diagnostic(
		code(spectree::invalid_reference),
		help("a reference is a whole line of the form `@relative/path.md` with no surrounding text")
	)]
	InvalidReference {
		reference: String,
		reason: String,
		line: usize,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(spectree::config_parse),
		help("check that spectree.toml is valid TOML with optional `root_dir` and `strict` keys")
	)]
	ConfigParse(String),
}

fn referenced_from_suffix(referenced_from: Option<&Path>) -> String {
	referenced_from
		.map(|file| format!(" (referenced from {})", file.display()))
		.unwrap_or_default()
}

fn format_chain(chain: &[PathBuf], path: &Path) -> String {
	chain
		.iter()
		.map(|entry| entry.as_path())
		.chain(std::iter::once(path))
		.map(|entry| entry.display().to_string())
		.collect::<Vec<_>>()
		.join(" -> ")
}

pub type SpecTreeResult<T> = Result<T, SpecTreeError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
