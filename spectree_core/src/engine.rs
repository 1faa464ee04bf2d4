use std::borrow::Cow;
use std::path::Path;
use std::path::PathBuf;

use crate::ContentLoader;
use crate::FsLoader;
use crate::ParsedLine;
use crate::SpecTreeConfig;
use crate::SpecTreeError;
use crate::SpecTreeResult;
use crate::parse_line;
use crate::parse_line_strict;
use crate::path::absolutize;
use crate::path::is_within_root;
use crate::path::resolve_reference_path;

/// Options for a single resolution.
///
/// Use [`ResolveOptions::default()`] to bound references by the directory of
/// the start document, or [`ResolveOptions::from_config`] to construct from a
/// [`SpecTreeConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
	/// Overrides the containment boundary for the whole resolution.
	pub root_dir: Option<PathBuf>,
	/// Report malformed reference-like lines as errors.
	pub strict: bool,
}

impl ResolveOptions {
	/// Construct [`ResolveOptions`] from an optional [`SpecTreeConfig`].
	pub fn from_config(config: Option<&SpecTreeConfig>) -> Self {
		Self {
			root_dir: config.and_then(|c| c.root_dir.clone()),
			strict: config.is_some_and(|c| c.strict),
		}
	}

	#[must_use]
	pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
		self.root_dir = Some(root_dir.into());
		self
	}

	#[must_use]
	pub fn with_strict(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}
}

/// A resolution session.
///
/// The session owns the root boundary and the stack of files currently being
/// expanded. The root is fixed by the first file resolved unless it was given
/// in [`ResolveOptions`], and never changes afterwards. The stack is always
/// empty between calls.
#[derive(Debug)]
pub struct Resolver<L> {
	loader: L,
	root_dir: Option<PathBuf>,
	strict: bool,
	active_stack: Vec<PathBuf>,
}

impl<L: ContentLoader> Resolver<L> {
	pub fn new(loader: L, options: ResolveOptions) -> Self {
		Self {
			loader,
			root_dir: options.root_dir,
			strict: options.strict,
			active_stack: Vec::new(),
		}
	}

	/// The containment boundary, once established.
	pub fn root_dir(&self) -> Option<&Path> {
		self.root_dir.as_deref()
	}

	/// Files currently being expanded, outermost first.
	pub fn active_stack(&self) -> &[PathBuf] {
		&self.active_stack
	}

	/// Load `path` and expand every reference in it, recursively.
	pub fn resolve_file(&mut self, path: impl AsRef<Path>) -> SpecTreeResult<String> {
		let path = absolutize(path.as_ref())?;
		self.establish_root(&path)?;
		self.resolve_absolute(path, None)
	}

	/// Expand the references in `content` as if it were the text of
	/// `current_file`.
	pub fn expand(
		&mut self,
		content: &str,
		current_file: impl AsRef<Path>,
	) -> SpecTreeResult<String> {
		let current_file = absolutize(current_file.as_ref())?;
		self.establish_root(&current_file)?;
		self.expand_content(content, &current_file)
	}

	fn establish_root(&mut self, file: &Path) -> SpecTreeResult<()> {
		match &self.root_dir {
			Some(root) if root.is_absolute() => {}
			Some(root) => {
				let root = absolutize(root)?;
				self.root_dir = Some(root);
			}
			None => {
				let root = file.parent().unwrap_or(file).to_path_buf();
				tracing::debug!(root = %root.display(), "root directory established");
				self.root_dir = Some(root);
			}
		}

		Ok(())
	}

	fn resolve_absolute(
		&mut self,
		path: PathBuf,
		referenced_from: Option<&Path>,
	) -> SpecTreeResult<String> {
		if self.active_stack.contains(&path) {
			return Err(SpecTreeError::CircularReference {
				path,
				chain: self.active_stack.clone(),
			});
		}

		self.active_stack.push(path.clone());
		tracing::debug!(path = %path.display(), depth = self.active_stack.len(), "resolving file");

		let result = self.load_and_expand(&path, referenced_from);

		let popped = self.active_stack.pop();
		debug_assert_eq!(popped.as_deref(), Some(path.as_path()));
		tracing::debug!(
			path = %path.display(),
			depth = self.active_stack.len(),
			ok = result.is_ok(),
			"finished file"
		);

		result
	}

	fn load_and_expand(
		&mut self,
		path: &Path,
		referenced_from: Option<&Path>,
	) -> SpecTreeResult<String> {
		let content = self.loader.read_text(path).map_err(|error| {
			match error {
				SpecTreeError::NotFound {
					path,
					referenced_from: None,
				} => {
					SpecTreeError::NotFound {
						path,
						referenced_from: referenced_from.map(Path::to_path_buf),
					}
				}
				other => other,
			}
		})?;

		self.expand_content(&content, path)
	}

	fn expand_content(&mut self, content: &str, current_file: &Path) -> SpecTreeResult<String> {
		let mut lines: Vec<Cow<'_, str>> = Vec::new();

		for (index, line) in content.split('\n').enumerate() {
			let parsed = if self.strict {
				parse_line_strict(line, index + 1)?
			} else {
				parse_line(line)
			};

			let ParsedLine::Reference(reference) = parsed else {
				lines.push(Cow::Borrowed(line));
				continue;
			};

			let target = resolve_reference_path(current_file, reference);
			tracing::trace!(
				line = index + 1,
				reference,
				target = %target.display(),
				"reference found"
			);

			if let Some(root) = self.root_dir.as_deref() {
				if !is_within_root(root, &target) {
					return Err(SpecTreeError::PathEscape {
						reference: reference.to_string(),
						root_dir: root.to_path_buf(),
					});
				}
			}

			let mut resolved = self.resolve_absolute(target, Some(current_file))?;
			if resolved.ends_with('\n') {
				resolved.pop();
			}

			lines.push(Cow::Owned(resolved));
		}

		Ok(lines.join("\n"))
	}
}

/// Resolve `start` from the local filesystem in a fresh session.
pub fn resolve(start: impl AsRef<Path>, options: ResolveOptions) -> SpecTreeResult<String> {
	resolve_with_loader(FsLoader, start, options)
}

/// Resolve `start` through `loader` in a fresh session.
pub fn resolve_with_loader<L: ContentLoader>(
	loader: L,
	start: impl AsRef<Path>,
	options: ResolveOptions,
) -> SpecTreeResult<String> {
	Resolver::new(loader, options).resolve_file(start)
}
