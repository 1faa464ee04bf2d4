use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use crate::SpecTreeError;
use crate::SpecTreeResult;
use crate::path::normalize_path;

/// Source of document text for the resolver.
///
/// Implementations report a missing file as [`SpecTreeError::NotFound`] and
/// an unreadable one as [`SpecTreeError::Permission`]. Any other failure is
/// surfaced as [`SpecTreeError::Io`].
pub trait ContentLoader {
	/// Read the UTF-8 text stored at the absolute path `path`.
	fn read_text(&self, path: &Path) -> SpecTreeResult<String>;
}

impl<L: ContentLoader + ?Sized> ContentLoader for &L {
	fn read_text(&self, path: &Path) -> SpecTreeResult<String> {
		(**self).read_text(path)
	}
}

/// Reads documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl ContentLoader for FsLoader {
	fn read_text(&self, path: &Path) -> SpecTreeResult<String> {
		std::fs::read_to_string(path).map_err(|error| classify_io_error(path, error))
	}
}

/// Map an I/O failure on `path` to the matching error kind.
pub(crate) fn classify_io_error(path: &Path, error: std::io::Error) -> SpecTreeError {
	match error.kind() {
		ErrorKind::NotFound => {
			SpecTreeError::NotFound {
				path: path.to_path_buf(),
				referenced_from: None,
			}
		}
		ErrorKind::PermissionDenied => {
			SpecTreeError::Permission {
				path: path.to_path_buf(),
				operation: "read".to_string(),
			}
		}
		_ => SpecTreeError::Io(error),
	}
}

/// An in-memory set of documents keyed by absolute path.
///
/// ```rust
/// use spectree_core::MemoryLoader;
/// use spectree_core::ResolveOptions;
/// use spectree_core::resolve_with_loader;
///
/// let loader = MemoryLoader::new()
/// 	.with_file("/docs/main.md", "# Main\n@part.md")
/// 	.with_file("/docs/part.md", "Part\n");
///
/// let output = resolve_with_loader(&loader, "/docs/main.md", ResolveOptions::default()).unwrap();
/// assert_eq!(output, "# Main\nPart");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
	files: BTreeMap<PathBuf, String>,
}

impl MemoryLoader {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add or replace a document. The path is normalized before storage.
	#[must_use]
	pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
		self.insert(path, content);
		self
	}

	/// Add or replace a document. The path is normalized before storage.
	pub fn insert(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
		self.files
			.insert(normalize_path(path.as_ref()), content.into());
	}

	pub fn len(&self) -> usize {
		self.files.len()
	}

	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}
}

impl ContentLoader for MemoryLoader {
	fn read_text(&self, path: &Path) -> SpecTreeResult<String> {
		self.files
			.get(&normalize_path(path))
			.cloned()
			.ok_or_else(|| {
				SpecTreeError::NotFound {
					path: path.to_path_buf(),
					referenced_from: None,
				}
			})
	}
}
