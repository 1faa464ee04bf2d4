//! Path arithmetic for reference targets.
//!
//! Everything here is lexical: `.` and `..` segments are folded without
//! touching the filesystem and symlinks are never followed. A reference that
//! leaves the root through a symlinked directory is therefore not detected as
//! an escape.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Fold `.` and `..` segments out of `path`.
///
/// A `..` removes the preceding normal segment. At the root it is dropped,
/// and in a relative path with nothing left to remove it is kept, so the
/// result never climbs above where it started.
pub fn normalize_path(path: &Path) -> PathBuf {
	let mut normalized = PathBuf::new();

	for component in path.components() {
		match component {
			Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
			Component::CurDir => {}
			Component::ParentDir => {
				let last = normalized.components().next_back();
				if matches!(last, Some(Component::Normal(_))) {
					normalized.pop();
				} else if !matches!(last, Some(Component::Prefix(_) | Component::RootDir)) {
					normalized.push(Component::ParentDir.as_os_str());
				}
			}
			Component::Normal(segment) => normalized.push(segment),
		}
	}

	normalized
}

/// Make `path` absolute against the process working directory and normalize
/// it.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
	if path.is_absolute() {
		return Ok(normalize_path(path));
	}

	let cwd = std::env::current_dir()?;
	Ok(normalize_path(&cwd.join(path)))
}

/// Resolve `reference` against the directory containing `current_file`.
///
/// `current_file` is expected to be absolute. An absolute `reference`
/// replaces the base entirely, which the containment check then judges like
/// any other target.
pub fn resolve_reference_path(current_file: &Path, reference: &str) -> PathBuf {
	let base = current_file.parent().unwrap_or(current_file);
	normalize_path(&base.join(reference))
}

/// Returns `true` when `candidate` is `root` itself or nested below it.
///
/// Both sides are made absolute against the working directory, normalized
/// and compared component by component, so `/docs-old` is not inside `/docs`
/// while `/docs/..notes` is. When the working directory is unavailable,
/// relative inputs are only normalized.
pub fn is_within_root(root: &Path, candidate: &Path) -> bool {
	let absolute = |path: &Path| absolutize(path).unwrap_or_else(|_| normalize_path(path));
	absolute(candidate).starts_with(absolute(root))
}

/// Render a path with forward slashes for display.
pub fn to_display_path(path: &Path) -> String {
	path.to_string_lossy().replace('\\', "/")
}
