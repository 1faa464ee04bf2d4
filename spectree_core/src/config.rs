use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::SpecTreeError;
use crate::SpecTreeResult;
use crate::path::normalize_path;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"spectree.toml",
	".spectree.toml",
	".config/spectree.toml",
];

/// Configuration loaded from a `spectree.toml` file.
///
/// ```toml
/// root_dir = "docs"
/// strict = true
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SpecTreeConfig {
	/// Containment boundary for every reference in a resolution. Relative
	/// values are resolved against the directory the config was discovered
	/// from, including for `.config/spectree.toml`.
	/// When absent, the directory of the start document is used.
	#[serde(default)]
	pub root_dir: Option<PathBuf>,
	/// Reject lines that look like references but are malformed, instead of
	/// passing them through as text.
	#[serde(default)]
	pub strict: bool,
}

impl SpecTreeConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(dir: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| dir.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file in `dir`.
	/// Returns `None` if no candidate exists.
	pub fn load(dir: &Path) -> SpecTreeResult<Option<SpecTreeConfig>> {
		let Some(config_path) = Self::resolve_path(dir) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content, dir)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Parse config text, anchoring a relative `root_dir` at `base_dir`.
	///
	/// `base_dir` is the discovery directory passed to [`SpecTreeConfig::load`].
	pub fn parse(content: &str, base_dir: &Path) -> SpecTreeResult<SpecTreeConfig> {
		let mut config: SpecTreeConfig =
			toml::from_str(content).map_err(|e| SpecTreeError::ConfigParse(e.to_string()))?;

		if let Some(root_dir) = config.root_dir.take() {
			config.root_dir = Some(normalize_path(&base_dir.join(root_dir)));
		}

		Ok(config)
	}
}
