use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DwtError;
use crate::DwtResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 2] = ["dwt.toml", ".dwt.toml"];

/// Configuration loaded from a `dwt.toml` file.
///
/// ```toml
/// [locations]
/// templates = "Templates"
/// output = "tpl"
/// target_prefix = "/Templates/"
///
/// [generator]
/// include = "^site_"
/// exclude = "_draft"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DwtConfig {
	pub locations: Locations,
	pub generator: GeneratorConfig,
}

/// Where master documents live and where generated output goes, relative to
/// the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Locations {
	/// Directory holding the `.dwt` master documents.
	pub templates: PathBuf,
	/// Directory the generated instance documents are written to.
	pub output: PathBuf,
	/// Prefix joined with a master's file name to form the path recorded in
	/// its instance-begin wrapper.
	pub target_prefix: String,
}

impl Default for Locations {
	fn default() -> Self {
		Self {
			templates: PathBuf::from("."),
			output: PathBuf::from("."),
			target_prefix: "/Templates/".to_string(),
		}
	}
}

/// File-name filters applied while discovering master documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
	/// Only file names matching this regular expression are processed.
	pub include: Option<String>,
	/// File names matching this regular expression are skipped.
	pub exclude: Option<String>,
}

impl DwtConfig {
	/// Load configuration from the first candidate found under `root`.
	/// Returns `Ok(None)` when no config file exists.
	pub fn load(root: &Path) -> DwtResult<Option<Self>> {
		for candidate in CONFIG_FILE_CANDIDATES {
			let path = root.join(candidate);
			if !path.is_file() {
				continue;
			}

			let raw = std::fs::read_to_string(&path)?;
			let config =
				toml::from_str(&raw).map_err(|error| DwtError::ConfigParse(error.to_string()))?;
			return Ok(Some(config));
		}

		Ok(None)
	}
}
