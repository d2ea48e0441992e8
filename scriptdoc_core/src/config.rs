use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ScriptdocError;
use crate::ScriptdocResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"scriptdoc.toml",
	".scriptdoc.toml",
	".config/scriptdoc.toml",
];

/// Definitions file used when neither the config nor the command line name
/// one.
pub const DEFAULT_INPUT: &str = "sandman/priv/api_definitions.json";

/// Directory the generated pages are written to by default.
pub const DEFAULT_OUTPUT: &str = "docs/_docs";

/// Top-level key holding the namespaced modules.
pub const DEFAULT_NAMESPACE: &str = "sandman";

/// Front-matter `layout` used by the documentation site.
pub const DEFAULT_LAYOUT: &str = "docs";

/// Configuration loaded from a `scriptdoc.toml` file.
///
/// ```toml
/// input = "sandman/priv/api_definitions.json"
/// output = "docs/_docs"
/// namespace = "sandman"
/// layout = "docs"
/// ```
///
/// Every key is optional. Relative paths are resolved against the project
/// root.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScriptdocConfig {
	/// Path to the JSON API definitions file.
	#[serde(default = "default_input")]
	pub input: PathBuf,
	/// Directory that receives the generated markdown pages.
	#[serde(default = "default_output")]
	pub output: PathBuf,
	/// Reserved top-level key whose children are documented as modules.
	#[serde(default = "default_namespace")]
	pub namespace: String,
	/// Value of the `layout` front-matter attribute on every page.
	#[serde(default = "default_layout")]
	pub layout: String,
}

impl Default for ScriptdocConfig {
	fn default() -> Self {
		Self {
			input: default_input(),
			output: default_output(),
			namespace: default_namespace(),
			layout: default_layout(),
		}
	}
}

fn default_input() -> PathBuf {
	PathBuf::from(DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
	PathBuf::from(DEFAULT_OUTPUT)
}

fn default_namespace() -> String {
	DEFAULT_NAMESPACE.to_string()
}

fn default_layout() -> String {
	DEFAULT_LAYOUT.to_string()
}

impl ScriptdocConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> ScriptdocResult<Option<ScriptdocConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		let config: ScriptdocConfig =
			toml::from_str(&content).map_err(|e| ScriptdocError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to the defaults when there is
	/// no config file.
	pub fn load_or_default(root: &Path) -> ScriptdocResult<ScriptdocConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// The definitions file path resolved against `root`.
	pub fn input_path(&self, root: &Path) -> PathBuf {
		root.join(&self.input)
	}

	/// The output directory resolved against `root`.
	pub fn output_dir(&self, root: &Path) -> PathBuf {
		root.join(&self.output)
	}
}
