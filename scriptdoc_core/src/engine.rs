use std::path::Path;
use std::path::PathBuf;

use crate::DefinitionTree;
use crate::GeneratedPage;
use crate::PageRenderer;
use crate::ScriptdocConfig;
use crate::ScriptdocResult;
use crate::writer::manifest;
use crate::writer::write_pages;

/// Resolved inputs of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
	/// The API definitions file.
	pub input: PathBuf,
	/// Directory receiving the pages.
	pub output: PathBuf,
	/// Reserved top-level key holding the modules.
	pub namespace: String,
	/// Front-matter `layout` value.
	pub layout: String,
}

impl GenerateOptions {
	/// Resolve the config's paths against `root`.
	pub fn from_config(root: &Path, config: &ScriptdocConfig) -> Self {
		Self {
			input: config.input_path(root),
			output: config.output_dir(root),
			namespace: config.namespace.clone(),
			layout: config.layout.clone(),
		}
	}
}

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateResult {
	/// Paths of the written pages in page order.
	pub written: Vec<PathBuf>,
}

impl GenerateResult {
	/// Sorted file names of the written pages.
	pub fn manifest(&self) -> Vec<String> {
		manifest(&self.written)
	}
}

/// Render every page of `tree` without touching the filesystem.
pub fn render_pages(tree: &DefinitionTree, layout: &str) -> ScriptdocResult<Vec<GeneratedPage>> {
	PageRenderer::new(tree, layout)?.render_all()
}

/// Load the definitions, render all pages and write them out.
///
/// Nothing is written unless loading and rendering both succeed.
pub fn generate(options: &GenerateOptions) -> ScriptdocResult<GenerateResult> {
	let tree = DefinitionTree::load(&options.input, &options.namespace)?;
	let pages = render_pages(&tree, &options.layout)?;
	let written = write_pages(&options.output, &pages)?;

	Ok(GenerateResult { written })
}
