use std::path::Path;
use std::path::PathBuf;

use crate::GeneratedPage;
use crate::ScriptdocResult;

/// Write every page into `output_dir`, replacing existing files.
///
/// All contents are serialized before the first file is touched. Each page
/// goes to a temporary sibling and is renamed into place, so a reader sees
/// either the previous or the new page. Returns the written paths in page
/// order.
pub fn write_pages(output_dir: &Path, pages: &[GeneratedPage]) -> ScriptdocResult<Vec<PathBuf>> {
	let rendered = pages
		.iter()
		.map(|page| -> ScriptdocResult<(String, String)> {
			Ok((page.file_name(), page.contents()?))
		})
		.collect::<ScriptdocResult<Vec<_>>>()?;

	std::fs::create_dir_all(output_dir)?;

	let mut written = Vec::with_capacity(rendered.len());
	for (file_name, contents) in rendered {
		let path = output_dir.join(&file_name);
		write_atomic(&path, &contents)?;
		tracing::debug!(path = %path.display(), "wrote page");
		written.push(path);
	}

	tracing::info!(
		count = written.len(),
		output = %output_dir.display(),
		"wrote documentation pages"
	);

	Ok(written)
}

fn write_atomic(path: &Path, contents: &str) -> ScriptdocResult<()> {
	let temp_path = path.with_extension(format!("md.tmp-{}", std::process::id()));
	std::fs::write(&temp_path, contents)?;

	if let Err(error) = std::fs::rename(&temp_path, path) {
		let _ = std::fs::remove_file(&temp_path);
		return Err(error.into());
	}

	Ok(())
}

/// File names of the written pages, sorted, for the end-of-run summary.
pub fn manifest(paths: &[PathBuf]) -> Vec<String> {
	let mut names: Vec<String> = paths
		.iter()
		.filter_map(|path| path.file_name())
		.map(|name| name.to_string_lossy().into_owned())
		.collect();
	names.sort();
	names
}
