use std::path::Path;
use std::path::PathBuf;

use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;

use crate::CxxgenError;
use crate::CxxgenResult;
use crate::text::is_header_file;
use crate::text::is_source_file;

/// A candidate file's content and processing state.
///
/// The original text is read once and kept for the file's lifetime; each
/// pipeline pass replaces the current text through [`SourceFile::set_data`],
/// which records one human-readable op per pass that actually changed the
/// text. A file counts as modified exactly when its current text differs
/// from the original.
#[derive(Debug)]
pub struct SourceFile {
	/// Absolute path on disk.
	pub path: PathBuf,
	/// Path relative to the scanned root, for display.
	pub rel_name: String,
	/// The text as read from disk.
	pub orig: String,
	/// The text after the passes applied so far.
	pub data: String,
	/// One description per pass that changed the text.
	pub ops: Vec<String>,
}

impl SourceFile {
	/// Read the file from disk as UTF-8.
	pub fn read(path: &Path, rel_name: &str) -> CxxgenResult<Self> {
		let orig = std::fs::read_to_string(path)?;
		Ok(Self {
			path: path.to_path_buf(),
			rel_name: rel_name.to_string(),
			data: orig.clone(),
			orig,
			ops: Vec::new(),
		})
	}

	pub fn is_modified(&self) -> bool {
		self.data != self.orig
	}

	/// Replace the current text when the pass produced something new, and
	/// record the op that did it. A pass returning identical text leaves the
	/// file untouched and records nothing.
	pub fn set_data(&mut self, new_data: String, op: &str) {
		if new_data != self.data {
			self.data = new_data;
			self.ops.push(op.to_string());
		}
	}

	/// Write the current text back to disk atomically: the content goes to a
	/// sibling temp file first and is renamed over the original, so an
	/// interrupted run never leaves a half-written source file.
	pub fn write(&self) -> CxxgenResult<()> {
		let temp_path = self
			.path
			.with_extension(format!("tmp-{}", std::process::id()));

		std::fs::write(&temp_path, &self.data)?;
		if let Err(error) = std::fs::rename(&temp_path, &self.path) {
			let _ = std::fs::remove_file(&temp_path);
			return Err(error.into());
		}

		Ok(())
	}
}

/// Collect every C/C++/Objective-C source and header file under `root`,
/// skipping symbolic links and hidden directories and applying the
/// gitignore-style `exclude` patterns. The result is sorted for
/// deterministic processing order.
pub fn collect_source_files(root: &Path, exclude: &[String]) -> CxxgenResult<Vec<PathBuf>> {
	let mut files = Vec::new();
	let matcher = build_exclude_matcher(root, exclude)?;

	walk_dir(root, &matcher, &mut files)?;
	files.sort();
	Ok(files)
}

/// Compute the display name of `path` relative to `root`.
pub fn relative_name(root: &Path, path: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}

/// Build a `Gitignore` matcher from the configured exclude patterns. These
/// follow `.gitignore` syntax, so plain relative paths work as-is.
fn build_exclude_matcher(root: &Path, patterns: &[String]) -> CxxgenResult<Gitignore> {
	let mut builder = GitignoreBuilder::new(root);
	for pattern in patterns {
		builder
			.add_line(None, pattern)
			.map_err(|e| CxxgenError::ConfigParse(format!("invalid exclude pattern `{pattern}`: {e}")))?;
	}
	builder
		.build()
		.map_err(|e| CxxgenError::ConfigParse(format!("failed to build exclude rules: {e}")))
}

fn is_ignored_directory_name(name: &str) -> bool {
	name.starts_with('.') || name == "node_modules" || name == "target"
}

fn walk_dir(dir: &Path, exclude: &Gitignore, files: &mut Vec<PathBuf>) -> CxxgenResult<()> {
	if !dir.is_dir() {
		return Ok(());
	}

	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if entry.file_type()?.is_symlink() {
			continue;
		}

		let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
			continue;
		};

		let is_dir = path.is_dir();
		if is_dir && is_ignored_directory_name(name) {
			continue;
		}

		if exclude.matched(&path, is_dir).is_ignore() {
			continue;
		}

		if is_dir {
			walk_dir(&path, exclude, files)?;
		} else if is_source_file(name) || is_header_file(name) {
			files.push(path);
		}
	}

	Ok(())
}
