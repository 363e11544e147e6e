use once_cell::sync::Lazy;
use regex::Regex;

use crate::CxxgenError;
use crate::CxxgenResult;
use crate::registry::Context;
use crate::text::inject;

/// Replace every tab with the configured number of spaces.
pub fn no_tabs(ctx: &Context, data: &str, _options: &toml::Table) -> CxxgenResult<String> {
	if !data.contains('\t') {
		return Ok(data.to_string());
	}

	Ok(data.replace('\t', &" ".repeat(ctx.config.indent_size)))
}

static TRAILING_SPACE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+(\r?\n)").unwrap());

/// Remove runs of spaces and tabs immediately preceding a line break. Works
/// on either end-of-line convention.
pub fn no_trailing_spaces(_ctx: &Context, data: &str, _options: &toml::Table) -> CxxgenResult<String> {
	Ok(TRAILING_SPACE_PATTERN.replace_all(data, "$1").into_owned())
}

/// Collapse trailing blank lines: strip all trailing line breaks, then
/// re-append exactly one, preserving the input's final break convention.
/// The output ends with a line break iff the input did.
pub fn no_trailing_lines(_ctx: &Context, data: &str, _options: &toml::Table) -> CxxgenResult<String> {
	let ending = if data.ends_with("\r\n") {
		"\r\n"
	} else if data.ends_with('\n') {
		"\n"
	} else {
		""
	};

	let stripped = data.trim_end_matches(['\r', '\n']);
	Ok(format!("{stripped}{ending}"))
}

/// Convert all line breaks to `\n`.
pub fn unix_eol(_ctx: &Context, data: &str, _options: &toml::Table) -> CxxgenResult<String> {
	Ok(data.replace("\r\n", "\n"))
}

/// Convert all line breaks to `\r\n`.
pub fn windows_eol(_ctx: &Context, data: &str, _options: &toml::Table) -> CxxgenResult<String> {
	Ok(data.replace("\r\n", "\n").replace('\n', "\r\n"))
}

const INCLUDE_DIRECTIVE: &str = "#include";

/// Sort maximal contiguous runs of `#include` lines lexicographically.
///
/// A run is two or more adjacent lines each starting at column 0 with the
/// directive token (`#include` unless overridden by the `directive` option).
/// Captured lines are reused verbatim (only reordered), so a sorted
/// replacement always has exactly the length of the span it replaces; a
/// mismatch aborts the run instead of corrupting the file. Single-line runs
/// are left untouched.
pub fn sort_includes(_ctx: &Context, data: &str, options: &toml::Table) -> CxxgenResult<String> {
	let directive = options
		.get("directive")
		.and_then(toml::Value::as_str)
		.unwrap_or(INCLUDE_DIRECTIVE);

	let mut out = data.to_string();

	let mut run_start: Option<usize> = None;
	let mut lines: Vec<String> = Vec::new();

	let mut i = 0;
	let mut at_line_start = true;

	while i < out.len() {
		if at_line_start && out.as_bytes()[i..].starts_with(directive.as_bytes()) {
			let line_start = i;
			if run_start.is_none() {
				run_start = Some(i);
				lines.clear();
			}

			// Capture the directive line without its terminating break.
			loop {
				i += 1;
				if i >= out.len() {
					lines.push(out[line_start..i].to_string());
					break;
				}
				if out.as_bytes()[i] == b'\n' {
					lines.push(out[line_start..i].to_string());
					i += 1;
					break;
				}
			}
		} else if let Some(start) = run_start.take() {
			out = splice_sorted_run(out, start, i, &mut lines)?;
			at_line_start = out.as_bytes()[i] == b'\n';
			i += 1;
		} else {
			at_line_start = out.as_bytes()[i] == b'\n';
			i += 1;
		}
	}

	// A run terminated by end-of-document is sorted as well.
	if let Some(start) = run_start {
		let end = out.len();
		out = splice_sorted_run(out, start, end, &mut lines)?;
	}

	Ok(out)
}

/// Sort a captured run and splice it back over `start..end`. The last
/// captured line carries no break, so the joined block is re-terminated only
/// when the span itself ends with one.
fn splice_sorted_run(
	out: String,
	start: usize,
	end: usize,
	lines: &mut Vec<String>,
) -> CxxgenResult<String> {
	if lines.len() < 2 {
		lines.clear();
		return Ok(out);
	}

	lines.sort();
	let mut replacement = lines.join("\n");
	if out[start..end].ends_with('\n') {
		replacement.push('\n');
	}
	lines.clear();

	if replacement.len() != end - start {
		return Err(CxxgenError::SortLengthMismatch {
			expected: end - start,
			actual: replacement.len(),
		});
	}

	inject(&out, start, end, &replacement)
}
