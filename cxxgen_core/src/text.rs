use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::CxxgenError;
use crate::CxxgenResult;

/// File extensions recognized as C, C++ or Objective-C sources.
pub const SOURCE_EXTENSIONS: [&str; 6] = [".c", ".cc", ".cpp", ".cxx", ".m", ".mm"];

/// File extensions recognized as C/C++ headers.
pub const HEADER_EXTENSIONS: [&str; 5] = [".h", ".hh", ".hpp", ".hxx", ".inc"];

/// Match `name` against a list of extensions (case-insensitive). Returns the
/// matched extension on success.
pub fn match_extension<'a>(name: &str, extensions: &[&'a str]) -> Option<&'a str> {
	let lower = name.to_ascii_lowercase();
	extensions.iter().find(|ext| lower.ends_with(*ext)).copied()
}

pub fn is_source_file(name: &str) -> bool {
	match_extension(name, &SOURCE_EXTENSIONS).is_some()
}

pub fn is_header_file(name: &str) -> bool {
	match_extension(name, &HEADER_EXTENSIONS).is_some()
}

/// Characters that participate in a common indentation prefix. Backslash is
/// included so that C macro continuation columns survive normalization.
fn is_prefix_char(byte: u8) -> bool {
	byte == b' ' || byte == b'\\'
}

/// Remove the widest indentation prefix shared by every non-blank line.
///
/// Blank and whitespace-only lines are cleared to empty. The first line with
/// content seeds the candidate prefix (its leading run of spaces and
/// backslashes); each following content line narrows the candidate by
/// character equality. When a non-empty common prefix remains it is stripped
/// from every non-blank line.
///
/// Template bodies are authored with a uniform source-level indentation so
/// they read naturally next to the code that registers them; this strips
/// that indentation before the body is stored.
pub fn remove_indentation(text: &str) -> String {
	let mut lines: Vec<String> = text
		.split('\n')
		.map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
		.collect();

	let mut pattern: Option<String> = None;

	for line in &mut lines {
		if line.trim().is_empty() {
			line.clear();
			continue;
		}

		match &mut pattern {
			None => {
				let end = line
					.bytes()
					.take_while(|byte| is_prefix_char(*byte))
					.count();
				pattern = Some(line[..end].to_string());
			}
			Some(prefix) if !prefix.is_empty() => {
				let common = prefix
					.bytes()
					.zip(line.bytes())
					.take_while(|(a, b)| a == b)
					.count();
				prefix.truncate(common);
			}
			Some(_) => {}
		}
	}

	if let Some(prefix) = pattern.filter(|prefix| !prefix.is_empty()) {
		for line in &mut lines {
			if line.is_empty() {
				continue;
			}
			line.replace_range(..prefix.len(), "");
		}
	}

	lines.join("\n")
}

/// Prepend `prefix` to every non-empty line of `text`.
pub fn apply_indentation(text: &str, prefix: &str) -> String {
	if prefix.is_empty() {
		return text.to_string();
	}

	text.split('\n')
		.map(|line| {
			let line = line.strip_suffix('\r').unwrap_or(line);
			if line.is_empty() {
				String::new()
			} else {
				format!("{prefix}{line}")
			}
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Strip leading blank lines and collapse trailing line breaks to exactly
/// one. Applied once to every template body at registration time.
pub fn remove_lines(text: &str) -> String {
	let leading_ws = text
		.bytes()
		.take_while(|byte| matches!(byte, b' ' | b'\t' | b'\r' | b'\n'))
		.count();
	let start = text[..leading_ws].rfind('\n').map_or(0, |index| index + 1);

	let body = &text[start..];
	let end = body.trim_end_matches(['\r', '\n']).len();
	if end == body.len() {
		body.to_string()
	} else {
		format!("{}\n", &body[..end])
	}
}

/// Replace `text[start..end]` with `content`. This is the sole mutation
/// primitive of the expansion engine; every higher-level transform computes
/// a `(start, end, content)` triple and delegates here.
pub fn inject(text: &str, start: usize, end: usize, content: &str) -> CxxgenResult<String> {
	if start > end || end > text.len() {
		return Err(CxxgenError::InjectOutOfBounds {
			start,
			end,
			len: text.len(),
		});
	}

	let mut out = String::with_capacity(text.len() - (end - start) + content.len());
	out.push_str(&text[..start]);
	out.push_str(content);
	out.push_str(&text[end..]);
	Ok(out)
}

static VARIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(\w+)@").unwrap());

/// Replace every `@name@` occurrence in `template` with the value of
/// `vars["name"]`. A referenced name that is absent or null aborts the whole
/// expansion. There is no escaping syntax for a literal `@`.
pub fn substitute_variables(
	template: &str,
	vars: &HashMap<String, serde_json::Value>,
) -> CxxgenResult<String> {
	let mut out = String::with_capacity(template.len());
	let mut last = 0;

	for captures in VARIABLE_PATTERN.captures_iter(template) {
		let matched = captures.get(0).expect("regex match has group 0");
		let name = &captures[1];

		out.push_str(&template[last..matched.start()]);
		out.push_str(&variable_to_string(name, vars.get(name))?);
		last = matched.end();
	}

	out.push_str(&template[last..]);
	Ok(out)
}

fn variable_to_string(name: &str, value: Option<&serde_json::Value>) -> CxxgenResult<String> {
	match value {
		None | Some(serde_json::Value::Null) => Err(CxxgenError::MissingVariable(name.to_string())),
		Some(serde_json::Value::String(s)) => Ok(s.clone()),
		Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
		Some(serde_json::Value::Bool(b)) => Ok(b.to_string()),
		Some(serde_json::Value::Array(items)) => {
			let parts: CxxgenResult<Vec<String>> = items
				.iter()
				.map(|item| variable_to_string(name, Some(item)))
				.collect();
			Ok(parts?.join(", "))
		}
		Some(serde_json::Value::Object(_)) => Err(CxxgenError::InvalidVariable(name.to_string())),
	}
}

/// Parse a single `//` line comment starting at byte offset `from`. Leading
/// spaces and tabs are consumed as part of the comment. Returns the comment
/// slice including its terminating line break (if present), or `None` when
/// the text at `from` is not a line comment.
pub fn parse_line_comment(text: &str, from: usize) -> Option<&str> {
	let bytes = text.as_bytes();
	let mut i = from;

	while i < bytes.len() && matches!(bytes[i], b' ' | b'\t') {
		i += 1;
	}

	if i + 2 > bytes.len() || bytes[i] != b'/' || bytes[i + 1] != b'/' {
		return None;
	}
	i += 2;

	while i < bytes.len() {
		let byte = bytes[i];
		i += 1;
		if byte == b'\n' {
			break;
		}
	}

	Some(&text[from..i])
}

/// Lay out `items` as a comma-separated table wrapped at `width` columns.
pub fn format_table(items: &[String], width: usize) -> String {
	let width = if width == 0 { 80 } else { width };
	let mut out = String::new();
	let mut column = 0;

	for (index, item) in items.iter().enumerate() {
		if index != 0 {
			if column + item.len() + 1 >= width {
				out.push_str(",\n");
				column = 0;
			} else {
				out.push_str(", ");
				column += 2;
			}
		}

		out.push_str(item);
		column += item.len();
	}

	out
}
