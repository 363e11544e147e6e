use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::CxxgenError;
use crate::CxxgenResult;
use crate::generator::GeneratorFn;
use crate::generator::parse_generators;
use crate::registry::Context;
use crate::text::apply_indentation;
use crate::text::inject;
use crate::text::substitute_variables;

/// An injection-point marker: `// [@ID@]`, or the refresh pair
/// `// [@ID{@]` / `// [@ID}@]` wrapping previously expanded content. The
/// captured identifier keeps its `{`/`}` suffix so the scan loop can tell
/// fresh markers from refresh pairs.
static MARKER_PATTERN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"//[ \t]*\[@(\w+[{}]?)@\][ \t]*\n").unwrap());

/// Expand every template/generator marker in `data`.
///
/// Markers are processed in document order. A fresh marker is replaced by an
/// open sentinel, the resolved content, and a close sentinel; a refresh pair
/// is located as a whole (open marker through the matching close marker) and
/// regenerated in place, which makes repeated runs idempotent. In purge mode
/// the resolved content is empty and only the sentinels remain.
///
/// The scan resumes after each splice with an explicit cursor corrected by
/// the net length change of the replacement, so later markers are found at
/// their true offsets even after the document grows or shrinks.
pub fn expand_templates(ctx: &Context, data: &str, _options: &toml::Table) -> CxxgenResult<String> {
	let generators = parse_generators(data)?;

	let mut data = data.to_string();
	let mut cursor = 0;

	while let Some(captures) = MARKER_PATTERN.captures_at(&data, cursor) {
		let matched = captures.get(0).expect("regex match has group 0");
		let mut id = captures[1].to_string();

		// Grow the span over the marker's indentation.
		let bytes = data.as_bytes();
		let mut start = matched.start();
		let mut indent = 0;
		while start > 0 && bytes[start - 1] == b' ' {
			start -= 1;
			indent += 1;
		}

		let mut end = matched.end();

		if id.ends_with('{') {
			// Previously expanded region: the close marker must be the next
			// marker found by the same scan.
			id.pop();
			let close = MARKER_PATTERN
				.captures_at(&data, matched.end())
				.ok_or_else(|| CxxgenError::MissingEndMark(id.clone()))?;
			if close[1] != format!("{id}}}") {
				return Err(CxxgenError::MissingEndMark(id));
			}
			end = close.get(0).expect("regex match has group 0").end();
		}

		let indentation = " ".repeat(indent);
		let content = if ctx.options.purge {
			String::new()
		} else {
			let resolved = resolve_marker(ctx, &generators, &id)?;
			let mut indented = apply_indentation(&resolved, &indentation);
			if !indented.is_empty() && !indented.ends_with('\n') {
				indented.push('\n');
			}
			indented
		};

		let replacement =
			format!("{indentation}// [@{id}{{@]\n{content}{indentation}// [@{id}}}@]\n");
		data = inject(&data, start, end, &replacement)?;

		// Resume after the injected block: the end of the matched span shifted
		// by the net length change of the replacement.
		cursor = start + replacement.len();
	}

	Ok(data)
}

/// Resolve a marker id to its content: registered templates take precedence
/// over this document's extracted generators.
fn resolve_marker(
	ctx: &Context,
	generators: &BTreeMap<String, GeneratorFn>,
	id: &str,
) -> CxxgenResult<String> {
	if let Some(template) = ctx.templates.get(id) {
		return substitute_variables(&template.body, &ctx.vars);
	}

	if let Some(generator) = generators.get(id) {
		return generator.call(&ctx.vars);
	}

	Err(CxxgenError::UnknownReference(id.to_string()))
}
