use std::collections::BTreeMap;
use std::collections::HashMap;

use minijinja::Environment;
use minijinja::value::Value;
use minijinja::value::ValueKind;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::CxxgenError;
use crate::CxxgenResult;
use crate::text::format_table;
use crate::text::parse_line_comment;

/// Opening fence of an embedded generator: `// [%name% {`.
static OPEN_FENCE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"//[ \t]*\[%(\w+)%[ \t]*\{[ \t]*\n").unwrap());

/// Closing fence line: `// }%]`.
static CLOSE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*//\s*\}%\]\s*$").unwrap());

/// An embedded generator extracted from one source file.
///
/// The body assembled from the fenced comment lines is a single expression
/// evaluated in a sandboxed environment whose only capability surface is the
/// configuration variable environment plus the [`format_table`] and `repeat`
/// helpers. Generators are built freshly per file and discarded after that
/// file's generator pass.
#[derive(Debug, Clone)]
pub struct GeneratorFn {
	/// The identifier from the opening fence, unique within one file.
	pub name: String,
	/// The expression text assembled from the fenced comment payloads.
	pub expression: String,
}

impl GeneratorFn {
	/// Evaluate the generator. A sequence result is flattened to a
	/// comma-separated string; any other value is stringified.
	pub fn call(&self, vars: &HashMap<String, serde_json::Value>) -> CxxgenResult<String> {
		let env = capability_environment();
		let expression =
			env.compile_expression(&self.expression)
				.map_err(|error| CxxgenError::GeneratorCompile {
					name: self.name.clone(),
					body: self.expression.clone(),
					reason: error.to_string(),
				})?;

		let value = expression
			.eval(Value::from_serialize(vars))
			.map_err(|error| CxxgenError::GeneratorEval {
				name: self.name.clone(),
				reason: error.to_string(),
			})?;

		self.flatten(&value)
	}

	fn flatten(&self, value: &Value) -> CxxgenResult<String> {
		if value.kind() == ValueKind::Seq {
			let items = value.try_iter().map_err(|error| CxxgenError::GeneratorEval {
				name: self.name.clone(),
				reason: error.to_string(),
			})?;
			return Ok(items
				.map(|item| item.to_string())
				.collect::<Vec<_>>()
				.join(", "));
		}

		Ok(value.to_string())
	}
}

/// Build the restricted evaluation environment shared by all generators.
fn capability_environment() -> Environment<'static> {
	let mut env = Environment::empty();
	env.add_function("format_table", |values: Vec<String>, width: Option<usize>| {
		format_table(&values, width.unwrap_or(80))
	});
	env.add_function("repeat", |text: String, count: usize| text.repeat(count));
	env
}

/// Scan `text` for embedded generator fences and return the extracted
/// generators keyed by name.
///
/// For every `// [%name% {` opening fence, each following line must be a
/// `//` line comment: a comment matching `// }%]` completes the body, any
/// other comment contributes its payload (the text after `//`) as one body
/// line. A non-comment line or end of input before the closing fence, and a
/// name declared twice in the same document, are fatal structural errors.
/// Bodies that fail to compile are reported with the offending name and the
/// full body text.
pub fn parse_generators(text: &str) -> CxxgenResult<BTreeMap<String, GeneratorFn>> {
	let mut map = BTreeMap::new();
	let mut search = 0;

	while let Some(captures) = OPEN_FENCE.captures_at(text, search) {
		let matched = captures.get(0).expect("regex match has group 0");
		let name = captures[1].to_string();

		if map.contains_key(&name) {
			return Err(CxxgenError::DuplicateGenerator(name));
		}

		let mut i = matched.end();
		let mut body = String::new();
		let mut closed = false;

		while let Some(comment) = parse_line_comment(text, i) {
			i += comment.len();

			if CLOSE_FENCE.is_match(comment) {
				closed = true;
				break;
			}

			let payload_start = comment.find("//").expect("line comment contains //") + 2;
			body.push_str(&comment[payload_start..]);
		}

		if !closed {
			return Err(CxxgenError::UnterminatedGenerator(name));
		}

		let expression = body.trim().to_string();
		compile_check(&name, &expression)?;

		map.insert(
			name.clone(),
			GeneratorFn { name, expression },
		);
		search = i;
	}

	Ok(map)
}

/// Compile the expression once at extraction time so malformed bodies fail
/// before any marker resolves against them.
fn compile_check(name: &str, expression: &str) -> CxxgenResult<()> {
	let env = capability_environment();
	env.compile_expression(expression)
		.map_err(|error| CxxgenError::GeneratorCompile {
			name: name.to_string(),
			body: expression.to_string(),
			reason: error.to_string(),
		})?;

	Ok(())
}
