use std::collections::HashMap;
use std::path::PathBuf;

use rstest::rstest;
use similar_asserts::assert_eq;

use super::*;
use crate::generator::parse_generators;
use crate::walk::collect_source_files;
use crate::walk::relative_name;

fn basic_config() -> CxxgenConfig {
	CxxgenConfig::from_toml_str("product = \"foo\"\nversion = \"1.2.3\"\nsource = \"src\"\n")
		.expect("valid config")
}

fn basic_context() -> Context {
	Context::new(".", basic_config(), RunOptions::default()).expect("context")
}

fn context_with(config: &str, options: RunOptions) -> Context {
	let config = CxxgenConfig::from_toml_str(config).expect("valid config");
	Context::new(".", config, options).expect("context")
}

fn no_options() -> toml::Table {
	toml::Table::new()
}

fn vars_of(pairs: &[(&str, serde_json::Value)]) -> HashMap<String, serde_json::Value> {
	pairs
		.iter()
		.map(|(key, value)| ((*key).to_string(), value.clone()))
		.collect()
}

// --- Text utility tests ---

#[rstest]
#[case::uniform("    a\n    b\n", "a\nb\n")]
#[case::blank_lines_cleared("  a\n   \n  b", "a\n\nb")]
#[case::narrowing("    a\n  b", "  a\nb")]
#[case::backslash_prefix("\\a\n\\b", "a\nb")]
#[case::no_indent("a\nb", "a\nb")]
#[case::whitespace_only("   \n\t\n", "\n\n")]
fn remove_indentation_cases(#[case] input: &str, #[case] expected: &str) {
	assert_eq!(remove_indentation(input), expected);
}

#[rstest]
#[case::basic("a\n\nb", "  ", "  a\n\n  b")]
#[case::empty_prefix("a\nb", "", "a\nb")]
#[case::trailing_break("a\n", "  ", "  a\n")]
fn apply_indentation_cases(#[case] input: &str, #[case] prefix: &str, #[case] expected: &str) {
	assert_eq!(apply_indentation(input, prefix), expected);
}

#[rstest]
#[case::leading_blank("\n  x\n\n\n", "  x\n")]
#[case::no_breaks("x", "x")]
#[case::collapse_trailing("x\n\n", "x\n")]
#[case::leading_blank_run("\n\n\nx\n", "x\n")]
fn remove_lines_cases(#[case] input: &str, #[case] expected: &str) {
	assert_eq!(remove_lines(input), expected);
}

#[test]
fn inject_replaces_range() -> CxxgenResult<()> {
	assert_eq!(inject("abcdef", 2, 4, "XY")?, "abXYef");
	assert_eq!(inject("abc", 3, 3, "!")?, "abc!");
	assert_eq!(inject("abc", 0, 3, "")?, "");

	Ok(())
}

#[rstest]
#[case::end_past_len(1, 5)]
#[case::start_past_len(7, 7)]
#[case::inverted(2, 1)]
fn inject_rejects_bad_ranges(#[case] start: usize, #[case] end: usize) {
	let result = inject("abc", start, end, "x");
	assert!(matches!(
		result,
		Err(CxxgenError::InjectOutOfBounds { .. })
	));
}

#[test]
fn substitute_replaces_variables() -> CxxgenResult<()> {
	let vars = vars_of(&[("a", "1".into()), ("b", 2.into())]);
	assert_eq!(substitute_variables("@a@-@b@", &vars)?, "1-2");

	Ok(())
}

#[test]
fn substitute_missing_variable_fails() {
	let result = substitute_variables("@missing@", &HashMap::new());
	assert!(matches!(
		result,
		Err(CxxgenError::MissingVariable(name)) if name == "missing"
	));
}

#[test]
fn substitute_null_variable_fails() {
	let vars = vars_of(&[("a", serde_json::Value::Null)]);
	let result = substitute_variables("@a@", &vars);
	assert!(matches!(result, Err(CxxgenError::MissingVariable(_))));
}

#[test]
fn substitute_flattens_arrays() -> CxxgenResult<()> {
	let vars = vars_of(&[("list", serde_json::json!(["a", "b"]))]);
	assert_eq!(substitute_variables("@list@", &vars)?, "a, b");

	Ok(())
}

#[rstest]
#[case::plain("// hi\nx", 0, Some("// hi\n"))]
#[case::indented("  \t// hi\nx", 0, Some("  \t// hi\n"))]
#[case::not_a_comment("int x; // hi\n", 0, None)]
#[case::at_eof("// hi", 0, Some("// hi"))]
#[case::offset("x\n// hi\n", 2, Some("// hi\n"))]
fn parse_line_comment_cases(
	#[case] input: &str,
	#[case] from: usize,
	#[case] expected: Option<&str>,
) {
	assert_eq!(parse_line_comment(input, from), expected);
}

#[test]
fn format_table_wraps_at_width() {
	let items: Vec<String> = ["aa", "bb", "cc"].iter().map(ToString::to_string).collect();
	assert_eq!(format_table(&items, 80), "aa, bb, cc");
	assert_eq!(format_table(&items, 7), "aa, bb,\ncc");
}

#[rstest]
#[case::source("foo.cpp", true, false)]
#[case::source_upper("FOO.CC", true, false)]
#[case::objc("view.mm", true, false)]
#[case::header("foo.h", false, true)]
#[case::inc("tables.inc", false, true)]
#[case::other("readme.md", false, false)]
fn extension_matching(#[case] name: &str, #[case] source: bool, #[case] header: bool) {
	assert_eq!(is_source_file(name), source);
	assert_eq!(is_header_file(name), header);
}

// --- Sanitizer tests ---

#[test]
fn no_tabs_uses_indent_size() -> CxxgenResult<()> {
	let ctx = basic_context();
	assert_eq!(no_tabs(&ctx, "\tx\n\t\ty\n", &no_options())?, "  x\n    y\n");

	let ctx = context_with(
		"product = \"foo\"\nversion = \"1\"\nsource = \"src\"\nindent_size = 4\n",
		RunOptions::default(),
	);
	assert_eq!(no_tabs(&ctx, "\tx\n", &no_options())?, "    x\n");

	Ok(())
}

#[test]
fn no_trailing_spaces_handles_both_eol_conventions() -> CxxgenResult<()> {
	let ctx = basic_context();
	assert_eq!(
		no_trailing_spaces(&ctx, "a  \nb\t\r\nc\n", &no_options())?,
		"a\nb\r\nc\n"
	);

	Ok(())
}

#[rstest]
#[case::collapse("x\n\n\n", "x\n")]
#[case::no_break("x", "x")]
#[case::windows("x\r\n\r\n", "x\r\n")]
#[case::empty("", "")]
#[case::stray_cr("x\r", "x")]
fn no_trailing_lines_cases(#[case] input: &str, #[case] expected: &str) -> CxxgenResult<()> {
	let ctx = basic_context();
	assert_eq!(no_trailing_lines(&ctx, input, &no_options())?, expected);

	Ok(())
}

#[test]
fn trailing_line_invariant_preserves_final_break() -> CxxgenResult<()> {
	let ctx = basic_context();
	for input in ["x", "x\n", "x\n\n\n", "x\r\n", ""] {
		let output = no_trailing_lines(&ctx, input, &no_options())?;
		assert_eq!(output.ends_with('\n'), input.ends_with('\n'));
	}

	Ok(())
}

#[test]
fn eol_round_trip_normalizes_any_mix() -> CxxgenResult<()> {
	let ctx = basic_context();
	let mixed = "a\nb\r\nc\nd\r\n";
	let windows = windows_eol(&ctx, mixed, &no_options())?;
	assert_eq!(windows, "a\r\nb\r\nc\r\nd\r\n");
	assert_eq!(unix_eol(&ctx, &windows, &no_options())?, "a\nb\nc\nd\n");

	Ok(())
}

#[rstest]
#[case::no_tabs(no_tabs as ToolFn, "\ta \t\n")]
#[case::no_trailing_spaces(no_trailing_spaces as ToolFn, "a  \nb\t\r\n")]
#[case::no_trailing_lines(no_trailing_lines as ToolFn, "x\n\n\n")]
#[case::unix_eol(unix_eol as ToolFn, "a\r\nb\n")]
#[case::windows_eol(windows_eol as ToolFn, "a\r\nb\n")]
#[case::sort_includes(sort_includes as ToolFn, "#include <b>\n#include <a>\nx\n")]
fn sanitizers_are_idempotent(#[case] tool: ToolFn, #[case] input: &str) -> CxxgenResult<()> {
	let ctx = basic_context();
	let once = tool(&ctx, input, &no_options())?;
	let twice = tool(&ctx, &once, &no_options())?;
	assert_eq!(twice, once);

	Ok(())
}

#[test]
fn sort_includes_leaves_single_directive_untouched() -> CxxgenResult<()> {
	let ctx = basic_context();
	let input = "#include <b>\n\nint x;\n";
	assert_eq!(sort_includes(&ctx, input, &no_options())?, input);

	Ok(())
}

#[test]
fn sort_includes_orders_block_and_preserves_length() -> CxxgenResult<()> {
	let ctx = basic_context();
	let input = "#include <b.h>\n#include <a.h>\n\nint x;\n";
	let output = sort_includes(&ctx, input, &no_options())?;
	assert_eq!(output, "#include <a.h>\n#include <b.h>\n\nint x;\n");
	assert_eq!(output.len(), input.len());

	Ok(())
}

#[test]
fn sort_includes_handles_multiple_blocks() -> CxxgenResult<()> {
	let ctx = basic_context();
	let input = "#include <z>\n#include <y>\ncode\n#include <d>\n#include <c>\n";
	let output = sort_includes(&ctx, input, &no_options())?;
	assert_eq!(output, "#include <y>\n#include <z>\ncode\n#include <c>\n#include <d>\n");

	Ok(())
}

#[test]
fn sort_includes_sorts_block_at_end_of_document() -> CxxgenResult<()> {
	let ctx = basic_context();
	assert_eq!(
		sort_includes(&ctx, "#include <b>\n#include <a>", &no_options())?,
		"#include <a>\n#include <b>"
	);
	assert_eq!(
		sort_includes(&ctx, "#include <b>\n#include <a>\n", &no_options())?,
		"#include <a>\n#include <b>\n"
	);

	Ok(())
}

#[test]
fn sort_includes_respects_directive_option() -> CxxgenResult<()> {
	let ctx = basic_context();
	let mut options = toml::Table::new();
	options.insert("directive".to_string(), "//".into());

	let input = "// [@B@]\n// [@A@]\n";
	let output = sort_includes(&ctx, input, &options)?;
	assert_eq!(output, "// [@A@]\n// [@B@]\n");
	assert_eq!(output.len(), input.len());
	assert_eq!(output.lines().count(), input.lines().count());

	Ok(())
}

// --- Generator extraction tests ---

#[test]
fn parse_single_generator() -> CxxgenResult<()> {
	let input = "// [%banner% {\n//   \"(c) \" ~ product ~ \" authors\"\n// }%]\n";
	let generators = parse_generators(input)?;
	assert_eq!(generators.len(), 1);

	let banner = &generators["banner"];
	let vars = vars_of(&[("product", "foo".into())]);
	assert_eq!(banner.call(&vars)?, "(c) foo authors");

	Ok(())
}

#[test]
fn generator_flattens_sequence_results() -> CxxgenResult<()> {
	let input = "// [%pair% {\n//   [product, prefix]\n// }%]\n";
	let generators = parse_generators(input)?;
	let vars = vars_of(&[("product", "foo".into()), ("prefix", "FOO".into())]);
	assert_eq!(generators["pair"].call(&vars)?, "foo, FOO");

	Ok(())
}

#[test]
fn generator_helpers_are_available() -> CxxgenResult<()> {
	let input = "// [%table% {\n//   format_table([\"a\", \"bb\"], 80)\n// }%]\n\
	             // [%rule% {\n//   repeat(\"=\", 3)\n// }%]\n";
	let generators = parse_generators(input)?;
	let vars = HashMap::new();
	assert_eq!(generators["table"].call(&vars)?, "a, bb");
	assert_eq!(generators["rule"].call(&vars)?, "===");

	Ok(())
}

#[test]
fn unterminated_generator_fails_with_name() {
	let input = "// [%X% {\n//   1\nint x;\n";
	let result = parse_generators(input);
	assert!(matches!(
		result,
		Err(CxxgenError::UnterminatedGenerator(name)) if name == "X"
	));
}

#[test]
fn duplicate_generator_fails() {
	let input = "// [%g% {\n//   1\n// }%]\n// [%g% {\n//   2\n// }%]\n";
	let result = parse_generators(input);
	assert!(matches!(
		result,
		Err(CxxgenError::DuplicateGenerator(name)) if name == "g"
	));
}

#[test]
fn malformed_generator_body_fails_to_compile() {
	let input = "// [%bad% {\n//   1 +\n// }%]\n";
	let result = parse_generators(input);
	assert!(matches!(
		result,
		Err(CxxgenError::GeneratorCompile { name, .. }) if name == "bad"
	));
}

// --- Expansion engine tests ---

#[test]
fn expand_version_marker_at_column_zero() -> CxxgenResult<()> {
	let ctx = basic_context();
	let output = expand_templates(&ctx, "// [@VERSION@]\n", &no_options())?;
	assert_eq!(
		output,
		"// [@VERSION{@]\n\
		 #define FOO_VERSION_MAJOR 1\n\
		 #define FOO_VERSION_MINOR 2\n\
		 #define FOO_VERSION_PATCH 3\n\
		 #define FOO_VERSION_STRING \"1.2.3\"\n\
		 // [@VERSION}@]\n"
	);

	Ok(())
}

#[test]
fn expand_indents_content_to_marker_column() -> CxxgenResult<()> {
	let ctx = basic_context();
	let output = expand_templates(&ctx, "  // [@CC_NOP@]\n", &no_options())?;
	assert_eq!(
		output,
		"  // [@CC_NOP{@]\n\
		 \x20 // \\def FOO_NOP\n\
		 \x20 // No operation.\n\
		 \x20 #if !defined(FOO_NOP)\n\
		 \x20 # define FOO_NOP ((void)0)\n\
		 \x20 #endif\n\
		 \x20 // [@CC_NOP}@]\n"
	);

	Ok(())
}

#[test]
fn expand_is_idempotent_over_refresh_markers() -> CxxgenResult<()> {
	let ctx = basic_context();
	let input = "#pragma once\n// [@VERSION@]\nint main() {}\n  // [@CC_NOP@]\n";
	let once = expand_templates(&ctx, input, &no_options())?;
	let twice = expand_templates(&ctx, &once, &no_options())?;
	assert_eq!(twice, once);

	Ok(())
}

#[test]
fn expand_adjusts_cursor_across_multiple_markers() -> CxxgenResult<()> {
	let ctx = basic_context();
	let input = "// [@VERSION@]\nmid\n// [@CC_UNUSED@]\n";
	let output = expand_templates(&ctx, input, &no_options())?;

	assert!(output.contains("// [@VERSION{@]\n"));
	assert!(output.contains("// [@VERSION}@]\nmid\n// [@CC_UNUSED{@]\n"));
	assert!(output.ends_with("// [@CC_UNUSED}@]\n"));
	assert_eq!(output.matches("#define FOO_UNUSED(x) (void)(x)").count(), 1);

	Ok(())
}

#[test]
fn expand_resolves_embedded_generators() -> CxxgenResult<()> {
	let ctx = basic_context();
	let input = "// [%banner% {\n//   \"(c) \" ~ product\n// }%]\n// [@banner@]\n";
	let output = expand_templates(&ctx, input, &no_options())?;
	assert_eq!(
		output,
		"// [%banner% {\n//   \"(c) \" ~ product\n// }%]\n\
		 // [@banner{@]\n\
		 (c) foo\n\
		 // [@banner}@]\n"
	);

	Ok(())
}

#[test]
fn expand_purge_keeps_empty_wrapped_region() -> CxxgenResult<()> {
	let options = RunOptions {
		purge: true,
		generate: true,
		..RunOptions::default()
	};
	let ctx = Context::new(".", basic_config(), options)?;

	let fresh = expand_templates(&ctx, "// [@VERSION@]\n", &no_options())?;
	assert_eq!(fresh, "// [@VERSION{@]\n// [@VERSION}@]\n");

	// Purging an already expanded region drops its content too.
	let expanded = "// [@VERSION{@]\n#define FOO_VERSION_MAJOR 1\n// [@VERSION}@]\n";
	let purged = expand_templates(&ctx, expanded, &no_options())?;
	assert_eq!(purged, "// [@VERSION{@]\n// [@VERSION}@]\n");

	Ok(())
}

#[test]
fn expand_unknown_reference_fails() {
	let ctx = basic_context();
	let result = expand_templates(&ctx, "// [@NOPE@]\n", &no_options());
	assert!(matches!(
		result,
		Err(CxxgenError::UnknownReference(name)) if name == "NOPE"
	));
}

#[test]
fn expand_stale_refresh_pair_without_definition_fails() {
	let ctx = basic_context();
	let stale = "// [@GONE{@]\nold content\n// [@GONE}@]\n";
	let result = expand_templates(&ctx, stale, &no_options());
	assert!(matches!(
		result,
		Err(CxxgenError::UnknownReference(name)) if name == "GONE"
	));
}

#[test]
fn expand_refresh_marker_without_close_fails() {
	let ctx = basic_context();
	let result = expand_templates(&ctx, "// [@VERSION{@]\n", &no_options());
	assert!(matches!(
		result,
		Err(CxxgenError::MissingEndMark(name)) if name == "VERSION"
	));
}

#[test]
fn expand_refresh_marker_with_mismatched_close_fails() {
	let ctx = basic_context();
	let input = "// [@VERSION{@]\n// [@OTHER}@]\n";
	let result = expand_templates(&ctx, input, &no_options());
	assert!(matches!(
		result,
		Err(CxxgenError::MissingEndMark(name)) if name == "VERSION"
	));
}

#[test]
fn expand_missing_substitution_variable_aborts() {
	let mut ctx = basic_context();
	ctx.add_template("NEEDS_VAR", Vec::new(), "#define X @doesNotExist@\n")
		.expect("register template");

	let result = expand_templates(&ctx, "// [@NEEDS_VAR@]\n", &no_options());
	assert!(matches!(
		result,
		Err(CxxgenError::MissingVariable(name)) if name == "doesNotExist"
	));
}

// --- Configuration tests ---

#[test]
fn config_defaults_are_derived() {
	let config = basic_config();
	assert_eq!(config.prefix, "FOO");
	assert_eq!(config.version_major, 1);
	assert_eq!(config.version_minor, 2);
	assert_eq!(config.version_patch, 3);
	assert_eq!(config.indent_size, 2);
	assert!(config.exclude.is_empty());
}

#[rstest]
#[case::one_component("1", 1, 0, 0)]
#[case::two_components("4.7", 4, 7, 0)]
#[case::three_components("0.9.12", 0, 9, 12)]
fn config_version_components(
	#[case] version: &str,
	#[case] major: u32,
	#[case] minor: u32,
	#[case] patch: u32,
) {
	let toml = format!("product = \"foo\"\nversion = \"{version}\"\nsource = \"src\"\n");
	let config = CxxgenConfig::from_toml_str(&toml).expect("valid config");
	assert_eq!(config.version_major, major);
	assert_eq!(config.version_minor, minor);
	assert_eq!(config.version_patch, patch);
}

#[rstest]
#[case::four_components("1.2.3.4")]
#[case::not_numeric("abc")]
#[case::trailing_dot("1.2.")]
fn config_invalid_version_fails(#[case] version: &str) {
	let toml = format!("product = \"foo\"\nversion = \"{version}\"\nsource = \"src\"\n");
	let result = CxxgenConfig::from_toml_str(&toml);
	assert!(matches!(
		result,
		Err(CxxgenError::InvalidConfigValue { key: "version", .. })
	));
}

#[test]
fn config_missing_product_fails() {
	let result = CxxgenConfig::from_toml_str("version = \"1\"\nsource = \"src\"\n");
	assert!(matches!(
		result,
		Err(CxxgenError::MissingConfigKey("product"))
	));
}

#[test]
fn config_invalid_product_fails() {
	let result =
		CxxgenConfig::from_toml_str("product = \"9lives\"\nversion = \"1\"\nsource = \"src\"\n");
	assert!(matches!(
		result,
		Err(CxxgenError::InvalidConfigValue { key: "product", .. })
	));
}

#[test]
fn config_missing_source_fails() {
	let result = CxxgenConfig::from_toml_str("product = \"foo\"\nversion = \"1\"\n");
	assert!(matches!(result, Err(CxxgenError::MissingConfigKey("source"))));
}

#[test]
fn config_conflicting_eol_tools_fail() {
	let toml = "product = \"foo\"\nversion = \"1\"\nsource = \"src\"\n\n\
	            [tools]\nunix-eol = true\nwindows-eol = true\n";
	let result = CxxgenConfig::from_toml_str(toml);
	assert!(matches!(result, Err(CxxgenError::ConflictingEol)));
}

#[test]
fn config_vars_enter_the_variable_environment() {
	let toml = "product = \"foo\"\nversion = \"1.2.3\"\nsource = \"src\"\n\n\
	            [vars]\nyear = 2026\nowner = \"acme\"\n";
	let config = CxxgenConfig::from_toml_str(toml).expect("valid config");
	let vars = config.variables();

	assert_eq!(vars["product"], serde_json::json!("foo"));
	assert_eq!(vars["prefix"], serde_json::json!("FOO"));
	assert_eq!(vars["versionMajor"], serde_json::json!(1));
	assert_eq!(vars["year"], serde_json::json!(2026));
	assert_eq!(vars["owner"], serde_json::json!("acme"));
}

// --- Registry and pipeline tests ---

#[test]
fn duplicate_tool_registration_fails() {
	let mut ctx = basic_context();
	let duplicate = builtin_tools().into_iter().next().expect("builtin tools");
	let name = duplicate.name.clone();
	let result = ctx.add_tool(duplicate);
	assert!(matches!(
		result,
		Err(CxxgenError::DuplicateTool(existing)) if existing == name
	));
}

#[test]
fn duplicate_template_registration_fails() {
	let mut ctx = basic_context();
	let result = ctx.add_template("VERSION", Vec::new(), "x\n");
	assert!(matches!(
		result,
		Err(CxxgenError::DuplicateTemplate(name)) if name == "VERSION"
	));
}

#[test]
fn template_bodies_are_normalized_at_registration() {
	let ctx = basic_context();
	let version = ctx.template("VERSION").expect("builtin template");
	assert!(version.body.starts_with("#define @prefix@_VERSION_MAJOR"));
	assert!(version.body.ends_with("\"@versionMajor@.@versionMinor@.@versionPatch@\"\n"));
	assert!(!version.body.contains("\n    "));
}

#[test]
fn builtin_template_requires_are_informational() {
	let ctx = basic_context();
	let api = ctx.template("CC_API").expect("builtin template");
	assert_eq!(api.requires, vec!["CC".to_string(), "OS".to_string()]);
}

fn memory_file(data: &str) -> SourceFile {
	SourceFile {
		path: PathBuf::from("mem.cpp"),
		rel_name: "mem.cpp".to_string(),
		orig: data.to_string(),
		data: data.to_string(),
		ops: Vec::new(),
	}
}

#[test]
fn pipeline_applies_sanitizers_in_ascending_order() -> CxxgenResult<()> {
	let toml = "product = \"foo\"\nversion = \"1\"\nsource = \"src\"\n\n\
	            [tools]\nunix-eol = true\nno-tabs = true\nno-trailing-spaces = true\n";
	let options = RunOptions {
		sanitize: true,
		..RunOptions::default()
	};
	let ctx = context_with(toml, options);

	// Tab expansion (-9) must run before trailing-space stripping (-8) so the
	// spaces it introduces at line ends get removed; EOL normalization (+9)
	// runs last.
	let mut file = memory_file("a\t\r\nb\n");
	ctx.process_file(&mut file)?;
	assert_eq!(file.data, "a\nb\n");
	assert_eq!(
		file.ops,
		vec!["no-tabs", "no-trailing-spaces", "unix-eol"]
	);

	Ok(())
}

#[test]
fn pipeline_skips_disabled_kinds() -> CxxgenResult<()> {
	let toml = "product = \"foo\"\nversion = \"1\"\nsource = \"src\"\n\n\
	            [tools]\nno-tabs = true\nexpand-templates = true\n";
	let options = RunOptions {
		sanitize: true,
		..RunOptions::default()
	};
	let ctx = context_with(toml, options);

	// Generators are disabled, so the marker stays as-is.
	let mut file = memory_file("\t// [@VERSION@]\n");
	ctx.process_file(&mut file)?;
	assert_eq!(file.data, "  // [@VERSION@]\n");
	assert_eq!(file.ops, vec!["no-tabs"]);

	Ok(())
}

#[test]
fn pipeline_unknown_tool_fails() {
	let toml = "product = \"foo\"\nversion = \"1\"\nsource = \"src\"\n\n\
	            [tools]\nnope = true\n";
	let ctx = context_with(
		toml,
		RunOptions {
			sanitize: true,
			..RunOptions::default()
		},
	);

	let mut file = memory_file("x\n");
	let result = ctx.process_file(&mut file);
	assert!(matches!(
		result,
		Err(CxxgenError::UnknownTool(name)) if name == "nope"
	));
}

#[test]
fn set_data_ignores_identical_content() {
	let mut file = memory_file("x\n");
	file.set_data("x\n".to_string(), "no-op-pass");
	assert!(!file.is_modified());
	assert!(file.ops.is_empty());

	file.set_data("y\n".to_string(), "real-pass");
	assert!(file.is_modified());
	assert_eq!(file.ops, vec!["real-pass"]);
}

#[test]
fn sanitize_pipeline_is_idempotent_end_to_end() -> CxxgenResult<()> {
	let toml = "product = \"foo\"\nversion = \"1\"\nsource = \"src\"\n\n\
	            [tools]\nno-tabs = true\nno-trailing-spaces = true\n\
	            no-trailing-lines = true\nsort-includes = true\nunix-eol = true\n";
	let options = RunOptions {
		sanitize: true,
		..RunOptions::default()
	};
	let ctx = context_with(toml, options);

	let input = "#include <b>\r\n#include <a>\r\n\tint x;  \r\n\n\n";
	let mut first = memory_file(input);
	ctx.process_file(&mut first)?;

	let mut second = memory_file(&first.data);
	ctx.process_file(&mut second)?;

	assert_eq!(second.data, first.data);
	assert!(!second.is_modified());

	Ok(())
}

// --- Walker and file tests ---

#[test]
fn collect_source_files_filters_and_sorts() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let root = tmp.path();

	std::fs::create_dir_all(root.join("sub"))?;
	std::fs::create_dir_all(root.join("vendor"))?;
	std::fs::create_dir_all(root.join(".cache"))?;
	std::fs::write(root.join("main.cpp"), "int main() {}\n")?;
	std::fs::write(root.join("util.h"), "#pragma once\n")?;
	std::fs::write(root.join("notes.txt"), "not code\n")?;
	std::fs::write(root.join("sub/impl.cc"), "\n")?;
	std::fs::write(root.join("vendor/lib.cpp"), "\n")?;
	std::fs::write(root.join(".cache/skip.cpp"), "\n")?;

	let files = collect_source_files(root, &["vendor".to_string()])?;
	let names: Vec<String> = files
		.iter()
		.map(|path| relative_name(root, path))
		.collect();

	assert_eq!(names, vec!["main.cpp", "sub/impl.cc", "util.h"]);

	Ok(())
}

#[test]
fn source_file_write_replaces_content_on_disk() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let path = tmp.path().join("a.cpp");
	std::fs::write(&path, "old\n")?;

	let mut file = SourceFile::read(&path, "a.cpp")?;
	assert!(!file.is_modified());

	file.set_data("new\n".to_string(), "edit");
	assert!(file.is_modified());
	file.write()?;

	assert_eq!(std::fs::read_to_string(&path)?, "new\n");

	Ok(())
}

#[test]
fn run_expands_and_writes_back() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let root = tmp.path();
	std::fs::create_dir_all(root.join("src"))?;
	std::fs::write(
		root.join("src/version.h"),
		"// [@VERSION@]   \nint x;  \n",
	)?;

	let toml = "product = \"foo\"\nversion = \"0.1.0\"\nsource = \"src\"\n\n\
	            [tools]\nno-trailing-spaces = true\nexpand-templates = true\n";
	let options = RunOptions {
		generate: true,
		sanitize: true,
		..RunOptions::default()
	};
	let ctx = Context::new(root, CxxgenConfig::from_toml_str(toml)?, options)?;

	let report = ctx.run()?;
	assert_eq!(report.scanned, 1);
	assert_eq!(report.modified.len(), 1);
	assert_eq!(report.modified[0].rel_name, "version.h");
	assert_eq!(
		report.modified[0].ops,
		vec!["no-trailing-spaces", "expand-templates"]
	);
	assert!(report.modified[0].written);

	let on_disk = std::fs::read_to_string(root.join("src/version.h"))?;
	assert_eq!(
		on_disk,
		"// [@VERSION{@]\n\
		 #define FOO_VERSION_MAJOR 0\n\
		 #define FOO_VERSION_MINOR 1\n\
		 #define FOO_VERSION_PATCH 0\n\
		 #define FOO_VERSION_STRING \"0.1.0\"\n\
		 // [@VERSION}@]\nint x;\n"
	);

	// A second run over the expanded output changes nothing.
	let report = ctx.run()?;
	assert!(report.modified.is_empty());

	Ok(())
}

#[test]
fn dry_run_reports_without_writing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let root = tmp.path();
	std::fs::create_dir_all(root.join("src"))?;
	let original = "// [@VERSION@]\n";
	std::fs::write(root.join("src/version.h"), original)?;

	let toml = "product = \"foo\"\nversion = \"1\"\nsource = \"src\"\n\n\
	            [tools]\nexpand-templates = true\n";
	let options = RunOptions {
		generate: true,
		dry_run: true,
		..RunOptions::default()
	};
	let ctx = Context::new(root, CxxgenConfig::from_toml_str(toml)?, options)?;

	let report = ctx.run()?;
	assert_eq!(report.modified.len(), 1);
	assert!(!report.modified[0].written);
	assert!(report.modified[0].updated.contains("FOO_VERSION_MAJOR"));

	assert_eq!(std::fs::read_to_string(root.join("src/version.h"))?, original);

	Ok(())
}

#[test]
fn run_aborts_on_first_unknown_reference() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let root = tmp.path();
	std::fs::create_dir_all(root.join("src"))?;
	std::fs::write(root.join("src/bad.h"), "// [@NOPE@]\n")?;

	let toml = "product = \"foo\"\nversion = \"1\"\nsource = \"src\"\n\n\
	            [tools]\nexpand-templates = true\n";
	let options = RunOptions {
		generate: true,
		..RunOptions::default()
	};
	let ctx = Context::new(root, CxxgenConfig::from_toml_str(toml)?, options)?;

	let result = ctx.run();
	assert!(matches!(
		result,
		Err(CxxgenError::UnknownReference(name)) if name == "NOPE"
	));
	assert_eq!(std::fs::read_to_string(root.join("src/bad.h"))?, "// [@NOPE@]\n");

	Ok(())
}
