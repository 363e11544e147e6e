use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum CxxgenError {
	#[error(transparent)]
	#[diagnostic(code(cxxgen::io_error))]
	Io(#[from] std::io::Error),

	#[error("no configuration file found under `{0}`")]
	#[diagnostic(
		code(cxxgen::config_not_found),
		help("create a `cxxgen.toml` with `product`, `version` and `source` keys")
	)]
	ConfigNotFound(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(cxxgen::config_parse),
		help("check that cxxgen.toml is valid TOML")
	)]
	ConfigParse(String),

	#[error("configuration is missing the required key `{0}`")]
	#[diagnostic(code(cxxgen::config_missing_key))]
	MissingConfigKey(&'static str),

	#[error("configuration key `{key}` has invalid value `{value}`")]
	#[diagnostic(code(cxxgen::config_invalid_value))]
	InvalidConfigValue { key: &'static str, value: String },

	#[error("configuration selects unknown tool `{0}`")]
	#[diagnostic(
		code(cxxgen::unknown_tool),
		help("run `cxxgen list-tools` to see the available tool names")
	)]
	UnknownTool(String),

	#[error("tools `unix-eol` and `windows-eol` are mutually exclusive")]
	#[diagnostic(
		code(cxxgen::conflicting_eol),
		help("enable at most one end-of-line convention in [tools]")
	)]
	ConflictingEol,

	#[error("tool `{0}` already exists")]
	#[diagnostic(code(cxxgen::duplicate_tool))]
	DuplicateTool(String),

	#[error("template `{0}` already exists")]
	#[diagnostic(code(cxxgen::duplicate_template))]
	DuplicateTemplate(String),

	#[error("unknown template or generator `@{0}@` used")]
	#[diagnostic(
		code(cxxgen::unknown_reference),
		help(
			"register the template, define a `// [%{0}% {{` generator in the same file, or remove \
			 the marker"
		)
	)]
	UnknownReference(String),

	#[error("couldn't find the end mark of expanded region `[@{0}{{@]`")]
	#[diagnostic(
		code(cxxgen::missing_end_mark),
		help("add a matching `// [@{0}}}@]` line after the expanded content")
	)]
	MissingEndMark(String),

	#[error("couldn't substitute template variable `@{0}@`")]
	#[diagnostic(
		code(cxxgen::missing_variable),
		help("define the variable in the configuration or its [vars] table")
	)]
	MissingVariable(String),

	#[error("template variable `@{0}@` is not representable as text")]
	#[diagnostic(code(cxxgen::invalid_variable))]
	InvalidVariable(String),

	#[error("generator `{0}` is invalid, unable to find the end mark `}}%]`")]
	#[diagnostic(
		code(cxxgen::unterminated_generator),
		help("close the generator body with a `// }}%]` comment line")
	)]
	UnterminatedGenerator(String),

	#[error("function generator `{0}` has been already defined")]
	#[diagnostic(code(cxxgen::duplicate_generator))]
	DuplicateGenerator(String),

	#[error("generator `{name}` failed to compile: {reason}\n{body}")]
	#[diagnostic(code(cxxgen::generator_compile))]
	GeneratorCompile {
		name: String,
		body: String,
		reason: String,
	},

	#[error("generator `{name}` failed to evaluate: {reason}")]
	#[diagnostic(code(cxxgen::generator_eval))]
	GeneratorEval { name: String, reason: String },

	#[error("include sort produced {actual} bytes for a {expected} byte span")]
	#[diagnostic(code(cxxgen::sort_length_mismatch))]
	SortLengthMismatch { expected: usize, actual: usize },

	#[error("injection range {start}..{end} is out of bounds for text of length {len}")]
	#[diagnostic(code(cxxgen::inject_out_of_bounds))]
	InjectOutOfBounds {
		start: usize,
		end: usize,
		len: usize,
	},
}

pub type CxxgenResult<T> = Result<T, CxxgenError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
