use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;
use tracing::info;

use crate::CxxgenError;
use crate::CxxgenResult;
use crate::config::CxxgenConfig;
use crate::expand::expand_templates;
use crate::sanitize;
use crate::templates::BUILTIN_TEMPLATES;
use crate::templates::Template;
use crate::text::remove_indentation;
use crate::text::remove_lines;
use crate::walk::SourceFile;
use crate::walk::collect_source_files;
use crate::walk::relative_name;

/// Whether a tool is a whole-document formatting transform or a marker
/// driven content generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
	/// An order-sequenced, pure whitespace/formatting transform.
	Sanitizer,
	/// A transform that injects or refreshes generated content at markers.
	Generator,
}

impl std::fmt::Display for ToolKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Sanitizer => write!(f, "sanitizer"),
			Self::Generator => write!(f, "generator"),
		}
	}
}

/// A tool's transform: the previous pass's text in, the next text out.
pub type ToolFn = fn(&Context, &str, &toml::Table) -> CxxgenResult<String>;

/// A registered transform. Immutable once registered.
#[derive(Debug, Clone)]
pub struct Tool {
	pub name: String,
	pub kind: ToolKind,
	/// Sequences sanitizers within one pipeline run; ties are broken by
	/// registration order. Ignored for generators.
	pub order: i32,
	pub purpose: String,
	pub run: ToolFn,
}

/// The built-in tool set registered into every [`Context`].
pub fn builtin_tools() -> Vec<Tool> {
	vec![
		Tool {
			name: "no-tabs".to_string(),
			kind: ToolKind::Sanitizer,
			order: -9,
			purpose: "Replace tabs with spaces (indent_size per tab)".to_string(),
			run: sanitize::no_tabs,
		},
		Tool {
			name: "no-trailing-spaces".to_string(),
			kind: ToolKind::Sanitizer,
			order: -8,
			purpose: "Strip spaces and tabs preceding line breaks".to_string(),
			run: sanitize::no_trailing_spaces,
		},
		Tool {
			name: "no-trailing-lines".to_string(),
			kind: ToolKind::Sanitizer,
			order: -7,
			purpose: "Collapse trailing blank lines to at most one break".to_string(),
			run: sanitize::no_trailing_lines,
		},
		Tool {
			name: "sort-includes".to_string(),
			kind: ToolKind::Sanitizer,
			order: 0,
			purpose: "Sort contiguous #include blocks lexicographically".to_string(),
			run: sanitize::sort_includes,
		},
		Tool {
			name: "unix-eol".to_string(),
			kind: ToolKind::Sanitizer,
			order: 9,
			purpose: "Normalize line breaks to \\n".to_string(),
			run: sanitize::unix_eol,
		},
		Tool {
			name: "windows-eol".to_string(),
			kind: ToolKind::Sanitizer,
			order: 9,
			purpose: "Normalize line breaks to \\r\\n".to_string(),
			run: sanitize::windows_eol,
		},
		Tool {
			name: "expand-templates".to_string(),
			kind: ToolKind::Generator,
			order: 0,
			purpose: "Expand template and generator markers in place".to_string(),
			run: expand_templates,
		},
	]
}

/// Which passes a run performs and whether results are persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
	/// Strip generated content, keeping empty wrapped regions.
	pub purge: bool,
	/// Run generator tools.
	pub generate: bool,
	/// Run sanitizer tools.
	pub sanitize: bool,
	/// Compute and report changes without writing files back.
	pub dry_run: bool,
}

/// Outcome of processing one modified file.
#[derive(Debug)]
pub struct ModifiedFile {
	pub rel_name: String,
	/// One entry per pass that changed the text, in pipeline order.
	pub ops: Vec<String>,
	pub original: String,
	pub updated: String,
	/// False in dry-run mode.
	pub written: bool,
}

/// Outcome of a whole run.
#[derive(Debug)]
pub struct RunReport {
	/// Number of candidate files scanned.
	pub scanned: usize,
	pub modified: Vec<ModifiedFile>,
}

/// The processing context: validated configuration, run options, the
/// variable environment, and the tool/template catalogs.
///
/// Constructed once per invocation; the catalogs may be extended before
/// [`Context::run`] and are read-only afterwards.
pub struct Context {
	pub root: PathBuf,
	pub config: CxxgenConfig,
	pub options: RunOptions,
	/// Flat variable environment derived from the configuration.
	pub vars: HashMap<String, serde_json::Value>,
	tools: Vec<Tool>,
	pub(crate) templates: HashMap<String, Template>,
}

impl Context {
	/// Create a context rooted at `root` with the built-in tools and
	/// templates registered.
	pub fn new(
		root: impl Into<PathBuf>,
		config: CxxgenConfig,
		options: RunOptions,
	) -> CxxgenResult<Self> {
		let vars = config.variables();
		let mut ctx = Self {
			root: root.into(),
			config,
			options,
			vars,
			tools: Vec::new(),
			templates: HashMap::new(),
		};

		for tool in builtin_tools() {
			ctx.add_tool(tool)?;
		}
		for builtin in BUILTIN_TEMPLATES {
			let requires = builtin.requires.iter().map(ToString::to_string).collect();
			ctx.add_template(builtin.name, requires, builtin.body)?;
		}

		Ok(ctx)
	}

	/// Register a tool. Duplicate names are a fatal configuration error.
	pub fn add_tool(&mut self, tool: Tool) -> CxxgenResult<()> {
		if self.tools.iter().any(|existing| existing.name == tool.name) {
			return Err(CxxgenError::DuplicateTool(tool.name));
		}

		self.tools.push(tool);
		Ok(())
	}

	/// Register a template. The body is normalized here — indentation
	/// stripped, blank lines trimmed — and stored immutable.
	pub fn add_template(
		&mut self,
		name: &str,
		requires: Vec<String>,
		body: &str,
	) -> CxxgenResult<()> {
		if self.templates.contains_key(name) {
			return Err(CxxgenError::DuplicateTemplate(name.to_string()));
		}

		let body = remove_lines(&remove_indentation(body));
		self.templates.insert(
			name.to_string(),
			Template {
				name: name.to_string(),
				requires,
				body,
			},
		);

		Ok(())
	}

	pub fn template(&self, name: &str) -> Option<&Template> {
		self.templates.get(name)
	}

	pub fn tools(&self) -> &[Tool] {
		&self.tools
	}

	/// Resolve the enabled tools into pipeline order: sanitizers by
	/// ascending `order` (registration order breaking ties), then
	/// generators in registration order.
	fn pipeline(&self) -> CxxgenResult<Vec<&Tool>> {
		let mut sanitizers: Vec<(usize, &Tool)> = Vec::new();
		let mut generators: Vec<(usize, &Tool)> = Vec::new();

		for (name, setting) in &self.config.tools {
			if !setting.is_enabled() {
				continue;
			}

			let Some(index) = self.tools.iter().position(|tool| tool.name == *name) else {
				return Err(CxxgenError::UnknownTool(name.clone()));
			};

			let tool = &self.tools[index];
			match tool.kind {
				ToolKind::Sanitizer => sanitizers.push((index, tool)),
				ToolKind::Generator => generators.push((index, tool)),
			}
		}

		sanitizers.sort_by_key(|(index, tool)| (tool.order, *index));
		generators.sort_by_key(|(index, _)| *index);

		let mut pipeline: Vec<&Tool> = sanitizers.into_iter().map(|(_, tool)| tool).collect();
		pipeline.extend(generators.into_iter().map(|(_, tool)| tool));
		Ok(pipeline)
	}

	/// Apply every enabled tool to `file`, feeding each pass's output into
	/// the next.
	pub fn process_file(&self, file: &mut SourceFile) -> CxxgenResult<()> {
		for tool in self.pipeline()? {
			let applies = match tool.kind {
				ToolKind::Sanitizer => self.options.sanitize,
				ToolKind::Generator => self.options.generate,
			};
			if !applies {
				continue;
			}

			let options = self.config.tool_options(&tool.name);
			let next = (tool.run)(self, &file.data, &options)?;
			file.set_data(next, &tool.name);
		}

		Ok(())
	}

	/// Process every eligible file under the configured source root.
	///
	/// Files are read once, transformed end-to-end, and written back (unless
	/// dry-run) before the next file starts. The first error aborts the run;
	/// files already written stay written.
	pub fn run(&self) -> CxxgenResult<RunReport> {
		let source_root = self.root.join(&self.config.source);
		let files = collect_source_files(&source_root, &self.config.exclude)?;
		debug!(
			files = files.len(),
			root = %source_root.display(),
			"collected candidate files"
		);

		let mut report = RunReport {
			scanned: files.len(),
			modified: Vec::new(),
		};

		for path in files {
			let rel_name = relative_name(&source_root, &path);
			let mut file = SourceFile::read(&path, &rel_name)?;
			self.process_file(&mut file)?;

			if !file.is_modified() {
				debug!(file = %file.rel_name, "not modified");
				continue;
			}

			let written = !self.options.dry_run;
			if written {
				file.write()?;
			}
			info!(file = %file.rel_name, ops = file.ops.len(), written, "modified");

			report.modified.push(ModifiedFile {
				rel_name: file.rel_name,
				ops: file.ops,
				original: file.orig,
				updated: file.data,
				written,
			});
		}

		Ok(report)
	}
}
