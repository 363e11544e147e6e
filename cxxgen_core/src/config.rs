use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::CxxgenError;
use crate::CxxgenResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["cxxgen.toml", ".cxxgen.toml", ".config/cxxgen.toml"];

static PRODUCT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_]\w*$").unwrap());
static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+){0,2}$").unwrap());

/// Selection entry for a `[tools]` key: `true`/`false`, or an options table
/// passed to the tool's transform.
///
/// ```toml
/// [tools]
/// no-tabs = true
/// sort-includes = { }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum ToolSetting {
	Enabled(bool),
	Options(toml::Table),
}

impl ToolSetting {
	pub fn is_enabled(&self) -> bool {
		match self {
			Self::Enabled(enabled) => *enabled,
			Self::Options(_) => true,
		}
	}

	pub fn options(&self) -> toml::Table {
		match self {
			Self::Enabled(_) => toml::Table::new(),
			Self::Options(table) => table.clone(),
		}
	}
}

/// Raw deserialized form of `cxxgen.toml`. Required keys are optional here
/// so that validation can report which one is missing instead of a generic
/// serde error.
#[derive(Debug, Deserialize)]
struct Manifest {
	product: Option<String>,
	version: Option<String>,
	prefix: Option<String>,
	source: Option<PathBuf>,
	#[serde(default)]
	exclude: Vec<String>,
	indent_size: Option<usize>,
	#[serde(default)]
	tools: BTreeMap<String, ToolSetting>,
	#[serde(default)]
	vars: toml::Table,
}

/// Validated processing configuration.
///
/// ```toml
/// product = "blend2d"
/// version = "1.2.3"
/// prefix = "BL"              # defaults to the uppercased product name
/// source = "src"
/// exclude = ["src/thirdparty"]
/// indent_size = 2
///
/// [tools]
/// no-tabs = true
/// no-trailing-spaces = true
/// sort-includes = true
/// expand-templates = true
///
/// [vars]
/// year = 2026
/// ```
#[derive(Debug, Clone)]
pub struct CxxgenConfig {
	/// Product identifier, used in log prefixes and available as `@product@`.
	pub product: String,
	/// Dotted numeric version string, at most three components.
	pub version: String,
	pub version_major: u32,
	pub version_minor: u32,
	pub version_patch: u32,
	/// Macro prefix, available as `@prefix@`.
	pub prefix: String,
	/// Root-relative directory holding the sources to process.
	pub source: PathBuf,
	/// Gitignore-style patterns excluded from the walk, relative to `source`.
	pub exclude: Vec<String>,
	/// Number of spaces a tab expands to.
	pub indent_size: usize,
	/// Which tools run, keyed by tool name.
	pub tools: BTreeMap<String, ToolSetting>,
	/// Extra substitution variables merged into the variable environment.
	pub vars: toml::Table,
}

impl CxxgenConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered candidate under `root`.
	pub fn load(root: &Path) -> CxxgenResult<CxxgenConfig> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Err(CxxgenError::ConfigNotFound(root.display().to_string()));
		};

		Self::load_file(&config_path)
	}

	/// Load and validate the config from an explicit file path.
	pub fn load_file(path: &Path) -> CxxgenResult<CxxgenConfig> {
		let content = std::fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Parse and validate a config from TOML text.
	pub fn from_toml_str(content: &str) -> CxxgenResult<CxxgenConfig> {
		let manifest: Manifest =
			toml::from_str(content).map_err(|e| CxxgenError::ConfigParse(e.to_string()))?;
		Self::from_manifest(manifest)
	}

	fn from_manifest(manifest: Manifest) -> CxxgenResult<CxxgenConfig> {
		let product = manifest
			.product
			.ok_or(CxxgenError::MissingConfigKey("product"))?;
		if !PRODUCT_PATTERN.is_match(&product) {
			return Err(CxxgenError::InvalidConfigValue {
				key: "product",
				value: product,
			});
		}

		let version = manifest
			.version
			.ok_or(CxxgenError::MissingConfigKey("version"))?;
		if !VERSION_PATTERN.is_match(&version) {
			return Err(CxxgenError::InvalidConfigValue {
				key: "version",
				value: version,
			});
		}

		let mut parts = version.split('.').map(|part| {
			part.parse::<u32>()
				.map_err(|_| CxxgenError::InvalidConfigValue {
					key: "version",
					value: version.clone(),
				})
		});
		let version_major = parts.next().transpose()?.unwrap_or(0);
		let version_minor = parts.next().transpose()?.unwrap_or(0);
		let version_patch = parts.next().transpose()?.unwrap_or(0);

		let source = manifest
			.source
			.ok_or(CxxgenError::MissingConfigKey("source"))?;

		let prefix = manifest
			.prefix
			.filter(|prefix| !prefix.is_empty())
			.unwrap_or_else(|| product.to_uppercase());

		let indent_size = manifest.indent_size.filter(|size| *size != 0).unwrap_or(2);

		let enabled = |name: &str| manifest.tools.get(name).is_some_and(ToolSetting::is_enabled);
		if enabled("unix-eol") && enabled("windows-eol") {
			return Err(CxxgenError::ConflictingEol);
		}

		Ok(CxxgenConfig {
			product,
			version,
			version_major,
			version_minor,
			version_patch,
			prefix,
			source,
			exclude: manifest.exclude,
			indent_size,
			tools: manifest.tools,
			vars: manifest.vars,
		})
	}

	/// Options table for a tool, empty when the tool was enabled with `true`.
	pub fn tool_options(&self, name: &str) -> toml::Table {
		self.tools
			.get(name)
			.map(ToolSetting::options)
			.unwrap_or_default()
	}

	/// Build the flat variable environment used for `@name@` substitution and
	/// generator evaluation. Contains the standard configuration keys plus
	/// every entry of the `[vars]` table.
	pub fn variables(&self) -> HashMap<String, serde_json::Value> {
		let mut vars = HashMap::new();
		vars.insert("product".to_string(), self.product.clone().into());
		vars.insert("prefix".to_string(), self.prefix.clone().into());
		vars.insert("version".to_string(), self.version.clone().into());
		vars.insert("versionMajor".to_string(), self.version_major.into());
		vars.insert("versionMinor".to_string(), self.version_minor.into());
		vars.insert("versionPatch".to_string(), self.version_patch.into());
		vars.insert("indentSize".to_string(), (self.indent_size as u64).into());

		for (key, value) in &self.vars {
			vars.insert(key.clone(), toml_to_json(value));
		}

		vars
	}
}

/// Convert a `toml::Value` to a `serde_json::Value`.
fn toml_to_json(value: &toml::Value) -> serde_json::Value {
	match value {
		toml::Value::String(s) => serde_json::Value::String(s.clone()),
		toml::Value::Integer(i) => serde_json::Value::Number((*i).into()),
		toml::Value::Float(f) => serde_json::Number::from_f64(*f)
			.map_or(serde_json::Value::Null, serde_json::Value::Number),
		toml::Value::Boolean(b) => serde_json::Value::Bool(*b),
		toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
		toml::Value::Array(items) => {
			serde_json::Value::Array(items.iter().map(toml_to_json).collect())
		}
		toml::Value::Table(table) => {
			let mut map = serde_json::Map::new();
			for (key, item) in table {
				map.insert(key.clone(), toml_to_json(item));
			}
			serde_json::Value::Object(map)
		}
	}
}
