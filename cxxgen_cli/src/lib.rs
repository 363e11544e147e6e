use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Maintain C, C++ and Objective-C source trees with generated blocks and sanitizers.",
	long_about = "cxxgen is a source-tree preprocessor for C, C++ and Objective-C projects.\n\nIt \
	              walks the configured source directory, expands template and generator markers \
	              embedded in comments, applies whitespace sanitizers, and rewrites files in place \
	              when their content changes.\n\nQuick start:\n  cxxgen generate  Expand markers \
	              and sanitize all sources\n  cxxgen sanitize  Run only the sanitizers\n  cxxgen \
	              purge     Strip generated content, keep the marker pairs\n  cxxgen list-tools \
	              Show the built-in tool catalog"
)]
pub struct CxxgenCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Configuration file to use instead of the default discovery candidates
	/// (cxxgen.toml, .cxxgen.toml, .config/cxxgen.toml).
	#[arg(long, short, global = true)]
	pub config: Option<PathBuf>,

	/// Compute and report changes without writing any file back.
	#[arg(long, global = true, default_value_t = false)]
	pub test: bool,

	/// Show a unified diff for each pending change. Only useful together
	/// with --test; written files are reported by name only.
	#[arg(long, global = true, default_value_t = false)]
	pub diff: bool,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Expand markers and sanitize all source files.
	///
	/// Runs the full pipeline: every enabled sanitizer in ascending order,
	/// then every enabled generator. Template markers (`// [@NAME@]`) are
	/// resolved against the built-in catalog and against generator functions
	/// embedded in the same file, and the expanded region is wrapped in
	/// begin/end sentinels so later runs can regenerate it in place.
	Generate,
	/// Run only the sanitizers over all source files.
	///
	/// Applies the enabled whitespace and formatting transforms (tab
	/// expansion, trailing-whitespace stripping, EOL normalization, include
	/// sorting) without touching generated regions.
	Sanitize,
	/// Remove generated content from all source files.
	///
	/// Every expanded region collapses to its begin/end sentinel pair with
	/// nothing in between. Useful before diffing hand-written changes or to
	/// verify that a tree regenerates cleanly.
	Purge,
	/// Display the built-in tools.
	ListTools,
	/// Display the built-in templates.
	ListTemplates,
}
