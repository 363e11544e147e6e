//! `cxxgen_core` is the engine behind the [cxxgen](https://github.com/cxxgen/cxxgen)
//! source-tree preprocessor for C, C++ and Objective-C projects. It walks a
//! project's sources, applies an ordered pipeline of reversible text
//! transforms ("sanitizers") and marker-driven expansion passes
//! ("generators"), and rewrites files in place when their content changes.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source file
//!   → Sanitizers (tabs, trailing whitespace, EOL, include sorting — by order)
//!   → Generator extraction (fenced `// [%id% {` … `// }%]` comment bodies)
//!   → Template expansion (markers `// [@ID@]` resolved, wrapped in
//!     `// [@ID{@]` … `// [@ID}@]` sentinels, cursor-corrected re-scan)
//!   → Write-back when the final text differs from the original
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `cxxgen.toml`: product/version
//!   identity, source root, exclusion patterns, tool selection, extra
//!   variables.
//! - [`templates`] — The built-in template catalog: C preprocessor macro
//!   blocks parameterized with `@name@` variables.
//! - [`text`] — Indentation normalization, offset injection, variable
//!   substitution, and line-comment scanning primitives.
//!
//! ## Key Types
//!
//! - [`Context`] — The processing context: configuration, run options, and
//!   the tool/template catalogs; exposes the pipeline entry points.
//! - [`Tool`] — An order-tagged sanitizer or generator transform.
//! - [`Template`](templates::Template) — A named, variable-parameterized
//!   boilerplate block with informational dependencies.
//! - [`GeneratorFn`] — An expression extracted from fenced comments and
//!   evaluated in a sandboxed environment.
//! - [`SourceFile`] — A file's original and current text plus the op log
//!   that drives change reporting.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cxxgen_core::{Context, CxxgenConfig, RunOptions};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = CxxgenConfig::load(root).unwrap();
//! let options = RunOptions {
//! 	generate: true,
//! 	sanitize: true,
//! 	..RunOptions::default()
//! };
//!
//! let ctx = Context::new(root, config, options).unwrap();
//! let report = ctx.run().unwrap();
//! println!("{} file(s) modified", report.modified.len());
//! ```

pub use config::*;
pub use error::*;
pub use expand::*;
pub use generator::*;
pub use registry::*;
pub use sanitize::*;
pub use templates::*;
pub use text::*;
pub use walk::*;

pub mod config;
mod error;
mod expand;
mod generator;
mod registry;
mod sanitize;
pub mod templates;
pub mod text;
mod walk;

#[cfg(test)]
mod __tests;
