use std::path::PathBuf;
use std::process;

use clap::Parser;
use cxxgen_cli::Commands;
use cxxgen_cli::CxxgenCli;
use cxxgen_core::AnyEmptyResult;
use cxxgen_core::Context;
use cxxgen_core::CxxgenConfig;
use cxxgen_core::RunOptions;
use cxxgen_core::RunReport;
use cxxgen_core::builtin_tools;
use cxxgen_core::templates::BUILTIN_TEMPLATES;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = CxxgenCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Generate) => {
			run_process(
				&args,
				RunOptions {
					generate: true,
					sanitize: true,
					dry_run: args.test,
					..RunOptions::default()
				},
			)
		}
		Some(Commands::Sanitize) => {
			run_process(
				&args,
				RunOptions {
					sanitize: true,
					dry_run: args.test,
					..RunOptions::default()
				},
			)
		}
		Some(Commands::Purge) => {
			run_process(
				&args,
				RunOptions {
					purge: true,
					generate: true,
					dry_run: args.test,
					..RunOptions::default()
				},
			)
		}
		Some(Commands::ListTools) => run_list_tools(),
		Some(Commands::ListTemplates) => run_list_templates(),
		None => {
			eprintln!("No subcommand specified. Run `cxxgen --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Render through miette for rich diagnostics with help text and
		// error codes where possible.
		match e.downcast::<cxxgen_core::CxxgenError>() {
			Ok(cxxgen_err) => {
				let report: miette::Report = (*cxxgen_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool) {
	let default_filter = if verbose {
		"cxxgen_core=debug,cxxgen=debug"
	} else {
		"warn"
	};
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.init();
}

fn resolve_root(args: &CxxgenCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run_process(args: &CxxgenCli, options: RunOptions) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config = match &args.config {
		Some(path) => CxxgenConfig::load_file(path)?,
		None => CxxgenConfig::load(&root)?,
	};
	let product = config.product.to_lowercase();

	let ctx = Context::new(root.as_path(), config, options)?;
	let report = ctx.run()?;
	print_report(&product, &report, args);

	Ok(())
}

fn print_report(product: &str, report: &RunReport, args: &CxxgenCli) {
	let prefix = format!("[{product}]");

	for file in &report.modified {
		for op in &file.ops {
			println!("{prefix} {}: {op}", file.rel_name);
		}

		if file.written {
			println!("{prefix} {}: Modified - writing...", file.rel_name);
		} else {
			println!("{prefix} {}: Modified - test mode (--test)", file.rel_name);
			if args.diff {
				print_diff(&file.original, &file.updated);
			}
		}
	}

	println!(
		"{prefix} {} file(s) scanned, {} modified",
		report.scanned,
		report.modified.len()
	);
}

fn run_list_tools() -> AnyEmptyResult {
	println!("{}", colored!("Tools:", bold));
	for tool in builtin_tools() {
		println!(
			"  {} ({}, order {:+}) - {}",
			tool.name, tool.kind, tool.order, tool.purpose
		);
	}

	Ok(())
}

fn run_list_templates() -> AnyEmptyResult {
	println!("{}", colored!("Templates:", bold));
	for template in BUILTIN_TEMPLATES {
		if template.requires.is_empty() {
			println!("  {}", template.name);
		} else {
			println!("  {} (requires {})", template.name, template.requires.join(", "));
		}
	}

	Ok(())
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				print!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				print!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				print!("   {change}");
			}
		}
	}
}
