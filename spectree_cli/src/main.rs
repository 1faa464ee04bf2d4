use std::io::Write;
use std::path::Path;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use spectree_cli::SpecTreeCli;
use spectree_core::ResolveOptions;
use spectree_core::SpecTreeConfig;
use spectree_core::SpecTreeError;
use spectree_core::path::absolutize;
use spectree_core::path::to_display_path;
use spectree_core::resolve;
use tracing_subscriber::EnvFilter;

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
}

fn main() {
	let args = SpecTreeCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

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

	init_tracing(args.verbose);

	let Some(file) = args.file.as_deref() else {
		eprintln!("{} Input file required", colored!("Error:", red));
		eprintln!("Try \"spectree --help\" for more information");
		process::exit(1);
	};

	if let Err(e) = run_resolve(&args, file) {
		// Render resolution failures through miette for error codes and help
		// text.
		match e.downcast::<SpecTreeError>() {
			Ok(error) => {
				let report: miette::Report = (*error).into();
				eprintln!("{} {report:?}", colored!("Error:", red));
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("Error:", red));
			}
		}
		process::exit(1);
	}
}

/// Logs go to stderr so stdout only ever carries the resolved document.
fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(color_enabled())
		.try_init()
		.ok();
}

/// Merge options: flags and `SPECTREE_*` variables win over `spectree.toml`,
/// which wins over the built-in defaults.
fn resolve_options(
	args: &SpecTreeCli,
	config: Option<&SpecTreeConfig>,
) -> Result<ResolveOptions, Box<dyn std::error::Error>> {
	let mut options = ResolveOptions::from_config(config);

	if let Some(root_dir) = &args.root_dir {
		options = options.with_root_dir(absolutize(root_dir)?);
	}

	if let Some(strict) = args.strict {
		options = options.with_strict(strict);
	}

	Ok(options)
}

fn run_resolve(args: &SpecTreeCli, file: &Path) -> Result<(), Box<dyn std::error::Error>> {
	let start = absolutize(file)?;
	let config = match start.parent() {
		Some(dir) => SpecTreeConfig::load(dir)?,
		None => None,
	};
	let options = resolve_options(args, config.as_ref())?;
	tracing::debug!(
		start = %start.display(),
		root_dir = ?options.root_dir,
		strict = options.strict,
		"resolving document"
	);

	let output = resolve(&start, options)?;

	match &args.output {
		Some(path) => {
			std::fs::write(path, &output)?;
			eprintln!("Resolved content written to {}", to_display_path(path));
		}
		None => {
			let mut stdout = std::io::stdout().lock();
			stdout.write_all(output.as_bytes())?;
			stdout.flush()?;
		}
	}

	Ok(())
}
