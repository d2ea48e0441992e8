use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use scriptdoc_cli::ScriptdocCli;
use scriptdoc_core::GenerateOptions;
use scriptdoc_core::ScriptdocConfig;
use scriptdoc_core::generate;
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
	let args = ScriptdocCli::parse();

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

	init_tracing(args.verbose, use_color);

	if let Err(e) = run(&args) {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<scriptdoc_core::ScriptdocError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(1);
	}
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.with_ansi(use_color)
		.try_init()
		.ok();
}

fn resolve_root(args: &ScriptdocCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn resolve_options(args: &ScriptdocCli) -> Result<GenerateOptions, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = ScriptdocConfig::load_or_default(&root)?;
	let mut options = GenerateOptions::from_config(&root, &config);

	if let Some(input) = &args.input {
		options.input = root.join(input);
	}
	if let Some(output) = &args.output {
		options.output = root.join(output);
	}

	tracing::debug!(?options, "resolved generation options");
	Ok(options)
}

fn run(args: &ScriptdocCli) -> Result<(), Box<dyn std::error::Error>> {
	let options = resolve_options(args)?;

	println!(
		"{} {}",
		colored!("Generating API documentation from", bold),
		options.input.display()
	);

	let result = generate(&options)?;

	println!("{}", colored!("API documentation generated successfully!", green));
	println!("Generated files:");
	for name in result.manifest() {
		println!("   - {name}");
	}

	Ok(())
}
