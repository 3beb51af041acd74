use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dwt_cli::Commands;
use dwt_cli::DwtCli;
use dwt_cli::OutputFormat;
use dwt_core::DwtConfig;
use dwt_core::GenerateOptions;
use dwt_core::compute_outputs;
use dwt_core::list_templates;
use dwt_core::scan;
use dwt_core::write_outputs;
use owo_colors::OwoColorize;

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
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = DwtCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	if args.verbose {
		let filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dwt_core=debug"));
		tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(std::io::stderr)
			.with_ansi(use_color)
			.init();
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

	let result = match args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Scan { ref file, format }) => run_scan(&args, file, format),
		Some(Commands::List) => run_list(&args),
		Some(Commands::Generate { dry_run }) => run_generate(&args, dry_run),
		None => {
			eprintln!("No subcommand specified. Run `dwt --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Render through miette when possible for help text and error codes.
		match e.downcast::<dwt_core::DwtError>() {
			Ok(dwt_err) => {
				let report: miette::Report = (*dwt_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn resolve_root(args: &DwtCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn generate_options(args: &DwtCli) -> Result<GenerateOptions, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = DwtConfig::load(&root)?;
	Ok(GenerateOptions::from_config(&root, config.as_ref())?)
}

fn run_init(args: &DwtCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config_path = root.join("dwt.toml");

	if config_path.exists() {
		println!("Config file already exists: {}", config_path.display());
		return Ok(());
	}

	let sample_config = "# dwt configuration\n\n[locations]\n# Directory holding the .dwt master \
	                     documents.\n# templates = \"Templates\"\n# Directory the generated \
	                     instance documents are written to.\n# output = \"tpl\"\n# Prefix \
	                     recorded in each generated page's InstanceBegin wrapper.\n# \
	                     target_prefix = \"/Templates/\"\n\n[generator]\n# Only file names \
	                     matching this regular expression are processed.\n# include = \"\"\n# \
	                     File names matching this regular expression are skipped.\n# exclude = \
	                     \"\"\n";

	std::fs::write(&config_path, sample_config)?;
	println!("Created dwt.toml");

	println!();
	println!("Next steps:");
	println!("  1. Point [locations] templates at the directory holding your .dwt masters");
	println!("  2. Run `dwt list` to verify which masters are picked up");
	println!("  3. Run `dwt generate` to transcode them");

	Ok(())
}

fn run_scan(
	args: &DwtCli,
	file: &Path,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let source = std::fs::read_to_string(file)?;
	let model = scan(&source);

	match format {
		OutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(&model)?);
		}
		OutputFormat::Text => {
			if model.is_empty() {
				println!("No regions or params found.");
				return Ok(());
			}

			if !model.regions().is_empty() {
				println!("{}", colored!("Regions:", bold));
				for region in model.regions() {
					println!("  {} ({} bytes)", region.name, region.value.len());
					if args.verbose {
						for line in region.value.lines() {
							println!("    {line}");
						}
					}
				}
			}

			if !model.params().is_empty() {
				if !model.regions().is_empty() {
					println!();
				}
				println!("{}", colored!("Params:", bold));
				for param in model.params() {
					println!("  {} ({}) = \"{}\"", param.name, param.r#type, param.value);
				}
			}

			println!(
				"\n{} region(s), {} param(s)",
				model.regions().len(),
				model.params().len()
			);
		}
	}

	Ok(())
}

fn run_list(args: &DwtCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let options = generate_options(args)?;
	let templates = list_templates(&options)?;

	if templates.is_empty() {
		println!("No master templates found.");
		return Ok(());
	}

	println!("{}", colored!("Templates:", bold));
	for template in &templates {
		println!("  {}", make_relative(template, &root));
	}
	println!("\n{} template(s)", templates.len());

	Ok(())
}

fn run_generate(args: &DwtCli, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let options = generate_options(args)?;
	let result = compute_outputs(&options)?;

	if result.files.is_empty() {
		println!("No master templates found.");
		return Ok(());
	}

	if dry_run {
		println!("Dry run: would write {} file(s):", result.files.len());
		for file in &result.files {
			println!(
				"  {} -> {}",
				make_relative(&file.source, &root),
				make_relative(&file.output, &root)
			);
		}
		return Ok(());
	}

	write_outputs(&result)?;
	println!("Generated {} file(s).", result.files.len());

	if args.verbose {
		for file in &result.files {
			println!(
				"  {} -> {}",
				make_relative(&file.source, &root),
				make_relative(&file.output, &root)
			);
		}
	}

	Ok(())
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
