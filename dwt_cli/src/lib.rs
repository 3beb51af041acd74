use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Scan and transcode Dreamweaver-style master templates.",
	long_about = "dwt understands the legacy Dreamweaver template dialect: master documents \
	              (.dwt) whose editable regions and typed params are described by markers \
	              embedded in HTML comments.\n\nQuick start:\n  dwt init       Create a starter \
	              dwt.toml\n  dwt scan FILE  Print the regions and params of one document\n  dwt \
	              list       List the master templates a run would process\n  dwt generate   \
	              Transcode every master into its instance document"
)]
pub struct DwtCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a starter `dwt.toml` in the project root.
	///
	/// The generated file documents every setting with commented defaults.
	/// If a config file already exists, this command is a no-op and exits
	/// successfully.
	Init,
	/// Scan one document and print its regions and params.
	///
	/// Accepts master documents and derived pages alike; both marker
	/// dialects are recognized. Use `--format json` for programmatic
	/// consumption.
	Scan {
		/// The document to scan.
		file: PathBuf,

		/// Output format for the scanned model.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// List the master templates a generation run would process.
	///
	/// Applies the configured include/exclude filters, so the listing is
	/// exactly the set `dwt generate` would transcode.
	List,
	/// Transcode every master template into its instance document.
	///
	/// Scans each discovered `.dwt` master, rewrites its markers into the
	/// instance dialect, and writes the result into the configured output
	/// directory.
	Generate {
		/// Compute outputs without writing files. Prints which files would
		/// be created.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
