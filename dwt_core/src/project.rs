//! Master-template discovery and batch generation: find every `.dwt`
//! document under the configured directory, scan it, and transcode it into
//! its instance rendition.

use std::path::Path;
use std::path::PathBuf;

use ignore::WalkBuilder;
use regex::Regex;
use tracing::debug;

use crate::DwtError;
use crate::DwtResult;
use crate::config::DwtConfig;
use crate::lexer::tokenize;
use crate::model::DocumentModel;
use crate::scanner::scan_tokens;
use crate::transcoder::TranscodeOptions;
use crate::transcoder::transcode_tokens;

/// File suffix of master documents.
pub const DWT_FILE_SUFFIX: &str = ".dwt";
/// File suffix of generated instance documents.
pub const TPL_FILE_SUFFIX: &str = ".tpl";

/// Options for one generation run, resolved from a project root and its
/// configuration.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
	pub templates_dir: PathBuf,
	pub output_dir: PathBuf,
	pub target_prefix: String,
	pub include: Option<Regex>,
	pub exclude: Option<Regex>,
}

impl GenerateOptions {
	/// Resolve options against `root`, using defaults where `config` is
	/// absent. Invalid filter patterns are a named error.
	pub fn from_config(root: &Path, config: Option<&DwtConfig>) -> DwtResult<Self> {
		let locations = config.map(|config| config.locations.clone()).unwrap_or_default();
		let generator = config.map(|config| config.generator.clone()).unwrap_or_default();

		Ok(Self {
			templates_dir: root.join(&locations.templates),
			output_dir: root.join(&locations.output),
			target_prefix: locations.target_prefix,
			include: compile_filter("include", generator.include.as_deref())?,
			exclude: compile_filter("exclude", generator.exclude.as_deref())?,
		})
	}

	fn accepts(&self, file_name: &str) -> bool {
		if !file_name.ends_with(DWT_FILE_SUFFIX) {
			return false;
		}
		if self
			.include
			.as_ref()
			.is_some_and(|include| !include.is_match(file_name))
		{
			return false;
		}
		if self
			.exclude
			.as_ref()
			.is_some_and(|exclude| exclude.is_match(file_name))
		{
			return false;
		}

		true
	}
}

fn compile_filter(which: &'static str, pattern: Option<&str>) -> DwtResult<Option<Regex>> {
	let Some(pattern) = pattern else {
		return Ok(None);
	};

	Regex::new(pattern)
		.map(Some)
		.map_err(|error| DwtError::InvalidPattern {
			which,
			pattern: pattern.to_string(),
			reason: error.to_string(),
		})
}

/// One master document together with its transcoded output.
#[derive(Debug)]
pub struct GeneratedFile {
	pub source: PathBuf,
	pub output: PathBuf,
	pub content: String,
	pub model: DocumentModel,
}

/// Result of computing a generation run. [`write_outputs`] persists it.
#[derive(Debug, Default)]
pub struct GenerateResult {
	pub files: Vec<GeneratedFile>,
}

/// List the master documents a generation run would process, sorted by path.
pub fn list_templates(options: &GenerateOptions) -> DwtResult<Vec<PathBuf>> {
	if !options.templates_dir.is_dir() {
		return Err(DwtError::InvalidTemplateDir(
			options.templates_dir.display().to_string(),
		));
	}

	let mut templates = Vec::new();
	for entry in WalkBuilder::new(&options.templates_dir).build() {
		let entry = entry?;
		if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
			continue;
		}
		let Some(file_name) = entry.file_name().to_str() else {
			continue;
		};

		if options.accepts(file_name) {
			debug!(file = file_name, "adding template");
			templates.push(entry.into_path());
		}
	}

	templates.sort();
	Ok(templates)
}

/// Scan and transcode every master document without touching the output
/// directory.
pub fn compute_outputs(options: &GenerateOptions) -> DwtResult<GenerateResult> {
	let mut result = GenerateResult::default();

	for path in list_templates(options)? {
		let source = std::fs::read_to_string(&path)?;
		let tokens = tokenize(&source);
		let model = scan_tokens(&tokens);

		let file_name = path
			.file_name()
			.and_then(|name| name.to_str())
			.unwrap_or_default();
		let target = format!("{}{file_name}", options.target_prefix);
		let content = transcode_tokens(&tokens, &model, &TranscodeOptions::new(target));

		let output = options
			.output_dir
			.join(format!("{}{TPL_FILE_SUFFIX}", sanitize_template_name(file_name)));

		debug!(source = %path.display(), output = %output.display(), "generated template");
		result.files.push(GeneratedFile {
			source: path,
			output,
			content,
			model,
		});
	}

	Ok(result)
}

/// Write every generated document, creating the output directory if needed.
pub fn write_outputs(result: &GenerateResult) -> DwtResult<()> {
	for file in &result.files {
		if let Some(parent) = file.output.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&file.output, &file.content)?;
	}

	Ok(())
}

/// Clean a master's file name into the generated output stem: the `.dwt`
/// suffix is dropped, the first letter is upper-cased, and anything outside
/// ASCII alphanumerics becomes `_`.
pub fn sanitize_template_name(file_name: &str) -> String {
	let stem = file_name.strip_suffix(DWT_FILE_SUFFIX).unwrap_or(file_name);

	let mut chars = stem.chars();
	let capitalized: String = match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	};

	capitalized
		.chars()
		.map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
		.collect()
}
