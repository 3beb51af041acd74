use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DwtError {
	#[error(transparent)]
	#[diagnostic(code(dwt::io_error))]
	Io(#[from] std::io::Error),

	#[error("no region named `{0}` exists in this document")]
	#[diagnostic(
		code(dwt::unknown_region),
		help(
			"define it with `<!-- TemplateBeginEditable name=\"{0}\" -->...<!-- TemplateEndEditable \
			 -->`"
		)
	)]
	UnknownRegion(String),

	#[error("no param named `{0}` exists in this document")]
	#[diagnostic(
		code(dwt::unknown_param),
		help("declare it with `<!-- TemplateParam name=\"{0}\" type=\"text\" value=\"\" -->`")
	)]
	UnknownParam(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(dwt::config_parse),
		help("check that dwt.toml is valid TOML with [locations] and/or [generator] sections")
	)]
	ConfigParse(String),

	#[error("template directory `{0}` does not exist or is not a directory")]
	#[diagnostic(
		code(dwt::template_dir),
		help("set `templates` under [locations] in dwt.toml to the directory holding your .dwt files")
	)]
	InvalidTemplateDir(String),

	#[error("invalid {which} pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(dwt::invalid_pattern),
		help("`include` and `exclude` under [generator] must be valid regular expressions")
	)]
	InvalidPattern {
		which: &'static str,
		pattern: String,
		reason: String,
	},

	#[error(transparent)]
	#[diagnostic(code(dwt::walk_error))]
	Walk(#[from] ignore::Error),
}

pub type DwtResult<T> = Result<T, DwtError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
