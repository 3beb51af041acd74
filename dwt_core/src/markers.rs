//! The marker grammar: the exact textual formats of the comment-embedded
//! markers and the patterns that recognize them.
//!
//! Nothing above this module hand-builds marker strings; the formats here are
//! the wire format and are reproduced byte-for-byte.

use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

/// The two marker vocabularies. They share an identical grammar shape and
/// differ only in the dialect token substituted into the marker text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
	/// Master-document vocabulary (`TemplateBeginEditable`, ...).
	#[default]
	Template,
	/// Derived-document vocabulary (`InstanceBeginEditable`, ...).
	Instance,
}

impl Dialect {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Template => "Template",
			Self::Instance => "Instance",
		}
	}

	/// Resolve a captured dialect token. Anything unrecognized falls back to
	/// the first recognized dialect.
	pub fn from_token(token: &str) -> Self {
		match token {
			"Instance" => Self::Instance,
			_ => Self::Template,
		}
	}
}

impl Display for Dialect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// `<!-- InstanceEnd -->`. The wrapper end marker carries no attributes and
/// no dialect token.
pub const INSTANCE_END_MARKER: &str = "<!-- InstanceEnd -->";

/// The placeholder produced by substituting the single-space name `" "` into
/// the param placeholder format. Its presence inside a region's accumulated
/// value marks the region as template-authoring scaffolding rather than real
/// content.
pub const LOCK_SENTINEL: &str = "@@(\" \")@@";

pub fn region_begin_marker(dialect: Dialect, name: &str) -> String {
	format!("<!-- {dialect}BeginEditable name=\"{name}\" -->")
}

pub fn region_end_marker(dialect: Dialect) -> String {
	format!("<!-- {dialect}EndEditable -->")
}

pub fn param_def_marker(dialect: Dialect, name: &str, r#type: &str, value: &str) -> String {
	format!(
		"<!-- {dialect}Param name=\"{name}\" type=\"{}\" value=\"{value}\" -->",
		r#type
	)
}

pub fn instance_begin_marker(template: &str, code_outside_html_is_locked: bool) -> String {
	format!(
		"<!-- InstanceBegin template=\"{template}\" \
		 codeOutsideHTMLIsLocked=\"{code_outside_html_is_locked}\" -->"
	)
}

/// The render-time substitution placeholder for a param, `@@(name)@@`.
pub fn param_placeholder(name: &str) -> String {
	format!("@@({name})@@")
}

/// The legacy alternate placeholder form, `@@(_document['name'])@@`.
pub fn param_placeholder_legacy(name: &str) -> String {
	format!("@@(_document['{name}'])@@")
}

/// Capture group matching either dialect token.
const DIALECT_GROUP: &str = "(Template|Instance)";
/// Capture group matching a double-quoted attribute value.
const ATTR_GROUP: &str = "([^\"]*)";

static INSTANCE_BEGIN: Lazy<Regex> = Lazy::new(|| {
	Regex::new(&format!(
		"<!-- InstanceBegin template=\"{ATTR_GROUP}\" codeOutsideHTMLIsLocked=\"{ATTR_GROUP}\" -->"
	))
	.expect("instance begin pattern compiles")
});

static INSTANCE_END: Lazy<Regex> =
	Lazy::new(|| Regex::new(INSTANCE_END_MARKER).expect("instance end pattern compiles"));

static PARAM_DEF: Lazy<Regex> = Lazy::new(|| {
	Regex::new(&format!(
		"<!-- {DIALECT_GROUP}Param name=\"{ATTR_GROUP}\" type=\"{ATTR_GROUP}\" \
		 value=\"{ATTR_GROUP}\" -->"
	))
	.expect("param def pattern compiles")
});

static REGION_BEGIN: Lazy<Regex> = Lazy::new(|| {
	Regex::new(&format!(
		"<!-- {DIALECT_GROUP}BeginEditable name=\"{ATTR_GROUP}\" -->"
	))
	.expect("region begin pattern compiles")
});

static REGION_END: Lazy<Regex> = Lazy::new(|| {
	Regex::new(&format!("<!-- {DIALECT_GROUP}EndEditable -->"))
		.expect("region end pattern compiles")
});

/// Matches the instance-begin wrapper. Group 1 is the template path, group 2
/// the `codeOutsideHTMLIsLocked` attribute.
pub fn instance_begin_pattern() -> &'static Regex {
	&INSTANCE_BEGIN
}

pub fn instance_end_pattern() -> &'static Regex {
	&INSTANCE_END
}

/// Matches a param-def marker in either dialect. Group 1 is the dialect
/// token, groups 2-4 are name, type, and value.
pub fn param_def_pattern() -> &'static Regex {
	&PARAM_DEF
}

/// Matches a region-begin marker in either dialect. Group 1 is the dialect
/// token, group 2 the region name.
pub fn region_begin_pattern() -> &'static Regex {
	&REGION_BEGIN
}

/// Matches a region-end marker in either dialect. Group 1 is the dialect
/// token.
pub fn region_end_pattern() -> &'static Regex {
	&REGION_END
}

/// Matches the param-def marker for one specific param name, capturing the
/// dialect token, declared type, and current value. Used to rewrite a
/// document's param declaration in place.
pub fn param_def_replace_pattern(name: &str) -> Regex {
	Regex::new(&format!(
		"<!-- {DIALECT_GROUP}Param name=\"{}\" type=\"{ATTR_GROUP}\" value=\"{ATTR_GROUP}\" -->",
		regex::escape(name)
	))
	.expect("param replace pattern compiles")
}
