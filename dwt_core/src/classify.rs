use crate::markers;
use crate::markers::Dialect;
use crate::tokens::HtmlToken;

/// What one token means to the marker protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
	/// Any non-comment token.
	Content,
	/// `<!-- InstanceBegin template="..." codeOutsideHTMLIsLocked="..." -->`.
	InstanceBegin {
		template: String,
		code_outside_html_is_locked: String,
	},
	/// `<!-- InstanceEnd -->`.
	InstanceEnd,
	/// `<!-- %sParam name="..." type="..." value="..." -->`. The type is kept
	/// raw here; normalization into the fixed vocabulary happens when the
	/// param enters the model.
	ParamDef {
		dialect: Dialect,
		name: String,
		r#type: String,
		value: String,
	},
	/// `<!-- %sBeginEditable name="..." -->`.
	RegionBegin { dialect: Dialect, name: String },
	/// `<!-- %sEndEditable -->`.
	RegionEnd { dialect: Dialect },
	/// A comment matching no marker shape; its raw text is preserved
	/// verbatim by whoever consumes it.
	GenericComment,
}

/// Classify one token. Comments are tested against the marker patterns in
/// precedence order and the first match wins. Instance-begin and param-def
/// markers are structurally similar comment shapes and must not fall through
/// to the region patterns, hence the ordering.
pub fn classify(token: &HtmlToken) -> Classification {
	let HtmlToken::Comment(comment) = token else {
		return Classification::Content;
	};

	if let Some(captures) = markers::instance_begin_pattern().captures(comment) {
		return Classification::InstanceBegin {
			template: captures[1].to_string(),
			code_outside_html_is_locked: captures[2].to_string(),
		};
	}

	if markers::instance_end_pattern().is_match(comment) {
		return Classification::InstanceEnd;
	}

	if let Some(captures) = markers::param_def_pattern().captures(comment) {
		return Classification::ParamDef {
			dialect: Dialect::from_token(&captures[1]),
			name: captures[2].to_string(),
			r#type: captures[3].to_string(),
			value: captures[4].to_string(),
		};
	}

	if let Some(captures) = markers::region_begin_pattern().captures(comment) {
		return Classification::RegionBegin {
			dialect: Dialect::from_token(&captures[1]),
			name: captures[2].to_string(),
		};
	}

	if let Some(captures) = markers::region_end_pattern().captures(comment) {
		return Classification::RegionEnd {
			dialect: Dialect::from_token(&captures[1]),
		};
	}

	Classification::GenericComment
}
