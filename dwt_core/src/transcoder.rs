//! The generating half of the core: a single pass over a master document's
//! token stream that emits the derived-document rendition, translating the
//! markers into the instance dialect and re-synthesizing the wrapper and
//! param declarations at their canonical insertion points.

use tracing::debug;
use tracing::trace;

use crate::classify::Classification;
use crate::classify::classify;
use crate::lexer::tokenize;
use crate::markers;
use crate::markers::Dialect;
use crate::markers::LOCK_SENTINEL;
use crate::model::DocumentModel;
use crate::tokens::HEAD_TAG;
use crate::tokens::HTML_TAG;
use crate::tokens::HtmlToken;

/// Settings for one transcoding pass, passed explicitly so concurrent runs
/// never share state.
#[derive(Debug, Clone)]
pub struct TranscodeOptions {
	/// The path recorded in the synthesized instance-begin wrapper, e.g.
	/// `/Templates/home.dwt`.
	pub target: String,
	/// Dialect of the markers synthesized into the output document.
	pub dialect: Dialect,
	/// Value of the wrapper's `codeOutsideHTMLIsLocked` attribute.
	pub lock_outside_html: bool,
}

impl TranscodeOptions {
	pub fn new(target: impl Into<String>) -> Self {
		Self {
			target: target.into(),
			dialect: Dialect::Instance,
			lock_outside_html: false,
		}
	}
}

/// Rewrite a master document into the derived-document dialect, using a
/// previously scanned model for the region values.
pub fn transcode(
	source: impl AsRef<str>,
	model: &DocumentModel,
	options: &TranscodeOptions,
) -> String {
	transcode_tokens(&tokenize(source.as_ref()), model, options)
}

/// Token-stream form of [`transcode`]. The model is typically the result of
/// scanning the same stream.
pub fn transcode_tokens(
	tokens: &[HtmlToken],
	model: &DocumentModel,
	options: &TranscodeOptions,
) -> String {
	let mut output = String::new();
	// While set, the master's literal body for the region being replaced is
	// suppressed; only the model's stored value goes out.
	let mut replacing_region = false;

	for token in tokens {
		match classify(token) {
			Classification::Content => {
				if replacing_region {
					continue;
				}
				push_content(&mut output, token, model, options);
			}
			Classification::InstanceBegin { .. } | Classification::ParamDef { .. } => {
				// Re-synthesized at the canonical insertion points instead of
				// being copied from wherever the source had them.
				trace!("dropping source metadata marker");
			}
			Classification::RegionBegin { name, .. } => {
				let Some(region) = model.region(&name) else {
					debug!(name = %name, "region missing from model, markers dropped");
					continue;
				};

				replacing_region = true;
				output.push_str(&markers::region_begin_marker(options.dialect, &region.name));
				output.push_str(&region.value.replace(LOCK_SENTINEL, ""));
			}
			Classification::RegionEnd { .. } => {
				if replacing_region {
					replacing_region = false;
					output.push_str(&markers::region_end_marker(options.dialect));
				}
			}
			Classification::InstanceEnd | Classification::GenericComment => {
				if replacing_region {
					continue;
				}
				if let HtmlToken::Comment(raw) = token {
					output.push_str(raw);
				}
			}
		}
	}

	output
}

/// Emit one plain token, inserting the synthesized markers at their exact
/// positions: param defs one per line immediately before the closing `head`
/// tag, the instance-begin wrapper immediately after the opening root tag.
fn push_content(
	output: &mut String,
	token: &HtmlToken,
	model: &DocumentModel,
	options: &TranscodeOptions,
) {
	if token.closes_element(HEAD_TAG) {
		for param in model.params() {
			output.push_str(&markers::param_def_marker(
				options.dialect,
				&param.name,
				param.r#type.as_str(),
				&param.value,
			));
			output.push('\n');
		}
	}

	output.push_str(&token.build());

	if token.opens_element(HTML_TAG) {
		output.push_str(&markers::instance_begin_marker(
			&options.target,
			options.lock_outside_html,
		));
	}
}
