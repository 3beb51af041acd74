//! The scanning half of the core: a single pass over the token stream that
//! builds the region/param model while tracking nesting and lock state.

use tracing::debug;
use tracing::trace;

use crate::classify::Classification;
use crate::classify::classify;
use crate::lexer::tokenize;
use crate::markers::LOCK_SENTINEL;
use crate::model::DocumentModel;
use crate::model::Param;
use crate::model::ParamType;
use crate::model::Region;
use crate::tokens::HTML_TAG;
use crate::tokens::HtmlToken;

/// Scan a document for regions and params.
pub fn scan(source: impl AsRef<str>) -> DocumentModel {
	scan_tokens(&tokenize(source.as_ref()))
}

/// Scan an already-tokenized document. State and model are created fresh for
/// every call; nothing carries over between passes.
pub fn scan_tokens(tokens: &[HtmlToken]) -> DocumentModel {
	let mut state = ScanState::default();

	for token in tokens {
		state.step(token);
	}

	state.model
}

/// State for one scanning pass: a stack of in-progress region frames plus
/// the two single-shot flags governing the instance-begin wrapper and the
/// lock-sentinel rule.
#[derive(Default)]
struct ScanState {
	stack: Vec<Region>,
	can_begin_instance: bool,
	can_lock_region: bool,
	model: DocumentModel,
}

impl ScanState {
	fn step(&mut self, token: &HtmlToken) {
		match classify(token) {
			Classification::Content => self.handle_content(token),
			Classification::InstanceBegin { .. } => self.handle_instance_begin(token),
			Classification::ParamDef {
				name,
				r#type,
				value,
				dialect: _,
			} => {
				trace!(name = %name, "param def");
				self.model
					.insert_param(Param::new(name, ParamType::from(r#type.as_str()), value));
			}
			Classification::RegionBegin { name, .. } => self.handle_region_begin(name),
			Classification::RegionEnd { .. } => self.handle_region_end(),
			Classification::InstanceEnd | Classification::GenericComment => {
				self.append_comment(token);
			}
		}
	}

	/// Plain content arms the instance-begin flag when it is the opening root
	/// tag (and disarms it otherwise; the flag is single-shot) and feeds the
	/// innermost open region.
	fn handle_content(&mut self, token: &HtmlToken) {
		self.can_begin_instance = token.opens_element(HTML_TAG);

		if let Some(region) = self.stack.last_mut() {
			region.value.push_str(&token.build());
		}
	}

	/// An instance-begin wrapper is only honored immediately after the
	/// opening root tag; anywhere else it is ordinary comment content.
	fn handle_instance_begin(&mut self, token: &HtmlToken) {
		if self.can_begin_instance {
			trace!("instance begin wrapper honored");
			self.can_begin_instance = false;
			self.can_lock_region = true;
			return;
		}

		self.append_comment(token);
	}

	fn append_comment(&mut self, token: &HtmlToken) {
		let HtmlToken::Comment(raw) = token else {
			return;
		};

		if let Some(region) = self.stack.last_mut() {
			region.value.push_str(raw);
		}
	}

	fn handle_region_begin(&mut self, name: String) {
		self.can_begin_instance = false;

		if !self.stack.is_empty() {
			trace!(name = %name, depth = self.stack.len(), "nested region begin");
		}

		self.stack.push(Region::new(name));
	}

	/// The first end marker commits the innermost open region. A nested close
	/// disposes of every superseded outer frame along with it; only the
	/// innermost region survives. An end marker with no open region is a
	/// no-op.
	fn handle_region_end(&mut self) {
		self.can_begin_instance = false;

		let Some(region) = self.stack.pop() else {
			return;
		};

		if !self.stack.is_empty() {
			self.stack.clear();
			debug!(name = %region.name, "region committed, outer frames superseded");
			self.model.insert_region(region);
			return;
		}

		let locked = self.can_lock_region && region.value.contains(LOCK_SENTINEL);
		self.can_lock_region = false;

		if locked {
			debug!(name = %region.name, "region discarded by lock sentinel");
			return;
		}

		debug!(name = %region.name, "region committed");
		self.model.insert_region(region);
	}
}
