//! The token surface consumed by the scanner and transcoder. Only the shapes
//! the marker protocol cares about are distinguished; everything else rides
//! along as raw text.

/// Element name that arms the instance-begin insertion point.
pub const HTML_TAG: &str = "html";
/// Element name whose closing tag is the param-def insertion point.
pub const HEAD_TAG: &str = "head";

/// How an attribute value was quoted in the source, so reconstruction can
/// reproduce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrQuote {
	Double,
	Single,
	Unquoted,
}

/// One `name=value` attribute of a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	pub name: String,
	pub value: String,
	pub quote: AttrQuote,
}

/// A parsed start tag: name, ordered attributes, and the self-closing flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
	pub name: String,
	pub attributes: Vec<Attribute>,
	pub self_closing: bool,
}

impl StartTag {
	/// Rebuild the tag markup. A self-closing tag gets the ` /` suffix; bare
	/// attributes (unquoted, empty value) collapse to their name.
	pub fn build(&self) -> String {
		let attributes = self.build_attributes();
		let space = if attributes.is_empty() { "" } else { " " };
		let self_closing = if self.self_closing { " /" } else { "" };
		format!("<{}{space}{attributes}{self_closing}>", self.name)
	}

	fn build_attributes(&self) -> String {
		let mut parts = Vec::with_capacity(self.attributes.len());

		for attribute in &self.attributes {
			let quote = match attribute.quote {
				AttrQuote::Double => "\"",
				AttrQuote::Single => "'",
				AttrQuote::Unquoted => "",
			};

			if quote.is_empty() && attribute.value.is_empty() {
				parts.push(attribute.name.clone());
				continue;
			}

			parts.push(format!("{}={quote}{}{quote}", attribute.name, attribute.value));
		}

		parts.join(" ")
	}
}

/// One token of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlToken {
	/// `<!DOCTYPE ...>`, raw.
	Doctype(String),
	/// `<!-- ... -->`, raw text including the delimiters.
	Comment(String),
	StartTag(StartTag),
	EndTag(String),
	/// Character data between tags, raw.
	Text(String),
}

impl HtmlToken {
	/// Rebuild the markup for this token.
	pub fn build(&self) -> String {
		match self {
			Self::Doctype(raw) | Self::Comment(raw) | Self::Text(raw) => raw.clone(),
			Self::StartTag(tag) => tag.build(),
			Self::EndTag(name) => format!("</{name}>"),
		}
	}

	/// True when this token opens an element with the given name, compared
	/// ASCII case-insensitively.
	pub fn opens_element(&self, name: &str) -> bool {
		matches!(self, Self::StartTag(tag) if tag.name.eq_ignore_ascii_case(name))
	}

	/// True when this token closes an element with the given name, compared
	/// ASCII case-insensitively.
	pub fn closes_element(&self, name: &str) -> bool {
		matches!(self, Self::EndTag(tag_name) if tag_name.eq_ignore_ascii_case(name))
	}
}
