//! A minimal HTML tokenizer. It recognizes just enough structure for the
//! marker protocol: comments (kept raw), the doctype, start and end tags
//! (with attributes and quoting preserved), and runs of character data.

use logos::Logos;

use crate::tokens::AttrQuote;
use crate::tokens::Attribute;
use crate::tokens::HtmlToken;
use crate::tokens::StartTag;

/// Raw shapes recognized in a single logos pass. Tag internals are parsed
/// afterwards from the matched slice.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[regex(r"<!--([^-]|-[^-]|--[^>])*-->")]
	Comment,
	#[regex(r"<![a-zA-Z][^>]*>")]
	Doctype,
	#[regex(r"</[a-zA-Z][^>]*>")]
	EndTag,
	#[regex(r"<[a-zA-Z][^>]*>")]
	StartTag,
	#[regex(r"[^<]+")]
	Text,
	#[token("<")]
	Stray,
}

/// Tokenize a document into the stream consumed by the scanner and
/// transcoder. Unrecognizable input degrades to text; the pass never fails.
pub fn tokenize(source: &str) -> Vec<HtmlToken> {
	let mut tokens: Vec<HtmlToken> = Vec::new();

	for (result, span) in RawToken::lexer(source).spanned() {
		let slice = &source[span];
		match result {
			Ok(RawToken::Comment) => tokens.push(HtmlToken::Comment(slice.to_string())),
			Ok(RawToken::Doctype) => tokens.push(HtmlToken::Doctype(slice.to_string())),
			Ok(RawToken::StartTag) => tokens.push(parse_start_tag(slice)),
			Ok(RawToken::EndTag) => tokens.push(HtmlToken::EndTag(parse_end_tag_name(slice))),
			Ok(RawToken::Text | RawToken::Stray) | Err(()) => push_text(&mut tokens, slice),
		}
	}

	tokens
}

/// Append raw text, coalescing with a preceding text token so adjacent runs
/// come out as one token.
fn push_text(tokens: &mut Vec<HtmlToken>, slice: &str) {
	if let Some(HtmlToken::Text(text)) = tokens.last_mut() {
		text.push_str(slice);
		return;
	}

	tokens.push(HtmlToken::Text(slice.to_string()));
}

fn parse_end_tag_name(slice: &str) -> String {
	let inner = &slice[2..slice.len() - 1];
	inner
		.split_ascii_whitespace()
		.next()
		.unwrap_or_default()
		.to_string()
}

/// Parse a matched `<...>` slice into a start tag. The grammar is permissive:
/// whitespace around `=` is tolerated, quotes may be double, single, or
/// absent, and an attribute without `=` carries an empty unquoted value.
fn parse_start_tag(slice: &str) -> HtmlToken {
	let mut inner = &slice[1..slice.len() - 1];
	let self_closing = inner.ends_with('/');
	if self_closing {
		inner = &inner[..inner.len() - 1];
	}

	let bytes = inner.as_bytes();
	let mut pos = 0;

	while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'/' {
		pos += 1;
	}
	let name = inner[..pos].to_string();

	let mut attributes = Vec::new();
	loop {
		while pos < bytes.len() && (bytes[pos].is_ascii_whitespace() || bytes[pos] == b'/') {
			pos += 1;
		}
		if pos >= bytes.len() {
			break;
		}

		let attr_start = pos;
		while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'=' {
			pos += 1;
		}
		let attr_name = inner[attr_start..pos].to_string();

		while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
			pos += 1;
		}

		if pos >= bytes.len() || bytes[pos] != b'=' {
			attributes.push(Attribute {
				name: attr_name,
				value: String::new(),
				quote: AttrQuote::Unquoted,
			});
			continue;
		}

		pos += 1;
		while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
			pos += 1;
		}

		let (value, quote) = if pos < bytes.len() && (bytes[pos] == b'"' || bytes[pos] == b'\'') {
			let quote_byte = bytes[pos];
			pos += 1;
			let value_start = pos;
			while pos < bytes.len() && bytes[pos] != quote_byte {
				pos += 1;
			}
			let value = inner[value_start..pos].to_string();
			if pos < bytes.len() {
				pos += 1;
			}

			let quote = if quote_byte == b'"' {
				AttrQuote::Double
			} else {
				AttrQuote::Single
			};
			(value, quote)
		} else {
			let value_start = pos;
			while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() {
				pos += 1;
			}
			(inner[value_start..pos].to_string(), AttrQuote::Unquoted)
		};

		attributes.push(Attribute {
			name: attr_name,
			value,
			quote,
		});
	}

	HtmlToken::StartTag(StartTag {
		name,
		attributes,
		self_closing,
	})
}
