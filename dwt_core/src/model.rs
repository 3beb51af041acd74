use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

use crate::DwtError;
use crate::DwtResult;

/// The fixed vocabulary of param types. Declared types outside this set
/// normalize to [`ParamType::Unknown`] instead of being rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
	#[default]
	Text,
	Boolean,
	Color,
	Url,
	Number,
	Unknown,
}

impl ParamType {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Boolean => "boolean",
			Self::Color => "color",
			Self::Url => "url",
			Self::Number => "number",
			Self::Unknown => "unknown",
		}
	}
}

impl Display for ParamType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<&str> for ParamType {
	fn from(value: &str) -> Self {
		match value {
			"text" => Self::Text,
			"boolean" => Self::Boolean,
			"color" => Self::Color,
			"url" => Self::Url,
			"number" => Self::Number,
			_ => Self::Unknown,
		}
	}
}

/// A named, typed scalar declared via a param-def marker. Params are
/// independent of regions and finalize the instant their marker is
/// classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
	pub name: String,
	pub r#type: ParamType,
	pub value: String,
}

impl Param {
	pub fn new(name: impl Into<String>, r#type: ParamType, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			r#type,
			value: value.into(),
		}
	}
}

/// A named editable span of content demarcated by matching begin/end
/// markers. The value accumulates the reconstructed markup of every token
/// between the markers; it never contains the marker pair itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
	pub name: String,
	pub value: String,
}

impl Region {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: String::new(),
		}
	}

	pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

/// The regions and params extracted by one scan pass.
///
/// Both collections preserve insertion order. Inserting a name that already
/// exists overwrites the earlier entry in place, so later definitions win
/// without disturbing the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentModel {
	regions: Vec<Region>,
	params: Vec<Param>,
}

impl DocumentModel {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn regions(&self) -> &[Region] {
		&self.regions
	}

	pub fn params(&self) -> &[Param] {
		&self.params
	}

	pub fn region(&self, name: &str) -> Option<&Region> {
		self.regions.iter().find(|region| region.name == name)
	}

	pub fn param(&self, name: &str) -> Option<&Param> {
		self.params.iter().find(|param| param.name == name)
	}

	pub fn insert_region(&mut self, region: Region) {
		if let Some(existing) = self
			.regions
			.iter_mut()
			.find(|existing| existing.name == region.name)
		{
			*existing = region;
			return;
		}

		self.regions.push(region);
	}

	pub fn insert_param(&mut self, param: Param) {
		if let Some(existing) = self
			.params
			.iter_mut()
			.find(|existing| existing.name == param.name)
		{
			*existing = param;
			return;
		}

		self.params.push(param);
	}

	/// Assign a new value to an existing region. Unknown names are a named
	/// error rather than a silent no-op.
	pub fn set_region_value(&mut self, name: &str, value: impl Into<String>) -> DwtResult<()> {
		let Some(region) = self.regions.iter_mut().find(|region| region.name == name) else {
			return Err(DwtError::UnknownRegion(name.to_string()));
		};

		region.value = value.into();
		Ok(())
	}

	/// Assign a new value to an existing param. Unknown names are a named
	/// error rather than a silent no-op.
	pub fn set_param_value(&mut self, name: &str, value: impl Into<String>) -> DwtResult<()> {
		let Some(param) = self.params.iter_mut().find(|param| param.name == name) else {
			return Err(DwtError::UnknownParam(name.to_string()));
		};

		param.value = value.into();
		Ok(())
	}

	pub fn is_empty(&self) -> bool {
		self.regions.is_empty() && self.params.is_empty()
	}
}
