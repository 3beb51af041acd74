//! Runtime substitution: produce the final page from a master's text and a
//! model whose regions and params carry the values to show.

use tracing::debug;

use crate::markers;
use crate::markers::Dialect;
use crate::model::DocumentModel;
use crate::model::ParamType;
use crate::model::Region;
use crate::strings::replace_between;

/// Replace every region's marker-delimited span in `template` with the
/// region's stored value, then rewrite param declarations and substitute
/// param placeholders from the model.
pub fn render(template: impl AsRef<str>, model: &DocumentModel) -> String {
	let html = template.as_ref().to_string();
	let html = replace_regions(html, model);
	replace_params(html, model)
}

/// Regions are looked up with master-dialect markers first; a document that
/// carries instance-dialect markers works the same way via the fallback.
fn replace_regions(mut html: String, model: &DocumentModel) -> String {
	for region in model.regions() {
		let (replaced, count) = replace_region_dialect(&html, region, Dialect::Template);
		let (replaced, count) = if count == 0 {
			replace_region_dialect(&replaced, region, Dialect::Instance)
		} else {
			(replaced, count)
		};

		if count == 0 {
			debug!(name = %region.name, "region markers not found in template");
		}

		html = replaced;
	}

	html
}

fn replace_region_dialect(html: &str, region: &Region, dialect: Dialect) -> (String, usize) {
	let begin = markers::region_begin_marker(dialect, &region.name);
	let end = markers::region_end_marker(dialect);
	let replacement = format!("{begin}{}{end}", region.value);

	replace_between(&begin, &end, &replacement, html, true)
}

/// Rewrite the first param-def marker for each param, keeping the dialect
/// and declared type the document already carries while substituting the
/// model's value, then replace both placeholder forms of the param wherever
/// they appear. Placeholders are only touched when the declaration was
/// found.
fn replace_params(mut html: String, model: &DocumentModel) -> String {
	for param in model.params() {
		let pattern = markers::param_def_replace_pattern(&param.name);
		let Some(captures) = pattern.captures(&html) else {
			debug!(name = %param.name, "param marker not found in template");
			continue;
		};

		let dialect = Dialect::from_token(&captures[1]);
		let declared_type = ParamType::from(&captures[2]);
		let marker =
			markers::param_def_marker(dialect, &param.name, declared_type.as_str(), &param.value);
		html = pattern
			.replace(&html, regex::NoExpand(&marker))
			.into_owned();

		html = html.replace(&markers::param_placeholder(&param.name), &param.value);
		html = html.replace(&markers::param_placeholder_legacy(&param.name), &param.value);
	}

	html
}
