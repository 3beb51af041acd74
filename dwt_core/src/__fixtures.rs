//! Shared fixtures for the unit tests.

/// A master document in the shape authoring tools produce: six editable
/// regions and one param declaration.
pub fn sample_master() -> &'static str {
	concat!(
		"<!DOCTYPE html>\n",
		"<html lang=\"en\">\n",
		"<head>\n",
		"<!-- TemplateBeginEditable name=\"doctitle\" -->\n",
		"<title>Sample Template Style 1</title>\n",
		"<!-- TemplateEndEditable -->\n",
		"<meta charset=\"utf-8\" />\n",
		"<!-- TemplateParam name=\"class\" type=\"text\" value=\"test\" -->\n",
		"<!-- TemplateBeginEditable name=\"head\" --><!-- TemplateEndEditable -->\n",
		"</head>\n",
		"<body class=\"@@(class)@@\">\n",
		"<div id=\"header\"><!-- TemplateBeginEditable name=\"header\" -->Header<!-- \
		 TemplateEndEditable --></div>\n",
		"<div id=\"leftnav\">\n",
		"<!-- TemplateBeginEditable name=\"leftnav\" -->\n",
		"    <p> Placeholder navigation. </p>\n",
		"<!-- TemplateEndEditable -->\n",
		"</div>\n",
		"<div id=\"content\">\n",
		"<!-- TemplateBeginEditable name=\"content\" -->\n",
		"    <h2>Subheading</h2>\n",
		"<!-- TemplateEndEditable -->\n",
		"</div>\n",
		"<div id=\"footer\"><!-- TemplateBeginEditable name=\"footer\" -->Footer<!-- \
		 TemplateEndEditable --></div>\n",
		"</body>\n",
		"</html>\n",
	)
}

/// Region names of [`sample_master`] in document order.
pub fn sample_master_region_names() -> [&'static str; 6] {
	["doctitle", "head", "header", "leftnav", "content", "footer"]
}

/// The same structural content as [`sample_master`], written entirely with
/// `Instance`-dialect markers (no wrapper), for dialect-independence checks.
pub fn sample_master_instance_dialect() -> String {
	sample_master()
		.replace("TemplateBeginEditable", "InstanceBeginEditable")
		.replace("TemplateEndEditable", "InstanceEndEditable")
		.replace("TemplateParam", "InstanceParam")
}
