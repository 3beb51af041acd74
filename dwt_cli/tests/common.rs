use assert_cmd::Command;

pub fn dwt_cmd() -> Command {
	let mut cmd = Command::cargo_bin("dwt").expect("dwt binary builds");
	cmd.env("NO_COLOR", "1");
	cmd
}

/// A small master document with one region and one param.
pub fn sample_master() -> &'static str {
	"<html><head>\n<!-- TemplateParam name=\"class\" type=\"text\" value=\"test\" \
	 -->\n</head><body>\n<!-- TemplateBeginEditable name=\"content\" -->Body<!-- \
	 TemplateEndEditable -->\n</body></html>\n"
}
