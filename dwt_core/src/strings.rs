/// Replace the first span bounded by `start` and `end` with `replacement`,
/// returning the new text and the number of spans replaced (zero or one).
///
/// `end` is searched strictly after `start`. When `inclusive`, both
/// delimiters are part of the replaced span; otherwise only the interior is
/// replaced and an empty interior counts as no match. Missing delimiters
/// fail closed: the input comes back unchanged with a match count of zero,
/// and callers decide whether that is an error.
pub fn replace_between(
	start: &str,
	end: &str,
	replacement: &str,
	text: &str,
	inclusive: bool,
) -> (String, usize) {
	let Some(start_pos) = text.find(start) else {
		return (text.to_string(), 0);
	};

	let interior_start = start_pos + start.len();
	let Some(end_offset) = text[interior_start..].find(end) else {
		return (text.to_string(), 0);
	};
	let end_pos = interior_start + end_offset;

	let (span_start, span_end) = if inclusive {
		(start_pos, end_pos + end.len())
	} else {
		(interior_start, end_pos)
	};

	if span_end <= span_start {
		return (text.to_string(), 0);
	}

	let mut replaced =
		String::with_capacity(text.len() - (span_end - span_start) + replacement.len());
	replaced.push_str(&text[..span_start]);
	replaced.push_str(replacement);
	replaced.push_str(&text[span_end..]);

	(replaced, 1)
}
