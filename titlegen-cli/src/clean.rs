use std::sync::LazyLock;

use regex::Regex;

/// Matches the title portion of a raw catalog line, which carries the
/// release year (or `????`, optionally with a roman-numeral suffix for
/// same-year duplicates) in parentheses after the title.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(^.*)\s*?\([\d?]{4}[/IVXL]*\)").expect("valid title pattern")
});

/// Characters stripped from extracted titles before training.
static BAD_CHARS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#"["'\n()]"#).expect("valid strip pattern"));

/// Extracts a cleaned, lowercase title from one raw catalog line.
///
/// Returns `None` for lines that carry no recognizable title; callers
/// must filter those out before the lines reach the chain builder.
pub fn clean_line(line: &str) -> Option<String> {
	let captures = TITLE_RE.captures(line)?;
	let dirty = captures.get(1)?.as_str();

	let cleaned = BAD_CHARS.replace_all(dirty, "").to_lowercase();
	let cleaned = cleaned.trim().to_owned();
	if cleaned.is_empty() { None } else { Some(cleaned) }
}
