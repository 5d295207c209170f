use std::sync::OnceLock;

use regex::Regex;

/// Protocols a candidate URL may carry at all, whatever the pattern says.
pub const ALLOWED_PROTOCOLS: [&str; 4] = ["http", "https", "file", "ftp"];
pub const MATCH_ALL: &str = "*";
pub const PROTOCOL_DELIMITER: char = '+';

static PATTERN_SPLIT: OnceLock<Regex> = OnceLock::new();

fn pattern_split() -> &'static Regex {
    PATTERN_SPLIT.get_or_init(|| {
        let protocol = format!(r"(?:{}|\*)", ALLOWED_PROTOCOLS.join("|"));
        Regex::new(&format!(
            r"\A({protocol}(?:\+{protocol})*)://(\*|\*\.[^*/]+|[^*/]+|)(/.*)\z"
        ))
        .unwrap()
    })
}

/// The three raw pieces of a match pattern, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSegments<'a> {
    pub protocols: &'a str,
    pub host: &'a str,
    pub path: &'a str,
}

/// Splits `protocols://host/path`, or returns `None` when the string does not
/// follow the grammar.
pub fn split_pattern(raw: &str) -> Option<PatternSegments<'_>> {
    let captures = pattern_split().captures(raw)?;
    Some(PatternSegments {
        protocols: captures.get(1)?.as_str(),
        host: captures.get(2)?.as_str(),
        path: captures.get(3)?.as_str(),
    })
}
