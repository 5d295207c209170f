use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use urlscope_core::Property;

pub const DEFAULT_SEPARATOR: &str = "\n";

const KV_SEPARATOR: char = ':';

static HEADER_LINE: OnceLock<Regex> = OnceLock::new();
static FOLD: OnceLock<Regex> = OnceLock::new();

fn header_line() -> &'static Regex {
    HEADER_LINE.get_or_init(|| Regex::new(r"(?mR)^(\S+):(.*)$").unwrap())
}

fn fold() -> &'static Regex {
    FOLD.get_or_init(|| Regex::new(r"\r\n([ \t])").unwrap())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
    /// Set when the header was added by the tool itself rather than the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderDefinition {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            system: None,
            disabled: None,
        }
    }

    pub fn from_definition(definition: HeaderDefinition) -> Self {
        let mut header = Self::default();
        header.update(definition);
        header
    }

    /// Parses a block of `Name: value` lines. Folded continuation lines
    /// (CRLF followed by a space or tab) are joined first; lines without a
    /// colon after a non-blank name are skipped.
    pub fn parse(text: &str) -> Vec<Header> {
        let unfolded = fold().replace_all(text, "$1");
        header_line()
            .captures_iter(&unfolded)
            .map(|captures| Header::new(&captures[1], captures[2].trim()))
            .collect()
    }

    /// Splits at the first colon; without one the whole input is the key.
    pub fn parse_single(line: &str) -> Header {
        match line.split_once(KV_SEPARATOR) {
            Some((key, value)) => Header::new(key.trim(), value.trim()),
            None => Header::new(line.trim(), ""),
        }
    }

    /// Joins headers with `separator`, `\n` when none (or an empty one) is given.
    pub fn unparse(headers: &[Header], separator: Option<&str>) -> String {
        let separator = separator
            .filter(|separator| !separator.is_empty())
            .unwrap_or(DEFAULT_SEPARATOR);
        headers
            .iter()
            .map(Header::unparse_single)
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn unparse_single(&self) -> String {
        format!("{}{} {}", self.key, KV_SEPARATOR, self.value)
    }
}

impl Property for Header {
    type Definition = HeaderDefinition;

    const PROPERTY_NAME: &'static str = "Header";

    fn update(&mut self, definition: HeaderDefinition) {
        self.key = definition.key.unwrap_or_default();
        self.value = definition.value.unwrap_or_default();
        if definition.system.is_some() {
            self.system = definition.system;
        }
        if definition.disabled.is_some() {
            self.disabled = definition.disabled;
        }
    }

    fn to_definition(&self) -> HeaderDefinition {
        HeaderDefinition {
            key: Some(self.key.clone()),
            value: Some(self.value.clone()),
            system: self.system,
            disabled: self.disabled,
        }
    }

    fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }
}

impl FromStr for Header {
    type Err = Infallible;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Ok(Header::parse_single(line))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
