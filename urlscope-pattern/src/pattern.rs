use std::fmt;

use regex::Regex;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;
use urlscope_core::Property;

use crate::{PROTOCOL_DELIMITER, PatternError, glob_to_regex, split_pattern};

/// Reserved pattern that matches every URL, malformed ones included.
pub const MATCH_ALL_URLS: &str = "<all_urls>";

#[derive(Debug, Clone)]
pub struct MatchPatternRecord {
    /// Deduplicated, in first-seen order.
    pub protocols: Vec<String>,
    /// Raw host token: `*`, `*.suffix`, a literal host[:port], or empty.
    pub host: String,
    pub path: Regex,
}

#[derive(Debug, Clone, Default)]
pub enum CompiledPattern {
    #[default]
    Invalid,
    Valid(MatchPatternRecord),
}

impl CompiledPattern {
    fn build(raw: &str) -> Self {
        if raw == MATCH_ALL_URLS {
            return Self::Invalid;
        }
        match UrlMatchPattern::compile_raw(raw) {
            Ok(record) => Self::Valid(record),
            Err(err) => {
                debug!(pattern = raw, error = %err, "match pattern did not compile");
                Self::Invalid
            }
        }
    }

    pub fn record(&self) -> Option<&MatchPatternRecord> {
        match self {
            Self::Valid(record) => Some(record),
            Self::Invalid => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDefinition {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pattern: Option<String>,
}

impl From<&str> for PatternDefinition {
    fn from(pattern: &str) -> Self {
        Self {
            pattern: Some(pattern.to_string()),
        }
    }
}

impl From<String> for PatternDefinition {
    fn from(pattern: String) -> Self {
        Self {
            pattern: Some(pattern),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientString {
    Text(String),
    Other(IgnoredAny),
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LenientString::deserialize(deserializer)? {
        LenientString::Text(text) => Some(text),
        LenientString::Other(_) => None,
    })
}

/// A URL match pattern such as `https+http://*.example.com/api/*`.
///
/// The raw string is kept verbatim for display and serialization. Compilation
/// happens eagerly whenever the pattern is set; a pattern that does not follow
/// the grammar is kept but matches nothing.
#[derive(Debug, Clone)]
pub struct UrlMatchPattern {
    pattern: String,
    compiled: CompiledPattern,
}

impl UrlMatchPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::from_definition(PatternDefinition::from(pattern.into()))
    }

    pub fn from_definition(definition: PatternDefinition) -> Self {
        let mut pattern = Self::default();
        pattern.update(definition);
        pattern
    }

    /// Compiles a raw pattern and reports why it was rejected.
    pub fn compile_raw(raw: &str) -> Result<MatchPatternRecord, PatternError> {
        let segments = split_pattern(raw).ok_or_else(|| PatternError::Grammar(raw.to_string()))?;

        let mut protocols: Vec<String> = Vec::new();
        for protocol in segments.protocols.split(PROTOCOL_DELIMITER) {
            if !protocols.iter().any(|existing| existing == protocol) {
                protocols.push(protocol.to_string());
            }
        }

        Ok(MatchPatternRecord {
            protocols,
            host: segments.host.to_string(),
            path: glob_to_regex(segments.path)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn is_match_all(&self) -> bool {
        self.pattern == MATCH_ALL_URLS
    }

    /// True when the pattern can match anything at all.
    pub fn is_valid(&self) -> bool {
        self.is_match_all() || self.compiled.record().is_some()
    }

    pub fn compiled(&self) -> &CompiledPattern {
        &self.compiled
    }

    /// Empty when the pattern did not compile.
    pub fn protocols(&self) -> &[String] {
        self.compiled
            .record()
            .map(|record| record.protocols.as_slice())
            .unwrap_or_default()
    }
}

impl Default for UrlMatchPattern {
    fn default() -> Self {
        Self {
            pattern: MATCH_ALL_URLS.to_string(),
            compiled: CompiledPattern::Invalid,
        }
    }
}

impl Property for UrlMatchPattern {
    type Definition = PatternDefinition;

    const PROPERTY_NAME: &'static str = "UrlMatchPattern";

    /// Empty or missing patterns leave the current one in place; the compiled
    /// form is rebuilt either way.
    fn update(&mut self, definition: PatternDefinition) {
        if let Some(pattern) = definition.pattern.filter(|pattern| !pattern.is_empty()) {
            self.pattern = pattern;
        }
        self.compiled = CompiledPattern::build(&self.pattern);
    }

    fn to_definition(&self) -> PatternDefinition {
        PatternDefinition::from(self.pattern.as_str())
    }
}

impl PartialEq for UrlMatchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for UrlMatchPattern {}

impl fmt::Display for UrlMatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl From<&str> for UrlMatchPattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for UrlMatchPattern {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

impl Serialize for UrlMatchPattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_definition().serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PatternInput {
    Raw(String),
    Definition(PatternDefinition),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for UrlMatchPattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let definition = match PatternInput::deserialize(deserializer)? {
            PatternInput::Raw(pattern) => PatternDefinition::from(pattern),
            PatternInput::Definition(definition) => definition,
            PatternInput::Other(_) => PatternDefinition::default(),
        };
        Ok(Self::from_definition(definition))
    }
}

/// Serde adapter that stores a pattern as its bare string, for config files.
pub mod as_raw {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::UrlMatchPattern;

    pub fn serialize<S>(pattern: &UrlMatchPattern, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(pattern.as_str())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<UrlMatchPattern, D::Error>
    where
        D: Deserializer<'de>,
    {
        UrlMatchPattern::deserialize(deserializer)
    }
}
